/// Asserts a user precondition, terminating the process when it fails.
///
/// `user_assert!(cond, kind, location [, prefix [, suffix]])`. The prefix and
/// suffix may be any `Display` value; they are only formatted on failure.
///
/// ```no_run
/// use carlsim_errors::{user_assert, ErrorKind};
///
/// let grp_id = 42;
/// let num_groups = 10;
/// user_assert!(grp_id < num_groups, ErrorKind::UnknownGroupId, "getGroupName", "", grp_id);
/// ```
#[macro_export]
macro_rules! user_assert {
    ($cond:expr, $kind:expr, $location:expr $(,)?) => {
        $crate::user_assert!($cond, $kind, $location, "", "")
    };
    ($cond:expr, $kind:expr, $location:expr, $prefix:expr $(,)?) => {
        $crate::user_assert!($cond, $kind, $location, $prefix, "")
    };
    ($cond:expr, $kind:expr, $location:expr, $prefix:expr, $suffix:expr $(,)?) => {
        if !($cond) {
            $crate::throw_error(
                $location,
                $kind,
                &::std::string::ToString::to_string(&$prefix),
                &::std::string::ToString::to_string(&$suffix),
            )
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::ErrorKind;

    #[test]
    fn holding_assertions_pass_through() {
        let n_neurons = 100;
        user_assert!(n_neurons > 0, ErrorKind::MustBePositive, "createGroup");
        user_assert!(n_neurons > 0, ErrorKind::MustBePositive, "createGroup", "nNeur");
        user_assert!(
            n_neurons != 0,
            ErrorKind::CannotBeIdentical,
            "connect",
            "nNeur",
            0,
        );
    }
}
