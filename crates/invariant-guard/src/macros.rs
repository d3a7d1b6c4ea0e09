//! Early-return forms of the assertion functions.
//!
//! Both macros expand to a call followed by `?`, so they work in any function
//! whose error type converts from the produced failure ([`Failure`](crate::Failure)
//! or the failure type itself). The message is formatted only on failure.

/// Return early with an [`InvariantError`](crate::InvariantError) if the
/// condition does not hold.
///
/// ```
/// use invariant_guard::{ensure, InvariantError};
///
/// fn halve(n: u32) -> Result<u32, InvariantError> {
///     ensure!(n % 2 == 0, "{n} is odd");
///     Ok(n / 2)
/// }
///
/// assert_eq!(halve(4), Ok(2));
/// assert_eq!(halve(3).unwrap_err().message(), "3 is odd");
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        $crate::invariant(&$cond, || ::std::format!($($arg)+))?
    };
}

/// Return early with a [`ResponseError`](crate::ResponseError) if the
/// condition does not hold.
///
/// The second argument is anything convertible into a
/// [`ResponseInit`](crate::ResponseInit), usually a `StatusCode`.
#[macro_export]
macro_rules! ensure_response {
    ($cond:expr, $init:expr, $($arg:tt)+) => {
        $crate::invariant_response(
            &$cond,
            || ::std::format!($($arg)+),
            ::core::option::Option::Some($crate::ResponseInit::from($init)),
        )?
    };
}
