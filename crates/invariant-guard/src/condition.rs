//! Truthiness for asserted values.

/// A value that can be checked for truthiness by the assertion functions.
///
/// `bool` is the common case. `Option` holds when it is `Some` and `Result`
/// holds when it is `Ok`. References to any condition are conditions too, so
/// a value can be checked without giving it up.
pub trait Condition {
    /// Whether the condition holds.
    fn holds(&self) -> bool;
}

impl Condition for bool {
    fn holds(&self) -> bool {
        *self
    }
}

impl<T> Condition for Option<T> {
    fn holds(&self) -> bool {
        self.is_some()
    }
}

impl<T, E> Condition for Result<T, E> {
    fn holds(&self) -> bool {
        self.is_ok()
    }
}

impl<C: Condition + ?Sized> Condition for &C {
    fn holds(&self) -> bool {
        (**self).holds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_condition() {
        assert!(true.holds());
        assert!(!false.holds());
    }

    #[test]
    fn test_option_condition() {
        assert!(Some(0).holds());
        assert!(!None::<u8>.holds());
    }

    #[test]
    fn test_result_condition() {
        let ok: Result<u8, ()> = Ok(1);
        let err: Result<u8, ()> = Err(());
        assert!(ok.holds());
        assert!(!err.holds());
    }

    #[test]
    fn test_reference_condition() {
        let value = Some("creature".to_string());
        assert!((&value).holds());
        // still usable after the check
        assert_eq!(value.as_deref(), Some("creature"));
    }
}
