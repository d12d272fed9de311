//! Tri-state validation result.

/// Result of validating one piece of user input.
///
/// Validators never fail for malformed input; they return an outcome with
/// `ok == false` and a reason. On success the message summarizes what was
/// accepted and `value` carries the typed result.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome<T> {
    ok: bool,
    message: String,
    value: Option<T>,
}

impl<T> ValidationOutcome<T> {
    pub fn valid(message: impl Into<String>, value: T) -> Self {
        Self {
            ok: true,
            message: message.into(),
            value: Some(value),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            value: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// `Ok(value)` on success, `Err(message)` otherwise.
    pub fn into_result(self) -> Result<T, String> {
        match self.value {
            Some(value) if self.ok => Ok(value),
            _ => Err(self.message),
        }
    }
}

impl<T> From<Result<ValidationOutcome<T>, String>> for ValidationOutcome<T> {
    fn from(result: Result<ValidationOutcome<T>, String>) -> Self {
        result.unwrap_or_else(ValidationOutcome::invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_carries_value() {
        let outcome = ValidationOutcome::valid("fine", 7);
        assert!(outcome.is_ok());
        assert_eq!(outcome.value(), Some(&7));
        assert_eq!(outcome.into_result(), Ok(7));
    }

    #[test]
    fn invalid_has_no_value() {
        let outcome: ValidationOutcome<u32> = ValidationOutcome::invalid("nope");
        assert!(!outcome.is_ok());
        assert_eq!(outcome.message(), "nope");
        assert!(outcome.value().is_none());
        assert_eq!(outcome.into_result(), Err("nope".to_string()));
    }

    #[test]
    fn early_return_errors_become_invalid() {
        let result: Result<ValidationOutcome<()>, String> = Err("bad".into());
        let outcome: ValidationOutcome<()> = result.into();
        assert!(!outcome.is_ok());
        assert_eq!(outcome.message(), "bad");
    }
}
