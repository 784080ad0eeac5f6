//! Value validators attached to setting definitions.
//!
//! A validator runs after the kind check, both for the default value at
//! definition time and for every later [`set_local`](crate::ConfigStore::set_local).

use std::fmt;
use std::sync::Arc;

use hermes_core::Value;

type CheckFn = dyn Fn(&Value) -> Result<(), String> + Send + Sync;

/// A predicate that accepts or rejects values of a setting.
///
/// # Example
///
/// ```
/// use hermes_config::Validator;
/// use hermes_core::Value;
///
/// let validator = Validator::range(0, 100);
/// assert!(validator.validate(&Value::Long(42)).is_ok());
/// assert!(validator.validate(&Value::Long(101)).is_err());
/// ```
#[derive(Clone)]
pub struct Validator {
    description: String,
    check: Arc<CheckFn>,
}

impl Validator {
    /// Create a validator from a closure.
    ///
    /// The closure returns `Err(reason)` to reject a value.
    pub fn custom<F>(description: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Value) -> Result<(), String> + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            check: Arc::new(check),
        }
    }

    /// Integers (`Long` or `Number`) must be zero or greater.
    pub fn non_negative() -> Self {
        Self::custom("non-negative", |value| match integer_of(value) {
            Some(n) if n < 0 => Err(format!("{n} must not be negative")),
            Some(_) => Ok(()),
            None => Err(format!("expected an integer, got {}", value.kind())),
        })
    }

    /// Integers (`Long` or `Number`) must lie in `min..=max`.
    pub fn range(min: i64, max: i64) -> Self {
        Self::custom(format!("range {min}..={max}"), move |value| {
            match integer_of(value) {
                Some(n) if (min..=max).contains(&n) => Ok(()),
                Some(n) => Err(format!("{n} is outside {min}..={max}")),
                None => Err(format!("expected an integer, got {}", value.kind())),
            }
        })
    }

    /// Reference kinds must hold a value; strings and lists must not be empty.
    pub fn not_empty() -> Self {
        Self::custom("not empty", |value| {
            let empty = match value {
                Value::String(Some(s)) => s.is_empty(),
                Value::StringList(Some(l)) => l.is_empty(),
                other => other.is_empty(),
            };
            if empty {
                Err("value must not be empty".to_string())
            } else {
                Ok(())
            }
        })
    }

    /// Strings must be one of `choices`.
    pub fn one_of<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        Self::custom(format!("one of {}", choices.join(", ")), move |value| {
            match value.as_str() {
                Some(s) if choices.iter().any(|c| c == s) => Ok(()),
                Some(s) => Err(format!("'{s}' is not one of {}", choices.join(", "))),
                None => Err(format!("expected one of {}", choices.join(", "))),
            }
        })
    }

    /// Human-readable summary of what the validator accepts.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the validator.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason.
    pub fn validate(&self, value: &Value) -> Result<(), String> {
        (self.check)(value)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

fn integer_of(value: &Value) -> Option<i64> {
    match value {
        Value::Long(n) => Some(*n),
        Value::Number(n) => Some(i64::from(*n)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hermes_core::StringList;

    #[test]
    fn test_non_negative() {
        let v = Validator::non_negative();
        assert!(v.validate(&Value::Long(0)).is_ok());
        assert!(v.validate(&Value::Number(7)).is_ok());
        assert!(v.validate(&Value::Long(-1)).is_err());
        assert!(v.validate(&Value::Number(-1)).is_err());
        assert!(v.validate(&Value::Bool(true)).is_err());
    }

    #[test]
    fn test_range() {
        let v = Validator::range(1, 10);
        assert_eq!(v.description(), "range 1..=10");
        assert!(v.validate(&Value::Long(1)).is_ok());
        assert!(v.validate(&Value::Long(10)).is_ok());
        let reason = v.validate(&Value::Long(11)).unwrap_err();
        assert!(reason.contains("outside"));
    }

    #[test]
    fn test_not_empty() {
        let v = Validator::not_empty();
        assert!(v.validate(&Value::from("x")).is_ok());
        assert!(v.validate(&Value::from("")).is_err());
        assert!(v.validate(&Value::String(None)).is_err());
        assert!(v.validate(&Value::StringList(Some(StringList::new()))).is_err());
        assert!(v.validate(&Value::Long(0)).is_ok());
    }

    #[test]
    fn test_one_of() {
        let v = Validator::one_of(["date", "from", "subject"]);
        assert!(v.validate(&Value::from("from")).is_ok());
        let reason = v.validate(&Value::from("size")).unwrap_err();
        assert!(reason.contains("'size'"));
        assert!(v.validate(&Value::String(None)).is_err());
    }

    #[test]
    fn test_custom() {
        let v = Validator::custom("even", |value| match value.as_long() {
            Some(n) if n % 2 == 0 => Ok(()),
            _ => Err("must be even".to_string()),
        });
        assert!(v.validate(&Value::Long(4)).is_ok());
        assert_eq!(v.validate(&Value::Long(3)).unwrap_err(), "must be even");
        assert!(format!("{v:?}").contains("even"));
    }
}
