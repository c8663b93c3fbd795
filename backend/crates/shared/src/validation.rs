//! Field validation
//!
//! Forms are checked by explicit calls that append [`FieldError`]s to a
//! [`ValidationErrors`] collector. Checks never short-circuit, so every
//! violated rule is reported, in call order.
//!
//! ```rust
//! use kernel::validation::ValidationErrors;
//!
//! let mut errors = ValidationErrors::new();
//! errors
//!     .not_blank("account", "", "Account is mandatory.")
//!     .max_chars("account", "", 30, "Account must not exceed 30 characters.")
//!     .required("bidQuantity", &Some(-1.0), "Bid quantity is mandatory.")
//!     .at_least("bidQuantity", Some(-1.0), 0.0, "Bid quantity must be zero or positive.");
//!
//! assert_eq!(errors.len(), 2);
//! assert!(errors.has("account"));
//! ```

use std::cmp::Ordering;

use serde::Serialize;
use thiserror::Error;

/// One violated rule on one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered collection of field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether any error is recorded against `field`.
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    // ========================================================================
    // Rules
    // ========================================================================

    /// Rejects empty and whitespace-only text.
    pub fn not_blank(&mut self, field: &str, value: &str, message: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.add(field, message);
        }
        self
    }

    /// Length limit in characters, not bytes.
    pub fn max_chars(&mut self, field: &str, value: &str, max: usize, message: &str) -> &mut Self {
        if value.chars().count() > max {
            self.add(field, message);
        }
        self
    }

    pub fn required<T>(&mut self, field: &str, value: &Option<T>, message: &str) -> &mut Self {
        if value.is_none() {
            self.add(field, message);
        }
        self
    }

    /// Lower bound. A missing value passes; pair with [`Self::required`].
    /// Values that do not compare (NaN) fail.
    pub fn at_least<T: PartialOrd>(
        &mut self,
        field: &str,
        value: Option<T>,
        min: T,
        message: &str,
    ) -> &mut Self {
        let below = value.is_some_and(|v| {
            !matches!(
                v.partial_cmp(&min),
                Some(Ordering::Greater | Ordering::Equal)
            )
        });
        if below {
            self.add(field, message);
        }
        self
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
