//! Validation rules for expense form submissions.

use std::fmt::Display;

/// A single failed rule for an expense submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The amount is not a number or is not greater than zero.
    #[error("Please enter a valid amount greater than 0")]
    InvalidAmount,

    /// No category was selected.
    #[error("Please select a category")]
    MissingCategory,

    /// No date was selected.
    #[error("Please select a date")]
    MissingDate,
}

/// The rules that failed for a submission, in the order they were checked.
///
/// Always holds at least one error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// All failed rules in check order (amount, category, date).
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// The error to show the user.
    ///
    /// Rules are checked in the order amount, category, date and the last
    /// failing rule takes precedence, so a missing date is reported over a
    /// missing category, which is reported over an invalid amount.
    pub fn displayed(&self) -> ValidationError {
        *self
            .0
            .last()
            .expect("ValidationErrors is only built with at least one error")
    }

    /// The message to show the user, see [ValidationErrors::displayed].
    pub fn message(&self) -> String {
        self.displayed().to_string()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.displayed())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

/// The raw field values of an expense form at the moment it is submitted.
///
/// A field set to `None` is not part of the form and its rule is skipped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseSubmission<'a> {
    /// The raw text of the amount field.
    pub amount: Option<&'a str>,
    /// The selected category.
    pub category: Option<&'a str>,
    /// The selected date.
    pub date: Option<&'a str>,
}

impl ExpenseSubmission<'_> {
    /// Check the submission against the amount, category and date rules.
    ///
    /// # Errors
    ///
    /// Returns every failed rule, see [ValidationErrors::displayed] for which
    /// one is shown to the user.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if self
            .amount
            .is_some_and(|amount| parse_amount(amount).is_none())
        {
            errors.push(ValidationError::InvalidAmount);
        }

        if self.category.is_some_and(str::is_empty) {
            errors.push(ValidationError::MissingCategory);
        }

        if self.date.is_some_and(str::is_empty) {
            errors.push(ValidationError::MissingDate);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

/// Parse the text of an amount field.
///
/// Returns `None` unless the whole of `raw` (ignoring surrounding whitespace)
/// is a finite number greater than zero.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

#[cfg(test)]
mod tests {
    use super::{ExpenseSubmission, ValidationError, ValidationErrors, parse_amount};

    fn submission<'a>(amount: &'a str, category: &'a str, date: &'a str) -> ExpenseSubmission<'a> {
        ExpenseSubmission {
            amount: Some(amount),
            category: Some(category),
            date: Some(date),
        }
    }

    #[test]
    fn valid_submission_passes() {
        assert_eq!(submission("10", "Food", "2024-01-01").validate(), Ok(()));
    }

    #[test]
    fn zero_amount_fails_with_amount_message() {
        let errors = submission("0", "Food", "2024-01-01")
            .validate()
            .unwrap_err();

        assert_eq!(errors.errors(), &[ValidationError::InvalidAmount]);
        assert_eq!(
            errors.message(),
            "Please enter a valid amount greater than 0"
        );
    }

    #[test]
    fn empty_category_fails_with_category_message() {
        let errors = submission("10", "", "2024-01-01").validate().unwrap_err();

        assert_eq!(errors.message(), "Please select a category");
    }

    #[test]
    fn date_message_takes_precedence_over_category() {
        let errors = submission("10", "", "").validate().unwrap_err();

        assert_eq!(
            errors.errors(),
            &[ValidationError::MissingCategory, ValidationError::MissingDate]
        );
        assert_eq!(errors.message(), "Please select a date");
    }

    #[test]
    fn every_failure_is_collected_in_rule_order() {
        let errors = submission("-5", "", "").validate().unwrap_err();

        assert_eq!(
            errors.errors(),
            &[
                ValidationError::InvalidAmount,
                ValidationError::MissingCategory,
                ValidationError::MissingDate
            ]
        );
        assert_eq!(errors.displayed(), ValidationError::MissingDate);
    }

    #[test]
    fn single_error_is_displayed() {
        let errors = ValidationErrors::from(ValidationError::MissingCategory);

        assert_eq!(errors.displayed(), ValidationError::MissingCategory);
        assert_eq!(errors.to_string(), "Please select a category");
    }

    #[test]
    fn category_message_takes_precedence_over_amount() {
        let errors = submission("abc", "", "2024-01-01")
            .validate()
            .unwrap_err();

        assert_eq!(errors.message(), "Please select a category");
    }

    #[test]
    fn absent_fields_are_skipped() {
        assert_eq!(ExpenseSubmission::default().validate(), Ok(()));

        let only_amount = ExpenseSubmission {
            amount: Some("0"),
            ..Default::default()
        };
        assert_eq!(
            only_amount.validate().unwrap_err().errors(),
            &[ValidationError::InvalidAmount]
        );
    }

    #[test]
    fn amount_must_be_a_positive_number() {
        assert_eq!(parse_amount("12.50"), Some(12.5));
        assert_eq!(parse_amount(" 3 "), Some(3.0));
        assert_eq!(parse_amount("1e2"), Some(100.0));

        for raw in [
            "", "   ", "0", "-1", "abc", "12abc", "NaN", "inf", "-0", "Infinity", "1e309",
        ] {
            assert_eq!(parse_amount(raw), None, "want {raw:?} to be rejected");
        }
    }
}
