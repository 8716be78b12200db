//! The expense form shared by the create and edit pages, and the parsing of
//! its submissions.

use expense_tracker_common::{
    ExpenseSubmission, ValidationError, ValidationErrors,
    markup::{AMOUNT_FIELD, CATEGORY_FIELD, DATE_FIELD, DESCRIPTION_FIELD, EXPENSE_FORM_CLASS},
    parse_amount,
};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use time::{Date, macros::format_description};

use crate::{
    category::CATEGORIES,
    expense::core::{Expense, ExpenseBuilder},
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// The raw fields of a submitted expense form.
///
/// Missing fields are read as empty strings and rejected by [ExpenseForm::into_builder].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseForm {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
}

/// Why a submitted expense form was rejected.
///
/// The display text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpenseFormError {
    /// A field broke one of the shared form rules.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    /// The date was filled in but is not a `YYYY-MM-DD` date.
    #[error("Please enter a valid date")]
    InvalidDate,
}

impl ExpenseForm {
    /// Check the submission with the same rules the browser uses and convert
    /// it into an [ExpenseBuilder].
    ///
    /// # Errors
    /// Returns an [ExpenseFormError] describing the problem to show the user.
    pub fn into_builder(self) -> Result<ExpenseBuilder, ExpenseFormError> {
        ExpenseSubmission {
            amount: Some(&self.amount),
            category: Some(&self.category),
            date: Some(&self.date),
        }
        .validate()?;

        let amount = parse_amount(&self.amount)
            .ok_or_else(|| ValidationErrors::from(ValidationError::InvalidAmount))?;
        let date = Date::parse(self.date.trim(), format_description!("[year]-[month]-[day]"))
            .map_err(|_| ExpenseFormError::InvalidDate)?;

        Ok(Expense::build(amount, &self.category, date).description(self.description.trim()))
    }
}

/// The values an expense form starts with.
pub struct ExpenseFormDefaults<'a> {
    /// Where the form is submitted to.
    pub action: &'a str,
    pub amount: Option<f64>,
    pub category: Option<&'a str>,
    pub date: Date,
    pub description: Option<&'a str>,
    /// The text of the submit button.
    pub submit_label: &'a str,
}

impl<'a> ExpenseFormDefaults<'a> {
    /// Defaults that show `expense` for editing.
    pub fn from_expense(expense: &'a Expense, action: &'a str) -> Self {
        Self {
            action,
            amount: Some(expense.amount),
            category: Some(&expense.category),
            date: expense.date,
            description: Some(&expense.description),
            submit_label: "Update Expense",
        }
    }
}

/// The text and `step` for the amount input when prefilled with `amount`.
///
/// Amounts in whole cents show two decimals. Anything finer is shown in full
/// with `step="any"`, so saving the form unchanged keeps the stored value.
fn amount_input(amount: Option<f64>) -> (Option<String>, &'static str) {
    let Some(amount) = amount else {
        return (None, "0.01");
    };

    let cents = format!("{amount:.2}");
    if cents.parse::<f64>() == Ok(amount) {
        (Some(cents), "0.01")
    } else {
        (Some(amount.to_string()), "any")
    }
}

pub fn expense_form(defaults: &ExpenseFormDefaults<'_>) -> Markup {
    let (amount, amount_step) = amount_input(defaults.amount);

    html! {
        form
            method="post"
            action=(defaults.action)
            class={ (EXPENSE_FORM_CLASS) " w-full space-y-4 md:space-y-6" }
        {
            div
            {
                label for=(AMOUNT_FIELD) class=(FORM_LABEL_STYLE) { "Amount" }

                // w-full needed to ensure input takes the full width when prefilled with a value
                div class="input-wrapper w-full"
                {
                    input
                        name=(AMOUNT_FIELD)
                        id=(AMOUNT_FIELD)
                        type="number"
                        step=(amount_step)
                        min="0.01"
                        placeholder="0.00"
                        required
                        autofocus
                        value=[amount.as_deref()]
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for=(CATEGORY_FIELD) class=(FORM_LABEL_STYLE) { "Category" }

                select
                    name=(CATEGORY_FIELD)
                    id=(CATEGORY_FIELD)
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "Select a category" }

                    @for category in CATEGORIES {
                        option
                            value=(category)
                            selected[defaults.category == Some(category)]
                        {
                            (category)
                        }
                    }
                }
            }

            div
            {
                label for=(DATE_FIELD) class=(FORM_LABEL_STYLE) { "Date" }

                input
                    name=(DATE_FIELD)
                    id=(DATE_FIELD)
                    type="date"
                    required
                    value=(defaults.date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for=(DESCRIPTION_FIELD) class=(FORM_LABEL_STYLE) { "Description" }

                textarea
                    name=(DESCRIPTION_FIELD)
                    id=(DESCRIPTION_FIELD)
                    rows="3"
                    placeholder="What was it for?"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    (defaults.description.unwrap_or_default())
                }
            }

            button type="submit" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                (defaults.submit_label)
            }
        }
    }
}
