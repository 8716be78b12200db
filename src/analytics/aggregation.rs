//! Spending totals computed from a list of expenses.

use std::collections::BTreeMap;

use serde::Serialize;
use time::Date;

use crate::expense::Expense;

/// Summary statistics over a set of expenses.
///
/// Money values are rounded to two decimal places.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Analytics {
    /// The sum of all expense amounts.
    pub total_spending: f64,
    /// The number of expenses.
    pub expense_count: usize,
    /// The sum of expense amounts per category, ordered by category name.
    pub category_totals: BTreeMap<String, f64>,
    /// The sum of expense amounts per month, keyed and ordered by `YYYY-MM`.
    pub monthly_totals: BTreeMap<String, f64>,
    /// The mean expense amount, zero when there are no expenses.
    pub average_expense: f64,
}

/// Summarise `expenses` into totals per category and per month.
pub fn calculate_analytics(expenses: &[Expense]) -> Analytics {
    if expenses.is_empty() {
        return Analytics::default();
    }

    let mut total_spending = 0.0;
    let mut category_totals = BTreeMap::new();
    let mut monthly_totals = BTreeMap::new();

    for expense in expenses {
        total_spending += expense.amount;
        *category_totals
            .entry(expense.category.clone())
            .or_insert(0.0) += expense.amount;
        *monthly_totals.entry(month_key(expense.date)).or_insert(0.0) += expense.amount;
    }

    let expense_count = expenses.len();

    Analytics {
        total_spending: round_money(total_spending),
        expense_count,
        category_totals: round_values(category_totals),
        monthly_totals: round_values(monthly_totals),
        average_expense: round_money(total_spending / expense_count as f64),
    }
}

/// The `YYYY-MM` label for the month containing `date`.
fn month_key(date: Date) -> String {
    format!("{:04}-{:02}", date.year(), u8::from(date.month()))
}

fn round_money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn round_values(totals: BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    totals
        .into_iter()
        .map(|(key, total)| (key, round_money(total)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use time::{Date, macros::date};

    use crate::expense::Expense;

    use super::{Analytics, calculate_analytics, month_key};

    fn expense(id: i64, amount: f64, category: &str, date: Date) -> Expense {
        Expense {
            id,
            amount,
            category: category.to_owned(),
            date,
            description: String::new(),
            created_at: "2024-01-01 00:00:00".to_owned(),
            updated_at: "2024-01-01 00:00:00".to_owned(),
        }
    }

    #[test]
    fn empty_expenses_give_zeroes() {
        assert_eq!(calculate_analytics(&[]), Analytics::default());
    }

    #[test]
    fn sums_by_category_and_month() {
        let expenses = vec![
            expense(1, 100.0, "Food & Dining", date!(2024 - 01 - 05)),
            expense(2, 50.5, "Food & Dining", date!(2024 - 02 - 10)),
            expense(3, 20.25, "Transportation", date!(2024 - 02 - 11)),
        ];

        let got = calculate_analytics(&expenses);

        assert_eq!(got.total_spending, 170.75);
        assert_eq!(got.expense_count, 3);
        assert_eq!(
            got.category_totals,
            BTreeMap::from([
                ("Food & Dining".to_owned(), 150.5),
                ("Transportation".to_owned(), 20.25),
            ])
        );
        assert_eq!(
            got.monthly_totals,
            BTreeMap::from([("2024-01".to_owned(), 100.0), ("2024-02".to_owned(), 70.75)])
        );
        assert_eq!(got.average_expense, 56.92);
    }

    #[test]
    fn rounds_accumulated_floating_point_error() {
        let expenses = vec![
            expense(1, 0.1, "Other", date!(2024 - 03 - 01)),
            expense(2, 0.2, "Other", date!(2024 - 03 - 02)),
        ];

        let got = calculate_analytics(&expenses);

        assert_eq!(got.total_spending, 0.3);
        assert_eq!(got.category_totals["Other"], 0.3);
        assert_eq!(got.average_expense, 0.15);
    }

    #[test]
    fn months_are_ordered_chronologically() {
        let expenses = vec![
            expense(1, 1.0, "Other", date!(2024 - 11 - 01)),
            expense(2, 1.0, "Other", date!(2023 - 12 - 31)),
            expense(3, 1.0, "Other", date!(2024 - 02 - 29)),
        ];

        let got = calculate_analytics(&expenses);

        let months: Vec<_> = got.monthly_totals.keys().cloned().collect();
        assert_eq!(months, vec!["2023-12", "2024-02", "2024-11"]);
    }

    #[test]
    fn month_key_is_zero_padded() {
        assert_eq!(month_key(date!(2024 - 03 - 15)), "2024-03");
    }

    #[test]
    fn serializes_with_field_names() {
        let expenses = vec![expense(1, 10.0, "Rent", date!(2024 - 05 - 01))];

        let json = serde_json::to_value(calculate_analytics(&expenses)).unwrap();

        assert_eq!(json["total_spending"], 10.0);
        assert_eq!(json["expense_count"], 1);
        assert_eq!(json["category_totals"]["Rent"], 10.0);
        assert_eq!(json["monthly_totals"]["2024-05"], 10.0);
        assert_eq!(json["average_expense"], 10.0);
    }
}
