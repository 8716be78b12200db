//! The fixed set of expense categories.

/// Expense categories in the order they are offered to the user.
pub const CATEGORIES: [&str; 10] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Healthcare",
    "Utilities",
    "Rent",
    "Education",
    "Travel",
    "Other",
];
