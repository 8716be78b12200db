//! Names shared by the server's HTML templates and the browser enhancement layer.
//!
//! The server renders elements with these classes and labels, and the browser
//! code looks them up by the same names.

/// Class of the server-rendered notification banners that dismiss themselves.
pub const FLASH_MESSAGE_CLASS: &str = "flash-message";

/// How long a flash message stays on screen before it starts to fade out.
pub const FLASH_DISPLAY_DURATION_MS: u32 = 5000;

/// How long the fade-out animation of a flash message runs before removal.
pub const FLASH_FADE_DURATION_MS: u32 = 300;

/// Name of the CSS keyframes that slide a flash message out of view.
pub const FLASH_FADE_KEYFRAMES: &str = "slideOut";

/// The CSS `animation` value applied to a flash message when it starts to fade.
pub const FLASH_FADE_ANIMATION: &str = "slideOut 0.3s ease-out";

/// Class of the forms for creating and editing expenses.
pub const EXPENSE_FORM_CLASS: &str = "expense-form";

/// Forms whose action contains this text delete something and must be confirmed.
pub const DELETE_ACTION_MARKER: &str = "delete";

/// The question asked before a delete form is submitted.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this expense?";

/// The label shown on an expense form's submit button while it is being saved.
pub const SAVING_LABEL: &str = "Saving...";

/// Field names of the expense form.
pub const AMOUNT_FIELD: &str = "amount";
/// See [AMOUNT_FIELD].
pub const CATEGORY_FIELD: &str = "category";
/// See [AMOUNT_FIELD].
pub const DATE_FIELD: &str = "date";
/// See [AMOUNT_FIELD].
pub const DESCRIPTION_FIELD: &str = "description";
