/// Blocking dialogs shown to the user.
pub trait Dialogs {
    /// Show `message` and wait until the user dismisses it.
    fn alert(&self, message: &str);

    /// Ask the user a yes/no `question`, returns `true` if they said yes.
    fn confirm(&self, question: &str) -> bool;
}

/// The browser's native `alert` and `confirm` dialogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }

    fn confirm(&self, question: &str) -> bool {
        gloo::dialogs::confirm(question)
    }
}
