use serde::Deserialize;

pub const CONFIRM_VALUE: &str = "yes";

/// Body of a destructive action's confirmation prompt.
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmForm {
    #[serde(default)]
    pub confirm: Option<String>,
}

impl ConfirmForm {
    pub fn is_confirmed(&self) -> bool {
        self.confirm.as_deref() == Some(CONFIRM_VALUE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The prompt was not confirmed; nothing was sent to the store.
    Cancelled,
}
