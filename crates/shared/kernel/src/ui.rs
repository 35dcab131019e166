//! Sidebar and modal state for one dashboard session.
//!
//! At most one modal is open at a time. A confirmation carries the action it
//! guards, which is handed back only when the user accepts.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal<A> {
    Success { title: String, message: String },
    Error { title: String, message: String },
    Confirm { title: String, message: String, action: A },
}

impl<A> Modal<A> {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Success { title, .. } | Self::Error { title, .. } | Self::Confirm { title, .. } => {
                title
            },
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. }
            | Self::Error { message, .. }
            | Self::Confirm { message, .. } => message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState<A> {
    sidebar_open: bool,
    modal: Option<Modal<A>>,
}

impl<A> Default for UiState<A> {
    fn default() -> Self {
        Self { sidebar_open: true, modal: None }
    }
}

impl<A> UiState<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub const fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub const fn set_sidebar(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    #[must_use]
    pub const fn modal(&self) -> Option<&Modal<A>> {
        self.modal.as_ref()
    }

    /// Replaces any open modal.
    pub fn show_success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.modal = Some(Modal::Success { title: title.into(), message: message.into() });
    }

    /// Replaces any open modal.
    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.modal = Some(Modal::Error { title: title.into(), message: message.into() });
    }

    /// Asks before running `action`. Replaces any open modal.
    pub fn confirm(&mut self, title: impl Into<String>, message: impl Into<String>, action: A) {
        self.modal =
            Some(Modal::Confirm { title: title.into(), message: message.into(), action });
    }

    /// Closes the modal. A pending confirmation is discarded.
    pub fn dismiss(&mut self) {
        self.modal = None;
    }

    /// Closes the modal, returning the guarded action when it was a confirmation.
    pub fn accept(&mut self) -> Option<A> {
        match self.modal.take()? {
            Modal::Confirm { action, .. } => Some(action),
            Modal::Success { .. } | Modal::Error { .. } => None,
        }
    }
}
