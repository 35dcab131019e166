use depot_client::ClientError;
use depot_kernel::validation::ValidationError;
use std::borrow::Cow;

/// A specialized [`DriversError`] enum of this crate.
#[depot_derive::depot_error]
pub enum DriversError {
    /// The driver form was rejected before any request was sent.
    #[error("Invalid driver{}: {source}", format_context(.context))]
    Validation { source: ValidationError, context: Option<Cow<'static, str>> },
    /// The backend call failed.
    #[error("Driver request failed{}: {source}", format_context(.context))]
    Client { source: ClientError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal drivers error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl DriversError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { source, .. } => source.message.to_string(),
            Self::Client { source, .. } => source.user_message(),
            Self::Internal { message, .. } => message.to_string(),
        }
    }
}
