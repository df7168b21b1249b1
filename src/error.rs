// Error taxonomy for the API client. Session expiry gets its own variant so
// callers can route back to the login flow instead of treating it like any
// other failed request.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 401 on an authorized request. The stored
    /// credential has already been cleared by the time this is returned.
    #[error("session expired")]
    AuthExpired,

    /// The backend answered with a non-success status. The message is
    /// extracted per operation (see `ApiClient`); `Display` is exactly
    /// that message.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// Network failure, or a success response whose body did not decode.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A local file attached to a request could not be read.
    #[error("could not read attachment: {0}")]
    Attachment(#[from] std::io::Error),
}
