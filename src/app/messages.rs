//! AppMessage enum for async communication within the application.

use crate::traits::HttpError;

/// Messages received from spawned tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A fetch finished with a 2xx response
    FetchCompleted { url: String, body: String },
    /// A fetch failed before or after reaching the server
    FetchFailed { url: String, error: HttpError },
}
