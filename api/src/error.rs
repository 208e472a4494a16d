use std::collections::HashMap;

use thiserror::Error;

/// Failures surfaced by [`crate::ApiClient`].
///
/// None of these are fatal: handlers catch them at the `await` point and turn
/// them into view state (an error map or a status line) for re-render.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad credentials, or a login response carrying an empty token.
    #[error("invalid email or password")]
    AuthenticationFailed,

    /// The backend rejected a household submission. `errors` maps form field
    /// names to human-readable messages and may be empty when the backend
    /// gave no detail.
    #[error("household submission rejected")]
    SubmissionRejected { errors: HashMap<String, String> },

    /// The request could not complete at all.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}
