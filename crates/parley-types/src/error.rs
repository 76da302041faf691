use thiserror::Error;

/// Errors from backend requests.
///
/// Every variant is terminal for the operation that raised it; no retry is
/// attempted anywhere in the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response with a server-supplied reason. The reason is
    /// surfaced to the user verbatim.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    /// A body that could not be parsed -- either a success status with an
    /// unreadable payload or a failure status without a structured reason.
    #[error("received an unexpected response from the server")]
    Malformed,

    /// The request never completed: connection refused, DNS failure,
    /// timeout, dropped connection.
    #[error("network error: {0}")]
    Network(String),
}

/// Errors from the session store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session storage error: {0}")]
    Io(String),

    #[error("session encoding error: {0}")]
    Encode(String),
}

/// Errors surfaced by the auth controller.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Local validation: sign-in requires a knowledge-base file. Raised
    /// before any network call.
    #[error("Please upload a CSV knowledge base file to sign in.")]
    MissingKnowledgeFile,

    /// A submission is already in flight; the caller must wait for it.
    #[error("a submission is already in progress")]
    SubmissionInFlight,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
