use thiserror::Error;

/// Aggregates every failure mode exposed by the chat client.
///
/// Callers can match on the specific variant to distinguish their own input
/// mistakes from transport failures, remote rejections, and model-side
/// outcomes such as refusals. Nothing is retried or swallowed internally;
/// each variant carries the detail needed to diagnose the failure without
/// re-inspecting the wire payload.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Signals validation failures in the caller-supplied messages or schema.
    #[error("invalid request: {message}")]
    Validation { message: String },
    /// Raised when the client is missing required configuration, such as a credential.
    #[error("invalid configuration: {message}")]
    Config { message: String },
    /// Represents transport-layer or networking failures, including timeouts.
    #[error("transport error: {message}")]
    Transport { message: String },
    /// Reports that the remote API rejected the request with an HTTP error status.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code returned by the remote endpoint.
        status: u16,
        /// Message extracted from the error envelope, or the raw body when unparseable.
        message: String,
    },
    /// Indicates a success status whose body did not match the expected envelope.
    #[error("protocol error: {message}")]
    Protocol { message: String },
    /// Surfaces an explicit declination by the model to answer the request.
    #[error("request refused: {reason}")]
    Refusal { reason: String },
    /// Reports that structured output was requested but no parseable JSON was produced.
    #[error("structured output missing: {message}")]
    Parse { message: String },
}

impl ChatError {
    /// Creates a [`ChatError::Transport`] from a textual description.
    ///
    /// The helper keeps call sites concise and guarantees consistent formatting of
    /// transport failures across the crate.
    ///
    /// # Examples
    ///
    /// ```
    /// use kaiwa::error::ChatError;
    ///
    /// let err = ChatError::transport("dns lookup failed");
    /// assert!(matches!(err, ChatError::Transport { .. }));
    /// ```
    pub fn transport<T: Into<String>>(message: T) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a [`ChatError::Validation`] from a textual description.
    ///
    /// # Examples
    ///
    /// ```
    /// use kaiwa::error::ChatError;
    ///
    /// let err = ChatError::validation("messages must not be empty");
    /// assert!(matches!(err, ChatError::Validation { .. }));
    /// ```
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a [`ChatError::Protocol`] from a textual description.
    ///
    /// Used when a success response does not carry the expected completion
    /// envelope, for example a body without `choices[0].message`.
    pub fn protocol<T: Into<String>>(message: T) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }
}
