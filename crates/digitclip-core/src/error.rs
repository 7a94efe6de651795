//! Error types for digit clip generation.

/// Result type alias for digitclip operations
pub type ClipResult<T> = Result<T, ClipError>;

/// Main error type for digit clip generation
///
/// Every failure is fatal: the run either completes all ten digits or
/// stops at the first error, leaving already-written `.s16` files in
/// place.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipError {
    /// Invalid command-line configuration
    #[error("invalid configuration: {message}")]
    Usage {
        /// Error message describing the rejected option
        message: String,
    },

    /// Required external tool is unreachable
    #[error("environment error: {message}")]
    Environment {
        /// Error message describing the missing tool
        message: String,
    },

    /// Speech engine failed to start
    #[error("engine initialization failed: {message}")]
    Initialization {
        /// Error message guiding the operator to a working backend
        message: String,
    },

    /// Voice query matched none of the available voices
    #[error("voice '{query}' not found. Available voices: {available}")]
    VoiceNotFound {
        /// The substring query that matched nothing
        query: String,
        /// All available voice labels, joined by `", "`
        available: String,
    },

    /// Engine produced no usable waveform
    #[error("synthesis failed: {message}")]
    Synthesis {
        /// Error message describing the failed clip
        message: String,
    },

    /// Transcoder exited with a failure status
    #[error("conversion failed: {message}")]
    Conversion {
        /// Error message describing the failed conversion
        message: String,
    },

    /// File I/O error
    #[error("file I/O error: {message}")]
    File {
        /// Error message describing the file operation failure
        message: String,
    },
}

impl ClipError {
    /// Create a new usage error
    #[must_use]
    pub fn usage<S: Into<String>>(message: S) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a new environment error
    #[must_use]
    pub fn environment<S: Into<String>>(message: S) -> Self {
        Self::Environment {
            message: message.into(),
        }
    }

    /// Create a new initialization error
    #[must_use]
    pub fn initialization<S: Into<String>>(message: S) -> Self {
        Self::Initialization {
            message: message.into(),
        }
    }

    /// Create a new voice-not-found error
    #[must_use]
    pub fn voice_not_found<Q: Into<String>, A: Into<String>>(query: Q, available: A) -> Self {
        Self::VoiceNotFound {
            query: query.into(),
            available: available.into(),
        }
    }

    /// Create a new synthesis error
    #[must_use]
    pub fn synthesis<S: Into<String>>(message: S) -> Self {
        Self::Synthesis {
            message: message.into(),
        }
    }

    /// Create a new conversion error
    #[must_use]
    pub fn conversion<S: Into<String>>(message: S) -> Self {
        Self::Conversion {
            message: message.into(),
        }
    }

    /// Create a new file error
    #[must_use]
    pub fn file<S: Into<String>>(message: S) -> Self {
        Self::File {
            message: message.into(),
        }
    }

    /// Check if this error is due to invalid user input
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Usage { .. } | Self::VoiceNotFound { .. })
    }

    /// Get the error category for logging
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Usage { .. } => "usage",
            Self::Environment { .. } => "environment",
            Self::Initialization { .. } => "initialization",
            Self::VoiceNotFound { .. } => "voice",
            Self::Synthesis { .. } => "synthesis",
            Self::Conversion { .. } => "conversion",
            Self::File { .. } => "file",
        }
    }

    /// Process exit code for this error: usage errors exit 2, everything
    /// else exits 1
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => 2,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for ClipError {
    fn from(err: std::io::Error) -> Self {
        Self::file(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClipError::voice_not_found("xyz", "Alice [a], Bob [b]");
        assert_eq!(
            err.to_string(),
            "voice 'xyz' not found. Available voices: Alice [a], Bob [b]"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ClipError::usage("bad rate").exit_code(), 2);
        assert_eq!(ClipError::environment("no ffmpeg").exit_code(), 1);
        assert_eq!(ClipError::initialization("no backend").exit_code(), 1);
        assert_eq!(ClipError::voice_not_found("q", "").exit_code(), 1);
        assert_eq!(ClipError::synthesis("empty wav").exit_code(), 1);
        assert_eq!(ClipError::conversion("status 1").exit_code(), 1);
        assert_eq!(ClipError::file("denied").exit_code(), 1);
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(ClipError::usage("test").category(), "usage");
        assert_eq!(ClipError::environment("test").category(), "environment");
        assert_eq!(ClipError::initialization("test").category(), "initialization");
        assert_eq!(ClipError::voice_not_found("q", "a").category(), "voice");
        assert_eq!(ClipError::synthesis("test").category(), "synthesis");
        assert_eq!(ClipError::conversion("test").category(), "conversion");
        assert_eq!(ClipError::file("test").category(), "file");
    }

    #[test]
    fn test_user_errors() {
        assert!(ClipError::usage("test").is_user_error());
        assert!(ClipError::voice_not_found("q", "a").is_user_error());
        assert!(!ClipError::synthesis("test").is_user_error());
        assert!(!ClipError::environment("test").is_user_error());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ClipError::from(io_err);
        assert!(matches!(err, ClipError::File { .. }));
    }

    #[test]
    fn test_error_equality() {
        let err1 = ClipError::synthesis("same");
        let err2 = ClipError::synthesis("same");
        let err3 = ClipError::synthesis("different");

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
