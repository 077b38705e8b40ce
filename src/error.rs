use std::fmt;

/// Broad error category, mostly useful to tests and to callers embedding the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied argument violates a precondition (e.g. negative record count).
    InvalidArgument,
    /// A feature value is outside its documented domain (only raised when validation is requested).
    InvalidInput,
    /// File system failure.
    Io,
    /// CSV dataset could not be ingested.
    Ingest,
    /// User registry / key-value store failure.
    Store,
    /// Environment or `.env` configuration is invalid.
    Config,
}

impl ErrorKind {
    /// Process exit code used by the `nova` binary.
    pub fn default_exit_code(self) -> u8 {
        match self {
            ErrorKind::InvalidArgument | ErrorKind::InvalidInput | ErrorKind::Io | ErrorKind::Config => 2,
            ErrorKind::Ingest => 3,
            ErrorKind::Store => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            exit_code: kind.default_exit_code(),
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn ingest(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Ingest, message)
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Store, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        Self::new(ErrorKind::Config, value.to_string())
    }
}

impl From<crate::telemetry::TelemetryError> for AppError {
    fn from(value: crate::telemetry::TelemetryError) -> Self {
        Self::new(ErrorKind::Config, value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_kind() {
        assert_eq!(AppError::invalid_argument("x").exit_code(), 2);
        assert_eq!(AppError::ingest("x").exit_code(), 3);
        assert_eq!(AppError::store("x").exit_code(), 4);
    }

    #[test]
    fn display_is_the_bare_message() {
        let err = AppError::io("Failed to open 'a.csv'");
        assert_eq!(err.to_string(), "Failed to open 'a.csv'");
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
