use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure reported by a platform backend while talking to the host
/// windowing system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError {
    pub kind: PlatformErrorKind,
    pub message: Option<String>,
}

impl PlatformError {
    pub fn new(kind: PlatformErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: Some(message.into()) }
    }

    pub fn simple(kind: PlatformErrorKind) -> Self {
        Self { kind, message: None }
    }
}

impl Display for PlatformError {
    /// Renders `<kind>: <backend detail>`, e.g.
    /// `pointer query failed: CGEventCreate returned NULL`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(detail) => write!(f, "{}: {detail}", self.kind),
            None => Display::fmt(&self.kind, f),
        }
    }
}

impl Error for PlatformError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformErrorKind {
    /// The backend could not obtain a handle to the windowing service.
    InitializationFailed,
    /// The windowing service answered but did not produce a reading.
    QueryFailed,
    /// The host refused access to the pointer location.
    PermissionDenied,
    /// No windowing session is available on this host.
    UnsupportedPlatform,
}

impl Display for PlatformErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::InitializationFailed => "platform initialization failed",
            Self::QueryFailed => "pointer query failed",
            Self::PermissionDenied => "permission to read the pointer location was denied",
            Self::UnsupportedPlatform => "no windowing session available",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn detail_follows_kind() {
        let err = PlatformError::new(PlatformErrorKind::QueryFailed, "CGEventCreate returned NULL");
        assert_eq!(err.to_string(), "pointer query failed: CGEventCreate returned NULL");
    }

    #[rstest]
    fn simple_error_describes_kind() {
        let err = PlatformError::simple(PlatformErrorKind::PermissionDenied);
        assert!(err.message.is_none());
        assert_eq!(
            err.to_string(),
            "permission to read the pointer location was denied"
        );
    }
}
