//! Helper functions for creating specific error types

use super::types::{ItemLoadError, PreloadError};

impl PreloadError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn slot<S: Into<String>>(index: usize, reason: S) -> Self {
        Self::Slot {
            index,
            reason: reason.into(),
        }
    }
}

impl ItemLoadError {
    pub fn invalid_location<L: Into<String>, M: Into<String>>(location: L, message: M) -> Self {
        Self::InvalidLocation {
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn status<U: Into<String>>(url: U, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    pub fn data_uri<S: Into<String>>(message: S) -> Self {
        Self::DataUri(message.into())
    }

    /// Short machine-friendly label for logs and reports
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidLocation { .. } => "invalid_location",
            Self::UnsupportedScheme(_) => "unsupported_scheme",
            Self::Http(_) => "http",
            Self::Status { .. } => "status",
            Self::Io(_) => "io",
            Self::DataUri(_) => "data_uri",
            Self::Decode(_) => "decode",
            Self::Task(_) => "task",
        }
    }
}
