//! The classified error value handed across the presentation boundary.

use thiserror::Error;

use crate::help::{self, HelpType};
use crate::message;
use crate::reason::{InternalErrorReason, UnexpectedErrorReason};

/// Alias for `std::result::Result<T, WalletError>`.
pub type Result<T> = std::result::Result<T, WalletError>;

/// A wallet failure classified as either an internal defect or an unexpected
/// external failure, allowing callers to match on the kind and reason instead
/// of inspecting opaque `anyhow::Error` messages.
///
/// Values are immutable after construction. The optional `cause` is the raw
/// underlying failure, owned exclusively by this error; ownership keeps the
/// chain acyclic and finite. Presentation code reads `message()` and
/// `help_type()` only; the cause exists for diagnostics and for the one-level
/// hint refinement documented on [`help::error_help_type`].
#[derive(Debug, Error)]
pub enum WalletError {
    /// Defect in the wallet's own logic.
    #[error("{}", message::internal_message(*.reason))]
    Internal {
        reason: InternalErrorReason,
        /// Preserved for diagnostic reporting, never rendered to the user.
        cause: Option<anyhow::Error>,
    },

    /// Failure originating from the user's environment or an external system.
    #[error("{}", message::unexpected_message(*.reason))]
    Unexpected {
        reason: UnexpectedErrorReason,
        /// The raw external failure, preserved for diagnostic reporting.
        cause: Option<anyhow::Error>,
    },
}

impl WalletError {
    /// An internal defect with no underlying failure to record.
    #[must_use]
    pub fn internal(reason: InternalErrorReason) -> Self {
        Self::Internal {
            reason,
            cause: None,
        }
    }

    /// An internal defect wrapping the failure that exposed it.
    #[must_use]
    pub fn internal_with_cause(reason: InternalErrorReason, cause: anyhow::Error) -> Self {
        Self::Internal {
            reason,
            cause: Some(cause),
        }
    }

    /// An external failure with an already-normalized reason.
    #[must_use]
    pub fn unexpected(reason: UnexpectedErrorReason) -> Self {
        Self::Unexpected {
            reason,
            cause: None,
        }
    }

    /// An external failure wrapping the raw error it was classified from.
    #[must_use]
    pub fn unexpected_with_cause(reason: UnexpectedErrorReason, cause: anyhow::Error) -> Self {
        Self::Unexpected {
            reason,
            cause: Some(cause),
        }
    }

    /// True for defects in the wallet's own logic.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }

    /// Stable kind discriminator used in diagnostic reports.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Internal { .. } => "InternalError",
            Self::Unexpected { .. } => "UnexpectedError",
        }
    }

    /// Stable identifier of the reason, independent of the display message.
    #[must_use]
    pub fn reason_name(&self) -> &'static str {
        match self {
            Self::Internal { reason, .. } => reason.as_str(),
            Self::Unexpected { reason, .. } => reason.as_str(),
        }
    }

    /// The immediate underlying error, if one was recorded.
    #[must_use]
    pub fn cause(&self) -> Option<&anyhow::Error> {
        match self {
            Self::Internal { cause, .. } | Self::Unexpected { cause, .. } => cause.as_ref(),
        }
    }

    /// The user-facing message for this error. Same text as `Display`.
    #[must_use]
    pub fn message(&self) -> String {
        message::error_message(self)
    }

    /// The remediation hint for this error.
    #[must_use]
    pub fn help_type(&self) -> HelpType {
        help::error_help_type(self)
    }
}

impl From<InternalErrorReason> for WalletError {
    fn from(reason: InternalErrorReason) -> Self {
        Self::internal(reason)
    }
}

impl From<UnexpectedErrorReason> for WalletError {
    fn from(reason: UnexpectedErrorReason) -> Self {
        Self::unexpected(reason)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn display_matches_message_lookup() {
        let err = WalletError::internal(InternalErrorReason::TxSerializationFailed);
        assert_eq!(err.to_string(), message::error_message(&err));

        let err = WalletError::unexpected(UnexpectedErrorReason::DeviceLocked);
        assert_eq!(err.to_string(), message::error_message(&err));
    }

    #[test]
    fn kind_names_are_stable() {
        let internal = WalletError::internal(InternalErrorReason::InvalidWalletState);
        let unexpected = WalletError::unexpected(UnexpectedErrorReason::Unexpected);
        assert_eq!(internal.kind_name(), "InternalError");
        assert_eq!(unexpected.kind_name(), "UnexpectedError");
        assert!(internal.is_internal());
        assert!(!unexpected.is_internal());
    }

    #[test]
    fn cause_is_preserved() {
        let err = WalletError::unexpected_with_cause(
            UnexpectedErrorReason::NetworkUnreachable,
            anyhow!("connection refused"),
        );
        let cause = err.cause().expect("cause should be recorded");
        assert!(cause.to_string().contains("connection refused"));

        assert!(WalletError::internal(InternalErrorReason::TransactionCorrupted)
            .cause()
            .is_none());
    }

    #[test]
    fn reasons_convert_into_errors() {
        let err: WalletError = InternalErrorReason::UnreachableCodeReached.into();
        assert_eq!(err.reason_name(), "UnreachableCodeReached");

        let err: WalletError = UnexpectedErrorReason::ServerUnavailable.into();
        assert_eq!(err.reason_name(), "ServerUnavailable");
    }

    #[test]
    fn wallet_error_can_travel_inside_anyhow() {
        let inner = WalletError::unexpected(UnexpectedErrorReason::DeviceDisconnected);
        let wrapped = anyhow::Error::new(inner);
        let recovered = wrapped
            .downcast_ref::<WalletError>()
            .expect("downcast should succeed");
        assert_eq!(recovered.reason_name(), "DeviceDisconnected");
    }
}
