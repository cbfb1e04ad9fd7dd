//! Remediation hints attached to classified errors.
//!
//! The hint tells the presentation layer which secondary action to offer
//! next to the message: a retry button, a connection checklist, a support
//! link, or nothing at all.

use std::fmt;

use serde::Serialize;

use crate::error::WalletError;
use crate::reason::{InternalErrorReason, UnexpectedErrorReason};

/// Closed set of recommended user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HelpType {
    /// The operation is worth retrying as-is.
    Retry,
    /// The user should check their internet connection first.
    CheckConnection,
    /// Not user-recoverable; point at support.
    ContactSupport,
    /// No secondary action; the message alone is the outcome.
    #[serde(rename = "none")]
    Nothing,
}

impl HelpType {
    /// Every variant, for tests that enumerate the closed set.
    pub const ALL: [Self; 4] = [
        Self::Retry,
        Self::CheckConnection,
        Self::ContactSupport,
        Self::Nothing,
    ];

    /// Stable identifier used in diagnostic reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Retry => "retry",
            Self::CheckConnection => "check_connection",
            Self::ContactSupport => "contact_support",
            Self::Nothing => "none",
        }
    }
}

impl fmt::Display for HelpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Internal defects are never user-recoverable, whatever the reason.
fn internal_help(_reason: InternalErrorReason) -> HelpType {
    HelpType::ContactSupport
}

fn unexpected_help(reason: UnexpectedErrorReason) -> HelpType {
    match reason {
        UnexpectedErrorReason::DeviceDisconnected
        | UnexpectedErrorReason::DeviceLocked
        | UnexpectedErrorReason::CardanoAppNotOpen => HelpType::Retry,
        UnexpectedErrorReason::ActionRejectedByDevice => HelpType::Nothing,
        UnexpectedErrorReason::DeviceOutdated => HelpType::ContactSupport,
        UnexpectedErrorReason::NetworkUnreachable => HelpType::CheckConnection,
        UnexpectedErrorReason::ServerUnavailable
        | UnexpectedErrorReason::SubmissionTimedOut
        | UnexpectedErrorReason::TransactionRejectedByNetwork
        | UnexpectedErrorReason::Unexpected => HelpType::Retry,
    }
}

/// Resolve the remediation hint for any classified error.
///
/// Pure dispatch on kind and reason, with one exception: when the outer
/// reason is the generic [`UnexpectedErrorReason::Unexpected`] passthrough
/// and the cause is itself a classified `WalletError`, the wrapped error's
/// kind and reason decide the hint instead. The lookahead is exactly one
/// level deep; a wrapped generic error is not unwrapped further and keeps
/// the generic fallback.
#[must_use]
pub fn error_help_type(error: &WalletError) -> HelpType {
    match error {
        WalletError::Internal { reason, .. } => internal_help(*reason),
        WalletError::Unexpected {
            reason: UnexpectedErrorReason::Unexpected,
            cause,
        } => match cause.as_ref().and_then(|c| c.downcast_ref::<WalletError>()) {
            Some(WalletError::Internal { reason, .. }) => internal_help(*reason),
            Some(WalletError::Unexpected { reason, .. }) => unexpected_help(*reason),
            None => unexpected_help(UnexpectedErrorReason::Unexpected),
        },
        WalletError::Unexpected { reason, .. } => unexpected_help(*reason),
    }
}
