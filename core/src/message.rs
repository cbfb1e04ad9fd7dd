//! User-facing message tables.
//!
//! One entry per reason, resolved by exhaustive `match`, so every
//! constructible error has a message and a missing entry cannot get past the
//! compiler. Internal and unexpected messages are worded so the two tables
//! never produce the same string; a test asserts the disjointness.

use crate::error::WalletError;
use crate::reason::{InternalErrorReason, UnexpectedErrorReason};

/// Message for a defect in the wallet's own logic. All of these ask the user
/// to report the problem; none of them is recoverable by the user.
pub(crate) fn internal_message(reason: InternalErrorReason) -> &'static str {
    match reason {
        InternalErrorReason::ParamsValidationFailed => {
            "An internal operation received invalid parameters. Please report this issue."
        }
        InternalErrorReason::InvalidWalletState => {
            "The wallet reached an inconsistent internal state. Please reload the page and report this issue."
        }
        InternalErrorReason::UnreachableCodeReached => {
            "The wallet hit a code path that should never execute. Please report this issue."
        }
        InternalErrorReason::TxPlanConstructionFailed => {
            "The wallet could not put together a valid transaction plan. Please report this issue."
        }
        InternalErrorReason::TxSerializationFailed => {
            "The transaction could not be encoded for submission. Please report this issue."
        }
        InternalErrorReason::AddressDerivationFailed => {
            "The wallet failed to derive one of your addresses. Please report this issue."
        }
        InternalErrorReason::CoinAmountOutOfRange => {
            "An amount outside the valid ada range was computed. Please report this issue."
        }
        InternalErrorReason::TransactionCorrupted => {
            "The prepared transaction failed its integrity check. Please report this issue."
        }
    }
}

/// Message for a failure from the user's environment or an external system.
/// Worded as actionable guidance for the normalized reason, never the raw
/// vendor text.
pub(crate) fn unexpected_message(reason: UnexpectedErrorReason) -> &'static str {
    match reason {
        UnexpectedErrorReason::DeviceDisconnected => {
            "Your hardware device was disconnected. Reconnect it and try again."
        }
        UnexpectedErrorReason::DeviceLocked => {
            "Your hardware device is locked. Unlock it with your PIN and try again."
        }
        UnexpectedErrorReason::CardanoAppNotOpen => {
            "The Cardano app is not open on your device. Open it and try again."
        }
        UnexpectedErrorReason::ActionRejectedByDevice => {
            "The action was rejected on the device."
        }
        UnexpectedErrorReason::DeviceOutdated => {
            "Your device firmware or Cardano app is out of date. Update it before continuing."
        }
        UnexpectedErrorReason::NetworkUnreachable => {
            "The wallet could not reach the network. Check your internet connection."
        }
        UnexpectedErrorReason::ServerUnavailable => {
            "The wallet backend is temporarily unavailable. Try again in a moment."
        }
        UnexpectedErrorReason::SubmissionTimedOut => {
            "The network did not confirm the transaction in time. Check your transaction history before trying again."
        }
        UnexpectedErrorReason::TransactionRejectedByNetwork => {
            "The network rejected the transaction. Your balance may have changed since it was prepared. Try again."
        }
        UnexpectedErrorReason::Unexpected => {
            "An unexpected error occurred. Try again or contact support if the problem persists."
        }
    }
}

/// Resolve the display message for any classified error.
///
/// Total over the closed reason domain and deterministic. Depends only on the
/// kind and reason, never on the cause chain.
#[must_use]
pub fn error_message(error: &WalletError) -> String {
    match error {
        WalletError::Internal { reason, .. } => internal_message(*reason).to_string(),
        WalletError::Unexpected { reason, .. } => unexpected_message(*reason).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_reason_has_a_nonempty_message() {
        for reason in InternalErrorReason::ALL {
            assert!(!internal_message(reason).is_empty(), "empty: {reason}");
        }
        for reason in UnexpectedErrorReason::ALL {
            assert!(!unexpected_message(reason).is_empty(), "empty: {reason}");
        }
    }

    #[test]
    fn message_tables_are_disjoint_across_kinds() {
        let internal: HashSet<&str> = InternalErrorReason::ALL
            .iter()
            .map(|r| internal_message(*r))
            .collect();
        let unexpected: HashSet<&str> = UnexpectedErrorReason::ALL
            .iter()
            .map(|r| unexpected_message(*r))
            .collect();
        assert!(internal.is_disjoint(&unexpected));
    }

    #[test]
    fn messages_are_unique_within_each_kind() {
        let internal: HashSet<&str> = InternalErrorReason::ALL
            .iter()
            .map(|r| internal_message(*r))
            .collect();
        assert_eq!(internal.len(), InternalErrorReason::ALL.len());

        let unexpected: HashSet<&str> = UnexpectedErrorReason::ALL
            .iter()
            .map(|r| unexpected_message(*r))
            .collect();
        assert_eq!(unexpected.len(), UnexpectedErrorReason::ALL.len());
    }

    #[test]
    fn message_ignores_cause_contents() {
        let bare = WalletError::internal(InternalErrorReason::UnreachableCodeReached);
        let with_cause = WalletError::internal_with_cause(
            InternalErrorReason::UnreachableCodeReached,
            anyhow::anyhow!("raw panic text that must not leak"),
        );
        assert_eq!(error_message(&bare), error_message(&with_cause));
        assert!(!error_message(&with_cause).contains("panic text"));
    }
}
