//! Closed reason enumerators for the two error kinds.
//!
//! Every failure surfaced to the user is classified as exactly one reason.
//! The message and help tables match exhaustively on these enums, so adding
//! a variant without extending the tables is a compile error.

use std::fmt;

use serde::Serialize;

/// Defects in the wallet's own logic. These indicate a bug, not a problem
/// with the user's environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InternalErrorReason {
    /// An operation received parameters that should have been validated upstream.
    ParamsValidationFailed,
    /// Wallet state no longer satisfies its own invariants.
    InvalidWalletState,
    /// A code path that should never execute was reached.
    UnreachableCodeReached,
    /// Transaction planning produced no viable plan from a valid request.
    TxPlanConstructionFailed,
    /// The transaction could not be encoded for submission.
    TxSerializationFailed,
    /// Address derivation failed for an account the wallet manages.
    AddressDerivationFailed,
    /// A coin amount outside the representable ada range was computed.
    CoinAmountOutOfRange,
    /// A prepared transaction failed its integrity check.
    TransactionCorrupted,
}

impl InternalErrorReason {
    /// Every variant, for tests and diagnostics that enumerate the closed domain.
    pub const ALL: [Self; 8] = [
        Self::ParamsValidationFailed,
        Self::InvalidWalletState,
        Self::UnreachableCodeReached,
        Self::TxPlanConstructionFailed,
        Self::TxSerializationFailed,
        Self::AddressDerivationFailed,
        Self::CoinAmountOutOfRange,
        Self::TransactionCorrupted,
    ];

    /// Stable identifier used in diagnostic reports and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ParamsValidationFailed => "ParamsValidationFailed",
            Self::InvalidWalletState => "InvalidWalletState",
            Self::UnreachableCodeReached => "UnreachableCodeReached",
            Self::TxPlanConstructionFailed => "TxPlanConstructionFailed",
            Self::TxSerializationFailed => "TxSerializationFailed",
            Self::AddressDerivationFailed => "AddressDerivationFailed",
            Self::CoinAmountOutOfRange => "CoinAmountOutOfRange",
            Self::TransactionCorrupted => "TransactionCorrupted",
        }
    }
}

impl fmt::Display for InternalErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures originating from the user's environment or an external system:
/// hardware device, network, or the wallet backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnexpectedErrorReason {
    /// The hardware device was unplugged or the transport dropped.
    DeviceDisconnected,
    /// The hardware device is PIN-locked.
    DeviceLocked,
    /// The device is connected but the Cardano app is not open.
    CardanoAppNotOpen,
    /// The user declined the action on the device.
    ActionRejectedByDevice,
    /// Device firmware or Cardano app version is too old for this operation.
    DeviceOutdated,
    /// No route to the network; usually the user's connection is down.
    NetworkUnreachable,
    /// The wallet backend answered with a server-side failure.
    ServerUnavailable,
    /// Submission was accepted but not confirmed within the timeout.
    SubmissionTimedOut,
    /// The network rejected the submitted transaction.
    TransactionRejectedByNetwork,
    /// External failure with no known signature. Generic passthrough.
    Unexpected,
}

impl UnexpectedErrorReason {
    /// Every variant, for tests and diagnostics that enumerate the closed domain.
    pub const ALL: [Self; 10] = [
        Self::DeviceDisconnected,
        Self::DeviceLocked,
        Self::CardanoAppNotOpen,
        Self::ActionRejectedByDevice,
        Self::DeviceOutdated,
        Self::NetworkUnreachable,
        Self::ServerUnavailable,
        Self::SubmissionTimedOut,
        Self::TransactionRejectedByNetwork,
        Self::Unexpected,
    ];

    /// Stable identifier used in diagnostic reports and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DeviceDisconnected => "DeviceDisconnected",
            Self::DeviceLocked => "DeviceLocked",
            Self::CardanoAppNotOpen => "CardanoAppNotOpen",
            Self::ActionRejectedByDevice => "ActionRejectedByDevice",
            Self::DeviceOutdated => "DeviceOutdated",
            Self::NetworkUnreachable => "NetworkUnreachable",
            Self::ServerUnavailable => "ServerUnavailable",
            Self::SubmissionTimedOut => "SubmissionTimedOut",
            Self::TransactionRejectedByNetwork => "TransactionRejectedByNetwork",
            Self::Unexpected => "Unexpected",
        }
    }
}

impl fmt::Display for UnexpectedErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn internal_identifiers_are_unique() {
        let names: HashSet<&str> = InternalErrorReason::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(names.len(), InternalErrorReason::ALL.len());
    }

    #[test]
    fn unexpected_identifiers_are_unique() {
        let names: HashSet<&str> = UnexpectedErrorReason::ALL
            .iter()
            .map(|r| r.as_str())
            .collect();
        assert_eq!(names.len(), UnexpectedErrorReason::ALL.len());
    }

    #[test]
    fn display_matches_identifier() {
        assert_eq!(
            InternalErrorReason::UnreachableCodeReached.to_string(),
            "UnreachableCodeReached"
        );
        assert_eq!(
            UnexpectedErrorReason::DeviceDisconnected.to_string(),
            "DeviceDisconnected"
        );
    }

    #[test]
    fn serializes_as_identifier() {
        let json = serde_json::to_value(UnexpectedErrorReason::DeviceLocked).unwrap();
        assert_eq!(json, serde_json::json!("DeviceLocked"));
    }
}
