//! Known external error signatures.
//!
//! Device transports and the browser fetch layer fail with vendor-specific
//! text. Signatures registered here are matched by substring at
//! classification time and replaced with a normalized reason, so the user
//! sees actionable guidance instead of raw vendor output.

use crate::reason::UnexpectedErrorReason as Reason;

/// A raw external failure signature pre-registered with its normalized reason.
#[derive(Debug, Clone, Copy)]
pub struct KnownExternalError {
    /// Substring that identifies the failure in the raw error text.
    pub signature: &'static str,
    pub reason: Reason,
}

const fn known(signature: &'static str, reason: Reason) -> KnownExternalError {
    KnownExternalError { signature, reason }
}

/// Read-only signature table, never mutated after compile time and safe for
/// unsynchronized concurrent reads. Ordered most-specific first; the first
/// match wins.
pub const KNOWN_EXTERNAL_ERRORS: &[KnownExternalError] = &[
    // ledgerjs transport failures
    known("TransportOpenUserCancelled", Reason::ActionRejectedByDevice),
    known("TransportInterfaceNotAvailable", Reason::DeviceDisconnected),
    known("DisconnectedDevice", Reason::DeviceDisconnected),
    // Ledger APDU status words
    known("0x5515", Reason::DeviceLocked),
    known("0x6e00", Reason::CardanoAppNotOpen), // wrong CLA: app not open
    known("0x6d00", Reason::DeviceOutdated),    // unknown INS: app too old
    known("0x6985", Reason::ActionRejectedByDevice), // conditions not satisfied
    // trezor-connect failures
    known("Popup closed", Reason::ActionRejectedByDevice),
    known("Action cancelled by user", Reason::ActionRejectedByDevice),
    known("device disconnected during action", Reason::DeviceDisconnected),
    // browser fetch layer
    known("Failed to fetch", Reason::NetworkUnreachable),
    known("NetworkError when attempting to fetch resource", Reason::NetworkUnreachable),
    known("Load failed", Reason::NetworkUnreachable),
    known("Service Unavailable", Reason::ServerUnavailable),
];

/// Look up the normalized reason for raw external error text.
#[must_use]
pub fn match_known(text: &str) -> Option<Reason> {
    KNOWN_EXTERNAL_ERRORS
        .iter()
        .find(|entry| text.contains(entry.signature))
        .map(|entry| entry.reason)
}
