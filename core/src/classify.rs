//! Boundary classification of raw external failures.
//!
//! Catch sites at the device, network, and backend boundaries wrap every raw
//! failure here before it crosses into presentation code, so the UI never
//! receives an unclassified error.

use tracing::{debug, warn};

use crate::error::WalletError;
use crate::known;
use crate::reason::UnexpectedErrorReason;

/// Wrap a raw external failure into a classified [`WalletError`].
///
/// Every link of the error's chain is checked against the known-signature
/// table, so a recognizable vendor error still classifies after being
/// wrapped in context by intermediate layers. Unrecognized failures fall
/// back to [`UnexpectedErrorReason::Unexpected`]. The raw error is preserved
/// as the cause either way.
#[must_use]
pub fn classify_external(raw: anyhow::Error) -> WalletError {
    let matched = raw
        .chain()
        .find_map(|link| known::match_known(&link.to_string()));

    match matched {
        Some(reason) => {
            debug!(reason = %reason, "matched known external error signature");
            WalletError::unexpected_with_cause(reason, raw)
        }
        None => {
            warn!(error = %raw, "no known signature matched, classifying as generic");
            WalletError::unexpected_with_cause(UnexpectedErrorReason::Unexpected, raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Context};

    use super::*;

    #[test]
    fn known_signature_yields_normalized_reason() {
        let err = classify_external(anyhow!("TransportInterfaceNotAvailable"));
        assert_eq!(err.reason_name(), "DeviceDisconnected");
    }

    #[test]
    fn signature_is_found_anywhere_in_the_chain() {
        let raw = anyhow!("Ledger device: UNKNOWN_ERROR (0x5515)")
            .context("could not sign certificate")
            .context("delegation failed");
        let err = classify_external(raw);
        assert_eq!(err.reason_name(), "DeviceLocked");
    }

    #[test]
    fn unknown_failure_falls_back_to_generic() {
        let err = classify_external(anyhow!("firmware exploded in a new way"));
        assert_eq!(err.reason_name(), "Unexpected");
        // The raw text must survive for diagnostics.
        let cause = err.cause().expect("raw error should be kept");
        assert!(cause.to_string().contains("firmware exploded"));
    }

    #[test]
    fn classification_keeps_the_raw_error_on_match_too() {
        let err = classify_external(anyhow!("Popup closed by user"));
        assert_eq!(err.reason_name(), "ActionRejectedByDevice");
        assert!(err.cause().is_some());
    }
}
