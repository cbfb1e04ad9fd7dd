//! Serializable diagnostic payload for error reporting.

use serde::Serialize;

use crate::error::WalletError;
use crate::help::HelpType;

/// Maximum number of cause-chain links rendered into a report.
pub const MAX_CAUSE_DEPTH: usize = 8;

/// Snapshot of a classified error for the diagnostics endpoint.
///
/// Field names serialize in camelCase for the JavaScript consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    /// Kind discriminator, `"InternalError"` or `"UnexpectedError"`.
    pub kind: &'static str,
    /// Stable reason identifier, not the display message.
    pub reason: &'static str,
    pub message: String,
    pub help: HelpType,
    /// Rendered cause chain, outermost link first, truncated at
    /// [`MAX_CAUSE_DEPTH`].
    pub cause_chain: Vec<String>,
}

impl ErrorReport {
    /// Snapshot an error. Pure; the error itself is left untouched.
    #[must_use]
    pub fn new(error: &WalletError) -> Self {
        let cause_chain = match error.cause() {
            Some(cause) => cause
                .chain()
                .take(MAX_CAUSE_DEPTH)
                .map(|link| link.to_string())
                .collect(),
            None => Vec::new(),
        };

        Self {
            kind: error.kind_name(),
            reason: error.reason_name(),
            message: error.message(),
            help: error.help_type(),
            cause_chain,
        }
    }

    /// The report as a JSON value. All fields are plain strings, so
    /// serialization cannot fail.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
