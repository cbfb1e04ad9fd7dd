//! Error taxonomy for a Cardano wallet.
//!
//! Every failure the wallet can produce is classified as either an internal
//! defect ([`InternalErrorReason`]) or an unexpected external failure
//! ([`UnexpectedErrorReason`]), and resolved into a user-facing message and a
//! remediation hint. Both lookups are total over the closed reason enums,
//! pure, and free of shared mutable state, so any number of threads may call
//! them without coordination.
//!
//! Catch sites wrap raw failures with [`classify_external`] before they reach
//! presentation code; the UI then renders [`error_message`] as the primary
//! text and picks a secondary action from [`error_help_type`].

pub mod classify;
pub mod error;
pub mod help;
pub mod known;
pub mod message;
pub mod reason;
pub mod report;

pub use classify::classify_external;
pub use error::{Result, WalletError};
pub use help::{error_help_type, HelpType};
pub use known::{KnownExternalError, KNOWN_EXTERNAL_ERRORS};
pub use message::error_message;
pub use reason::{InternalErrorReason, UnexpectedErrorReason};
pub use report::{ErrorReport, MAX_CAUSE_DEPTH};
