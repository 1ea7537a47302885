//! TextIT Client - async Rust client for the TextIT morphology API
//!
//! This library wraps the remote TextIT HTTP API performing
//! Russian-language text transformations: declension and pluralization,
//! spelling correction, next-word hints, number spelling, spell-checking,
//! same-root words, synonyms and keyboard-layout transliteration.
//! Requests can be sent one at a time or deferred into a batch that goes
//! out in a single round trip.
//!
//! ```no_run
//! use textit_client::{Case, Number, TargetForm, TextitClient};
//!
//! # async fn run() -> textit_client::Result<()> {
//! let client = TextitClient::from_env()?;
//! let form = TargetForm::new()
//!     .with_case(Case::Dative)
//!     .with_number(Number::Plural);
//! let result = client.set_form("ананас", &form).await?;
//! assert_eq!(result.word, "ананасам");
//! client.close().await;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    batch::{BatchQueue, PendingRequest},
    client::TextitClient,
    command::Command,
    config::ClientConfig,
    errors::{Result, TextitError},
    models::{
        Animacy, ApiMethod, Aspect, BatchReply, Case, Form, Gender, Number, NumeralFormat,
        NumeralRequest, NumeralResult, NumeralType, PartOfSpeech, Person, SpellerResult,
        TargetForm, Tense, WordResult, WordType,
    },
    transport::{HttpTransport, Transport},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
