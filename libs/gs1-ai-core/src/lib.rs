#![allow(dead_code)]
#![deny(clippy::all)]

//! Parser, validator and element-string extractor for GS1 Application
//! Identifier (AI) data.
//!
//! Three surface syntaxes are accepted — a raw element string carrying
//! explicit FNC1 markers, a bracketed `(ai)value(ai)value…` string, and a
//! GS1 Digital Link URI — and all three are reconciled into one canonical
//! element string, which is then decomposed into an ordered list of
//! [`extracted::ExtractedAi`] entries. Rendering a barcode symbol from that
//! list, and serializing the resulting module matrix to a bitmap, are
//! explicitly out of scope: this crate owns AI syntax only.

// Module declarations
pub mod context;
pub mod error;
pub mod extracted;
pub mod hri;
pub mod linters;
pub mod parser;
pub mod registry;
pub mod validate;
mod cset;

// Public re-exports
#[doc(no_inline)]
pub use context::Context;
#[doc(no_inline)]
pub use cset::Cset;
#[doc(no_inline)]
pub use error::Error;
#[doc(no_inline)]
pub use extracted::ExtractedAi;
#[doc(no_inline)]
pub use registry::AiDefinition;

/// Crate version, mirrored from `CARGO_PKG_VERSION` for parity with the
/// reference engine's `gs1_encoder_getVersion`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum length in bytes of the canonical element string.
pub const MAX_DATA: usize = 8191;

/// Maximum length in bytes of a single decoded AI value (bracketed value,
/// or percent-decoded Digital Link path/query component).
pub const MAX_AI_LEN: usize = 1024;

/// Maximum number of AIs an [`extracted::ExtractedAi`] list may hold.
pub const MAX_AIS: usize = 64;

/// Maximum length in bytes of a symbology-specific non-AI payload accepted
/// verbatim by [`context::Context::set_data_str`].
pub const MAX_FNAME: usize = 512;
