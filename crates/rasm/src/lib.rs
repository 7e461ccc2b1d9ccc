// this_file: crates/rasm/src/lib.rs

//! Rasm: Arabic contextual shaping and visual reordering
//!
//! Logical-order mixed-direction text goes in, a presentation-form string
//! in rendering order comes out. Every conversion follows the same journey:
//!
//! 1. **Tokenization** - the host's tokenizer classifies the source into
//!    direction-flagged runs (Arabic, bracket, other)
//! 2. **Per-run shaping** - Arabic runs drop their diacritics, collapse
//!    Lam-Alef pairs, and pick isolated/initial/medial/final variants
//! 3. **Placement** - right-to-left runs append and move the anchor,
//!    left-to-right runs thread back in at the anchor, brackets mirror
//! 4. **Caret mapping** - optionally, one record per visual glyph ties it
//!    back to its logical source range for editor caret placement
//!
//! ## Convert your first string
//!
//! ```ignore
//! use std::sync::Arc;
//! use rasm::{ArabicConverter, Tokenizer};
//!
//! let mut converter = ArabicConverter::new(Arc::new(MyTokenizer::new()));
//! let visual = converter.convert("ab(مرحبا)cd")?;
//! ```
//!
//! The tokenizer is a host concern - paragraph direction context lives
//! there, not here. Implement [`Tokenizer`] once per rendering host and
//! reuse the converter everywhere.
//!
//! This is not a full Unicode bidi implementation and does not try to be:
//! one active right-to-left anchor, no embedding stack. The shaping tables
//! and per-run algorithms live in [`rasm_shaping`] and are usable on their
//! own.

pub mod convert;

pub use convert::{convert_mirror_ltr, ArabicConverter};
pub use rasm_core::{
    error::{ConvertError, Result, TokenizeError},
    traits::Tokenizer,
    types::{CaretUnit, Token, TokenKind},
};
pub use rasm_shaping as shaping;

#[cfg(test)]
mod proptests;
