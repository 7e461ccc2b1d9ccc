// this_file: crates/rasm-core/src/lib.rs

//! Rasm Core: the vocabulary of the shaping pipeline
//!
//! Logical-order text enters, a visually-ordered presentation-form string
//! leaves. This crate holds the pieces every stage of that transformation
//! agrees on:
//!
//! 1. **Tokens** - classified, direction-flagged runs produced by an
//!    external tokenizer
//! 2. **Caret units** - records mapping logical source ranges to visual
//!    output slots, for caret placement in editors
//! 3. **The [`Tokenizer`](traits::Tokenizer) trait** - the seam between the
//!    host's run segmentation and the converter
//! 4. **Errors** - the small taxonomy of things that can actually fail
//!
//! The shaping tables and algorithms live in `rasm-shaping`; the
//! orchestrating converter lives in `rasm`.

pub mod error;
pub mod traits;

pub use error::{ConvertError, Result, TokenizeError};
pub use traits::Tokenizer;

/// The data structures that flow between tokenizer, shaper, and converter
pub mod types {
    /// How the external tokenizer classified a run
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TokenKind {
        /// Arabic-script text, subject to contextual shaping
        Arabic,
        /// An opening bracket character
        LeftBracket,
        /// A closing bracket character
        RightBracket,
        /// Everything else: Latin, digits, spaces, punctuation
        Other,
    }

    /// One classified run of the source string
    ///
    /// `start` and `len` count characters (Unicode scalar values), not
    /// bytes. `is_right_to_left` reflects the run's intended direction
    /// within the paragraph, as judged by the tokenizer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Token {
        pub kind: TokenKind,
        pub start: usize,
        pub len: usize,
        pub is_right_to_left: bool,
    }

    impl Token {
        /// One past the last character of the run
        pub fn end(&self) -> usize {
            self.start + self.len
        }
    }

    /// Mapping between a logical source range and its visual output slot
    ///
    /// `logical_length` is normally 1; a Lam-Alef pair collapsed into one
    /// ligature glyph yields a single unit of length 2. `visual_length` is
    /// always 1 for a single shaped glyph slot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CaretUnit {
        pub logical_index: usize,
        pub logical_length: usize,
        pub visual_index: usize,
        pub visual_length: usize,
        /// True when the glyph was appended at the buffer end (right-to-left
        /// placement); false when it was inserted back at the anchor
        pub is_last: bool,
    }
}
