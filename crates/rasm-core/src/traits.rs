//! The contract that binds the external tokenizer to the converter
//!
//! Run segmentation happens outside this workspace: the rendering host owns
//! the paragraph context and decides what counts as a right-to-left run.
//! Implement [`Tokenizer`] and the converter consumes your runs without
//! caring how they were produced.

use crate::{error::TokenizeError, types::Token};

/// Where raw text becomes classified runs
///
/// Given a source string (as characters), produce an ordered, contiguous,
/// non-overlapping sequence of tokens covering `[0, text.len())`. Each token
/// carries its kind and the direction it should take within the broader
/// paragraph context, which is not necessarily the script's intrinsic
/// direction.
///
/// ```ignore
/// struct ParagraphTokenizer;
///
/// impl Tokenizer for ParagraphTokenizer {
///     fn name(&self) -> &'static str {
///         "paragraph"
///     }
///
///     fn tokenize(&self, text: &[char]) -> Result<Vec<Token>, TokenizeError> {
///         // Segment into Arabic / bracket / other runs, flag direction
///         Ok(runs)
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Who are you? Used for debugging and logging
    fn name(&self) -> &'static str;

    /// Segment the source into classified, direction-flagged runs
    ///
    /// The returned tokens must be ordered by `start` and cover the whole
    /// input with no gaps or overlaps. The converter trusts this contract
    /// for coverage; it only re-checks that no token overruns the source.
    fn tokenize(&self, text: &[char]) -> Result<Vec<Token>, TokenizeError>;
}
