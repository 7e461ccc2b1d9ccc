// this_file: crates/rasm/src/convert.rs

//! Whole-string conversion: token-driven shaping, bracket mirroring, and
//! append-or-insert placement with caret bookkeeping.

use std::sync::Arc;

use rasm_core::{
    error::{ConvertError, Result},
    traits::Tokenizer,
    types::{CaretUnit, Token, TokenKind},
};
use rasm_shaping::{brackets, run};

/// Converts logical-order mixed-direction text into a shaped,
/// visually-ordered string
///
/// The conversion walks the token stream in logical order and maintains a
/// single right-to-left anchor: right-to-left runs append to the output
/// buffer and move the anchor to the buffer end, left-to-right runs thread
/// back in at the anchor so they keep their natural reading order around
/// the embedded right-to-left material. This is a deliberate restriction of
/// full bidirectional reordering - there is no embedding stack, and at most
/// one anchor is active at a time.
///
/// The converter owns its scratch buffers and can be reused across calls;
/// `convert` takes `&mut self`, so a second conversion cannot start while
/// one is in flight, and the caret toggle cannot flip mid-conversion.
///
/// ```ignore
/// let mut converter = ArabicConverter::new(Arc::new(HostTokenizer::new()));
/// converter.set_create_caret_units(true);
/// let visual = converter.convert(source)?;
/// let mapping = converter.caret_units();
/// ```
pub struct ArabicConverter {
    tokenizer: Arc<dyn Tokenizer>,
    buffer: Vec<char>,
    caret_units: Vec<CaretUnit>,
    insert_index: usize,
    create_caret_units: bool,
}

impl ArabicConverter {
    /// Create a converter around the host's run tokenizer
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self {
            tokenizer,
            buffer: Vec::new(),
            caret_units: Vec::new(),
            insert_index: 0,
            create_caret_units: false,
        }
    }

    /// Enable or disable caret-unit capture for subsequent conversions
    /// (default: disabled)
    pub fn set_create_caret_units(&mut self, enabled: bool) {
        self.create_caret_units = enabled;
    }

    /// Whether caret-unit capture is enabled
    pub fn create_caret_units(&self) -> bool {
        self.create_caret_units
    }

    /// Logical-to-visual mapping recorded by the most recent conversion
    ///
    /// Empty unless capture was enabled; replaced at the start of the next
    /// `convert` call.
    pub fn caret_units(&self) -> &[CaretUnit] {
        &self.caret_units
    }

    /// Produce the shaped, visually-ordered form of `source`
    pub fn convert(&mut self, source: &str) -> Result<String> {
        self.buffer.clear();
        self.caret_units.clear();
        self.insert_index = 0;

        let chars: Vec<char> = source.chars().collect();
        let tokens = self.tokenizer.tokenize(&chars)?;
        log::debug!(
            "Converting {} chars across {} tokens via '{}'",
            chars.len(),
            tokens.len(),
            self.tokenizer.name()
        );

        for token in &tokens {
            if token.len > chars.len() || token.start > chars.len() - token.len {
                return Err(ConvertError::TokenOutOfBounds {
                    start: token.start,
                    len: token.len,
                    source_len: chars.len(),
                });
            }
            match token.kind {
                TokenKind::Arabic => self.append_arabic(&chars, token),
                TokenKind::LeftBracket | TokenKind::RightBracket if token.is_right_to_left => {
                    self.append_mirrored(&chars, token);
                }
                _ if token.is_right_to_left => self.append_plain(&chars, token),
                _ => self.insert_at_anchor(&chars, token),
            }
        }

        Ok(self.buffer.iter().collect())
    }

    /// Shape an Arabic run and append it; the append point becomes the new
    /// anchor
    fn append_arabic(&mut self, chars: &[char], token: &Token) {
        let shaped = run::shape_run(&chars[token.start..token.end()], self.create_caret_units);
        log::trace!(
            "Appending {} shaped glyphs at {}",
            shaped.glyphs.len(),
            self.buffer.len()
        );
        if self.create_caret_units {
            for (offset, span) in shaped.spans.iter().enumerate() {
                self.caret_units.push(CaretUnit {
                    logical_index: token.start + span.index,
                    logical_length: span.len,
                    visual_index: self.buffer.len() + offset,
                    visual_length: 1,
                    is_last: true,
                });
            }
        }
        self.buffer.extend(shaped.glyphs);
        self.insert_index = self.buffer.len();
    }

    /// Append the mirrored counterpart of a bracket run
    fn append_mirrored(&mut self, chars: &[char], token: &Token) {
        for (offset, &c) in chars[token.start..token.end()].iter().enumerate() {
            let mirrored = match token.kind {
                TokenKind::LeftBracket => brackets::matching_right(c),
                _ => brackets::matching_left(c),
            };
            self.push_appended(mirrored, token.start + offset);
        }
        self.insert_index = self.buffer.len();
    }

    /// Append a right-to-left-flagged run unchanged
    fn append_plain(&mut self, chars: &[char], token: &Token) {
        for (offset, &c) in chars[token.start..token.end()].iter().enumerate() {
            self.push_appended(c, token.start + offset);
        }
        self.insert_index = self.buffer.len();
    }

    fn push_appended(&mut self, c: char, logical_index: usize) {
        if self.create_caret_units {
            self.caret_units.push(CaretUnit {
                logical_index,
                logical_length: 1,
                visual_index: self.buffer.len(),
                visual_length: 1,
                is_last: true,
            });
        }
        self.buffer.push(c);
    }

    /// Thread a left-to-right run back in at the anchor
    ///
    /// The anchor itself stays put: every left-to-right token between two
    /// right-to-left runs targets the position where the last such run
    /// ended. Earlier units at or past the anchor shift right to keep the
    /// mapping valid.
    fn insert_at_anchor(&mut self, chars: &[char], token: &Token) {
        let at = self.insert_index;
        log::trace!("Inserting {} chars at anchor {}", token.len, at);
        if self.create_caret_units {
            for unit in &mut self.caret_units {
                if unit.visual_index >= at {
                    unit.visual_index += token.len;
                }
            }
            for offset in 0..token.len {
                self.caret_units.push(CaretUnit {
                    logical_index: token.start + offset,
                    logical_length: 1,
                    visual_index: at + offset,
                    visual_length: 1,
                    is_last: false,
                });
            }
        }
        self.buffer
            .splice(at..at, chars[token.start..token.end()].iter().copied());
    }
}

impl std::fmt::Debug for ArabicConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArabicConverter")
            .field("tokenizer", &self.tokenizer.name())
            .field("buffered", &self.buffer.len())
            .field("caret_units", &self.caret_units.len())
            .field("insert_index", &self.insert_index)
            .field("create_caret_units", &self.create_caret_units)
            .finish()
    }
}

/// Reverse character order
///
/// Renders an already-mirrored right-to-left block so a strictly
/// left-to-right line-layout pass can consume it. Applying it twice gives
/// back the input.
pub fn convert_mirror_ltr(source: &str) -> String {
    source.chars().rev().collect()
}
