// this_file: crates/rasm/src/proptests.rs

use std::sync::Arc;

use proptest::prelude::*;

use crate::{convert_mirror_ltr, ArabicConverter, Token, TokenKind, TokenizeError, Tokenizer};

/// Hands the whole input back as one left-to-right Other run
struct SingleOtherTokenizer;

impl Tokenizer for SingleOtherTokenizer {
    fn name(&self) -> &'static str {
        "single-other"
    }

    fn tokenize(&self, text: &[char]) -> Result<Vec<Token>, TokenizeError> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![Token {
            kind: TokenKind::Other,
            start: 0,
            len: text.len(),
            is_right_to_left: false,
        }])
    }
}

/// Groups contiguous Arabic-block characters into right-to-left Arabic
/// runs and everything else into left-to-right Other runs
struct BlockTokenizer;

fn in_arabic_block(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

impl Tokenizer for BlockTokenizer {
    fn name(&self) -> &'static str {
        "block"
    }

    fn tokenize(&self, text: &[char]) -> Result<Vec<Token>, TokenizeError> {
        let mut tokens = Vec::new();
        let mut start = 0;
        while start < text.len() {
            let arabic = in_arabic_block(text[start]);
            let mut end = start + 1;
            while end < text.len() && in_arabic_block(text[end]) == arabic {
                end += 1;
            }
            tokens.push(Token {
                kind: if arabic {
                    TokenKind::Arabic
                } else {
                    TokenKind::Other
                },
                start,
                len: end - start,
                is_right_to_left: arabic,
            });
            start = end;
        }
        Ok(tokens)
    }
}

// Property: mirroring twice gives back the input
proptest! {
    #[test]
    fn prop_mirror_involutive(s in "\\PC*") {
        prop_assert_eq!(convert_mirror_ltr(&convert_mirror_ltr(&s)), s);
    }
}

// Property: mirroring never gains or loses characters
proptest! {
    #[test]
    fn prop_mirror_preserves_char_count(s in "\\PC*") {
        prop_assert_eq!(convert_mirror_ltr(&s).chars().count(), s.chars().count());
    }
}

// Property: a single left-to-right Other token passes through untouched
proptest! {
    #[test]
    fn prop_single_ltr_token_passthrough(s in "\\PC*") {
        let mut converter = ArabicConverter::new(Arc::new(SingleOtherTokenizer));
        prop_assert_eq!(converter.convert(&s).unwrap(), s);
    }
}

// Property: caret units cover every non-shakl source character exactly once
proptest! {
    #[test]
    fn prop_caret_units_cover_non_shakl_source(
        s in "[\u{0621}-\u{064A}\u{064B}-\u{0652}a-z ]{0,32}",
    ) {
        let mut converter = ArabicConverter::new(Arc::new(BlockTokenizer));
        converter.set_create_caret_units(true);
        let output = converter.convert(&s).unwrap();

        let shakl = s
            .chars()
            .filter(|c| crate::shaping::marks::is_shakl(*c))
            .count();
        let covered: usize = converter
            .caret_units()
            .iter()
            .map(|u| u.logical_length)
            .sum();
        prop_assert_eq!(covered, s.chars().count() - shakl);

        // One unit per visual glyph, visual indices a permutation of 0..len
        prop_assert_eq!(converter.caret_units().len(), output.chars().count());
        let mut visual: Vec<usize> = converter
            .caret_units()
            .iter()
            .map(|u| u.visual_index)
            .collect();
        visual.sort_unstable();
        prop_assert_eq!(visual, (0..output.chars().count()).collect::<Vec<_>>());
    }
}

// Property: conversion is deterministic
proptest! {
    #[test]
    fn prop_convert_deterministic(s in "[\u{0621}-\u{0652}a-z ]{0,24}") {
        let mut converter = ArabicConverter::new(Arc::new(BlockTokenizer));
        converter.set_create_caret_units(true);
        let first = converter.convert(&s).unwrap();
        let first_units = converter.caret_units().to_vec();
        let second = converter.convert(&s).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first_units, converter.caret_units());
    }
}
