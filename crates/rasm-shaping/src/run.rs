// this_file: crates/rasm-shaping/src/run.rs

//! Per-run shaping: diacritic filtering, baseline mapping, ligature
//! collapse, and contextual form selection.
//!
//! A run is shaped in two passes. The first scans the characters in logical
//! order and reduces them to presentation baselines - shakl marks are
//! dropped, Lam followed by an Alef variant collapses into one ligature.
//! The second slides a one-character window over the baselines and picks
//! the isolated, initial, medial, or final variant for each letter.

use crate::letters::{self, FormSet, LetterForm};
use crate::marks;

/// One emitted glyph's backing range in the logical source, in characters
///
/// `index` is relative to the start of the run. `len` is 1 except for a
/// collapsed Lam-Alef pair, where the single ligature glyph covers 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalSpan {
    pub index: usize,
    pub len: usize,
}

/// Output of a shaping pass over one run
///
/// `spans` parallels `glyphs` one to one when span tracking was requested,
/// and stays empty otherwise.
#[derive(Debug, Clone, Default)]
pub struct ShapedRun {
    pub glyphs: Vec<char>,
    pub spans: Vec<LogicalSpan>,
}

/// Reduce a run to presentation baselines
///
/// Shakl marks contribute no output glyph and no span. An all-shakl run
/// yields an empty result; degenerate, but valid.
pub fn baseline_run(chars: &[char], want_spans: bool) -> ShapedRun {
    let mut glyphs: Vec<char> = Vec::with_capacity(chars.len());
    let mut spans: Vec<LogicalSpan> = Vec::new();

    for (index, &c) in chars.iter().enumerate() {
        if marks::is_shakl(c) {
            continue;
        }
        let baseline = letters::presentation_form(c);

        // Lam + Alef variant collapses into a single ligature glyph whose
        // span covers both source letters.
        if glyphs.last() == Some(&letters::LAM_BASELINE) {
            if let Some(ligature) = letters::lam_alef_ligature(baseline) {
                glyphs.pop();
                glyphs.push(ligature);
                if want_spans {
                    let lam_index = spans.pop().map(|s| s.index).unwrap_or(index);
                    spans.push(LogicalSpan {
                        index: lam_index,
                        len: 2,
                    });
                }
                continue;
            }
        }

        glyphs.push(baseline);
        if want_spans {
            spans.push(LogicalSpan { index, len: 1 });
        }
    }

    ShapedRun { glyphs, spans }
}

/// Pick the contextual form for one letter given its neighbors
///
/// The four predicates are mutually exclusive and exhaustive over every
/// descriptor. A neighbor without a descriptor (digit, punctuation,
/// ligature) participates as `None` and never extends a join.
pub fn select_form(prev: Option<FormSet>, current: FormSet, next: Option<FormSet>) -> LetterForm {
    let after_joiner = prev.is_some_and(|p| p.has_initial_and_medial);
    let next_has_final = next.is_some_and(|n| n.has_final);
    let next_joins = next.is_some_and(|n| n.has_initial_and_medial || n.has_final);

    if current.has_final && after_joiner && !(current.has_initial_and_medial && next_has_final) {
        LetterForm::Final
    } else if current.has_initial_and_medial && !after_joiner && next_joins {
        LetterForm::Initial
    } else if current.has_initial_and_medial && after_joiner && next_has_final {
        LetterForm::Medial
    } else {
        LetterForm::Isolated
    }
}

/// Apply contextual form selection over a baseline sequence
///
/// Characters with no descriptor are emitted unchanged.
pub fn apply_contextual_forms(baseline: &[char]) -> Vec<char> {
    let sets: Vec<Option<FormSet>> = baseline.iter().map(|&c| letters::form_set(c)).collect();

    baseline
        .iter()
        .enumerate()
        .map(|(i, &c)| match sets[i] {
            None => c,
            Some(current) => {
                let prev = if i > 0 { sets[i - 1] } else { None };
                let next = sets.get(i + 1).copied().flatten();
                current.glyph(select_form(prev, current, next))
            }
        })
        .collect()
}

/// Shape one Arabic run end to end
pub fn shape_run(chars: &[char], want_spans: bool) -> ShapedRun {
    let base = baseline_run(chars, want_spans);
    let glyphs = apply_contextual_forms(&base.glyphs);
    ShapedRun {
        glyphs,
        spans: base.spans,
    }
}
