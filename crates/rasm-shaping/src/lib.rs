// this_file: crates/rasm-shaping/src/lib.rs

//! Arabic presentation-form tables and the per-run contextual shaper.
//!
//! Everything here is host-independent text processing: static `const`
//! tables ([`letters`], [`brackets`], [`marks`]) and the pure shaping
//! passes over one classified run ([`run`]). Whole-string orchestration
//! and caret bookkeeping live in the `rasm` crate.

pub mod brackets;
pub mod letters;
pub mod marks;
pub mod run;

pub use letters::{form_set, lam_alef_ligature, presentation_form, FormSet, LetterForm};
pub use run::{
    apply_contextual_forms, baseline_run, select_form, shape_run, LogicalSpan, ShapedRun,
};
