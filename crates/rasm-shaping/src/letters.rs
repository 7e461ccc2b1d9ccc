// this_file: crates/rasm-shaping/src/letters.rs

//! Letter tables: plain codepoints to presentation baselines, and
//! presentation baselines to their positional form descriptors.
//!
//! All data is `const`; lookups are pure and never fail. Characters absent
//! from the tables pass through unchanged.

/// The four contextual shapes a joining letter may take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterForm {
    Isolated,
    Final,
    Initial,
    Medial,
}

/// Positional form descriptor for one shapable letter
///
/// Dual-joining letters lay their variants out contiguously after the
/// isolated form (`final = isolated + 1`, `initial = isolated + 2`,
/// `medial = isolated + 3`); right-joining letters carry only
/// `final = isolated + 1`. The constructors encode that layout, so a
/// descriptor can never disagree with its capability flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSet {
    isolated: char,
    fina: char,
    init: char,
    medi: char,
    pub has_final: bool,
    pub has_initial_and_medial: bool,
}

const fn ch(cp: u32) -> char {
    match char::from_u32(cp) {
        Some(c) => c,
        None => '\u{FFFD}',
    }
}

impl FormSet {
    /// Letter with all four positional variants
    const fn dual(isolated: u32) -> Self {
        Self {
            isolated: ch(isolated),
            fina: ch(isolated + 1),
            init: ch(isolated + 2),
            medi: ch(isolated + 3),
            has_final: true,
            has_initial_and_medial: true,
        }
    }

    /// Letter that joins only to a preceding joiner (isolated + final)
    const fn final_only(isolated: u32) -> Self {
        Self {
            isolated: ch(isolated),
            fina: ch(isolated + 1),
            init: ch(isolated),
            medi: ch(isolated),
            has_final: true,
            has_initial_and_medial: false,
        }
    }

    /// Letter with no positional variants at all
    const fn isolated_only(isolated: u32) -> Self {
        Self {
            isolated: ch(isolated),
            fina: ch(isolated),
            init: ch(isolated),
            medi: ch(isolated),
            has_final: false,
            has_initial_and_medial: false,
        }
    }

    /// The codepoint rendering this letter in the given form
    ///
    /// Callers are expected to pick a form the capability flags permit; for
    /// forms the letter does not have, the isolated codepoint comes back.
    pub fn glyph(&self, form: LetterForm) -> char {
        match form {
            LetterForm::Isolated => self.isolated,
            LetterForm::Final => self.fina,
            LetterForm::Initial => self.init,
            LetterForm::Medial => self.medi,
        }
    }
}

const PLAIN_BASE: u32 = 0x0621;

/// Presentation baseline (isolated form) for each plain letter in
/// U+0621..=U+064A. Zero marks codepoints left untouched.
const PLAIN_TO_BASELINE: [u32; 42] = [
    0xFE80, // U+0621 hamza
    0xFE81, // U+0622 alef with madda above
    0xFE83, // U+0623 alef with hamza above
    0xFE85, // U+0624 waw with hamza above
    0xFE87, // U+0625 alef with hamza below
    0xFE89, // U+0626 yeh with hamza above
    0xFE8D, // U+0627 alef
    0xFE8F, // U+0628 beh
    0xFE93, // U+0629 teh marbuta
    0xFE95, // U+062A teh
    0xFE99, // U+062B theh
    0xFE9D, // U+062C jeem
    0xFEA1, // U+062D hah
    0xFEA5, // U+062E khah
    0xFEA9, // U+062F dal
    0xFEAB, // U+0630 thal
    0xFEAD, // U+0631 reh
    0xFEAF, // U+0632 zain
    0xFEB1, // U+0633 seen
    0xFEB5, // U+0634 sheen
    0xFEB9, // U+0635 sad
    0xFEBD, // U+0636 dad
    0xFEC1, // U+0637 tah
    0xFEC5, // U+0638 zah
    0xFEC9, // U+0639 ain
    0xFECD, // U+063A ghain
    0, 0, 0, 0, 0, // U+063B..=U+063F outside the supported set
    0,      // U+0640 tatweel
    0xFED1, // U+0641 feh
    0xFED5, // U+0642 qaf
    0xFED9, // U+0643 kaf
    0xFEDD, // U+0644 lam
    0xFEE1, // U+0645 meem
    0xFEE5, // U+0646 noon
    0xFEE9, // U+0647 heh
    0xFEED, // U+0648 waw
    0xFEEF, // U+0649 alef maksura
    0xFEF1, // U+064A yeh
];

/// Isolated presentation form of Lam, the trigger of the Lam-Alef ligature
pub const LAM_BASELINE: char = '\u{FEDD}';

/// Map a plain Arabic letter to its presentation-form baseline
///
/// Characters outside the supported Arabic block and its Persian extensions
/// come back unchanged; graceful passthrough, never an error.
pub fn presentation_form(c: char) -> char {
    let cp = c as u32;
    if (PLAIN_BASE..PLAIN_BASE + PLAIN_TO_BASELINE.len() as u32).contains(&cp) {
        return match PLAIN_TO_BASELINE[(cp - PLAIN_BASE) as usize] {
            0 => c,
            baseline => ch(baseline),
        };
    }
    // Persian extensions live in Presentation Forms-A
    match cp {
        0x067E => '\u{FB56}', // peh
        0x0686 => '\u{FB7A}', // tcheh
        0x0698 => '\u{FB8A}', // jeh
        0x06A9 => '\u{FB8E}', // keheh
        0x06AF => '\u{FB92}', // gaf
        0x06CC => '\u{FBFC}', // farsi yeh
        _ => c,
    }
}

/// Positional form descriptor for a presentation baseline codepoint
///
/// `None` for anything that is not a shapable letter: punctuation, Latin,
/// digits, and the ligated Lam-Alef variants, which are terminal and not
/// re-shaped.
pub fn form_set(c: char) -> Option<FormSet> {
    let set = match c as u32 {
        // Presentation Forms-B, U+0621..=U+064A letters
        0xFE80 => FormSet::isolated_only(0xFE80), // hamza
        0xFE81 => FormSet::final_only(0xFE81),    // alef with madda above
        0xFE83 => FormSet::final_only(0xFE83),    // alef with hamza above
        0xFE85 => FormSet::final_only(0xFE85),    // waw with hamza above
        0xFE87 => FormSet::final_only(0xFE87),    // alef with hamza below
        0xFE89 => FormSet::dual(0xFE89),          // yeh with hamza above
        0xFE8D => FormSet::final_only(0xFE8D),    // alef
        0xFE8F => FormSet::dual(0xFE8F),          // beh
        0xFE93 => FormSet::final_only(0xFE93),    // teh marbuta
        0xFE95 => FormSet::dual(0xFE95),          // teh
        0xFE99 => FormSet::dual(0xFE99),          // theh
        0xFE9D => FormSet::dual(0xFE9D),          // jeem
        0xFEA1 => FormSet::dual(0xFEA1),          // hah
        0xFEA5 => FormSet::dual(0xFEA5),          // khah
        0xFEA9 => FormSet::final_only(0xFEA9),    // dal
        0xFEAB => FormSet::final_only(0xFEAB),    // thal
        0xFEAD => FormSet::final_only(0xFEAD),    // reh
        0xFEAF => FormSet::final_only(0xFEAF),    // zain
        0xFEB1 => FormSet::dual(0xFEB1),          // seen
        0xFEB5 => FormSet::dual(0xFEB5),          // sheen
        0xFEB9 => FormSet::dual(0xFEB9),          // sad
        0xFEBD => FormSet::dual(0xFEBD),          // dad
        0xFEC1 => FormSet::dual(0xFEC1),          // tah
        0xFEC5 => FormSet::dual(0xFEC5),          // zah
        0xFEC9 => FormSet::dual(0xFEC9),          // ain
        0xFECD => FormSet::dual(0xFECD),          // ghain
        0xFED1 => FormSet::dual(0xFED1),          // feh
        0xFED5 => FormSet::dual(0xFED5),          // qaf
        0xFED9 => FormSet::dual(0xFED9),          // kaf
        0xFEDD => FormSet::dual(0xFEDD),          // lam
        0xFEE1 => FormSet::dual(0xFEE1),          // meem
        0xFEE5 => FormSet::dual(0xFEE5),          // noon
        0xFEE9 => FormSet::dual(0xFEE9),          // heh
        0xFEED => FormSet::final_only(0xFEED),    // waw
        0xFEEF => FormSet::final_only(0xFEEF),    // alef maksura
        0xFEF1 => FormSet::dual(0xFEF1),          // yeh
        // Presentation Forms-A, Persian extensions
        0xFB56 => FormSet::dual(0xFB56),          // peh
        0xFB7A => FormSet::dual(0xFB7A),          // tcheh
        0xFB8A => FormSet::final_only(0xFB8A),    // jeh
        0xFB8E => FormSet::dual(0xFB8E),          // keheh
        0xFB92 => FormSet::dual(0xFB92),          // gaf
        0xFBFC => FormSet::dual(0xFBFC),          // farsi yeh
        _ => return None,
    };
    Some(set)
}

/// The Lam-Alef ligature replacing Lam followed by this Alef-variant
/// baseline, if the pair ligates
pub fn lam_alef_ligature(alef_baseline: char) -> Option<char> {
    match alef_baseline {
        '\u{FE81}' => Some('\u{FEF5}'), // lam-alef with madda above
        '\u{FE83}' => Some('\u{FEF7}'), // lam-alef with hamza above
        '\u{FE87}' => Some('\u{FEF9}'), // lam-alef with hamza below
        '\u{FE8D}' => Some('\u{FEFB}'), // lam-alef
        _ => None,
    }
}
