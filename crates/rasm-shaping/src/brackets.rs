//! Paired bracket mirroring
//!
//! A bracket authored with logical left-to-right intent renders as its
//! mirror image inside a right-to-left visual context.

const PAIRS: [(char, char); 5] = [
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
    ('<', '>'),
    ('«', '»'),
];

/// Mirrored counterpart of an opening bracket
///
/// Unregistered characters are logged and returned unchanged; rendering
/// never stalls on an unknown bracket.
pub fn matching_right(left: char) -> char {
    for (l, r) in PAIRS {
        if l == left {
            return r;
        }
    }
    log::warn!("No right-hand counterpart registered for '{}'", left);
    left
}

/// Mirrored counterpart of a closing bracket
pub fn matching_left(right: char) -> char {
    for (l, r) in PAIRS {
        if r == right {
            return l;
        }
    }
    log::warn!("No left-hand counterpart registered for '{}'", right);
    right
}
