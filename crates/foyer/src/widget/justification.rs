//! Text layout and input filtering flags.

use bitflags::bitflags;

bitflags! {
    /// How text is positioned within its drawing rectangle.
    ///
    /// Exactly one horizontal and one vertical flag are meaningful at a
    /// time; [`WORD_WRAP`](Justification::WORD_WRAP) combines with either.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Justification: u32 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const HCENTER = 1 << 2;
        const TOP = 1 << 4;
        const BOTTOM = 1 << 5;
        const VCENTER = 1 << 6;
        const WORD_WRAP = 1 << 8;
    }
}

impl Default for Justification {
    fn default() -> Self {
        Justification::LEFT | Justification::TOP
    }
}

bitflags! {
    /// Character classes an input field rejects.
    ///
    /// An empty filter accepts every printable character. Setting a flag
    /// filters that class out.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CharFilter: u32 {
        /// Reject alphabetic characters.
        const ALPHA = 1 << 0;
        /// Reject numeric characters.
        const NUMERIC = 1 << 1;
        /// Reject symbol characters such as `$` and `=`.
        const SYMBOLS = 1 << 2;
        /// Reject punctuation.
        const PUNCT = 1 << 3;
    }
}
