use std::ops::Range;

use bitflags::bitflags;

use super::syntax::SyntaxKind;

bitflags! {
    /// Context recorded on delimiter tokens while lexing. The flanking
    /// predicates for emphasis are pure functions of these four bits: the
    /// preceding bits come from the lexer's running state, and the following
    /// bits from one byte of lookahead.
    #[repr(transparent)]
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u8 {
        const HAS_PRECEDING_PUNCTUATION = 1;
        const HAS_FOLLOWING_PUNCTUATION = 1 << 1;
        const HAS_PRECEDING_WHITESPACE = 1 << 2;
        const HAS_FOLLOWING_WHITESPACE = 1 << 3;
    }
}

impl TokenFlags {
    pub fn has_preceding_punctuation(&self) -> bool {
        self.contains(TokenFlags::HAS_PRECEDING_PUNCTUATION)
    }
    pub fn has_preceding_whitespace(&self) -> bool {
        self.contains(TokenFlags::HAS_PRECEDING_WHITESPACE)
    }
    pub fn has_following_punctuation(&self) -> bool {
        self.contains(TokenFlags::HAS_FOLLOWING_PUNCTUATION)
    }
    pub fn has_following_whitespace(&self) -> bool {
        self.contains(TokenFlags::HAS_FOLLOWING_WHITESPACE)
    }
}

/// A raw token produced by the lexer: a kind, the byte span it covers in the
/// source, and the delimiter context flags. Syntax tokens only exist while
/// parsing; the finished tree holds [`crate::tree::Token`]s, which carry
/// their text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxToken {
    kind: SyntaxKind,
    range: Range<usize>,
    flags: TokenFlags,
}

impl SyntaxToken {
    pub fn new(kind: SyntaxKind, range: Range<usize>) -> Self {
        Self {
            kind,
            range,
            flags: TokenFlags::default(),
        }
    }

    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn flags(&self) -> TokenFlags {
        self.flags
    }

    /// Returns the byte range this token covers in the source.
    pub fn span(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn span_start(&self) -> usize {
        self.range.start
    }

    pub fn span_end(&self) -> usize {
        self.range.end
    }
}
