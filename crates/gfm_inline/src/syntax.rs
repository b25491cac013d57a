use serde::Serialize;

/// Every kind of token and node that can appear in a parsed inline tree.
///
/// All token kinds are placed _above_ `INLINE`, and all node kinds at or
/// below it, so that the parser can cheaply determine whether a kind
/// represents a token or a node.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum SyntaxKind {
    // Tokens
    TOMBSTONE = 0, // The start of the input text, or an emptied token.
    EOF,           // The end of the input text.
    // Text
    WORD,   // A run of bytes that are not punctuation, digits, or whitespace.
    DIGITS, // A run of ASCII digits.
    WHITESPACE,       // A run of spaces and tabs.
    SOFT_LINE_BREAK,  // \n, \r, or \r\n.
    HARD_LINE_BREAK,  // Two or more spaces then a newline, or backslash-newline.
    BACKSLASH_ESCAPE, // A backslash followed by one ASCII punctuation byte.
    ENTITY_REFERENCE, // A known HTML5 named reference, like `&amp;`.
    NUMERIC_CHAR_REF, // A numeric reference, like `&#35;` or `&#x22;`.
    ABSOLUTE_URI,     // The interior of a URI autolink.
    EMAIL_ADDRESS,    // The interior of an email autolink.
    // Raw HTML forms, each consumed as one token spanning `<` through `>`.
    HTML_OPEN_TAG,
    HTML_CLOSING_TAG,
    HTML_COMMENT,
    HTML_PROCESSING_INSTRUCTION,
    HTML_DECLARATION,
    HTML_CDATA,
    // Punctuation
    STAR,         // *
    UNDER,        // _
    TILDE,        // ~
    BACKTICK,     // `
    LSQUARE,      // [
    RSQUARE,      // ]
    LPAREN,       // (
    RPAREN,       // )
    LANGLE,       // <
    RANGLE,       // >
    EXCLAIM,      // !
    AMPER,        // &
    QUOTE,        // '
    DOUBLE_QUOTE, // "
    PUNCT,        // Any other single ASCII punctuation byte.

    // Nodes:
    //
    // All token kinds must be placed _above_ this point, and all node kinds
    // below it.
    /// The root of a parsed inline run.
    INLINE,
    /// A single-delimiter emphasis span, like `*foo*` or `_foo_`.
    EMPHASIS,
    /// A double-delimiter emphasis span, like `**foo**`.
    STRONG_EMPHASIS,
    /// A GFM strikethrough span, like `~~foo~~`.
    STRIKETHROUGH,
    /// A backtick-fenced verbatim span. The first and last children are
    /// `CODE_SPAN_DELIMITER` nodes of identical backtick length.
    CODE_SPAN,
    CODE_SPAN_DELIMITER,
    /// The bracketed content of a link. May not contain another link.
    LINK_TEXT,
    /// The bracketed content of an image. Unlike `LINK_TEXT`, this may
    /// contain nested links and images.
    IMAGE_DESCRIPTION,
    // The four link shapes.
    INLINE_LINK,              // [text](dest "title")
    FULL_REFERENCE_LINK,      // [text][label]
    COLLAPSED_REFERENCE_LINK, // [text][]
    SHORTCUT_LINK,            // [text]
    // The four image shapes, mirroring the link shapes with a `!` prefix.
    INLINE_IMAGE,
    FULL_REFERENCE_IMAGE,
    COLLAPSED_REFERENCE_IMAGE,
    SHORTCUT_IMAGE,
    /// The `[label]` of a reference link, resolved downstream.
    LINK_LABEL,
    /// Either an angle-bracketed or bare link destination.
    LINK_DESTINATION,
    /// A quoted or parenthesized link title.
    LINK_TITLE,
    URI_AUTOLINK,   // <scheme:rest>
    EMAIL_AUTOLINK, // <local@domain>
    /// A structurally-recognized raw HTML span, wrapping one of the six
    /// HTML token forms.
    HTML_TAG,
}

impl SyntaxKind {
    pub const fn is_token(&self) -> bool {
        (*self as u8) < (Self::INLINE as u8)
    }

    pub const fn is_node(&self) -> bool {
        (*self as u8) >= (Self::INLINE as u8)
    }

    pub const fn is_line_break(&self) -> bool {
        matches!(self, SyntaxKind::SOFT_LINE_BREAK | SyntaxKind::HARD_LINE_BREAK)
    }

    /// Returns true for the token kinds that the `HtmlTag` lex context can
    /// produce for a complete raw HTML construct.
    pub const fn is_html_form(&self) -> bool {
        matches!(
            self,
            SyntaxKind::HTML_OPEN_TAG
                | SyntaxKind::HTML_CLOSING_TAG
                | SyntaxKind::HTML_COMMENT
                | SyntaxKind::HTML_PROCESSING_INSTRUCTION
                | SyntaxKind::HTML_DECLARATION
                | SyntaxKind::HTML_CDATA
        )
    }

    pub const fn is_link_shape(&self) -> bool {
        matches!(
            self,
            SyntaxKind::INLINE_LINK
                | SyntaxKind::FULL_REFERENCE_LINK
                | SyntaxKind::COLLAPSED_REFERENCE_LINK
                | SyntaxKind::SHORTCUT_LINK
        )
    }

    pub const fn is_image_shape(&self) -> bool {
        matches!(
            self,
            SyntaxKind::INLINE_IMAGE
                | SyntaxKind::FULL_REFERENCE_IMAGE
                | SyntaxKind::COLLAPSED_REFERENCE_IMAGE
                | SyntaxKind::SHORTCUT_IMAGE
        )
    }
}
