//! A parser for the inline layer of GitHub-Flavored Markdown.
//!
//! The input is one *inline run*: the concatenated content of a single
//! block-level container (a paragraph, a heading, a table cell), with soft
//! line breaks preserved as `\n`. Block segmentation and link-reference
//! resolution belong to the caller; this crate turns the run into a lossless
//! concrete syntax tree in which every input byte appears under exactly one
//! leaf.
//!
//! The grammar is total. Unclosed or malformed constructs never fail the
//! parse; they degrade to the literal text they were written as.
//!
//! ```
//! use gfm_inline::parse_inline;
//!
//! let tree = parse_inline("*hi* `code`");
//! assert_eq!(tree.text(), "*hi* `code`");
//! ```

pub use parser::{InlineParser, ParserOptions};
pub use syntax::SyntaxKind;
pub use token::{SyntaxToken, TokenFlags};
pub use tree::{SyntaxElement, SyntaxNode, Token};

mod byte_lookup;
mod delimiter;
mod event;
pub mod html_entities;
mod lexer;
mod parser;
mod syntax;
mod token;
mod tree;

#[cfg(feature = "debug-tracing")]
pub use event::DebugEventBuffer;

/// Parse one inline run into its syntax tree, treating position 0 as the
/// start of the containing block.
pub fn parse_inline(source: &str) -> SyntaxNode {
    parse_inline_with_options(source, ParserOptions::default())
}

/// Parse one inline run with explicit options.
pub fn parse_inline_with_options(source: &str, options: ParserOptions) -> SyntaxNode {
    let mut parser = InlineParser::new(source, options);
    parser.parse();
    parser.into_tree()
}
