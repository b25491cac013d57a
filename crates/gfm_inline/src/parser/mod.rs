use arcstr::ArcStr;

use crate::lexer::LexContext;
use crate::tree::{build_tree, SyntaxNode};

use super::{
    delimiter::AnyDelimiter,
    event::{Event, Marker},
    lexer::{Lexer, LexerCheckpoint},
    syntax::SyntaxKind,
    token::{SyntaxToken, TokenFlags},
};

use self::inline::parse_inline;

mod code_span;
mod delimiter;
mod emphasis;
mod inline;
mod link;

/// Configuration for a single parse.
#[derive(Clone, Copy, Debug)]
pub struct ParserOptions {
    /// Whether position 0 of the input is the start of its containing block.
    /// The start of a block counts as whitespace for the emphasis flanking
    /// rules; when an inline run is resumed mid-block the caller can turn
    /// this off so the first character is treated as following a word.
    pub at_block_start: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            at_block_start: true,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(super) struct ParserCheckpoint {
    lexer_checkpoint: LexerCheckpoint,
    buffer_index: usize,
    delimiter_stack_length: usize,
}

/// A parser for one inline run of GitHub-Flavored Markdown.
///
/// The grammar is total: every byte sequence parses, and every byte of the
/// input is covered by exactly one leaf of the resulting tree. Constructs
/// that fail to complete (an unclosed code span, a link with a malformed
/// resource, a lone `*`) degrade to literal text rather than erroring.
///
/// Parsing happens in a single left-to-right pass that records events into a
/// flat buffer. Elements whose extent is only known later (emphasis,
/// strikethrough, links) reserve tombstone events that are resolved in place
/// by the delimiter-stack pass, so the buffer never needs to be reordered.
pub struct InlineParser<'source> {
    lexer: Lexer<'source>,
    source: ArcStr,
    buffer: Vec<Event>,
    delimiters: Vec<AnyDelimiter>,
}

impl<'source> InlineParser<'source> {
    pub fn new(source: &'source str, options: ParserOptions) -> Self {
        Self {
            lexer: Lexer::new(source, options.at_block_start),
            source: ArcStr::from(source),
            // Pre-allocating here should avoid the need to reallocate within
            // the parser in most cases, at the expense of extra capacity for
            // simple sources.
            buffer: Vec::with_capacity(source.len() / 2),
            delimiters: vec![],
        }
    }

    pub fn source(&self) -> &ArcStr {
        &self.source
    }

    /// Parse the entire input as one inline run.
    pub fn parse(&mut self) {
        // Eating one starts the parser by reading the first token.
        self.eat();
        parse_inline(self);
        self.expect_end_of_file();
    }

    /// Consume this parser, interpreting its events into the finished
    /// lossless syntax tree. The return value is the root INLINE node.
    pub fn into_tree(self) -> SyntaxNode {
        build_tree(self.buffer, &self.source)
    }

    // Internal API
    //
    // All of the following are the interface for parsing functions to use
    // for querying and mutating the parse state.

    pub(super) fn current(&self) -> SyntaxKind {
        self.lexer.current_kind()
    }

    pub(super) fn current_flags(&self) -> TokenFlags {
        self.lexer.current_flags()
    }

    /// Advances by 1 if the current token matches the given kind and returns
    /// that kind. Otherwise, returns None indicating no bump was made.
    #[inline]
    #[must_use = "The result of `expect` is None if the current token does not match, which should be propagated or handled."]
    pub(super) fn expect(&mut self, kind: SyntaxKind) -> Option<SyntaxKind> {
        self.expect_with_context(kind, LexContext::Regular)
    }

    /// Advances by 1 if the current token matches the given kind and returns
    /// that kind. The following token will be lexed using the given context.
    #[must_use = "The result of `expect` is None if the current token does not match, which should be propagated or handled."]
    pub(super) fn expect_with_context(
        &mut self,
        kind: SyntaxKind,
        context: LexContext,
    ) -> Option<SyntaxKind> {
        if self.current() != kind {
            return None;
        }

        self.bump_with_context(context);
        Some(kind)
    }

    /// Assert that the parser has reached the end of the input.
    pub(super) fn expect_end_of_file(&mut self) {
        debug_assert!(
            self.at(SyntaxKind::EOF),
            "parsing finished before the end of the input, at {:?}",
            self.current()
        );
    }

    /// Advances the lexer by one token, adding the current token to the end
    /// of the event buffer as a Token event.
    #[inline]
    pub(super) fn bump(&mut self) {
        self.bump_with_context(LexContext::Regular);
    }

    /// Advances the lexer by one token, adding the current token to the end
    /// of the event buffer as a Token event. The next token is lexed with
    /// the given context.
    #[inline]
    pub(super) fn bump_with_context(&mut self, context: LexContext) {
        let token = self.eat_with_context(context);
        self.push_token(token);
    }

    /// Advance the lexer by one token _without_ adding the current token to
    /// the event buffer. The token that was eaten is returned for the caller
    /// to use as needed.
    #[inline]
    pub(super) fn eat_with_context(&mut self, context: LexContext) -> SyntaxToken {
        let token = self.lexer.extract_current_token();
        self.lexer.next_token(context);
        token
    }

    #[inline]
    pub(super) fn eat(&mut self) -> SyntaxToken {
        self.eat_with_context(LexContext::Regular)
    }

    /// Re-lex the current token under a different context, e.g. to turn a
    /// `<` into a whole raw HTML construct.
    pub(super) fn relex_with_context(&mut self, context: LexContext) -> SyntaxKind {
        self.lexer.relex_with_context(context)
    }

    /// Returns true if the lexer is currently at a token of the given kind.
    #[inline]
    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn checkpoint(&self) -> ParserCheckpoint {
        ParserCheckpoint {
            lexer_checkpoint: self.lexer.checkpoint(),
            buffer_index: self.buffer_index(),
            delimiter_stack_length: self.delimiter_stack_length(),
        }
    }

    pub(super) fn rewind(&mut self, checkpoint: ParserCheckpoint) {
        self.lexer.rewind(checkpoint.lexer_checkpoint);
        self.buffer.truncate(checkpoint.buffer_index);
        self.delimiters.truncate(checkpoint.delimiter_stack_length);
    }

    pub(super) fn delimiter_stack(&mut self) -> &mut Vec<AnyDelimiter> {
        &mut self.delimiters
    }

    pub(super) fn push_delimiter(&mut self, delimiter: AnyDelimiter) {
        self.delimiters.push(delimiter);
    }

    pub(super) fn delimiter_stack_length(&self) -> usize {
        self.delimiters.len()
    }

    pub(super) fn deactivate_delimiter(&mut self, delimiter_index: usize) {
        use crate::delimiter::Delimiter;
        self.delimiters[delimiter_index].deactivate();
    }

    pub(super) fn buffer_index(&self) -> usize {
        self.buffer.len()
    }

    /// Push a plain token onto the back of the event stream. If the token is
    /// a TOMBSTONE, it is not pushed.
    pub(super) fn push_token(&mut self, token: SyntaxToken) {
        if token.kind() == SyntaxKind::TOMBSTONE {
            return;
        }

        self.push_event(Event::Token(token));
    }

    pub(super) fn push_event(&mut self, event: Event) {
        self.buffer.push(event);
    }

    /// Creates a new Start event in the buffer and returns a Marker pointing
    /// to it that can be used to resolve a node in the future.
    pub(super) fn mark(&mut self) -> Marker {
        let index = self.buffer.len();
        self.buffer.push(Event::tombstone());
        Marker::new(index)
    }

    pub(super) fn get_event_mut(&mut self, index: usize) -> Option<&mut Event> {
        self.buffer.get_mut(index)
    }
}

#[cfg(test)]
mod test {
    use super::{InlineParser, ParserOptions};

    #[test]
    fn block_start_context_controls_flanking() {
        // At a block start, a leading delimiter is preceded by virtual
        // whitespace, so `_` can open.
        let mut parser = InlineParser::new("_a_", ParserOptions::default());
        parser.parse();
        assert_eq!(
            parser.into_tree().to_string(),
            r#"(inline (emphasis "_" "a" "_"))"#
        );

        // Mid-block, the leading `_` follows a word character, making the
        // run both-flanking, which underscores refuse to open from.
        let mut parser = InlineParser::new(
            "_a_",
            ParserOptions {
                at_block_start: false,
            },
        );
        parser.parse();
        assert_eq!(parser.into_tree().to_string(), r#"(inline "_" "a" "_")"#);
    }
}

#[cfg(feature = "debug-tracing")]
impl InlineParser<'_> {
    /// Borrow the raw event buffer for inspection, before it is interpreted
    /// into a tree.
    pub fn debug_events(&self) -> crate::event::DebugEventBuffer<'_> {
        crate::event::DebugEventBuffer(self.buffer.clone(), &self.source)
    }
}
