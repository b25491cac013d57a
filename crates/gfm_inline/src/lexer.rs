use memchr::{memchr, memmem};

use crate::byte_lookup::{
    char_length_from_byte, ends_word, is_class_whitespace, is_inline_whitespace,
};
use crate::html_entities::get_html_entity;

use super::{
    syntax::SyntaxKind,
    token::{SyntaxToken, TokenFlags},
};

/// A dedicated struct for storing ephemeral state that influences the lexer's
/// decision making. The preceding-character class stored here is what the
/// emphasis flanking rules consume; the following-character class is read
/// directly with one byte of lookahead.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct LexerState {
    pub last_was_whitespace: bool,
    pub last_was_punctuation: bool,
}

#[derive(Clone, Copy, Debug)]
pub(super) struct LexerCheckpoint {
    position: usize,
    last_position: usize,
    current_kind: SyntaxKind,
    current_flags: TokenFlags,
    state: LexerState,
}

#[derive(Clone, Copy, Debug, Default)]
pub enum LexContext {
    /// Normal lexing, where all tokens are treated as they are intuitively,
    /// with no context-sensitive components.
    #[default]
    Regular,
    /// Code span content is verbatim: backslashes and ampersands lose their
    /// meaning, so an escaped-looking backtick can still close the span.
    CodeSpan,
    /// Autolinks only allow email address or URI tokens.
    Autolink,
    /// Raw HTML constructs are consumed wholesale as a single token spanning
    /// `<` through `>`, or fall back to a plain `<` when no form matches.
    HtmlTag,
}

pub struct Lexer<'source> {
    text: &'source str,
    current_kind: SyntaxKind,
    /// Current byte offset into the text.
    position: usize,
    last_position: usize,
    current_flags: TokenFlags,
    state: LexerState,
    /// Whether position 0 counts as being preceded by whitespace, from the
    /// caller's "at start of block" input flag.
    at_block_start: bool,
}

impl<'source> Lexer<'source> {
    pub fn new(text: &'source str, at_block_start: bool) -> Self {
        Self {
            text,
            current_kind: SyntaxKind::TOMBSTONE,
            position: 0,
            last_position: 0,
            current_flags: TokenFlags::default(),
            state: LexerState {
                last_was_whitespace: at_block_start,
                last_was_punctuation: false,
            },
            at_block_start,
        }
    }

    /// Rewind the lexer to the start of the currently-lexed token and
    /// reinterpret it with the given context.
    pub fn relex_with_context(&mut self, context: LexContext) -> SyntaxKind {
        self.position = self.last_position;
        self.get_state_from_previous_character();
        self.current_flags = TokenFlags::default();
        self.next_token(context)
    }

    /// Lex the next token from the source text. If the end of the input has
    /// been reached, EOF will be returned, and this will be true for every
    /// call to this method after the first time EOF is returned.
    pub fn next_token(&mut self, context: LexContext) -> SyntaxKind {
        if self.is_eof() {
            self.current_kind = SyntaxKind::EOF;
            return self.current_kind;
        }

        self.current_kind = match context {
            LexContext::Regular => self.next_regular_token(),
            LexContext::CodeSpan => self.next_code_span_token(),
            LexContext::Autolink => self.next_autolink_token(),
            LexContext::HtmlTag => self.next_html_token(),
        };

        self.current_kind
    }

    fn next_regular_token(&mut self) -> SyntaxKind {
        match self.current() {
            b'\r' | b'\n' => self.consume_line_ending(),
            b'\\' => self.consume_escaped(),
            b' ' | b'\t' => self.consume_whitespace(),

            b'`' => self.consume_byte(SyntaxKind::BACKTICK),
            b'[' => self.consume_byte(SyntaxKind::LSQUARE),
            b']' => self.consume_byte(SyntaxKind::RSQUARE),
            b'(' => self.consume_byte(SyntaxKind::LPAREN),
            b')' => self.consume_byte(SyntaxKind::RPAREN),
            b'<' => self.consume_byte(SyntaxKind::LANGLE),
            b'>' => self.consume_byte(SyntaxKind::RANGLE),
            b'!' => self.consume_byte(SyntaxKind::EXCLAIM),
            b'\'' => self.consume_byte(SyntaxKind::QUOTE),
            b'"' => self.consume_byte(SyntaxKind::DOUBLE_QUOTE),
            b'&' => self.consume_char_reference(),
            b'*' | b'_' | b'~' => self.consume_delimiter(),
            b if b.is_ascii_digit() => self.consume_digits(),
            b if b.is_ascii_punctuation() => self.consume_byte(SyntaxKind::PUNCT),
            _ => self.consume_word(),
        }
    }

    /// Code span content is uninterpreted: no escapes, no references, no
    /// delimiters. Only backticks stay significant so a closer can be found.
    fn next_code_span_token(&mut self) -> SyntaxKind {
        match self.current() {
            b'\r' | b'\n' => self.consume_line_ending(),
            b' ' | b'\t' => {
                while !self.is_eof() && is_inline_whitespace(self.current()) {
                    self.advance();
                }
                SyntaxKind::WHITESPACE
            }
            b'`' => self.consume_byte(SyntaxKind::BACKTICK),
            b if b.is_ascii_digit() => self.consume_digits(),
            b if b.is_ascii_punctuation() => self.consume_byte(SyntaxKind::PUNCT),
            _ => self.consume_word(),
        }
    }

    //#region Whitespace and text

    /// Consume a single line ending, which can either be a newline, a
    /// carriage return, or a carriage return followed by a newline.
    fn consume_line_ending(&mut self) -> SyntaxKind {
        self.advance_if(b'\r');
        self.advance_if(b'\n');

        SyntaxKind::SOFT_LINE_BREAK
    }

    /// Consume a run of inline whitespace. A run of two or more that ends at
    /// a line ending merges with it into a single hard break token.
    fn consume_whitespace(&mut self) -> SyntaxKind {
        while !self.is_eof() && is_inline_whitespace(self.current()) {
            self.advance();
        }

        if self.position - self.last_position >= 2
            && !self.is_eof()
            && matches!(self.current(), b'\r' | b'\n')
        {
            self.consume_line_ending();
            return SyntaxKind::HARD_LINE_BREAK;
        }

        SyntaxKind::WHITESPACE
    }

    /// Consume an escaped character, either returning BACKSLASH_ESCAPE for
    /// valid escape sequences, a hard break for a backslash at the end of a
    /// line, or a literal WORD backslash for anything else.
    fn consume_escaped(&mut self) -> SyntaxKind {
        self.advance();

        if self.is_eof() {
            return SyntaxKind::WORD;
        }

        match self.current() {
            // "Any ASCII punctuation character may be backslash-escaped"
            b if b.is_ascii_punctuation() => self.consume_byte(SyntaxKind::BACKSLASH_ESCAPE),
            // "A backslash at the end of the line is a hard line break"
            b'\r' | b'\n' => {
                self.consume_line_ending();
                SyntaxKind::HARD_LINE_BREAK
            }
            _ => SyntaxKind::WORD,
        }
    }

    /// Consume a run of word bytes, stopping at any punctuation, digit, or
    /// whitespace byte. Non-ASCII bytes are word bytes.
    fn consume_word(&mut self) -> SyntaxKind {
        while !self.is_eof() && !ends_word(self.current()) {
            self.advance();
        }

        SyntaxKind::WORD
    }

    fn consume_digits(&mut self) -> SyntaxKind {
        while !self.is_eof() && self.current().is_ascii_digit() {
            self.advance();
        }

        SyntaxKind::DIGITS
    }
    //#endregion

    //#region Delimiters

    /// Consume any single delimiter character (one of `*`, `_`, or `~`). The
    /// surrounding context is also recorded on the token so the parser can
    /// decide whether a run of these is a flanking delimiter.
    ///
    /// The parser is responsible for merging these tokens into delimiter
    /// runs and collating the bounds for whether the run can open and/or
    /// close emphasis.
    fn consume_delimiter(&mut self) -> SyntaxKind {
        let kind = match self.current() {
            b'*' => SyntaxKind::STAR,
            b'_' => SyntaxKind::UNDER,
            b'~' => SyntaxKind::TILDE,
            value => unreachable!("Consumed a delimiter of a non-delimiter byte {}", value),
        };

        // The end of the input counts as whitespace.
        let next = self.peek();
        let next_is_whitespace = next.map_or(true, is_class_whitespace);
        let next_is_punctuation = next.is_some_and(|byte| byte.is_ascii_punctuation());

        let mut flags = TokenFlags::default();
        if self.state.last_was_whitespace {
            flags.insert(TokenFlags::HAS_PRECEDING_WHITESPACE);
        }
        if self.state.last_was_punctuation {
            flags.insert(TokenFlags::HAS_PRECEDING_PUNCTUATION);
        }
        if next_is_whitespace {
            flags.insert(TokenFlags::HAS_FOLLOWING_WHITESPACE);
        }
        if next_is_punctuation {
            flags.insert(TokenFlags::HAS_FOLLOWING_PUNCTUATION);
        }

        self.advance();
        self.current_flags.insert(flags);

        kind
    }
    //#endregion

    //#region Character references

    /// Attempts to consume the input as a known html entity or a numeric
    /// character reference (either decimal or hexadecimal). Anything else
    /// leaves a plain AMPER token.
    fn consume_char_reference(&mut self) -> SyntaxKind {
        // Consume the leading ampersand.
        self.advance();

        // Checkpoint just after the ampersand to be able to rewind if the
        // following characters don't yield a reference.
        let checkpoint = self.checkpoint();

        let is_numeric = self.advance_if(b'#');
        let is_hexadecimal = is_numeric && (self.advance_if(b'X') || self.advance_if(b'x'));

        if is_hexadecimal {
            self.consume_numeric_char_reference(checkpoint, 6, |byte| byte.is_ascii_hexdigit())
        } else if is_numeric {
            self.consume_numeric_char_reference(checkpoint, 7, |byte| byte.is_ascii_digit())
        } else {
            self.consume_entity_reference(checkpoint)
        }
    }

    /// Consumes the remainder of a numeric character reference through the
    /// ending semicolon. If the reference is invalid, this method will rewind
    /// the lexer to `checkpoint` and return AMPER for the kind instead.
    fn consume_numeric_char_reference(
        &mut self,
        checkpoint: LexerCheckpoint,
        max_digits: usize,
        is_digit: fn(u8) -> bool,
    ) -> SyntaxKind {
        let mut length = 0;
        while !self.is_eof() {
            let current = self.current();
            if current == b';' && length > 0 {
                self.advance();
                return SyntaxKind::NUMERIC_CHAR_REF;
            }

            if !is_digit(current) || length >= max_digits {
                break;
            }

            self.advance();
            length += 1;
        }

        self.rewind(checkpoint);
        SyntaxKind::AMPER
    }

    /// Consumes the remainder of an entity reference through the ending
    /// semicolon, checking the name against the embedded HTML5 entity table.
    /// If the reference is invalid or unknown, this method will rewind the
    /// lexer to `checkpoint` and return AMPER for the kind instead.
    fn consume_entity_reference(&mut self, checkpoint: LexerCheckpoint) -> SyntaxKind {
        let name_start = self.position;
        while !self.is_eof() && self.current().is_ascii_alphanumeric() {
            self.advance();
        }

        let name = &self.text[name_start..self.position];
        if !self.is_eof()
            && self.current() == b';'
            && !name.is_empty()
            && get_html_entity(name).is_some()
        {
            self.advance();
            return SyntaxKind::ENTITY_REFERENCE;
        }

        self.rewind(checkpoint);
        SyntaxKind::AMPER
    }
    //#endregion

    //#region Autolinks

    /// Try to consume a single ABSOLUTE_URI or EMAIL_ADDRESS token. If the
    /// input matches neither, it is lexed as a regular token instead and the
    /// parser's autolink attempt will fail.
    fn next_autolink_token(&mut self) -> SyntaxKind {
        let checkpoint = self.checkpoint();
        self.maybe_consume_absolute_uri()
            .or_else(|| {
                self.rewind(checkpoint);
                self.maybe_consume_email_address()
            })
            .unwrap_or_else(|| {
                self.rewind(checkpoint);
                self.next_regular_token()
            })
    }

    fn maybe_consume_absolute_uri(&mut self) -> Option<SyntaxKind> {
        // First, collect the scheme: "any sequence of 2–32 characters
        // beginning with an ASCII letter and followed by any combination of
        // ASCII letters, digits, or the symbols plus, period, or hyphen".
        if !self.current().is_ascii_alphabetic() {
            return None;
        }

        let mut scheme_length = 0;
        while scheme_length < 32 && !self.is_eof() {
            match self.current() {
                b'+' | b'.' | b'-' => scheme_length += 1,
                byte if byte.is_ascii_alphanumeric() => scheme_length += 1,
                _ => break,
            }
            self.advance();
        }
        if scheme_length < 2 {
            return None;
        }

        // The scheme must be followed by a colon.
        if !self.advance_if(b':') {
            return None;
        }

        // Then the URI continues with anything other than control
        // characters, spaces, or angle brackets.
        while !self.is_eof() {
            match self.current() {
                byte if byte.is_ascii_control() => break,
                b' ' | b'<' | b'>' => break,
                _ => self.advance(),
            }
        }

        Some(SyntaxKind::ABSOLUTE_URI)
    }

    fn maybe_consume_email_address(&mut self) -> Option<SyntaxKind> {
        // This implementation is an unrolling of the non-normative HTML5
        // email regex:
        // [a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*
        while !self.is_eof() {
            match self.current() {
                byte if byte.is_ascii_alphanumeric() => self.advance(),
                b'.' | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'/' | b'='
                | b'?' | b'^' | b'_' | b'`' | b'{' | b'|' | b'}' | b'~' | b'-' => self.advance(),
                // @ breaks the loop to the domain section.
                b'@' => break,
                _ => return None,
            }
        }

        // Storage-less way of checking that the local part was not empty.
        if self.position == self.last_position {
            return None;
        }

        if !self.advance_if(b'@') {
            return None;
        }

        // After the @ are one or more dot-separated domain parts. Each is up
        // to 62 alphanumeric characters with interior hyphens allowed, and
        // may not end with a hyphen.
        loop {
            if self.is_eof() || !self.current().is_ascii_alphanumeric() {
                return None;
            }
            self.advance();

            let mut last_was_dash = false;
            for _ in 0..61 {
                if self.is_eof() {
                    break;
                }

                last_was_dash = match self.current() {
                    byte if byte.is_ascii_alphanumeric() => {
                        self.advance();
                        false
                    }
                    b'-' => {
                        self.advance();
                        true
                    }
                    _ => break,
                };
            }

            if last_was_dash {
                return None;
            }

            // Domain parts chain with `.`s. Putting this at the end ensures
            // that at least one part is matched, and that every following
            // part has at least one character.
            if !self.advance_if(b'.') {
                break;
            }
        }

        Some(SyntaxKind::EMAIL_ADDRESS)
    }
    //#endregion

    //#region Raw HTML

    /// Consume an entire raw HTML construct from `<` through `>` as a single
    /// token, returning a form-specific kind. When no form matches, the `<`
    /// is consumed alone as a plain LANGLE.
    fn next_html_token(&mut self) -> SyntaxKind {
        debug_assert!(self.current() == b'<');
        let checkpoint = self.checkpoint();
        self.advance();

        let form = match self.current_byte() {
            Some(b'!') => self.maybe_consume_html_exclaim(),
            Some(b'?') => self.maybe_consume_processing_instruction(),
            Some(b'/') => self.maybe_consume_closing_tag(),
            Some(byte) if byte.is_ascii_alphabetic() => self.maybe_consume_open_tag(),
            _ => None,
        };

        match form {
            Some(kind) => kind,
            None => {
                self.rewind(checkpoint);
                self.consume_byte(SyntaxKind::LANGLE)
            }
        }
    }

    /// `<!` begins a comment, a CDATA section, or a declaration.
    fn maybe_consume_html_exclaim(&mut self) -> Option<SyntaxKind> {
        self.advance();

        if self.rest().starts_with(b"--") {
            self.advance_n_bytes(2);
            // Comment text may not contain `--` except as part of the
            // closing `-->`, which also rules out endings like `--->`.
            let close = memmem::find(self.rest(), b"--")?;
            if self.rest().get(close + 2) != Some(&b'>') {
                return None;
            }
            self.advance_n_bytes(close + 3);
            return Some(SyntaxKind::HTML_COMMENT);
        }

        if self.rest().starts_with(b"[CDATA[") {
            self.advance_n_bytes(7);
            let close = memmem::find(self.rest(), b"]]>")?;
            self.advance_n_bytes(close + 3);
            return Some(SyntaxKind::HTML_CDATA);
        }

        // Declarations are `<!`, an ASCII letter, then anything up to `>`.
        if self.current_byte()?.is_ascii_alphabetic() {
            let close = memchr(b'>', self.rest())?;
            self.advance_n_bytes(close + 1);
            return Some(SyntaxKind::HTML_DECLARATION);
        }

        None
    }

    fn maybe_consume_processing_instruction(&mut self) -> Option<SyntaxKind> {
        self.advance();
        let close = memmem::find(self.rest(), b"?>")?;
        self.advance_n_bytes(close + 2);
        Some(SyntaxKind::HTML_PROCESSING_INSTRUCTION)
    }

    fn maybe_consume_closing_tag(&mut self) -> Option<SyntaxKind> {
        self.advance();
        self.consume_html_tag_name()?;
        self.skip_html_whitespace();
        self.advance_if(b'>')
            .then_some(SyntaxKind::HTML_CLOSING_TAG)
    }

    fn maybe_consume_open_tag(&mut self) -> Option<SyntaxKind> {
        self.consume_html_tag_name()?;

        loop {
            let whitespace = self.skip_html_whitespace();
            match self.current_byte()? {
                b'>' => {
                    self.advance();
                    return Some(SyntaxKind::HTML_OPEN_TAG);
                }
                b'/' => {
                    self.advance();
                    return self.advance_if(b'>').then_some(SyntaxKind::HTML_OPEN_TAG);
                }
                // Attributes must be separated from what precedes them.
                _ if whitespace == 0 => return None,
                _ => self.consume_html_attribute()?,
            }
        }
    }

    /// Tag names are an ASCII letter followed by letters, digits, or `-`.
    fn consume_html_tag_name(&mut self) -> Option<()> {
        if !self.current_byte()?.is_ascii_alphabetic() {
            return None;
        }
        self.advance();

        while matches!(self.current_byte(), Some(byte) if byte.is_ascii_alphanumeric() || byte == b'-')
        {
            self.advance();
        }

        Some(())
    }

    /// An attribute name with an optional `= value`, where the value is
    /// unquoted, single-quoted, or double-quoted.
    fn consume_html_attribute(&mut self) -> Option<()> {
        match self.current_byte()? {
            b'_' | b':' => self.advance(),
            byte if byte.is_ascii_alphabetic() => self.advance(),
            _ => return None,
        }
        while matches!(
            self.current_byte(),
            Some(byte) if byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'.' | b':' | b'-')
        ) {
            self.advance();
        }

        let checkpoint = self.checkpoint();
        self.skip_html_whitespace();
        if !self.advance_if(b'=') {
            // A bare attribute; whatever whitespace was skipped belongs to
            // the next attribute or the tag end.
            self.rewind(checkpoint);
            return Some(());
        }
        self.skip_html_whitespace();
        self.consume_html_attribute_value()
    }

    fn consume_html_attribute_value(&mut self) -> Option<()> {
        match self.current_byte()? {
            quote @ (b'"' | b'\'') => {
                self.advance();
                let close = memchr(quote, self.rest())?;
                self.advance_n_bytes(close + 1);
                Some(())
            }
            _ => {
                let mut length = 0;
                while matches!(
                    self.current_byte(),
                    Some(byte) if !is_class_whitespace(byte)
                        && !matches!(byte, b'"' | b'\'' | b'=' | b'<' | b'>' | b'`')
                ) {
                    self.advance();
                    length += 1;
                }
                (length > 0).then_some(())
            }
        }
    }

    /// Skip whitespace between parts of an HTML construct, returning how
    /// many bytes were skipped. Single newlines are allowed here.
    fn skip_html_whitespace(&mut self) -> usize {
        let start = self.position;
        while !self.is_eof() && is_class_whitespace(self.current()) {
            self.advance();
        }
        self.position - start
    }
    //#endregion

    //#region Internal API (current, advance, etc.)

    /// Advance one position through the source and return the given `kind`.
    /// This method does no work on its own and is simply a syntax convenience
    /// to be able to consume the end of a token in one expression.
    fn consume_byte(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.advance();
        kind
    }

    pub fn current_kind(&self) -> SyntaxKind {
        self.current_kind
    }

    /// Returns the flags that are applied for the current token.
    pub fn current_flags(&self) -> TokenFlags {
        self.current_flags
    }

    /// Returns the first byte of the character at the current position.
    fn current(&self) -> u8 {
        debug_assert!(
            self.text.is_char_boundary(self.position),
            "current lexer position is not a utf8 char boundary"
        );
        self.text.as_bytes()[self.position]
    }

    /// Returns the byte at the current position, or None at the end of the
    /// input.
    fn current_byte(&self) -> Option<u8> {
        self.text.as_bytes().get(self.position).copied()
    }

    /// Returns the byte immediately after the current position.
    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.position + 1).copied()
    }

    fn rest(&self) -> &[u8] {
        &self.text.as_bytes()[self.position..]
    }

    /// Returns true if the current byte position is at or past the end of
    /// the source text.
    fn is_eof(&self) -> bool {
        self.position >= self.text.len()
    }

    pub(super) fn checkpoint(&self) -> LexerCheckpoint {
        LexerCheckpoint {
            position: self.position,
            last_position: self.last_position,
            current_kind: self.current_kind,
            current_flags: self.current_flags,
            state: self.state,
        }
    }

    pub(super) fn rewind(&mut self, checkpoint: LexerCheckpoint) {
        self.position = checkpoint.position;
        self.last_position = checkpoint.last_position;
        self.current_kind = checkpoint.current_kind;
        self.current_flags = checkpoint.current_flags;
        self.state = checkpoint.state;
    }

    /// Calculate properties for the LexerState by examining backwards in the
    /// source. Only the last byte matters: the final byte of a multi-byte
    /// character is neither ASCII punctuation nor whitespace, which matches
    /// the grammar's treatment of non-ASCII bytes as word characters.
    fn get_state_from_previous_character(&mut self) {
        if self.position == 0 {
            self.state.last_was_whitespace = self.at_block_start;
            self.state.last_was_punctuation = false;
            return;
        }

        let last_byte = self.text.as_bytes()[self.position - 1];
        self.state.last_was_punctuation = last_byte.is_ascii_punctuation();
        self.state.last_was_whitespace = is_class_whitespace(last_byte);
    }

    /// Advance the lexer by one unicode character.
    fn advance(&mut self) {
        self.position += char_length_from_byte(self.current());
    }

    /// Advance n bytes in the source text. A shortcut for calling `advance`
    /// multiple times when the exact number of bytes involved is known ahead
    /// of time.
    #[inline(always)]
    fn advance_n_bytes(&mut self, n: usize) {
        self.position += n;
    }

    /// Advance the lexer by one byte as long as the current byte matches the
    /// provided one. Returns true if the byte matched and the lexer
    /// advanced, otherwise returns false.
    fn advance_if(&mut self, byte: u8) -> bool {
        if !self.is_eof() && self.current() == byte {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns a range representing the byte span of the current token.
    pub fn current_byte_span(&self) -> std::ops::Range<usize> {
        self.last_position..self.position
    }

    /// Creates a new token of the current `kind` from the current positions
    /// in the source text.
    ///
    /// After consuming, the state of the lexer is reset and advanced to the
    /// next position in the source.
    pub fn extract_current_token(&mut self) -> SyntaxToken {
        self.get_state_from_previous_character();
        let token = SyntaxToken::new(self.current_kind, self.current_byte_span())
            .with_flags(self.current_flags);
        self.reset_state();
        token
    }

    fn reset_state(&mut self) {
        self.last_position = self.position;
        self.current_flags = TokenFlags::default();
        self.current_kind = SyntaxKind::TOMBSTONE;
    }
    //#endregion
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        let mut lexer = Lexer::new(input, true);
        let mut kinds = vec![];
        loop {
            let kind = lexer.next_token(LexContext::Regular);
            if kind == SyntaxKind::EOF {
                break;
            }
            kinds.push(kind);
            lexer.extract_current_token();
        }
        kinds
    }

    #[test]
    fn words_digits_and_punctuation_split() {
        assert_eq!(
            kinds("abc123,def"),
            vec![
                SyntaxKind::WORD,
                SyntaxKind::DIGITS,
                SyntaxKind::PUNCT,
                SyntaxKind::WORD,
            ]
        );
    }

    #[test]
    fn line_breaks() {
        assert_eq!(
            kinds("a\nb"),
            vec![SyntaxKind::WORD, SyntaxKind::SOFT_LINE_BREAK, SyntaxKind::WORD]
        );
        assert_eq!(
            kinds("a  \nb"),
            vec![SyntaxKind::WORD, SyntaxKind::HARD_LINE_BREAK, SyntaxKind::WORD]
        );
        assert_eq!(
            kinds("a\\\nb"),
            vec![SyntaxKind::WORD, SyntaxKind::HARD_LINE_BREAK, SyntaxKind::WORD]
        );
        assert_eq!(
            kinds("a \nb"),
            vec![
                SyntaxKind::WORD,
                SyntaxKind::WHITESPACE,
                SyntaxKind::SOFT_LINE_BREAK,
                SyntaxKind::WORD,
            ]
        );
    }

    #[test]
    fn escapes() {
        assert_eq!(kinds("\\*"), vec![SyntaxKind::BACKSLASH_ESCAPE]);
        // A backslash before a non-punctuation byte stays literal.
        assert_eq!(kinds("\\a"), vec![SyntaxKind::WORD, SyntaxKind::WORD]);
    }

    #[test]
    fn character_references() {
        assert_eq!(kinds("&amp;"), vec![SyntaxKind::ENTITY_REFERENCE]);
        assert_eq!(kinds("&#35;"), vec![SyntaxKind::NUMERIC_CHAR_REF]);
        assert_eq!(kinds("&#xCAB;"), vec![SyntaxKind::NUMERIC_CHAR_REF]);
        // Unknown names degrade to a plain ampersand.
        assert_eq!(
            kinds("&zzznope;"),
            vec![SyntaxKind::AMPER, SyntaxKind::WORD, SyntaxKind::PUNCT]
        );
        // Too many digits.
        assert_eq!(
            kinds("&#12345678;"),
            vec![SyntaxKind::AMPER, SyntaxKind::PUNCT, SyntaxKind::DIGITS, SyntaxKind::PUNCT]
        );
    }

    #[test]
    fn delimiter_flags() {
        let mut lexer = Lexer::new("a*b", true);
        lexer.next_token(LexContext::Regular);
        lexer.extract_current_token();
        lexer.next_token(LexContext::Regular);
        let star = lexer.extract_current_token();
        assert_eq!(star.kind(), SyntaxKind::STAR);
        assert!(!star.flags().has_preceding_whitespace());
        assert!(!star.flags().has_following_whitespace());
        assert!(!star.flags().has_preceding_punctuation());
        assert!(!star.flags().has_following_punctuation());
    }

    #[test]
    fn html_forms() {
        let mut lexer = Lexer::new("<a href=\"x\">", true);
        assert_eq!(lexer.next_token(LexContext::HtmlTag), SyntaxKind::HTML_OPEN_TAG);
        assert_eq!(lexer.current_byte_span(), 0..12);

        let mut lexer = Lexer::new("<!-- ok -->", true);
        assert_eq!(lexer.next_token(LexContext::HtmlTag), SyntaxKind::HTML_COMMENT);

        let mut lexer = Lexer::new("<!-- not -- ok -->", true);
        assert_eq!(lexer.next_token(LexContext::HtmlTag), SyntaxKind::LANGLE);

        let mut lexer = Lexer::new("<?php echo ?>", true);
        assert_eq!(
            lexer.next_token(LexContext::HtmlTag),
            SyntaxKind::HTML_PROCESSING_INSTRUCTION
        );

        let mut lexer = Lexer::new("<![CDATA[>&<]]>", true);
        assert_eq!(lexer.next_token(LexContext::HtmlTag), SyntaxKind::HTML_CDATA);

        let mut lexer = Lexer::new("<!DOCTYPE html>", true);
        assert_eq!(lexer.next_token(LexContext::HtmlTag), SyntaxKind::HTML_DECLARATION);

        let mut lexer = Lexer::new("</div >", true);
        assert_eq!(lexer.next_token(LexContext::HtmlTag), SyntaxKind::HTML_CLOSING_TAG);

        let mut lexer = Lexer::new("<1bad>", true);
        assert_eq!(lexer.next_token(LexContext::HtmlTag), SyntaxKind::LANGLE);
    }

    #[test]
    fn autolink_tokens() {
        let mut lexer = Lexer::new("http://example.com>", true);
        assert_eq!(lexer.next_token(LexContext::Autolink), SyntaxKind::ABSOLUTE_URI);
        assert_eq!(lexer.current_byte_span(), 0..18);

        let mut lexer = Lexer::new("user@example.com>", true);
        assert_eq!(lexer.next_token(LexContext::Autolink), SyntaxKind::EMAIL_ADDRESS);

        // A one-letter scheme is not a valid URI.
        let mut lexer = Lexer::new("x:y>", true);
        assert_eq!(lexer.next_token(LexContext::Autolink), SyntaxKind::WORD);
    }
}
