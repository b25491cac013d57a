use crate::lexer::LexContext;
use crate::syntax::SyntaxKind;

use super::InlineParser;

/// Prospectively parse ahead through the input, collecting tokens until a
/// closing backtick run of exactly the opener's length is found. If there is
/// no match, the parser is rewound to just after the opener, which then
/// stays as literal text.
///
/// Content tokens are lexed under the CodeSpan context, where escapes and
/// character references have no meaning. That context switch is also why a
/// backslash directly before a closing run does not keep the span open: the
/// backslash is literal content and the backticks after it still close.
pub(super) fn parse_code_span(p: &mut InlineParser, kind: SyntaxKind) -> Option<()> {
    let marker = p.mark();

    let open_delimiter_start = p.mark();
    let mut open_count = 0;
    while p.current() == kind {
        p.bump_with_context(LexContext::CodeSpan);
        open_count += 1;
    }
    let open_delimiter_end = p.mark();

    // Parsing the content of the code span is predictive, meaning we don't
    // know if it will actually become a code span until we've reached a
    // closer. If a closer is never found, then parsing must be rewound back
    // to the start to be able to re-interpret the content as real Markdown
    // syntax rather than plain text.
    let checkpoint = p.checkpoint();

    let did_complete = loop {
        match p.current() {
            SyntaxKind::EOF => break false,
            // If another backtick run is found, try to match it against the
            // opener, otherwise just continue consuming.
            SyntaxKind::BACKTICK => {
                let close_delimiter = p.mark();
                let mut close_count = 0;
                while p.current() == kind {
                    p.bump_with_context(LexContext::CodeSpan);
                    close_count += 1;
                }
                // A closer must have exactly the opener's length. The run is
                // maximal, so a longer or shorter run is just content.
                if close_count == open_count {
                    open_delimiter_start
                        .span_to(open_delimiter_end)
                        .complete(p, SyntaxKind::CODE_SPAN_DELIMITER);
                    close_delimiter.complete(p, SyntaxKind::CODE_SPAN_DELIMITER);
                    marker.complete(p, SyntaxKind::CODE_SPAN);
                    break true;
                }
            }
            _ => p.bump_with_context(LexContext::CodeSpan),
        }
    };

    // The token after the span's end was lexed under the CodeSpan context;
    // whichever way the parse went, the following content is regular
    // Markdown again and the current token must be reinterpreted.
    if !did_complete {
        p.rewind(checkpoint);
        p.relex_with_context(LexContext::Regular);
        return None;
    }

    p.relex_with_context(LexContext::Regular);
    Some(())
}
