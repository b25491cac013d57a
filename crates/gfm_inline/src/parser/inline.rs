use crate::{lexer::LexContext, syntax::SyntaxKind};

use super::{
    code_span::parse_code_span,
    delimiter::parse_delimiter_run,
    emphasis::process_emphasis,
    link::{parse_image_open, parse_link_like_close, parse_link_open},
    InlineParser,
};

/// Parse the whole input as one series of inline content.
///
/// This is the first inline phase: tokenizing, with the predictive
/// constructs (code spans, autolinks, raw HTML, link resources) resolved
/// in place. The second phase processes the delimiter stack to pair up
/// emphasis and strikethrough runs.
pub(super) fn parse_inline(p: &mut InlineParser) {
    let inline_start = p.mark();

    loop {
        let kind = p.current();
        match kind {
            SyntaxKind::EOF => break,
            // Emphasis and strikethrough delimiters are collected into runs
            // now and paired after tokenizing completes.
            SyntaxKind::STAR | SyntaxKind::UNDER | SyntaxKind::TILDE => {
                parse_delimiter_run(p, kind)
            }
            // Images
            SyntaxKind::EXCLAIM => parse_image_open(p),
            // Links
            SyntaxKind::LSQUARE => parse_link_open(p),
            SyntaxKind::RSQUARE => parse_link_like_close(p),
            // Code spans
            // These are parsed predictively, meaning they will parse ahead
            // through the rest of the input right away, trying to find a
            // matching closer. If one is found, the entire content is turned
            // into a code span, otherwise the parser is rewound and all of
            // that content is parsed again in a normal context.
            SyntaxKind::BACKTICK => parse_code_span(p, kind),
            // Autolinks and raw HTML
            // Both start with `<` and out-rank emphasis, so they get the
            // same speculative treatment. An autolink is attempted first:
            // a raw tag cannot contain `:` in its name, so the two forms
            // never overlap.
            SyntaxKind::LANGLE => {
                let checkpoint = p.checkpoint();
                parse_autolink(p)
                    .or_else(|| {
                        p.rewind(checkpoint);
                        parse_html_tag(p)
                    })
                    .or_else(|| {
                        p.rewind(checkpoint);
                        p.bump();
                        Some(())
                    })
            }

            // Anything else is effectively plain text, kept separate in the
            // event stream for clarity.
            _ => {
                p.bump();
                Some(())
            }
        };
    }

    // Second inline phase: process nestable delimiters.
    process_emphasis(p, 0..p.delimiter_stack_length());

    inline_start.complete(p, SyntaxKind::INLINE);
}

fn parse_autolink(p: &mut InlineParser) -> Option<()> {
    let autolink = p.mark();
    // Whitespace is not allowed within autolinks, so the next token either
    // lexes as a complete URI or email address, or the attempt fails.
    p.expect_with_context(SyntaxKind::LANGLE, LexContext::Autolink)?;
    let kind = match p.current() {
        SyntaxKind::ABSOLUTE_URI => SyntaxKind::URI_AUTOLINK,
        SyntaxKind::EMAIL_ADDRESS => SyntaxKind::EMAIL_AUTOLINK,
        _ => return None,
    };
    p.bump();
    p.expect(SyntaxKind::RANGLE)?;

    autolink.complete(p, kind)
}

/// Reinterpret the current `<` under the HtmlTag context, which consumes an
/// entire structurally-valid construct as a single token. No validation
/// beyond the structural recognition happens here.
fn parse_html_tag(p: &mut InlineParser) -> Option<()> {
    let marker = p.mark();
    let kind = p.relex_with_context(LexContext::HtmlTag);
    if !kind.is_html_form() {
        return None;
    }
    p.bump();
    marker.complete(p, SyntaxKind::HTML_TAG)
}
