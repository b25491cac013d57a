use crate::delimiter::{Delimiter, LinkDelimiter};
use crate::event::{Marker, MarkerSpan};
use crate::syntax::SyntaxKind;

use super::{delimiter::process_closed_delimiter, InlineParser};

/// The four shapes a bracketed span can resolve to once its `]` is found.
/// They are attempted in this order: an inline resource binds tightest,
/// then a reference label, then the collapsed `[]`, and a bare `[text]`
/// always succeeds as a shortcut. Which label the shortcut and collapsed
/// shapes resolve to is a downstream concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LinkShape {
    Inline,
    FullReference,
    Collapsed,
    Shortcut,
}

fn shape_kind(opener_kind: SyntaxKind, shape: LinkShape) -> SyntaxKind {
    match (opener_kind, shape) {
        (SyntaxKind::LSQUARE, LinkShape::Inline) => SyntaxKind::INLINE_LINK,
        (SyntaxKind::LSQUARE, LinkShape::FullReference) => SyntaxKind::FULL_REFERENCE_LINK,
        (SyntaxKind::LSQUARE, LinkShape::Collapsed) => SyntaxKind::COLLAPSED_REFERENCE_LINK,
        (SyntaxKind::LSQUARE, LinkShape::Shortcut) => SyntaxKind::SHORTCUT_LINK,
        (SyntaxKind::EXCLAIM, LinkShape::Inline) => SyntaxKind::INLINE_IMAGE,
        (SyntaxKind::EXCLAIM, LinkShape::FullReference) => SyntaxKind::FULL_REFERENCE_IMAGE,
        (SyntaxKind::EXCLAIM, LinkShape::Collapsed) => SyntaxKind::COLLAPSED_REFERENCE_IMAGE,
        (SyntaxKind::EXCLAIM, LinkShape::Shortcut) => SyntaxKind::SHORTCUT_IMAGE,
        _ => unreachable!("link delimiters only carry LSQUARE or EXCLAIM kinds"),
    }
}

pub(super) fn parse_image_open(p: &mut InlineParser) -> Option<()> {
    let image_start = p.mark();
    p.expect(SyntaxKind::EXCLAIM)?;
    // A `!` without a following bracket is plain text; the bumped token
    // stays in the buffer either way.
    if !p.at(SyntaxKind::LSQUARE) {
        return None;
    }
    parse_link_like_open(p, SyntaxKind::EXCLAIM, image_start)
}

pub(super) fn parse_link_open(p: &mut InlineParser) -> Option<()> {
    let link_start = p.mark();
    parse_link_like_open(p, SyntaxKind::LSQUARE, link_start)
}

/// Record a pending link or image opener. Nothing is resolved until a `]`
/// is reached; the delimiter keeps the two markers that will become the
/// element node and its text content node.
fn parse_link_like_open(
    p: &mut InlineParser,
    kind: SyntaxKind,
    start_marker: Marker,
) -> Option<()> {
    p.expect(SyntaxKind::LSQUARE)?;
    let content_start = p.mark();

    let delimiter = LinkDelimiter::new(kind, start_marker.event_index(), content_start.event_index());
    p.push_delimiter(delimiter.into());

    Some(())
}

/// Resolve a `]` against the nearest pending opener. The bracket pair is
/// consumed no matter what; whether it produces a node depends on the opener
/// still being active (a completed inner link deactivates enclosing link
/// openers, which is how link texts never contain links).
pub(super) fn parse_link_like_close(p: &mut InlineParser) -> Option<()> {
    let content_end = p.mark();
    p.expect(SyntaxKind::RSQUARE)?;

    let Some(opener_index) = p
        .delimiter_stack()
        .iter()
        .rposition(|delimiter| delimiter.is_link_opener() && delimiter.count() > 0)
    else {
        // With no opener this can't be a link no matter what; the bracket
        // stays plain text.
        return None;
    };

    let opener_kind = {
        // This delimiter is matched no matter what, so consume it now so
        // that it won't be matched again in the future.
        let delimiter = &mut p.delimiter_stack()[opener_index];
        delimiter.consume_opening(1);

        if !delimiter.is_active() {
            return None;
        }

        delimiter.kind()
    };

    // Decide the shape. The inline resource is speculative: `[x](oops` has
    // a well-formed prefix but no closing parenthesis, and falls back to
    // the reference shapes just like the other failures.
    let checkpoint = p.checkpoint();
    let shape = match parse_inline_resource(p) {
        Some(()) => LinkShape::Inline,
        None => {
            p.rewind(checkpoint);
            parse_reference_suffix(p)
        }
    };

    let allow_nesting = opener_kind == SyntaxKind::EXCLAIM;
    complete_link_like(
        p,
        opener_index,
        content_end,
        shape_kind(opener_kind, shape),
        !allow_nesting,
    );

    Some(())
}

/// Try the reference-style suffixes after a completed `]`: a `[label]`
/// makes a full reference, an empty `[]` a collapsed reference, and
/// anything else leaves a shortcut.
fn parse_reference_suffix(p: &mut InlineParser) -> LinkShape {
    if p.at(SyntaxKind::LSQUARE) {
        let checkpoint = p.checkpoint();
        match parse_link_label(p) {
            Some(shape) => return shape,
            None => p.rewind(checkpoint),
        }
    }

    LinkShape::Shortcut
}

/// Parse a `[label]` suffix. Labels may not contain brackets, and must have
/// at least one non-whitespace token to count as a full reference; a bare
/// `[]` is the collapsed shape instead.
fn parse_link_label(p: &mut InlineParser) -> Option<LinkShape> {
    let label = p.mark();
    p.expect(SyntaxKind::LSQUARE)?;

    if p.expect(SyntaxKind::RSQUARE).is_some() {
        return Some(LinkShape::Collapsed);
    }

    let mut has_content = false;
    loop {
        match p.current() {
            SyntaxKind::EOF | SyntaxKind::LSQUARE => return None,
            SyntaxKind::RSQUARE => break,
            kind if is_resource_whitespace(kind) => p.bump(),
            _ => {
                has_content = true;
                p.bump();
            }
        }
    }
    p.expect(SyntaxKind::RSQUARE)?;

    if !has_content {
        return None;
    }

    label.complete(p, SyntaxKind::LINK_LABEL);
    Some(LinkShape::FullReference)
}

/// Finish a resolved link or image: bound the emphasis inside it, wrap the
/// bracketed content as text/description, and wrap the whole element.
fn complete_link_like(
    p: &mut InlineParser,
    opener_index: usize,
    content_end: Marker,
    kind: SyntaxKind,
    forbid_earlier_links: bool,
) {
    process_closed_delimiter(
        p,
        opener_index..p.delimiter_stack_length(),
        forbid_earlier_links,
    );

    let (link_cursor, content_cursor) = {
        let delimiter = p.delimiter_stack()[opener_index]
            .as_link_delimiter()
            .expect("the resolved opener must be a link delimiter");
        (delimiter.link_cursor(), delimiter.content_cursor())
    };

    let content_kind = if kind.is_image_shape() {
        SyntaxKind::IMAGE_DESCRIPTION
    } else {
        SyntaxKind::LINK_TEXT
    };

    MarkerSpan::new(content_cursor, content_end.event_index()).complete(p, content_kind);
    Marker::new(link_cursor).complete(p, kind);
}

/// Parse an inline `( destination? title? )` resource. Whitespace and line
/// breaks between the parts stay in the tree as ordinary tokens.
fn parse_inline_resource(p: &mut InlineParser) -> Option<()> {
    p.expect(SyntaxKind::LPAREN)?;
    bump_resource_whitespace(p);

    if p.expect(SyntaxKind::RPAREN).is_some() {
        // An empty resource is a valid destination-less link.
        return Some(());
    }

    parse_link_destination(p)?;

    // A title can only appear when whitespace separates it from the
    // destination.
    if is_resource_whitespace(p.current()) {
        bump_resource_whitespace(p);
        if !p.at(SyntaxKind::RPAREN) {
            parse_link_title(p)?;
            bump_resource_whitespace(p);
        }
    }

    p.expect(SyntaxKind::RPAREN)?;
    Some(())
}

fn is_resource_whitespace(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::WHITESPACE || kind.is_line_break()
}

fn bump_resource_whitespace(p: &mut InlineParser) {
    while is_resource_whitespace(p.current()) {
        p.bump();
    }
}

/// Link destinations come in two flavors: angle-bracketed with no line
/// breaks, and bare with balanced parentheses and no whitespace.
fn parse_link_destination(p: &mut InlineParser) -> Option<()> {
    let marker = p.mark();

    if p.expect(SyntaxKind::LANGLE).is_some() {
        loop {
            match p.current() {
                SyntaxKind::RANGLE => break,
                // No line breaks and no stray `<` inside the brackets.
                SyntaxKind::EOF | SyntaxKind::LANGLE => return None,
                kind if kind.is_line_break() => return None,
                _ => p.bump(),
            }
        }
        p.expect(SyntaxKind::RANGLE)?;
        return marker.complete(p, SyntaxKind::LINK_DESTINATION);
    }

    let mut balance = 1;
    let mut token_count = 0;
    loop {
        match p.current() {
            SyntaxKind::EOF | SyntaxKind::WHITESPACE => break,
            kind if kind.is_line_break() => break,
            SyntaxKind::RPAREN if balance == 1 => break,
            SyntaxKind::RPAREN => balance -= 1,
            SyntaxKind::LPAREN => balance += 1,
            _ => {}
        }
        p.bump();
        token_count += 1;
    }

    if token_count == 0 {
        return None;
    }

    marker.complete(p, SyntaxKind::LINK_DESTINATION)
}

/// Titles are one of three delimited forms: `"..."`, `'...'`, or `(...)`.
/// A title may span lines, but a second line break with nothing but
/// whitespace between them would be a blank line, which kills the branch.
fn parse_link_title(p: &mut InlineParser) -> Option<()> {
    let marker = p.mark();

    let end_kind = match p.current() {
        SyntaxKind::DOUBLE_QUOTE => SyntaxKind::DOUBLE_QUOTE,
        SyntaxKind::QUOTE => SyntaxKind::QUOTE,
        SyntaxKind::LPAREN => SyntaxKind::RPAREN,
        _ => return None,
    };
    let forbid_open_paren = p.at(SyntaxKind::LPAREN);
    p.bump();

    let mut last_was_line_break = false;
    loop {
        match p.current() {
            SyntaxKind::EOF => return None,
            kind if kind == end_kind => break,
            // Parenthesized titles may not contain an unescaped `(`.
            SyntaxKind::LPAREN if forbid_open_paren => return None,
            kind if kind.is_line_break() => {
                if last_was_line_break {
                    return None;
                }
                last_was_line_break = true;
                p.bump();
            }
            SyntaxKind::WHITESPACE => p.bump(),
            _ => {
                last_was_line_break = false;
                p.bump();
            }
        }
    }
    p.expect(end_kind)?;

    marker.complete(p, SyntaxKind::LINK_TITLE)
}
