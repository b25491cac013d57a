use std::ops::Range;

use crate::delimiter::{Delimiter, EmphasisDelimiter};
use crate::event::Event;
use crate::parser::emphasis::process_emphasis;
use crate::syntax::SyntaxKind;
use crate::token::TokenFlags;

use super::InlineParser;

/// Consume a sequence of contiguous delimiter tokens of the same kind to
/// create a new delimiter stack entry with the kind and number of tokens
/// consumed. This also collates the bounds of whether the run can start
/// and/or end emphasis.
///
/// Because delimiter runs can be split into any number of sub-runs depending
/// on which matching delimiters are encountered later on, each token of the
/// run has to be tracked separately. In addition, each token needs a marker
/// added before and after it, to allow the processor to potentially mark
/// them as actual node boundaries afterward.
///
/// Determining whether the run can open or close relies on the fact that
/// the property is transitive across the sequence of delimiter tokens: the
/// first token's preceding context and the last token's following context
/// decide for the whole run.
pub(super) fn parse_delimiter_run(p: &mut InlineParser, kind: SyntaxKind) -> Option<()> {
    let first_flags = p.current_flags();

    let index = p.buffer_index() + 1;
    let mut last_flags = first_flags;
    let mut count = 0;

    while p.current() == kind {
        last_flags = p.current_flags();
        count += 1;

        // Wrap each token with a Start and Finish event that the delimiter
        // will point to when resolving the actual node kinds afterward.
        p.push_event(Event::Start(SyntaxKind::TOMBSTONE));
        p.bump();
        p.push_event(Event::Finish(SyntaxKind::TOMBSTONE));
    }

    // Strikethrough runs longer than two tildes can never match anything.
    if kind == SyntaxKind::TILDE && count > 2 {
        return None;
    }

    let (is_left_flanking, is_right_flanking) = flanking(first_flags, last_flags);

    // Using the determined flanking and the `kind` of the run, decide if it
    // can be used to open and/or close emphasis. Underscores additionally
    // refuse intra-word emphasis: a run that could flank on both sides only
    // opens (closes) when the relevant side touches punctuation.
    let (can_open, can_close) = match kind {
        SyntaxKind::STAR | SyntaxKind::TILDE => (is_left_flanking, is_right_flanking),
        SyntaxKind::UNDER => (
            is_left_flanking && (!is_right_flanking || first_flags.has_preceding_punctuation()),
            is_right_flanking && (!is_left_flanking || last_flags.has_following_punctuation()),
        ),
        _ => (false, false),
    };

    if !can_open && !can_close {
        return None;
    }

    p.push_delimiter(EmphasisDelimiter::new(kind, count, can_open, can_close, index).into());

    Some(())
}

/// Compute the (left, right) flanking classification for a delimiter run
/// from its first token's preceding context and its last token's following
/// context.
fn flanking(first_flags: TokenFlags, last_flags: TokenFlags) -> (bool, bool) {
    // Left-flanking definition:
    // 1. Not followed by whitespace, AND
    // 2. either not followed by punctuation, OR followed by punctuation and
    //    preceded by whitespace or punctuation.
    let is_left_flanking = !last_flags.has_following_whitespace()
        && (!last_flags.has_following_punctuation()
            || first_flags.has_preceding_whitespace()
            || first_flags.has_preceding_punctuation());

    // Right-flanking is the mirror image.
    let is_right_flanking = !first_flags.has_preceding_whitespace()
        && (!first_flags.has_preceding_punctuation()
            || last_flags.has_following_whitespace()
            || last_flags.has_following_punctuation());

    (is_left_flanking, is_right_flanking)
}

/// Update the delimiter stack based on the successful closure of a link or
/// image that starts with the delimiter at `delimiter_range.start` and ends
/// at the top of the stack.
///
/// Links act as boundaries for emphasis, so the pending emphasis between
/// the opener and the end of the element is processed immediately, and
/// everything inside the range is then deactivated.
///
/// If `forbid_earlier_links` is true, all earlier still-active link openers
/// are also deactivated, which is how links are prevented from nesting.
/// Image openers are left alone, so a link inside an image description
/// still parses.
pub(crate) fn process_closed_delimiter(
    p: &mut InlineParser,
    delimiter_range: Range<usize>,
    forbid_earlier_links: bool,
) {
    // Deactivate the opener since it's been completed now.
    p.deactivate_delimiter(delimiter_range.start);

    process_emphasis(p, delimiter_range.clone());

    // The spec algorithm suggests removing consumed entries from the stack,
    // but all delimiters must stay in place here because later entries point
    // into the event buffer by index.
    if forbid_earlier_links {
        for index in 0..delimiter_range.start {
            let delimiter = &p.delimiter_stack()[index];
            if delimiter.kind() == SyntaxKind::LSQUARE && delimiter.is_active() {
                p.deactivate_delimiter(index);
            }
        }
    }

    // After processing the emphasis within the element's bounds, everything
    // inside is spent and must not pair with anything outside.
    for index in delimiter_range {
        p.deactivate_delimiter(index);
    }
}
