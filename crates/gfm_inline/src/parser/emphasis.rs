use std::ops::Range;

use crate::delimiter::Delimiter;
use crate::event::MarkerSpan;
use crate::syntax::SyntaxKind;

use super::InlineParser;

/// Process the delimiter stack entries within the given `range`, matching
/// emphasis and strikethrough as much as possible. This is the CommonMark
/// `process_emphasis` procedure: walk closers left to right, and for each
/// one search backwards for the nearest compatible opener.
pub(super) fn process_emphasis(p: &mut InlineParser, range: Range<usize>) {
    for closer_index in range.clone() {
        let closer = &p.delimiter_stack()[closer_index];
        if !closer.can_close() || !closer.is_active() {
            continue;
        }
        let closer_kind = closer.kind();

        for opener_index in (range.start..closer_index).rev() {
            let opener = &p.delimiter_stack()[opener_index];
            if !opener.is_active() || !opener.can_open() || opener.kind() != closer_kind {
                continue;
            }

            let match_result = if closer_kind == SyntaxKind::TILDE {
                match_strikethrough(p, opener_index, closer_index)
            } else {
                match_emphasis(p, opener_index, closer_index)
            };

            match match_result {
                EmphasisMatchResult::ConsumedCloser | EmphasisMatchResult::ConsumedBoth => break,
                _ => continue,
            }
        }
    }
}

pub(super) enum EmphasisMatchResult {
    NoMatch,
    ConsumedCloser,
    ConsumedOpener,
    ConsumedBoth,
}

/// Given two indices in the delimiter stack that are known to have the same
/// kind and are _able_ to match, check whether the delimiters are _allowed_
/// to be consumed, then consume the maximum number of characters from each,
/// resolving the reserved events in their place until one run is fully
/// consumed.
pub(super) fn match_emphasis(
    p: &mut InlineParser,
    opener_index: usize,
    closer_index: usize,
) -> EmphasisMatchResult {
    // Determine how many characters should be consumed by first checking
    // the rules for matching, then taking the smaller of the two run
    // lengths if they're allowed to match.
    let mut to_consume = {
        let delimiter_stack = &p.delimiter_stack();
        let opener = &delimiter_stack[opener_index];
        let closer = &delimiter_stack[closer_index];

        let total_length = opener.count() + closer.count();

        // "If one of the delimiters can both open and close emphasis, then
        // the sum of the lengths of the delimiter runs containing the
        // opening and closing delimiters must not be a multiple of 3 unless
        // both lengths are multiples of 3."
        if opener.can_open_and_close() || closer.can_open_and_close() {
            // Inverted condition to exit early if not met.
            if total_length % 3 == 0 && (opener.count() % 3 != 0 || closer.count() % 3 != 0) {
                return EmphasisMatchResult::NoMatch;
            }
        }

        std::cmp::min(opener.count(), closer.count())
    };

    while to_consume > 0 {
        let this_consume = std::cmp::min(to_consume, 2);
        let kind = if this_consume == 1 {
            SyntaxKind::EMPHASIS
        } else {
            SyntaxKind::STRONG_EMPHASIS
        };

        let item_open = p.delimiter_stack()[opener_index].consume_opening(this_consume);
        let item_close = p.delimiter_stack()[closer_index].consume_closing(this_consume);
        MarkerSpan::new(item_open, item_close).complete(p, kind);

        to_consume -= this_consume;
    }

    // Deactivate all the delimiters between the opener and the closer,
    // since they would've had to complete entirely within that range, which
    // has now been passed over.
    for index in opener_index + 1..closer_index {
        p.deactivate_delimiter(index)
    }

    let delimiter_stack = p.delimiter_stack();
    let opener = &delimiter_stack[opener_index];
    let closer = &delimiter_stack[closer_index];

    if opener.is_active() {
        EmphasisMatchResult::ConsumedCloser
    } else if closer.is_active() {
        EmphasisMatchResult::ConsumedOpener
    } else {
        EmphasisMatchResult::ConsumedBoth
    }
}

/// Strikethrough pairing is stricter than emphasis: the opener and closer
/// run lengths must match exactly, and a run is consumed whole.
pub(super) fn match_strikethrough(
    p: &mut InlineParser,
    opener_index: usize,
    closer_index: usize,
) -> EmphasisMatchResult {
    let count = {
        let delimiter_stack = &p.delimiter_stack();
        let opener = &delimiter_stack[opener_index];
        let closer = &delimiter_stack[closer_index];

        if opener.count() != closer.count() {
            return EmphasisMatchResult::NoMatch;
        }
        opener.count()
    };

    let item_open = p.delimiter_stack()[opener_index].consume_opening(count);
    let item_close = p.delimiter_stack()[closer_index].consume_closing(count);
    MarkerSpan::new(item_open, item_close).complete(p, SyntaxKind::STRIKETHROUGH);

    for index in opener_index + 1..closer_index {
        p.deactivate_delimiter(index)
    }

    EmphasisMatchResult::ConsumedBoth
}
