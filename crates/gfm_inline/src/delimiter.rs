use super::syntax::SyntaxKind;

pub(crate) trait Delimiter {
    fn kind(&self) -> SyntaxKind;
    fn count(&self) -> usize;

    fn is_active(&self) -> bool;
    fn deactivate(&mut self);

    fn can_open(&self) -> bool;
    fn can_close(&self) -> bool;

    /// Consume `count` delimiter characters from the end of this run,
    /// returning the event index to use as the opening marker for the
    /// consuming element.
    fn consume_opening(&mut self, count: usize) -> usize;
    /// Consume `count` delimiter characters from the start of this run,
    /// returning the event index to use as the closing marker for the
    /// consuming element.
    fn consume_closing(&mut self, count: usize) -> usize;

    fn can_open_and_close(&self) -> bool {
        self.can_open() && self.can_close()
    }
}

/// Emphasis delimiters represent a run of tokens that can each be used to
/// possibly start or end some form of emphasis (e.g., strong or regular).
/// Every token in the delimiter run is surrounded by two events in the
/// buffer, a Start before it and a Finish after it, so a delimiter run like
/// `***` is inserted in the event buffer as:
///
/// [Start, Token, Finish, Start, Token, Finish, Start, Token, Finish]
///
/// This is required in order to allow each token to either start or finish a
/// section, otherwise two adjacent tokens could not both be used as opposite
/// bounds, as in `*hi***yes**` becoming `<em>hi</em><strong>yes</strong>`.
///
/// The implementation of this struct takes care of handling indices in the
/// event buffer by using this layout to calculate offsets based on `count`.
/// Runs are consumed from the inside out: openers give up their trailing
/// tokens first and closers their leading tokens, which is what nests
/// `***x***` as an emphasis around a strong emphasis.
#[derive(Debug)]
pub(crate) struct EmphasisDelimiter {
    kind: SyntaxKind,
    count: usize,
    can_open: bool,
    can_close: bool,
    active: bool,
    /// Event index of the first token in the run.
    start_cursor: usize,
    /// Event index of the last token in the run.
    end_cursor: usize,
}

impl EmphasisDelimiter {
    pub fn new(
        kind: SyntaxKind,
        count: usize,
        can_open: bool,
        can_close: bool,
        first_index: usize,
    ) -> Self {
        Self {
            kind,
            count,
            can_open,
            can_close,
            active: true,
            start_cursor: first_index,
            end_cursor: first_index + (count - 1) * 3,
        }
    }
}

impl Delimiter for EmphasisDelimiter {
    fn kind(&self) -> SyntaxKind {
        self.kind
    }

    fn count(&self) -> usize {
        self.count
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }

    fn can_open(&self) -> bool {
        self.can_open
    }

    fn can_close(&self) -> bool {
        self.can_close
    }

    fn consume_opening(&mut self, count: usize) -> usize {
        self.count -= count;
        if self.count > 0 {
            self.end_cursor -= count * 3;
            // The cursor has moved one whole set of [start, token, finish]
            // backwards per consumed token, and the caller wants the Start
            // event of the first token that was consumed, which is now two
            // events _after_ the new cursor position.
            self.end_cursor + 2
        } else {
            self.active = false;
            self.end_cursor -= (count - 1) * 3;
            self.end_cursor - 1
        }
    }

    fn consume_closing(&mut self, count: usize) -> usize {
        self.count -= count;
        if self.count > 0 {
            self.start_cursor += count * 3;
            // Mirror of `consume_opening`: the caller wants the Finish event
            // of the last consumed token, two events before the new cursor.
            self.start_cursor - 2
        } else {
            self.active = false;
            self.start_cursor += (count - 1) * 3;
            self.start_cursor + 1
        }
    }
}

/// The `[` of a potential link (kind LSQUARE) or the `![` of a potential
/// image (kind EXCLAIM). Link delimiters are only ever openers; the parser
/// resolves them directly when it encounters a `]`.
#[derive(Debug)]
pub(crate) struct LinkDelimiter {
    kind: SyntaxKind,
    active: bool,
    consumed: bool,
    /// Cursor to the marker for the link as a whole, including the resource.
    link_cursor: usize,
    /// Cursor to the marker for the content within the square brackets.
    content_cursor: usize,
}

impl LinkDelimiter {
    pub fn new(kind: SyntaxKind, link_index: usize, content_index: usize) -> Self {
        Self {
            kind,
            active: true,
            consumed: false,
            link_cursor: link_index,
            content_cursor: content_index,
        }
    }

    pub fn link_cursor(&self) -> usize {
        self.link_cursor
    }

    pub fn content_cursor(&self) -> usize {
        self.content_cursor
    }
}

impl Delimiter for LinkDelimiter {
    fn kind(&self) -> SyntaxKind {
        self.kind
    }

    fn count(&self) -> usize {
        if self.consumed {
            0
        } else {
            1
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }

    fn can_open(&self) -> bool {
        !self.consumed
    }

    fn can_close(&self) -> bool {
        false
    }

    fn consume_opening(&mut self, _count: usize) -> usize {
        self.consumed = true;
        self.link_cursor
    }

    fn consume_closing(&mut self, _count: usize) -> usize {
        self.consumed = true;
        self.content_cursor
    }
}

#[derive(Debug)]
pub(crate) enum AnyDelimiter {
    Emphasis(EmphasisDelimiter),
    Link(LinkDelimiter),
}

impl AnyDelimiter {
    /// Returns true for the `[` and `![` delimiters that a `]` can resolve.
    pub fn is_link_opener(&self) -> bool {
        matches!(self, AnyDelimiter::Link(_))
    }

    pub fn as_link_delimiter(&self) -> Option<&LinkDelimiter> {
        match self {
            AnyDelimiter::Link(link) => Some(link),
            _ => None,
        }
    }
}

impl Delimiter for AnyDelimiter {
    fn kind(&self) -> SyntaxKind {
        match self {
            AnyDelimiter::Emphasis(emphasis) => emphasis.kind(),
            AnyDelimiter::Link(link) => link.kind(),
        }
    }

    fn count(&self) -> usize {
        match self {
            AnyDelimiter::Emphasis(emphasis) => emphasis.count(),
            AnyDelimiter::Link(link) => link.count(),
        }
    }

    fn is_active(&self) -> bool {
        match self {
            AnyDelimiter::Emphasis(emphasis) => emphasis.is_active(),
            AnyDelimiter::Link(link) => link.is_active(),
        }
    }

    fn deactivate(&mut self) {
        match self {
            AnyDelimiter::Emphasis(emphasis) => emphasis.deactivate(),
            AnyDelimiter::Link(link) => link.deactivate(),
        }
    }

    fn can_open(&self) -> bool {
        match self {
            AnyDelimiter::Emphasis(emphasis) => emphasis.can_open(),
            AnyDelimiter::Link(link) => link.can_open(),
        }
    }

    fn can_close(&self) -> bool {
        match self {
            AnyDelimiter::Emphasis(emphasis) => emphasis.can_close(),
            AnyDelimiter::Link(link) => link.can_close(),
        }
    }

    fn consume_opening(&mut self, count: usize) -> usize {
        match self {
            AnyDelimiter::Emphasis(emphasis) => emphasis.consume_opening(count),
            AnyDelimiter::Link(link) => link.consume_opening(count),
        }
    }

    fn consume_closing(&mut self, count: usize) -> usize {
        match self {
            AnyDelimiter::Emphasis(emphasis) => emphasis.consume_closing(count),
            AnyDelimiter::Link(link) => link.consume_closing(count),
        }
    }
}

impl From<EmphasisDelimiter> for AnyDelimiter {
    fn from(value: EmphasisDelimiter) -> Self {
        AnyDelimiter::Emphasis(value)
    }
}

impl From<LinkDelimiter> for AnyDelimiter {
    fn from(value: LinkDelimiter) -> Self {
        AnyDelimiter::Link(value)
    }
}
