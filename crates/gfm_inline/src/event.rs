use super::{parser::InlineParser, syntax::SyntaxKind, token::SyntaxToken};

/// A pointer to a single event in the parser's buffer, used to resolve a
/// node boundary after its extent is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Marker {
    event_index: usize,
}

impl Marker {
    pub(crate) fn new(event_index: usize) -> Self {
        Self { event_index }
    }

    pub(crate) fn event_index(&self) -> usize {
        self.event_index
    }

    pub(crate) fn span_to(self, close: Marker) -> MarkerSpan {
        MarkerSpan::from_markers(self, close)
    }

    /// Resolve this marker as the start of a `kind` node whose end is the
    /// current end of the buffer.
    pub(crate) fn complete(self, p: &mut InlineParser, kind: SyntaxKind) -> Option<()> {
        match p.get_event_mut(self.event_index) {
            Some(Event::Start(ref mut slot)) => *slot = kind,
            _ => unreachable!(),
        }

        p.push_event(Event::Finish(kind));
        Some(())
    }

    pub(crate) fn complete_as_start(self, p: &mut InlineParser, kind: SyntaxKind) {
        match p.get_event_mut(self.event_index) {
            Some(event) => *event = Event::Start(kind),
            found => unreachable!(
                "complete_as_start requires an event to exist at index {}, but found {:?}",
                self.event_index, found
            ),
        }
    }

    pub(crate) fn complete_as_finish(self, p: &mut InlineParser, kind: SyntaxKind) {
        match p.get_event_mut(self.event_index) {
            Some(Event::Token(_)) => unreachable!(),
            Some(event) => *event = Event::Finish(kind),
            found => unreachable!(
                "complete_as_finish requires a Start or Finish event at index {}, but found {:?}",
                self.event_index, found
            ),
        }
    }
}

/// An expanded Marker representing two points, a beginning and an end, that
/// can be completed as a matching pair in a single go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MarkerSpan(Marker, Marker);

impl MarkerSpan {
    pub(crate) fn from_markers(open: Marker, close: Marker) -> Self {
        Self(open, close)
    }

    pub(crate) fn new(open_index: usize, close_index: usize) -> Self {
        Self(Marker::new(open_index), Marker::new(close_index))
    }

    #[inline(always)]
    pub(crate) fn complete(self, p: &mut InlineParser, kind: SyntaxKind) {
        self.0.complete_as_start(p, kind);
        self.1.complete_as_finish(p, kind);
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Event {
    Start(SyntaxKind),
    Finish(SyntaxKind),
    Token(SyntaxToken),
}

impl Event {
    pub(crate) fn tombstone() -> Self {
        Event::Start(SyntaxKind::TOMBSTONE)
    }
}

/// An indented rendering of a raw event buffer, for inspecting the parser's
/// output before it is interpreted into a tree.
#[cfg(feature = "debug-tracing")]
pub struct DebugEventBuffer<'source>(pub(crate) Vec<Event>, pub(crate) &'source str);

#[cfg(feature = "debug-tracing")]
impl std::fmt::Debug for DebugEventBuffer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut indent_level = 0usize;

        for event in &self.0 {
            match event {
                Event::Start(SyntaxKind::TOMBSTONE) | Event::Finish(SyntaxKind::TOMBSTONE) => {
                    f.write_fmt(format_args!(
                        "{:indent$}<tombstone>\n",
                        "",
                        indent = indent_level * 2
                    ))?;
                }
                Event::Start(kind) => {
                    f.write_fmt(format_args!(
                        "{:indent$}{:?} start\n",
                        "",
                        kind,
                        indent = indent_level * 2
                    ))?;
                    indent_level += 1;
                }
                Event::Finish(kind) => {
                    indent_level = indent_level.saturating_sub(1);
                    f.write_fmt(format_args!(
                        "{:indent$}finish {:?}\n",
                        "",
                        kind,
                        indent = indent_level * 2
                    ))?;
                }
                Event::Token(token) => {
                    f.write_fmt(format_args!(
                        "{:indent$}{:?}@{:?} \"{}\"\n",
                        "",
                        token.kind(),
                        token.span(),
                        self.1[token.span()].escape_debug(),
                        indent = indent_level * 2
                    ))?;
                }
            }
        }

        Ok(())
    }
}
