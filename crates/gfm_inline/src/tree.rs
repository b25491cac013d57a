use std::fmt;
use std::ops::Range;

use arcstr::{ArcStr, Substr};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::event::Event;
use crate::syntax::SyntaxKind;

/// A node of the finished tree: a kind, the byte span it covers, and its
/// ordered children. Concatenating the text of all tokens underneath a node
/// reproduces the covered input exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    kind: SyntaxKind,
    span: Range<usize>,
    children: Vec<SyntaxElement>,
}

/// A token of the finished tree. The text is a cheap reference-counted
/// substring of the original source, so tokens can be cloned and held
/// without tracking the source's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: SyntaxKind,
    text: Substr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxElement {
    Node(SyntaxNode),
    Token(Token),
}

impl SyntaxNode {
    fn new(kind: SyntaxKind, children: Vec<SyntaxElement>) -> Self {
        let span = match (children.first(), children.last()) {
            (Some(first), Some(last)) => first.span().start..last.span().end,
            // Only an empty root can have no children.
            _ => 0..0,
        };
        Self {
            kind,
            span,
            children,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    /// The byte range this node covers in the source.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn children(&self) -> &[SyntaxElement] {
        &self.children
    }

    /// Reconstruct the covered source text by concatenating every token in
    /// the subtree.
    pub fn text(&self) -> String {
        let mut output = String::with_capacity(self.span.len());
        self.collect_text(&mut output);
        output
    }

    fn collect_text(&self, output: &mut String) {
        for child in &self.children {
            match child {
                SyntaxElement::Node(node) => node.collect_text(output),
                SyntaxElement::Token(token) => output.push_str(token.text()),
            }
        }
    }
}

impl Token {
    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// The byte range this token covers in the source.
    pub fn span(&self) -> Range<usize> {
        self.text.range()
    }
}

impl SyntaxElement {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            SyntaxElement::Node(node) => node.kind(),
            SyntaxElement::Token(token) => token.kind(),
        }
    }

    pub fn span(&self) -> Range<usize> {
        match self {
            SyntaxElement::Node(node) => node.span(),
            SyntaxElement::Token(token) => token.span(),
        }
    }

    pub fn as_node(&self) -> Option<&SyntaxNode> {
        match self {
            SyntaxElement::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            SyntaxElement::Token(token) => Some(token),
            _ => None,
        }
    }
}

/// Interpret a finished event buffer into the tree it describes. Tombstone
/// events are reservations that never resolved and are skipped; everything
/// else is strictly nested.
pub(crate) fn build_tree(events: Vec<Event>, source: &ArcStr) -> SyntaxNode {
    let mut parents: Vec<(SyntaxKind, usize)> = Vec::with_capacity(8);
    let mut children: Vec<SyntaxElement> = vec![];

    for event in events {
        match event {
            Event::Start(SyntaxKind::TOMBSTONE) | Event::Finish(SyntaxKind::TOMBSTONE) => {}
            Event::Start(kind) => parents.push((kind, children.len())),
            Event::Finish(kind) => {
                let (start_kind, first_child) = parents
                    .pop()
                    .expect("every Finish event must have a matching Start");
                debug_assert_eq!(
                    kind, start_kind,
                    "mismatched Start and Finish events in the buffer"
                );
                let node = SyntaxNode::new(start_kind, children.drain(first_child..).collect());
                children.push(SyntaxElement::Node(node));
            }
            Event::Token(token) => {
                if token.kind() == SyntaxKind::EOF {
                    continue;
                }
                children.push(SyntaxElement::Token(Token {
                    kind: token.kind(),
                    text: source.substr(token.span()),
                }));
            }
        }
    }

    debug_assert!(parents.is_empty(), "unfinished nodes left after parsing");
    debug_assert_eq!(
        children.len(),
        1,
        "tree building must finish with only the root node"
    );
    match children.pop() {
        Some(SyntaxElement::Node(root)) => root,
        _ => unreachable!("the last remaining element must be the root node"),
    }
}

// The Display form is a compact structural notation: nodes print as
// `(kind child child ...)` with lowercased kind names, and tokens print as
// their quoted text. It reads close to the scenario notation used in the
// grammar's documentation and diffs well in test output.
impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", format!("{:?}", self.kind).to_lowercase())?;
        for child in &self.children {
            match child {
                SyntaxElement::Node(node) => write!(f, " {}", node)?,
                SyntaxElement::Token(token) => write!(f, " {:?}", token.text())?,
            }
        }
        write!(f, ")")
    }
}

impl Serialize for SyntaxNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SyntaxNode", 4)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("start", &self.span.start)?;
        state.serialize_field("end", &self.span.end)?;
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Token", 4)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("start", &self.span().start)?;
        state.serialize_field("end", &self.span().end)?;
        state.serialize_field("text", self.text())?;
        state.end()
    }
}

impl Serialize for SyntaxElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SyntaxElement::Node(node) => node.serialize(serializer),
            SyntaxElement::Token(token) => token.serialize(serializer),
        }
    }
}
