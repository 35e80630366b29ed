//! Enter/exit event sinks for construct tokenizers.
//!
//! Tokenizers that want to stay independent of the CST builder emit through
//! [`TokenSink`]. The block parser hands them a `GreenNodeBuilder`; tests can
//! hand them an [`EventLog`] and assert on the raw event stream.

use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

pub trait TokenSink {
    /// Open a composite token.
    fn enter(&mut self, kind: SyntaxKind);
    /// Emit a leaf token covering `text`.
    fn token(&mut self, kind: SyntaxKind, text: &str);
    /// Close the most recently opened composite token.
    fn exit(&mut self);
}

impl TokenSink for GreenNodeBuilder<'_> {
    fn enter(&mut self, kind: SyntaxKind) {
        self.start_node(kind.into());
    }

    fn token(&mut self, kind: SyntaxKind, text: &str) {
        GreenNodeBuilder::token(self, kind.into(), text);
    }

    fn exit(&mut self) {
        self.finish_node();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Enter,
    Exit,
}

/// Records events as `(Enter|Exit, kind)` pairs. A leaf token is recorded
/// as an enter immediately followed by its exit.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<(EventKind, SyntaxKind)>,
    open: Vec<SyntaxKind>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[(EventKind, SyntaxKind)] {
        &self.events
    }

    pub fn into_events(self) -> Vec<(EventKind, SyntaxKind)> {
        self.events
    }
}

impl TokenSink for EventLog {
    fn enter(&mut self, kind: SyntaxKind) {
        self.events.push((EventKind::Enter, kind));
        self.open.push(kind);
    }

    fn token(&mut self, kind: SyntaxKind, _text: &str) {
        self.events.push((EventKind::Enter, kind));
        self.events.push((EventKind::Exit, kind));
    }

    fn exit(&mut self) {
        if let Some(kind) = self.open.pop() {
            self.events.push((EventKind::Exit, kind));
        } else {
            log::warn!("EventLog: exit without matching enter");
        }
    }
}
