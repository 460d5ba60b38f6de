use std::collections::BTreeMap;

/// Built-in handler a rendered event kind dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    /// Generic dispatch to a named method (`v-on`).
    Event,
    /// Two-way binding update of a data field (`v-model`).
    Model,
}

/// Receiver for the event kinds a render wires up.
pub trait ListenerRegistry {
    fn add_event_listener(&mut self, event: &str, handler: HandlerKind);
}

/// Map-backed registry; the last registration for an event kind wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listeners {
    handlers: BTreeMap<String, HandlerKind>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn handler(&self, event: &str) -> Option<HandlerKind> {
        self.handlers.get(event).copied()
    }
    pub fn has(&self, event: &str) -> bool {
        self.handlers.contains_key(event)
    }
    pub fn remove(&mut self, event: &str) -> Option<HandlerKind> {
        self.handlers.remove(event)
    }
    pub fn len(&self) -> usize {
        self.handlers.len()
    }
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, HandlerKind)> {
        self.handlers.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl ListenerRegistry for Listeners {
    fn add_event_listener(&mut self, event: &str, handler: HandlerKind) {
        self.handlers.insert(event.to_string(), handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_registration_wins() {
        let mut l = Listeners::new();
        l.add_event_listener("input", HandlerKind::Event);
        l.add_event_listener("input", HandlerKind::Model);
        l.add_event_listener("click", HandlerKind::Event);
        assert_eq!(l.len(), 2);
        assert_eq!(l.handler("input"), Some(HandlerKind::Model));
        assert!(l.has("click"));
        assert_eq!(l.remove("click"), Some(HandlerKind::Event));
        assert!(!l.has("click"));
    }
}
