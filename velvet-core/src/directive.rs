//! Directive attribute keys.
//!
//! A directive key is `v-<name>` optionally followed by `:<argument>`, or one
//! of the shorthands `:<argument>` (bind) and `@<argument>` (on).

pub const PREFIX: &str = "v-";

/// The recognised directives, declared in execution priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DirectiveKind {
    For,
    If,
    Model,
    On,
    Bind,
}

impl DirectiveKind {
    pub const ALL: [DirectiveKind; 5] = [
        DirectiveKind::For,
        DirectiveKind::If,
        DirectiveKind::Model,
        DirectiveKind::On,
        DirectiveKind::Bind,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DirectiveKind::For => "for",
            DirectiveKind::If => "if",
            DirectiveKind::Model => "model",
            DirectiveKind::On => "on",
            DirectiveKind::Bind => "bind",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// A directive key split into its name and optional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveKey<'a> {
    pub name: &'a str,
    pub arg: Option<&'a str>,
}

impl<'a> DirectiveKey<'a> {
    /// Split an attribute key; `None` for plain attributes.
    pub fn parse(key: &'a str) -> Option<Self> {
        if let Some(arg) = key.strip_prefix(':') {
            return Some(Self {
                name: DirectiveKind::Bind.name(),
                arg: Some(arg),
            });
        }
        if let Some(arg) = key.strip_prefix('@') {
            return Some(Self {
                name: DirectiveKind::On.name(),
                arg: Some(arg),
            });
        }
        let rest = key.strip_prefix(PREFIX)?;
        Some(match rest.split_once(':') {
            Some((name, arg)) => Self {
                name,
                arg: Some(arg),
            },
            None => Self { name: rest, arg: None },
        })
    }

    pub fn kind(&self) -> Option<DirectiveKind> {
        DirectiveKind::from_name(self.name)
    }
}

pub fn is_directive(key: &str) -> bool {
    DirectiveKey::parse(key).is_some()
}

/// Capitalise the first letter of every word, where words are separated by
/// anything that is not a letter or digit. Bind arguments map onto prop names
/// this way (`title` -> `Title`, `user-name` -> `User-Name`).
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut boundary = true;
    for ch in s.chars() {
        if boundary && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        boundary = !ch.is_alphanumeric();
    }
    out
}
