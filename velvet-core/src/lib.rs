//! Directive-driven template execution.
//!
//! A [`Component`] template is parsed into a tree, its directive attributes
//! (`v-for`, `v-if`, `v-model`, `v-on`, `v-bind`) are executed against a
//! [`Data`] context, child components are rendered in place, and the
//! resulting markup is passed through an interpolation step that fills in
//! `{{ field }}` placeholders.

pub mod component;
pub mod directive;
pub mod error;
mod handlers;
pub mod interpolate;
pub mod listener;
pub mod options;
pub mod order;
pub mod template;
pub mod traverse;
pub mod value;

pub use component::Component;
pub use directive::{DirectiveKey, DirectiveKind};
pub use error::{Error, Result};
pub use interpolate::Interpolator;
pub use listener::{HandlerKind, ListenerRegistry, Listeners};
pub use options::Options;
pub use order::order_attrs;
pub use template::Template;
pub use traverse::Traversal;
pub use value::{Data, Value};
