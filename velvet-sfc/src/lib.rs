pub mod component;
pub mod error;
pub mod sfc;

pub use component::load_component;
pub use error::SfcError;
pub use sfc::{Attr, ScriptBlock, Sfc, StyleBlock, TemplateBlock, parse_sfc};
