//! Error type for template execution.
//!
//! Every variant is fatal for the render that produced it: there is no
//! partial output and no per-directive recovery.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The template (or a subcomponent's output) did not resolve to exactly one root element.
    #[error("expected a single root element for template `{component}` but found {found} root node(s)")]
    Structural { component: String, found: usize },

    #[error("unknown directive `{0}`")]
    UnknownDirective(String),

    #[error("directive `{0}` requires an argument, e.g. `{0}:name`")]
    MissingArgument(String),

    #[error("malformed loop expression `{0}`, expected `<name> in <field>`")]
    MalformedLoop(String),

    #[error("unknown data field `{0}`")]
    UnknownField(String),

    #[error("data field `{field}` is not of type {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("sequence not found for field `{0}`")]
    MissingSequence(String),

    #[error("template markup is invalid: {0}")]
    Parse(#[from] velvet_dom::ParseError),

    #[error("interpolation failed: {0}")]
    Interpolation(#[from] minijinja::Error),

    #[error("invalid data context: {0}")]
    Data(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
