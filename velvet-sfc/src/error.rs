#[derive(Debug, thiserror::Error)]
pub enum SfcError {
    #[error("invalid single-file component: {0}")]
    Syntax(String),

    #[error("single-file component has no <template> block")]
    MissingTemplate,

    #[error("duplicate <{0}> block")]
    DuplicateBlock(&'static str),

    #[error("<script> block is not a JSON data object: {0}")]
    Data(#[from] velvet_core::Error),
}
