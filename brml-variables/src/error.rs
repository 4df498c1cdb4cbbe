#[cfg(doc)]
use crate::Variable;

/// The errors that can be encountered when constructing or querying a [`Variable`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VariableError {
    #[error("state '{state}' is not in the domain of variable '{variable}'")]
    StateNotFound { variable: String, state: String },

    #[error("state '{state}' occurs more than once in the domain of variable '{variable}'")]
    DuplicateState { variable: String, state: String },

    #[error("more than one variable has index {index}")]
    DuplicateIndex { index: usize },
}
