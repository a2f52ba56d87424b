use thiserror::Error;

use crate::attribute::AttributeKind;

/// Reasons a graph cannot be compiled. Compilation stops at the first one and
/// produces no output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error("no renderer registered for attribute kind `{kind}`")]
    NoMatchingRenderer { kind: AttributeKind },

    #[error("attribute kind `{kind}` is not supported on a subgraph (only style, color and label)")]
    UnsupportedSubgraphAttribute { kind: AttributeKind },

    #[error("attribute kind `{kind}` has a non-finite value")]
    NonFiniteValue { kind: AttributeKind },

    #[error("edge endpoint identifier is empty")]
    EmptyEndpoint,
}
