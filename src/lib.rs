pub mod attribute;
pub mod compiler;
pub mod error;
pub mod graph;
pub mod identifier;
pub mod renderer;

pub use attribute::{
    ArrowType, Attribute, AttributeKind, Color, EdgeStyle, NodeStyle, Point, Shape, SubgraphStyle,
};
pub use compiler::{Compiler, CompilerSettings};
pub use error::CompileError;
pub use graph::{Attributes, Edge, Element, Endpoint, Graph, Node, Subgraph};
pub use renderer::{AttributeRenderer, BuiltinRenderer, Renderers};
