use crate::attribute::{Attribute, AttributeKind};
use crate::compiler::{Compiler, CompilerSettings};
use crate::error::CompileError;

/// Attributes of one element, keyed by kind and kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    items: Vec<Attribute>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `attribute`, replacing any existing value of the same kind in place.
    pub fn set(&mut self, attribute: Attribute) {
        let kind = attribute.kind();
        match self.items.iter_mut().find(|a| a.kind() == kind) {
            Some(existing) => *existing = attribute,
            None => self.items.push(attribute),
        }
    }

    pub fn remove(&mut self, kind: &AttributeKind) -> Option<Attribute> {
        let index = self.items.iter().position(|a| a.kind() == *kind)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, kind: &AttributeKind) -> Option<&Attribute> {
        self.items.iter().find(|a| a.kind() == *kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub attributes: Attributes,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with(mut self, attribute: Attribute) -> Self {
        self.attributes.set(attribute);
        self
    }
}

/// One side of an edge. Compiling fails if the identifier is empty or blank.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Id(String),
    /// A copy of the node taken when the edge was built. Later changes to the
    /// original node are not seen here; only its `id` is written out.
    Node(Node),
}

impl Endpoint {
    pub fn id(&self) -> &str {
        match self {
            Endpoint::Id(id) => id,
            Endpoint::Node(node) => &node.id,
        }
    }
}

impl From<&str> for Endpoint {
    fn from(id: &str) -> Self {
        Endpoint::Id(id.to_string())
    }
}

impl From<String> for Endpoint {
    fn from(id: String) -> Self {
        Endpoint::Id(id)
    }
}

impl From<&Node> for Endpoint {
    fn from(node: &Node) -> Self {
        Endpoint::Node(node.clone())
    }
}

impl From<Node> for Endpoint {
    fn from(node: Node) -> Self {
        Endpoint::Node(node)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub left: Endpoint,
    pub right: Endpoint,
    pub attributes: Attributes,
}

impl Edge {
    pub fn new(left: impl Into<Endpoint>, right: impl Into<Endpoint>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with(mut self, attribute: Attribute) -> Self {
        self.attributes.set(attribute);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subgraph {
    pub id: String,
    pub attributes: Attributes,
    pub elements: Vec<Element>,
}

impl Subgraph {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
            elements: Vec::new(),
        }
    }

    pub fn with(mut self, attribute: Attribute) -> Self {
        self.attributes.set(attribute);
        self
    }

    pub fn element(mut self, element: impl Into<Element>) -> Self {
        self.elements.push(element.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Node(Node),
    Edge(Edge),
    Subgraph(Subgraph),
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(node)
    }
}

impl From<Edge> for Element {
    fn from(edge: Edge) -> Self {
        Element::Edge(edge)
    }
}

impl From<Subgraph> for Element {
    fn from(subgraph: Subgraph) -> Self {
        Element::Subgraph(subgraph)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    pub id: String,
    pub directed: bool,
    pub strict: bool,
    pub elements: Vec<Element>,
}

impl Graph {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            directed: false,
            strict: false,
            elements: Vec::new(),
        }
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn element(mut self, element: impl Into<Element>) -> Self {
        self.elements.push(element.into());
        self
    }

    pub fn add(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    /// Compiles with default settings: single line, strings escaped.
    pub fn compile(&self) -> Result<String, CompileError> {
        Compiler::new().compile(self)
    }

    pub fn compile_with(&self, settings: CompilerSettings) -> Result<String, CompileError> {
        Compiler::with_settings(settings).compile(self)
    }
}
