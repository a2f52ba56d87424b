use tracing::{debug, trace};

use crate::attribute::{Attribute, style_list};
use crate::error::CompileError;
use crate::graph::{Attributes, Edge, Element, Endpoint, Graph, Node, Subgraph};
use crate::identifier::quote_if_needed;
use crate::renderer::Renderers;

const INDENT: &str = "    ";

/// How a graph is written out.
#[derive(Debug)]
pub struct CompilerSettings {
    indented: bool,
    format_strings: bool,
    renderers: Renderers,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            indented: false,
            format_strings: true,
            renderers: Renderers::default(),
        }
    }
}

impl CompilerSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// One statement per line, indented by nesting depth.
    pub fn indented(mut self, indented: bool) -> Self {
        self.indented = indented;
        self
    }

    /// When disabled, strings are quoted but not escaped. Only for input that
    /// is already valid DOT text.
    pub fn format_strings(mut self, format_strings: bool) -> Self {
        self.format_strings = format_strings;
        self
    }

    /// Adjusts the renderer registry, starting from the built-in renderers.
    pub fn configure_renderers(mut self, configure: impl FnOnce(&mut Renderers)) -> Self {
        configure(&mut self.renderers);
        self
    }
}

pub struct Compiler {
    settings: CompilerSettings,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self::with_settings(CompilerSettings::default())
    }

    pub fn with_settings(settings: CompilerSettings) -> Self {
        Self { settings }
    }

    pub fn renderers_mut(&mut self) -> &mut Renderers {
        &mut self.settings.renderers
    }

    pub fn compile(&self, graph: &Graph) -> Result<String, CompileError> {
        debug!(
            graph = %graph.id,
            elements = graph.elements.len(),
            directed = graph.directed,
            "compiling graph"
        );

        let mut header = String::new();
        if graph.strict {
            header.push_str("strict ");
        }
        header.push_str(if graph.directed { "digraph " } else { "graph " });
        header.push_str(&self.quote(&graph.id));
        header.push_str(" {");

        let mut out = Output::new(self.settings.indented);
        out.statement(&header);
        out.depth += 1;
        for element in &graph.elements {
            self.element(&mut out, element, graph.directed)?;
        }
        out.depth -= 1;
        out.buf.push('}');

        Ok(out.buf)
    }

    fn element(&self, out: &mut Output, element: &Element, directed: bool) -> Result<(), CompileError> {
        match element {
            Element::Node(node) => self.node(out, node),
            Element::Edge(edge) => self.edge(out, edge, directed),
            Element::Subgraph(subgraph) => self.subgraph(out, subgraph, directed),
        }
    }

    fn node(&self, out: &mut Output, node: &Node) -> Result<(), CompileError> {
        trace!(node = %node.id, "node");
        let mut stmt = self.quote(&node.id).into_owned();
        stmt.push_str(&self.attribute_list(&node.attributes)?);
        stmt.push(';');
        out.statement(&stmt);
        Ok(())
    }

    fn edge(&self, out: &mut Output, edge: &Edge, directed: bool) -> Result<(), CompileError> {
        trace!(left = edge.left.id(), right = edge.right.id(), "edge");
        let mut stmt = self.endpoint(&edge.left)?;
        stmt.push_str(if directed { " -> " } else { " -- " });
        stmt.push_str(&self.endpoint(&edge.right)?);
        stmt.push_str(&self.attribute_list(&edge.attributes)?);
        stmt.push(';');
        out.statement(&stmt);
        Ok(())
    }

    fn endpoint(&self, endpoint: &Endpoint) -> Result<String, CompileError> {
        let id = endpoint.id();
        if id.trim().is_empty() {
            return Err(CompileError::EmptyEndpoint);
        }
        Ok(self.quote(id).into_owned())
    }

    fn subgraph(
        &self,
        out: &mut Output,
        subgraph: &Subgraph,
        directed: bool,
    ) -> Result<(), CompileError> {
        trace!(subgraph = %subgraph.id, "subgraph");
        out.statement(&format!("subgraph {} {{", self.quote(&subgraph.id)));
        out.depth += 1;
        for attribute in &subgraph.attributes {
            out.statement(&self.subgraph_attribute(attribute)?);
        }
        for element in &subgraph.elements {
            self.element(out, element, directed)?;
        }
        out.depth -= 1;
        out.statement("}");
        Ok(())
    }

    fn subgraph_attribute(&self, attribute: &Attribute) -> Result<String, CompileError> {
        match attribute {
            Attribute::SubgraphStyle(style) => {
                Ok(format!("style={};", self.quote(&style_list(style))))
            }
            Attribute::Color(color) => Ok(format!("color=\"{}\";", color.to_hex())),
            Attribute::Label(text) => Ok(format!("label={};", self.quote(text))),
            other => Err(CompileError::UnsupportedSubgraphAttribute { kind: other.kind() }),
        }
    }

    /// ` [a,b,c]`, or nothing for an element without attributes.
    fn attribute_list(&self, attributes: &Attributes) -> Result<String, CompileError> {
        if attributes.is_empty() {
            return Ok(String::new());
        }
        let fragments = attributes
            .iter()
            .map(|attribute| self.render(attribute))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!(" [{}]", fragments.join(",")))
    }

    fn render(&self, attribute: &Attribute) -> Result<String, CompileError> {
        if !attribute.is_finite() {
            return Err(CompileError::NonFiniteValue {
                kind: attribute.kind(),
            });
        }
        let fragment = self
            .settings
            .renderers
            .render(attribute, self.settings.format_strings)
            .ok_or_else(|| CompileError::NoMatchingRenderer {
                kind: attribute.kind(),
            })?;
        trace!(kind = %attribute.kind(), fragment = %fragment, "rendered attribute");
        Ok(fragment)
    }

    fn quote<'a>(&self, value: &'a str) -> std::borrow::Cow<'a, str> {
        quote_if_needed(value, self.settings.format_strings)
    }
}

struct Output {
    buf: String,
    indented: bool,
    depth: usize,
}

impl Output {
    fn new(indented: bool) -> Self {
        Self {
            buf: String::new(),
            indented,
            depth: 0,
        }
    }

    fn statement(&mut self, text: &str) {
        if self.indented {
            for _ in 0..self.depth {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(text);
            self.buf.push('\n');
        } else {
            self.buf.push_str(text);
            self.buf.push(' ');
        }
    }
}
