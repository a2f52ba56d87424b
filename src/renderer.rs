use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

use crate::attribute::{Attribute, style_list};
use crate::identifier::quote_if_needed;

/// Turns one attribute kind into its `key=value` fragment.
///
/// Returns `None` when `attribute` is not the kind this renderer handles, which
/// lets the registry fall through to the next renderer. Renderers that only
/// emit numbers or enum names ignore `format_strings`.
pub trait AttributeRenderer {
    fn render(&self, attribute: &Attribute, format_strings: bool) -> Option<String>;
}

impl<F> AttributeRenderer for F
where
    F: Fn(&Attribute, bool) -> Option<String>,
{
    fn render(&self, attribute: &Attribute, format_strings: bool) -> Option<String> {
        self(attribute, format_strings)
    }
}

/// Renderers for every built-in attribute kind, in default registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum BuiltinRenderer {
    Shape,
    NodeStyle,
    EdgeStyle,
    FontColor,
    FillColor,
    Color,
    Label,
    Width,
    Height,
    PenWidth,
    ArrowTail,
    ArrowHead,
    Position,
}

impl AttributeRenderer for BuiltinRenderer {
    fn render(&self, attribute: &Attribute, format_strings: bool) -> Option<String> {
        let fragment = match (self, attribute) {
            (BuiltinRenderer::Shape, Attribute::Shape(shape)) => format!("shape={shape}"),
            (BuiltinRenderer::NodeStyle, Attribute::NodeStyle(style)) => {
                format!("style={}", quote_if_needed(&style_list(style), format_strings))
            }
            (BuiltinRenderer::EdgeStyle, Attribute::EdgeStyle(style)) => {
                format!("style={}", quote_if_needed(&style_list(style), format_strings))
            }
            (BuiltinRenderer::FontColor, Attribute::FontColor(color)) => {
                format!("fontcolor=\"{}\"", color.to_hex())
            }
            (BuiltinRenderer::FillColor, Attribute::FillColor(color)) => {
                format!("fillcolor=\"{}\"", color.to_hex())
            }
            (BuiltinRenderer::Color, Attribute::Color(color)) => {
                format!("color=\"{}\"", color.to_hex())
            }
            (BuiltinRenderer::Label, Attribute::Label(text)) => {
                format!("label={}", quote_if_needed(text, format_strings))
            }
            (BuiltinRenderer::Width, Attribute::Width(value)) => format!("width={value:.2}"),
            (BuiltinRenderer::Height, Attribute::Height(value)) => format!("height={value:.2}"),
            (BuiltinRenderer::PenWidth, Attribute::PenWidth(value)) => {
                format!("penwidth={value:.2}")
            }
            (BuiltinRenderer::ArrowTail, Attribute::ArrowTail(arrow)) => {
                format!("arrowtail={arrow}")
            }
            (BuiltinRenderer::ArrowHead, Attribute::ArrowHead(arrow)) => {
                format!("arrowhead={arrow}")
            }
            (BuiltinRenderer::Position, Attribute::Position(point)) => {
                format!("pos=\"{:.2},{:.2}!\"", point.x, point.y)
            }
            _ => return None,
        };
        Some(fragment)
    }
}

/// Ordered renderer registry. The first renderer returning a fragment wins, so
/// earlier entries shadow later ones for the same kind.
pub struct Renderers {
    entries: Vec<Box<dyn AttributeRenderer>>,
}

impl Renderers {
    /// A registry with no renderers at all.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, renderer: impl AttributeRenderer + 'static) {
        self.entries.push(Box::new(renderer));
    }

    /// Registers `renderer` ahead of every existing one, overriding them.
    pub fn prepend(&mut self, renderer: impl AttributeRenderer + 'static) {
        self.entries.insert(0, Box::new(renderer));
    }

    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, renderer: impl AttributeRenderer + 'static) {
        self.entries.insert(index, Box::new(renderer));
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Box<dyn AttributeRenderer> {
        self.entries.remove(index)
    }

    /// # Panics
    ///
    /// Panics if `a` or `b` is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the renderer that would handle `attribute`, if any.
    pub fn position(&self, attribute: &Attribute) -> Option<usize> {
        self.entries
            .iter()
            .position(|r| r.render(attribute, false).is_some())
    }

    pub fn render(&self, attribute: &Attribute, format_strings: bool) -> Option<String> {
        self.entries
            .iter()
            .find_map(|r| r.render(attribute, format_strings))
    }
}

impl Default for Renderers {
    fn default() -> Self {
        let mut renderers = Self::empty();
        for builtin in BuiltinRenderer::iter() {
            renderers.push(builtin);
        }
        renderers
    }
}

impl fmt::Debug for Renderers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderers")
            .field("len", &self.entries.len())
            .finish()
    }
}
