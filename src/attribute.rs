use std::fmt;

use bitflags::{Flags, bitflags};
use strum::{AsRefStr, Display, EnumIter};

/// RGBA color, written as `#rrggbb` or `#rrggbbaa` when not fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Graphviz node shapes. The DOT name is the lowercased variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Shape {
    Box,
    Polygon,
    Ellipse,
    Oval,
    Circle,
    Point,
    Egg,
    Triangle,
    PlainText,
    Plain,
    Diamond,
    Trapezium,
    Parallelogram,
    House,
    Pentagon,
    Hexagon,
    Septagon,
    Octagon,
    DoubleCircle,
    DoubleOctagon,
    TripleOctagon,
    InvTriangle,
    InvTrapezium,
    InvHouse,
    MDiamond,
    MSquare,
    MCircle,
    Rect,
    Rectangle,
    Square,
    Star,
    None,
    Underline,
    Cylinder,
    Note,
    Tab,
    Folder,
    Box3d,
    Component,
}

/// Arrow head and tail kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ArrowType {
    Normal,
    Inv,
    Dot,
    InvDot,
    ODot,
    InvODot,
    None,
    Tee,
    Empty,
    InvEmpty,
    Diamond,
    ODiamond,
    EDiamond,
    Crow,
    Box,
    OBox,
    Open,
    HalfOpen,
    Vee,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NodeStyle: u16 {
        const FILLED = 1 << 0;
        const INVIS = 1 << 1;
        const DIAGONALS = 1 << 2;
        const ROUNDED = 1 << 3;
        const DASHED = 1 << 4;
        const DOTTED = 1 << 5;
        const SOLID = 1 << 6;
        const BOLD = 1 << 7;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EdgeStyle: u16 {
        const DASHED = 1 << 0;
        const DOTTED = 1 << 1;
        const SOLID = 1 << 2;
        const INVIS = 1 << 3;
        const BOLD = 1 << 4;
        const TAPERED = 1 << 5;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SubgraphStyle: u16 {
        const FILLED = 1 << 0;
        const STRIPED = 1 << 1;
        const ROUNDED = 1 << 2;
        const DASHED = 1 << 3;
        const DOTTED = 1 << 4;
        const SOLID = 1 << 5;
        const BOLD = 1 << 6;
        const INVIS = 1 << 7;
    }
}

/// Joins the lowercased names of every set flag with `|`, in declaration order.
pub fn style_list<F: Flags>(flags: &F) -> String {
    flags
        .iter_names()
        .map(|(name, _)| name.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("|")
}

/// Identifies an attribute independent of its value. An element holds at most
/// one attribute per kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum AttributeKind {
    Color,
    FontColor,
    FillColor,
    Label,
    Shape,
    NodeStyle,
    EdgeStyle,
    SubgraphStyle,
    Width,
    Height,
    PenWidth,
    ArrowHead,
    ArrowTail,
    Position,
    Custom(String),
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeKind::Custom(name) => write!(f, "custom({name})"),
            other => f.write_str(other.as_ref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Color(Color),
    FontColor(Color),
    FillColor(Color),
    Label(String),
    Shape(Shape),
    NodeStyle(NodeStyle),
    EdgeStyle(EdgeStyle),
    SubgraphStyle(SubgraphStyle),
    Width(f64),
    Height(f64),
    PenWidth(f64),
    ArrowHead(ArrowType),
    ArrowTail(ArrowType),
    Position(Point),
    /// Caller-defined attribute. No renderer handles it by default.
    Custom { name: String, value: String },
}

impl Attribute {
    pub fn label(text: impl Into<String>) -> Self {
        Attribute::Label(text.into())
    }

    pub fn custom(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute::Custom {
            name: name.into(),
            value: value.into(),
        }
    }

    /// False when a numeric value is NaN or infinite and cannot be written as DOT.
    pub fn is_finite(&self) -> bool {
        match self {
            Attribute::Width(v) | Attribute::Height(v) | Attribute::PenWidth(v) => v.is_finite(),
            Attribute::Position(p) => p.x.is_finite() && p.y.is_finite(),
            _ => true,
        }
    }

    pub fn kind(&self) -> AttributeKind {
        match self {
            Attribute::Color(_) => AttributeKind::Color,
            Attribute::FontColor(_) => AttributeKind::FontColor,
            Attribute::FillColor(_) => AttributeKind::FillColor,
            Attribute::Label(_) => AttributeKind::Label,
            Attribute::Shape(_) => AttributeKind::Shape,
            Attribute::NodeStyle(_) => AttributeKind::NodeStyle,
            Attribute::EdgeStyle(_) => AttributeKind::EdgeStyle,
            Attribute::SubgraphStyle(_) => AttributeKind::SubgraphStyle,
            Attribute::Width(_) => AttributeKind::Width,
            Attribute::Height(_) => AttributeKind::Height,
            Attribute::PenWidth(_) => AttributeKind::PenWidth,
            Attribute::ArrowHead(_) => AttributeKind::ArrowHead,
            Attribute::ArrowTail(_) => AttributeKind::ArrowTail,
            Attribute::Position(_) => AttributeKind::Position,
            Attribute::Custom { name, .. } => AttributeKind::Custom(name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_opaque_omits_alpha() {
        assert_eq!(Color::rgb(255, 0, 0).to_hex(), "#ff0000");
    }

    #[test]
    fn hex_translucent_appends_alpha() {
        assert_eq!(Color::rgba(0x12, 0xab, 0x00, 0x80).to_hex(), "#12ab0080");
    }

    #[test]
    fn shape_names_are_lowercase() {
        assert_eq!(Shape::DoubleCircle.to_string(), "doublecircle");
        assert_eq!(Shape::Box3d.to_string(), "box3d");
        assert_eq!(Shape::MDiamond.to_string(), "mdiamond");
    }

    #[test]
    fn arrow_names_are_lowercase() {
        assert_eq!(ArrowType::InvODot.to_string(), "invodot");
        assert_eq!(ArrowType::None.to_string(), "none");
    }

    #[test]
    fn style_list_single_flag() {
        assert_eq!(style_list(&NodeStyle::FILLED), "filled");
    }

    #[test]
    fn style_list_joins_in_declaration_order() {
        assert_eq!(
            style_list(&(NodeStyle::ROUNDED | NodeStyle::FILLED)),
            "filled|rounded"
        );
        assert_eq!(style_list(&(EdgeStyle::BOLD | EdgeStyle::DASHED)), "dashed|bold");
    }

    #[test]
    fn style_list_empty() {
        assert_eq!(style_list(&SubgraphStyle::empty()), "");
    }

    #[test]
    fn kind_display() {
        assert_eq!(AttributeKind::FontColor.to_string(), "font-color");
        assert_eq!(AttributeKind::PenWidth.to_string(), "pen-width");
        assert_eq!(
            AttributeKind::Custom("tooltip".into()).to_string(),
            "custom(tooltip)"
        );
    }

    #[test]
    fn non_finite_numbers() {
        assert!(Attribute::Width(1.0).is_finite());
        assert!(!Attribute::Height(f64::NAN).is_finite());
        assert!(!Attribute::PenWidth(f64::NEG_INFINITY).is_finite());
        assert!(!Attribute::Position(Point::new(f64::INFINITY, 0.0)).is_finite());
        assert!(Attribute::label("NaN").is_finite());
    }

    #[test]
    fn custom_kind_carries_name() {
        let attr = Attribute::custom("tooltip", "hi");
        assert_eq!(attr.kind(), AttributeKind::Custom("tooltip".into()));
    }
}
