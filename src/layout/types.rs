//! Core types for the layout engine

use serde::Serialize;

use crate::data::Person;

/// A 2D point in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle used for collision checks
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this rectangle intersects another
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Grow the rectangle by `margin` on every side
    pub fn inflate(&self, margin: f64) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }
}

/// A positioned person in the output graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    /// Node id, equal to the person id
    pub id: String,
    /// The originating person record
    pub person: Person,
    /// Id of the first resolvable parent, for presentation-side lookups.
    /// A relation pointer, not an ownership edge; resolve it against the
    /// person collection.
    pub parent: Option<String>,
    /// Top-left corner of the node box
    pub position: Point,
    pub width: f64,
    pub height: f64,
}

impl LayoutNode {
    /// The node's core bounding box (not inflated)
    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }
}

/// A parent→child edge between two positioned nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutEdge {
    /// Edge id, `"<parentId>-<childId>"`
    pub id: String,
    pub source: String,
    pub target: String,
}

impl LayoutEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("{}-{}", source, target),
            source,
            target,
        }
    }
}

/// The complete result of layout computation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutGraph {
    /// Nodes in placement order
    pub nodes: Vec<LayoutNode>,
    /// One edge per resolvable (parent, child) pair
    pub edges: Vec<LayoutEdge>,
}

impl LayoutGraph {
    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Smallest rectangle containing every node, or `None` for an empty graph
    pub fn bounds(&self) -> Option<Rect> {
        let mut nodes = self.nodes.iter();
        let first = nodes.next()?.rect();
        Some(nodes.fold(first, |acc, node| {
            let r = node.rect();
            let x = acc.x.min(r.x);
            let y = acc.y.min(r.y);
            let right = acc.right().max(r.right());
            let bottom = acc.bottom().max(r.bottom());
            Rect::new(x, y, right - x, bottom - y)
        }))
    }
}
