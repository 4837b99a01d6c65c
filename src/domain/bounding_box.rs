use serde::{Deserialize, Serialize};

// One corner of a detection polygon, in pixel coordinates (top-left origin).
// Vision responses omit zero-valued fields, hence the serde defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

// Axis-aligned pixel box. Detections arrive as 4-vertex polygons in arbitrary
// corner order; we only ever need the enclosing rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BoundingBox {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        BoundingBox { x1, y1, x2, y2 }
    }

    /// Enclosing rectangle of a detection polygon. `None` for an empty polygon.
    pub fn from_vertices(vertices: &[Vertex]) -> Option<Self> {
        let first = vertices.first()?;
        let mut bounds = BoundingBox::new(first.x, first.y, first.x, first.y);
        for v in &vertices[1..] {
            bounds.x1 = bounds.x1.min(v.x);
            bounds.y1 = bounds.y1.min(v.y);
            bounds.x2 = bounds.x2.max(v.x);
            bounds.y2 = bounds.y2.max(v.y);
        }
        Some(bounds)
    }

    /// Smallest box covering both inputs.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    /// Vertical midpoint, used for line grouping and proximity checks.
    pub fn center_y(&self) -> i32 {
        (self.y1 + self.y2) / 2
    }
}
