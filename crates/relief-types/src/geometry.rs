use serde::{Deserialize, Serialize};

/// A mesh vertex in model units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vertex {
    pub const ZERO: Vertex = Vertex {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

/// One facet of a triangle soup.
///
/// `normal` is the zero vector for relief output; readers recompute it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub normal: Vertex,
    pub vertices: [Vertex; 3],
}

impl Triangle {
    /// Triangle with an unspecified (zero) facet normal.
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self {
            normal: Vertex::ZERO,
            vertices: [a, b, c],
        }
    }
}
