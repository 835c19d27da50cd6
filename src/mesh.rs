#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// The position of the vertex, in grid-index units.
    pub position: cgmath::Point3<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quad {
    pub i0: i32,
    pub i1: i32,
    pub i2: i32,
    pub i3: i32,
}

impl Quad {
    pub fn new(i0: i32, i1: i32, i2: i32, i3: i32) -> Self {
        Self { i0, i1, i2, i3 }
    }
}
