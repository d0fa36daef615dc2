use std::hash::{Hash, Hasher};

/// A grid intersection point, in lattice units (one unit per cell side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    pub x: usize,
    pub y: usize,
}

impl Vertex {
    pub const ORIGIN: Vertex = Vertex { x: 0, y: 0 };

    pub fn new(x: usize, y: usize) -> Self {
        Vertex { x, y }
    }

    /// Pixel coordinates of the vertex for the given cell size.
    pub fn scaled(&self, cell_size: usize) -> (usize, usize) {
        (self.x * cell_size, self.y * cell_size)
    }

    /// Whether `other` is exactly one grid step away, horizontally or vertically.
    pub fn is_adjacent(&self, other: &Vertex) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

/// A segment between two adjacent lattice vertices.
///
/// Identity is the unordered vertex pair: the weight and the order of the
/// endpoints do not take part in equality or hashing.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub a: Vertex,
    pub b: Vertex,
    pub weight: u8,
}

impl Edge {
    pub fn new(a: Vertex, b: Vertex, weight: u8) -> Self {
        debug_assert!(
            a.is_adjacent(&b),
            "edge endpoints {:?} and {:?} are not adjacent",
            a,
            b
        );
        Edge { a, b, weight }
    }

    /// Endpoints ordered so that the smaller vertex comes first.
    fn key(&self) -> (Vertex, Vertex) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }

    /// Checks whether this edge joins `one` and `two`, in either order.
    pub fn connects(&self, one: Vertex, two: Vertex) -> bool {
        (self.a == one && self.b == two) || (self.a == two && self.b == one)
    }

    /// A horizontal edge runs along the x axis, both endpoints share `y`.
    pub fn is_horizontal(&self) -> bool {
        self.a.y == self.b.y
    }

    /// Midpoint of the edge in pixel coordinates.
    pub fn center(&self, cell_size: usize) -> (usize, usize) {
        let (ax, ay) = self.a.scaled(cell_size);
        let (bx, by) = self.b.scaled(cell_size);
        ((ax + bx) / 2, (ay + by) / 2)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// The `(rows + 1) x (columns + 1)` set of grid intersection points.
#[derive(Debug, Clone)]
pub struct Lattice {
    rows: usize,
    columns: usize,
    vertices: Vec<Vertex>,
}

impl Lattice {
    /// Enumerates the vertices in column-major order: x outer, y inner.
    /// The order fixes the index of each vertex and the order of random draws.
    pub fn new(rows: usize, columns: usize) -> Self {
        let vertices = (0..=rows)
            .flat_map(|x| (0..=columns).map(move |y| Vertex::new(x, y)))
            .collect();
        Lattice {
            rows,
            columns,
            vertices,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Index of `v` in the vertex list, or `None` if it lies outside the lattice.
    pub fn index_of(&self, v: Vertex) -> Option<usize> {
        (v.x <= self.rows && v.y <= self.columns).then(|| v.x * (self.columns + 1) + v.y)
    }
}
