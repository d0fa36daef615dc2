use std::collections::HashSet;

use crate::{
    error::MazeError,
    generators::{grid_graph::BORDER_WEIGHT, union_find::UnionFind},
    maze::lattice::{Edge, Lattice, Vertex},
};

/// The walls of a maze: a spanning tree over every lattice vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    /// Tree edges, in the order they were selected
    edges: Vec<Edge>,
    /// Closes the entry cell's left side. Not part of the tree proper.
    cosmetic: Edge,
}

impl SpanningTree {
    /// The real tree edges, `|vertices| - 1` of them.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The boundary segment appended after the tree was complete.
    pub fn cosmetic_edge(&self) -> Edge {
        self.cosmetic
    }

    /// Every wall segment: the tree edges followed by the cosmetic edge.
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().chain(std::iter::once(&self.cosmetic))
    }

    /// Number of wall segments, cosmetic edge included.
    pub fn wall_count(&self) -> usize {
        self.edges.len() + 1
    }
}

/// Select the minimum-weight spanning tree of `candidates` with Kruskal's algorithm.
///
/// `candidates` must already be sorted by ascending weight. Edges whose
/// endpoints are already connected, or that were accepted before, are skipped.
/// Selection stops once the tree spans the lattice.
pub fn spanning_tree(lattice: &Lattice, candidates: &[Edge]) -> Result<SpanningTree, MazeError> {
    if lattice.rows() == 0 || lattice.columns() == 0 {
        return Err(MazeError::InvalidDimensions {
            rows: lattice.rows(),
            columns: lattice.columns(),
        });
    }

    let target = lattice.vertex_count() - 1;
    let mut uf = UnionFind::new(lattice.vertex_count());
    let mut accepted: HashSet<Edge> = HashSet::with_capacity(target);
    let mut edges = Vec::with_capacity(target);

    for edge in candidates {
        if edges.len() == target {
            break;
        }
        let root_a = representative(lattice, &mut uf, edge.a)?;
        let root_b = representative(lattice, &mut uf, edge.b)?;
        if root_a == root_b {
            // Would close a cycle
            continue;
        }
        if !accepted.insert(*edge) {
            continue;
        }
        edges.push(*edge);
        uf.union(root_a, root_b);
    }

    if edges.len() < target {
        let msg = format!(
            "candidate edges exhausted after {} of {} tree edges",
            edges.len(),
            target
        );
        tracing::error!("[kruskal] {}", msg);
        return Err(MazeError::InconsistentTopology(msg));
    }

    tracing::debug!(
        "[kruskal] selected {} tree edges out of {} candidates, {} classes left",
        edges.len(),
        candidates.len(),
        uf.class_count()
    );

    Ok(SpanningTree {
        edges,
        cosmetic: Edge::new(Vertex::ORIGIN, Vertex::new(0, 1), BORDER_WEIGHT),
    })
}

/// Resolve the class representative of `v`, failing if `v` is not a lattice vertex.
fn representative(lattice: &Lattice, uf: &mut UnionFind, v: Vertex) -> Result<usize, MazeError> {
    lattice
        .index_of(v)
        .and_then(|i| uf.find(i))
        .ok_or_else(|| MazeError::InconsistentTopology(format!("vertex {:?} is not on the lattice", v)))
}
