use rand::{Rng, SeedableRng, rngs::StdRng};

pub mod grid_graph;
pub mod kruskal;
pub mod union_find;

use crate::{
    error::MazeError,
    maze::lattice::{Edge, Lattice},
};
use grid_graph::candidate_edges;
use kruskal::spanning_tree;

pub use kruskal::SpanningTree;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Weigh every lattice edge with `rng` and select the wall tree.
/// Returns the sorted candidate edges together with the tree built from them.
pub fn generate_walls<R: Rng + ?Sized>(
    lattice: &Lattice,
    rng: &mut R,
) -> Result<(Vec<Edge>, SpanningTree), MazeError> {
    let candidates = candidate_edges(lattice, rng);
    tracing::debug!(
        "[generate] {} vertices, {} candidate edges",
        lattice.vertex_count(),
        candidates.len()
    );
    let tree = spanning_tree(lattice, &candidates)?;
    Ok((candidates, tree))
}
