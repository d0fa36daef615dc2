use rand::Rng;

use crate::maze::lattice::{Edge, Lattice, Vertex};

/// Weight of an edge on the outer perimeter. Sorts before every interior edge.
pub const BORDER_WEIGHT: u8 = 1;

/// Random weight of an interior edge, uniform in `2..=6`.
fn interior_weight<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(2..=6)
}

/// Build every candidate edge of the lattice and sort them by ascending weight.
///
/// Vertices are visited in lattice order and random weights are drawn in that
/// order, so the result is reproducible for a seeded `rng`. Each vertex
/// contributes the edges towards `x + 1` and `y + 1`:
/// * perimeter segments get [`BORDER_WEIGHT`],
/// * everything else gets a random weight in `2..=6`.
///
/// The origin counts as a top border vertex, so the segment `(0,0)-(0,1)` is
/// weighted like an interior edge.
pub fn candidate_edges<R: Rng + ?Sized>(lattice: &Lattice, rng: &mut R) -> Vec<Edge> {
    let rows = lattice.rows();
    let columns = lattice.columns();
    let mut edges = Vec::with_capacity(2 * rows * columns + rows + columns);

    for &p in lattice.vertices() {
        let Vertex { x, y } = p;
        let right = Vertex::new(x + 1, y);
        let below = Vertex::new(x, y + 1);

        if x == rows && y < columns {
            // Right border
            edges.push(Edge::new(p, below, BORDER_WEIGHT));
        } else if x < rows && y == 0 {
            // Top border
            edges.push(Edge::new(p, right, BORDER_WEIGHT));
            edges.push(Edge::new(p, below, interior_weight(rng)));
        } else if x == 0 && y < columns {
            // Left border
            edges.push(Edge::new(p, right, interior_weight(rng)));
            edges.push(Edge::new(p, below, BORDER_WEIGHT));
        } else if x < rows && y == columns {
            // Bottom border
            edges.push(Edge::new(p, right, BORDER_WEIGHT));
        } else if x < rows && y < columns {
            edges.push(Edge::new(p, right, interior_weight(rng)));
            edges.push(Edge::new(p, below, interior_weight(rng)));
        }
    }

    // Stable, so equal weights keep lattice order
    edges.sort_by_key(|e| e.weight);
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_candidate_count() {
        let mut rng = get_rng(Some(5));
        for (rows, columns) in [(1, 1), (1, 2), (2, 2), (3, 3), (7, 4)] {
            let lattice = Lattice::new(rows, columns);
            let edges = candidate_edges(&lattice, &mut rng);
            assert_eq!(edges.len(), 2 * rows * columns + rows + columns);
        }
    }

    #[test]
    fn test_sorted_and_weight_classes() {
        let lattice = Lattice::new(4, 3);
        let edges = candidate_edges(&lattice, &mut get_rng(Some(1)));
        assert!(edges.windows(2).all(|w| w[0].weight <= w[1].weight));
        for edge in &edges {
            let on_perimeter = (edge.is_horizontal() && (edge.a.y == 0 || edge.a.y == 3))
                || (!edge.is_horizontal() && (edge.a.x == 0 || edge.a.x == 4));
            let is_origin_segment = edge.connects(Vertex::ORIGIN, Vertex::new(0, 1));
            if on_perimeter && !is_origin_segment {
                assert_eq!(edge.weight, BORDER_WEIGHT, "{:?}", edge);
            } else {
                assert!((2..=6).contains(&edge.weight), "{:?}", edge);
            }
        }
    }

    #[test]
    fn test_every_adjacent_pair_once() {
        let lattice = Lattice::new(3, 2);
        let edges = candidate_edges(&lattice, &mut get_rng(Some(9)));
        let unique: std::collections::HashSet<Edge> = edges.iter().copied().collect();
        assert_eq!(unique.len(), edges.len());
        assert!(edges.iter().all(|e| e.a.is_adjacent(&e.b)));
    }

    #[test]
    fn test_border_edges_first() {
        let lattice = Lattice::new(2, 2);
        let edges = candidate_edges(&lattice, &mut get_rng(Some(5)));
        // 2x2 has 8 perimeter segments, the origin's left one is weighted randomly
        let border = edges.iter().take_while(|e| e.weight == BORDER_WEIGHT).count();
        assert_eq!(border, 7);
    }
}
