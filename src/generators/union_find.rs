/// Disjoint sets over the indices `0..size`, with path compression and union by rank.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    classes: usize,
}

impl UnionFind {
    /// Every index starts as its own representative.
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
            classes: size,
        }
    }

    /// Representative of `x`'s class, or `None` if `x` is not in the set.
    pub fn find(&mut self, x: usize) -> Option<usize> {
        if x >= self.parent.len() {
            return None;
        }
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Point the whole chain straight at the root
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        Some(root)
    }

    /// Merges the classes represented by `root_x` and `root_y`.
    ///
    /// Both arguments must already be representatives, resolved with [`UnionFind::find`].
    /// Returns `false` if they are the same class.
    pub fn union(&mut self, root_x: usize, root_y: usize) -> bool {
        debug_assert_eq!(self.parent[root_x], root_x, "{} is not a representative", root_x);
        debug_assert_eq!(self.parent[root_y], root_y, "{} is not a representative", root_y);

        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        self.classes -= 1;
        true
    }

    /// Whether `x` and `y` are in the same class. Unknown indices are in no class.
    pub fn same_class(&mut self, x: usize, y: usize) -> bool {
        match (self.find(x), self.find(y)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Number of disjoint classes left.
    pub fn class_count(&self) -> usize {
        self.classes
    }
}
