// Incremental maintenance of
//
//     total = Σ_C choose2(items(C)) − Σ_{C<D} choose2(overlap(C, D))
//
// over a merge-only partition of terminals, where `items(C)` counts items with at least one
// terminal in `C` and `overlap(C, D)` counts items split between `C` and `D`.
//
// A merge of `small` into `big` only changes terms mentioning one of the two: their own
// `choose2(items)` terms, the bridge term `choose2(overlap(small, big))`, and for each third
// component `X` adjacent to `small` the pair of terms for `(small, X)` and `(big, X)`, which
// collapse into a single term for the combined overlap. Everything else is untouched, so a merge
// costs O(degree(small)) map operations. Picking the side with the smaller neighbor map as
// `small` bounds the total number of rewritten entries by O(U log U) over any merge sequence.

use crate::components::ComponentStore;
use crate::union_find::UnionFind;
use crate::universe::Universe;
use log::trace;

pub fn choose2(n: u32) -> u64 {
    let n = u64::from(n);
    n * n.saturating_sub(1) / 2
}

pub struct OverlapTracker {
    universe: Universe,
    union_find: UnionFind,
    components: ComponentStore,
    n_components: u32,
    total: u64,
}

impl OverlapTracker {
    pub fn new(n_items: u32) -> Self {
        let universe = Universe::new(n_items);
        let n_terminals = universe.n_terminals();
        let mut components = ComponentStore::new(n_terminals);
        for terminal in 0..n_terminals {
            components.set_item_count(terminal, 1);
            components.set_overlap(terminal, universe.twin(terminal), 1);
        }
        // Every singleton holds one item and every overlap is 1, so all terms vanish.
        Self {
            universe,
            union_find: UnionFind::new(n_terminals),
            components,
            n_components: n_terminals,
            total: 0,
        }
    }

    pub fn universe(&self) -> Universe {
        self.universe
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn component_count(&self) -> u32 {
        self.n_components
    }

    pub fn find(&mut self, terminal: u32) -> u32 {
        self.union_find.resolve(terminal)
    }

    pub fn item_count(&mut self, terminal: u32) -> u32 {
        let root = self.find(terminal);
        self.components.item_count(root)
    }

    /// The number of items split between the components of `a` and `b`. Zero if both terminals
    /// are in the same component.
    pub fn overlap(&mut self, a: u32, b: u32) -> u32 {
        let a = self.find(a);
        let b = self.find(b);
        if a == b {
            return 0;
        }
        self.components.overlap(a, b)
    }

    /// Merges the components containing `a` and `b`. Returns `false` without touching anything if
    /// they are already the same component.
    pub fn unite(&mut self, a: u32, b: u32) -> bool {
        let a = self.find(a);
        let b = self.find(b);
        if a == b {
            return false;
        }

        let (small, big) = if self.components.degree(a) < self.components.degree(b) {
            (a, b)
        } else {
            (b, a)
        };

        // Item terms enter with a plus sign and overlap terms with a minus sign. `added` collects
        // everything that raises the total and `removed` everything that lowers it; applying them
        // one by one could dip below zero, so the total is only updated once at the end.
        let small_items = self.components.item_count(small);
        let big_items = self.components.item_count(big);
        let mut removed = choose2(small_items) + choose2(big_items);
        let mut added = 0;

        let small_neighbors = self.components.take_neighbors(small);

        let bridge = small_neighbors.get(&big).copied().unwrap_or(0);
        if bridge > 0 {
            added += choose2(bridge);
            self.components.remove_overlap(big, small);
        }

        for (&other, &count) in &small_neighbors {
            if other == big {
                continue;
            }
            let existing = self.components.overlap(big, other);
            let combined = existing + count;
            added += choose2(count) + choose2(existing);
            removed += choose2(combined);
            self.components.set_overlap(big, other, combined);
            self.components.relink(other, small, big, combined);
        }

        self.union_find.attach(small, big);
        let merged_items = small_items + big_items - bridge;
        self.components.set_item_count(big, merged_items);
        added += choose2(merged_items);
        self.n_components -= 1;

        self.total = self.total + added - removed;

        trace!(
            "merged {small} into {big}: items {merged_items}, bridge {bridge}, moved {} neighbors, total {}",
            small_neighbors.len() - usize::from(bridge > 0),
            self.total,
        );
        true
    }

    /// Evaluates the aggregate from the stored per-component state instead of the running total.
    /// Linear in the number of terminals plus live map entries.
    pub fn recompute_total(&self) -> u64 {
        let mut items = 0;
        let mut overlaps = 0;
        for terminal in 0..self.union_find.len() {
            if !self.union_find.is_root(terminal) {
                continue;
            }
            items += choose2(self.components.item_count(terminal));
            for (other, count) in self.components.neighbors(terminal) {
                // Each overlap is stored on both sides; count it once.
                if terminal < other {
                    overlaps += choose2(count);
                }
            }
        }
        items - overlaps
    }

    /// The live roots and their neighbor maps, for inspection.
    pub fn roots(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.union_find.len()).filter(|&terminal| self.union_find.is_root(terminal))
    }

    pub fn neighbors_of_root(&self, root: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        debug_assert!(self.union_find.is_root(root));
        self.components.neighbors(root)
    }

    pub fn item_count_of_root(&self, root: u32) -> u32 {
        debug_assert!(self.union_find.is_root(root));
        self.components.item_count(root)
    }
}
