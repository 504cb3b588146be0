use rustc_hash::FxHashMap;

/// Per-component payload, indexed by terminal ID but only meaningful at roots.
///
/// `neighbors[a][b]` is the number of items with one terminal in component `a` and the other one
/// in component `b`. Entries are never zero, never point at a dead root, and are mirrored:
/// `neighbors[a][b] == neighbors[b][a]`. Keeping the mirror intact is the caller's job; the store
/// only offers the primitives, `relink` being the one that touches a third party.
pub struct ComponentStore {
    item_counts: Vec<u32>,
    neighbors: Vec<FxHashMap<u32, u32>>,
}

impl ComponentStore {
    pub fn new(len: u32) -> Self {
        Self {
            item_counts: vec![0; len as usize],
            neighbors: (0..len).map(|_| FxHashMap::default()).collect(),
        }
    }

    pub fn item_count(&self, root: u32) -> u32 {
        self.item_counts[root as usize]
    }

    pub fn set_item_count(&mut self, root: u32, count: u32) {
        self.item_counts[root as usize] = count;
    }

    pub fn overlap(&self, root: u32, other: u32) -> u32 {
        self.neighbors[root as usize]
            .get(&other)
            .copied()
            .unwrap_or(0)
    }

    /// Writes one side of an overlap. A zero count removes the entry.
    pub fn set_overlap(&mut self, root: u32, other: u32, count: u32) {
        debug_assert_ne!(root, other, "a component does not overlap itself");
        let map = &mut self.neighbors[root as usize];
        if count == 0 {
            map.remove(&other);
        } else {
            map.insert(other, count);
        }
    }

    /// Removes one side of an overlap, returning the old count (0 if absent).
    pub fn remove_overlap(&mut self, root: u32, other: u32) -> u32 {
        self.neighbors[root as usize].remove(&other).unwrap_or(0)
    }

    pub fn degree(&self, root: u32) -> usize {
        self.neighbors[root as usize].len()
    }

    pub fn neighbors(&self, root: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.neighbors[root as usize]
            .iter()
            .map(|(&other, &count)| (other, count))
    }

    /// Empties the neighbor map of `root`, handing its entries to the caller. The slot is left with
    /// a fresh unallocated map.
    pub fn take_neighbors(&mut self, root: u32) -> FxHashMap<u32, u32> {
        core::mem::take(&mut self.neighbors[root as usize])
    }

    /// Moves `other`'s back-reference from `from` onto `to`, storing `count` under `to`.
    ///
    /// This is used when `from` is absorbed into `to`: the third component `other` must stop
    /// mentioning `from` before `from`'s own map is dropped, and its entry for `to` must reflect
    /// the combined overlap.
    pub fn relink(&mut self, other: u32, from: u32, to: u32, count: u32) {
        debug_assert!(other != from && other != to && from != to);
        let map = &mut self.neighbors[other as usize];
        map.remove(&from);
        if count == 0 {
            map.remove(&to);
        } else {
            map.insert(to, count);
        }
    }
}
