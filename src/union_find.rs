const ROOT: u32 = u32::MAX;

/// Parent pointers over terminals. Which root survives a merge is decided by the caller, so there
/// is no rank or size here; path compression alone keeps `resolve` cheap.
pub struct UnionFind {
    // `ROOT` for roots, the parent ID otherwise.
    parents: Vec<u32>,
}

impl UnionFind {
    pub fn new(len: u32) -> Self {
        Self {
            parents: vec![ROOT; len as usize],
        }
    }

    pub fn len(&self) -> u32 {
        self.parents.len() as u32
    }

    /// Makes `child` a direct descendant of `parent`. Both must currently be roots.
    pub fn attach(&mut self, child: u32, parent: u32) {
        debug_assert!(self.is_root(child) && self.is_root(parent));
        debug_assert_ne!(child, parent);
        self.parents[child as usize] = parent;
    }

    pub fn resolve(&mut self, mut index: u32) -> u32 {
        let mut leader = index;
        while self.parents[leader as usize] != ROOT {
            leader = self.parents[leader as usize];
        }
        while index != leader {
            index = core::mem::replace(&mut self.parents[index as usize], leader);
        }
        leader
    }

    pub fn is_root(&self, index: u32) -> bool {
        self.parents[index as usize] == ROOT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_is_compressed() {
        let mut uf = UnionFind::new(5);
        uf.attach(0, 1);
        uf.attach(1, 2);
        uf.attach(2, 3);
        assert_eq!(uf.resolve(0), 3);
        // Every node on the walked path now points straight at the root.
        assert_eq!(uf.parents[..4], [3, 3, 3, ROOT]);
        assert!(uf.is_root(4));
        assert_eq!(uf.resolve(4), 4);
        assert_eq!(uf.len(), 5);
    }

    #[test]
    fn attach_reroots_whole_tree() {
        let mut uf = UnionFind::new(4);
        uf.attach(1, 0);
        uf.attach(3, 2);
        uf.attach(0, 2);
        for index in 0..4 {
            assert_eq!(uf.resolve(index), 2);
        }
        assert!(!uf.is_root(0));
        assert!(uf.is_root(2));
    }
}
