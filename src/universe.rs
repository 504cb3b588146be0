/// The fixed pairing between items and terminals.
///
/// There are `n_items` items and twice as many terminals. Item `i` owns terminal `i` (its first
/// terminal) and terminal `i + n_items` (its second terminal). All IDs are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Universe {
    n_items: u32,
}

impl Universe {
    pub fn new(n_items: u32) -> Self {
        assert!(
            n_items <= u32::MAX / 2,
            "terminal IDs must fit into u32 below the root sentinel"
        );
        Self { n_items }
    }

    pub fn n_items(self) -> u32 {
        self.n_items
    }

    pub fn n_terminals(self) -> u32 {
        self.n_items * 2
    }

    pub fn first_terminal(self, item: u32) -> u32 {
        debug_assert!(item < self.n_items);
        item
    }

    pub fn second_terminal(self, item: u32) -> u32 {
        debug_assert!(item < self.n_items);
        item + self.n_items
    }

    pub fn item_of(self, terminal: u32) -> u32 {
        debug_assert!(terminal < self.n_terminals());
        if terminal < self.n_items {
            terminal
        } else {
            terminal - self.n_items
        }
    }

    /// The other terminal owned by the same item.
    pub fn twin(self, terminal: u32) -> u32 {
        if terminal < self.n_items {
            terminal + self.n_items
        } else {
            terminal - self.n_items
        }
    }
}
