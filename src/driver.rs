use crate::tracker::OverlapTracker;
use log::debug;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Query {query_index}: item {item} is outside of 1..={n_items}")]
    ItemOutOfRange {
        query_index: usize,
        item: u32,
        n_items: u32,
    },
}

/// Applies the 1-based item pairs in order and returns the running total after each of them.
///
/// Query `(u, v)` joins the first terminal of item `u` with the second terminal of item `v`.
pub fn run_queries(
    n_items: u32,
    queries: impl IntoIterator<Item = (u32, u32)>,
) -> Result<Vec<u64>, QueryError> {
    let mut tracker = OverlapTracker::new(n_items);
    let universe = tracker.universe();
    let queries = queries.into_iter();
    let mut totals = Vec::with_capacity(queries.size_hint().0);

    for (index, (u, v)) in queries.enumerate() {
        let query_index = index + 1;
        let to_item = |item: u32| {
            if (1..=n_items).contains(&item) {
                Ok(item - 1)
            } else {
                Err(QueryError::ItemOutOfRange {
                    query_index,
                    item,
                    n_items,
                })
            }
        };
        let u = to_item(u)?;
        let v = to_item(v)?;
        tracker.unite(universe.first_terminal(u), universe.second_terminal(v));
        totals.push(tracker.total());
    }

    debug_assert_eq!(tracker.total(), tracker.recompute_total());
    debug!(
        "{} queries over {n_items} items, {} components left, final total {}",
        totals.len(),
        tracker.component_count(),
        tracker.total(),
    );
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::choose2;

    #[test]
    fn own_pair() {
        assert_eq!(run_queries(2, [(1, 1)]), Ok(vec![0]));
    }

    #[test]
    fn cycle() {
        assert_eq!(run_queries(3, [(1, 2), (2, 3), (3, 1)]), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn repeated_query_keeps_total() {
        assert_eq!(run_queries(3, [(1, 2), (1, 2), (1, 2)]), Ok(vec![1, 1, 1]));
    }

    #[test]
    fn collapse_everything() {
        // (i, i) joins both terminals of item i, then (i, i + 1) chains the items together.
        let n_items = 6;
        let mut queries: Vec<_> = (1..=n_items).map(|i| (i, i)).collect();
        queries.extend((1..n_items).map(|i| (i, i + 1)));
        let totals = run_queries(n_items, queries).unwrap();
        assert_eq!(*totals.last().unwrap(), choose2(n_items));
    }

    #[test]
    fn no_queries() {
        assert_eq!(run_queries(0, Vec::new()), Ok(vec![]));
        assert_eq!(run_queries(4, Vec::new()), Ok(vec![]));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            run_queries(3, [(1, 2), (4, 1)]),
            Err(QueryError::ItemOutOfRange {
                query_index: 2,
                item: 4,
                n_items: 3,
            }),
        );
        assert_eq!(
            run_queries(3, [(0, 1)]),
            Err(QueryError::ItemOutOfRange {
                query_index: 1,
                item: 0,
                n_items: 3,
            }),
        );
        assert!(run_queries(0, [(1, 1)]).is_err());
    }
}
