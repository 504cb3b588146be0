use displaydoc::Display;
use thiserror::Error;

/// Largest item count whose terminals still fit into `u32` IDs.
pub const MAX_ITEMS: u32 = u32::MAX / 2;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Field {
    /// first item
    First,
    /// second item
    Second,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Item count {0} exceeds the supported maximum of {max}", max = MAX_ITEMS)]
    TooManyItems(u64),

    #[error("Query {query_index}: expected {field}, found end of input")]
    MissingToken { field: Field, query_index: usize },

    #[error("Query {query_index}: {field} `{token}` is not a non-negative integer")]
    InvalidToken {
        field: Field,
        query_index: usize,
        token: String,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub struct Input {
    pub n_items: u32,
    /// 1-based item pairs, unvalidated against `n_items`.
    pub queries: Vec<(u32, u32)>,
}

/// Parses `N M u_1 v_1 ... u_M v_M`.
///
/// Returns `Ok(None)` if the header itself is missing or malformed: such input is treated as
/// empty and produces no output. Tokens after the last query are ignored.
pub fn parse_input(text: &str) -> Result<Option<Input>, InputError> {
    let mut tokens = text.split_ascii_whitespace();

    let Some(n_items) = tokens.next().and_then(|token| token.parse::<u64>().ok()) else {
        return Ok(None);
    };
    let Some(n_queries) = tokens.next().and_then(|token| token.parse::<usize>().ok()) else {
        return Ok(None);
    };
    let n_items = u32::try_from(n_items)
        .ok()
        .filter(|&n| n <= MAX_ITEMS)
        .ok_or(InputError::TooManyItems(n_items))?;

    // The count comes from untrusted input, so don't reserve more than the text could hold.
    let mut queries = Vec::with_capacity(n_queries.min(text.len() / 4));
    for query_index in 1..=n_queries {
        let mut next = |field: Field| {
            let token = tokens
                .next()
                .ok_or(InputError::MissingToken { field, query_index })?;
            token.parse::<u32>().map_err(|_| InputError::InvalidToken {
                field,
                query_index,
                token: token.to_string(),
            })
        };
        let u = next(Field::First)?;
        let v = next(Field::Second)?;
        queries.push((u, v));
    }

    Ok(Some(Input { n_items, queries }))
}
