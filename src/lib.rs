//! Running pair-count aggregate over a merge-only partition of paired terminals.
//!
//! Each of `N` items owns two terminals. Terminals start out as singleton components and are merged
//! pairwise. After every merge, [`tracker::OverlapTracker`] reports
//!
//! ```text
//! Σ_C choose2(items(C)) − Σ_{C<D} choose2(overlap(C, D))
//! ```
//!
//! where `items(C)` is the number of items with a terminal in `C` and `overlap(C, D)` is the number
//! of items with one terminal in `C` and the other in `D`.

pub mod components;
pub mod driver;
pub mod input;
pub mod tracker;
pub mod union_find;
pub mod universe;
