//! Pugh-style decision matrices.
//!
//! A [`ScoreMatrix`] scores a fixed set of options against an open,
//! insertion-ordered set of criteria. From there: rescale into [0,1]
//! globally or per criterion, derive weighted-sum criteria and
//! favor-one-criterion mixtures, project subsets of criteria or options
//! into new matrices, and add matrices cell-wise. The `render` module
//! holds presentation adapters (text table, HTML table, bar chart) that
//! consume the matrix read-only through its ordered accessors.

pub mod matrix;
pub mod render;

pub use matrix::{MatrixError, ScoreMatrix};
