pub mod types;
pub mod error;
pub mod rescale;
pub mod select;
pub mod weight;

pub use error::MatrixError;
pub use types::ScoreMatrix;
