// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Spinner and error message
// - search.rs: The debounced search box
// - movie.rs: Movie cards and the results grid
// - trending.rs: Ranked trending posters

pub mod common;
pub mod search;
pub mod movie;
pub mod trending;

// Re-export commonly used components for convenience
pub use common::*;
pub use search::*;
pub use movie::*;
pub use trending::*;
