mod grid;
mod populate_grid;

pub use grid::{GridCell, LczGrid};
pub use populate_grid::PopulateGrid;
