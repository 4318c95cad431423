use crate::error::Result;
use crate::model::{CityModel, ObjectId};
use crate::operations::pattern::PlaceClassCode;

use super::LczGrid;

/// Runs the class-code dispatcher over every cell of a grid.
pub struct PopulateGrid<'a> {
    grid: &'a LczGrid,
}

impl<'a> PopulateGrid<'a> {
    /// Creates a new `PopulateGrid` operation.
    #[must_use]
    pub fn new(grid: &'a LczGrid) -> Self {
        Self { grid }
    }

    /// Executes the operation, returning the ids created for each cell in
    /// grid order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while placing a cell. Cells placed
    /// before it stay in the model.
    pub fn execute(&self, model: &mut CityModel) -> Result<Vec<Vec<ObjectId>>> {
        let per_cell = self
            .grid
            .cells()
            .iter()
            .map(|cell| PlaceClassCode::new(cell.code, cell.x, cell.y).execute(model))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            cells = self.grid.len(),
            objects = per_cell.iter().map(Vec::len).sum::<usize>(),
            "populated grid"
        );
        Ok(per_cell)
    }
}
