use crate::error::Result;
use crate::model::{CityModel, ObjectId};
use crate::operations::creation::AddCube;

use super::LczClass;

/// Fills one grid cell with the cube constellation of an LCZ class.
pub struct PlaceLcz {
    class: LczClass,
    x: f64,
    y: f64,
}

impl PlaceLcz {
    /// Creates a placement for the cell centred on `(x, y)`.
    #[must_use]
    pub fn new(class: LczClass, x: f64, y: f64) -> Self {
        Self { class, x, y }
    }

    /// Executes the placement, returning the ids of the cubes in table order.
    ///
    /// # Errors
    ///
    /// Returns an error if a cube cannot be added.
    pub fn execute(&self, model: &mut CityModel) -> Result<Vec<ObjectId>> {
        self.class
            .placements()
            .iter()
            .map(|p| {
                let [sx, sy, sz] = p.scale;
                AddCube::new(self.x + p.offset[0], self.y + p.offset[1], 0.0)
                    .with_scaling(sx, sy, sz)
                    .execute(model)
            })
            .collect()
    }
}
