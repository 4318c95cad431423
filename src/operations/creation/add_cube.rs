use crate::error::Result;
use crate::model::{CityModel, Coordinate, ObjectId, VertexIndex};

use super::AddTemplateInstance;

/// Places the unit cube template, registering it on first use.
pub struct AddCube {
    anchor: CubeAnchor,
    scaling: (f64, f64, f64),
}

#[derive(Debug, Clone, Copy)]
enum CubeAnchor {
    Point([Coordinate; 3]),
    Vertex(VertexIndex),
}

impl AddCube {
    /// Creates a cube whose origin corner sits at `(x, y, z)`.
    #[must_use]
    pub fn new(x: impl Into<Coordinate>, y: impl Into<Coordinate>, z: impl Into<Coordinate>) -> Self {
        Self {
            anchor: CubeAnchor::Point([x.into(), y.into(), z.into()]),
            scaling: (1.0, 1.0, 1.0),
        }
    }

    /// Creates a cube anchored at an existing vertex.
    #[must_use]
    pub fn at_vertex(vertex: VertexIndex) -> Self {
        Self {
            anchor: CubeAnchor::Vertex(vertex),
            scaling: (1.0, 1.0, 1.0),
        }
    }

    /// Sets the cube's extent along each axis.
    #[must_use]
    pub fn with_scaling(mut self, sx: f64, sy: f64, sz: f64) -> Self {
        self.scaling = (sx, sy, sz);
        self
    }

    /// Executes the operation, returning the id of the new object.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing anchor vertex is not part of `model`.
    pub fn execute(&self, model: &mut CityModel) -> Result<ObjectId> {
        let cube = model.cube_template();
        let (sx, sy, sz) = self.scaling;
        let instance = match self.anchor {
            CubeAnchor::Point([x, y, z]) => AddTemplateInstance::new(cube, x, y, z),
            CubeAnchor::Vertex(vertex) => AddTemplateInstance::at_vertex(cube, vertex),
        };
        instance.with_scaling(sx, sy, sz).execute(model)
    }
}
