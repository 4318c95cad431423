use std::collections::BTreeMap;

use crate::error::Result;
use crate::model::{
    CityModel, CityObjectKind, Geometry, MaterialIndex, MaterialValues, ObjectId, VertexIndex,
};

/// Level of detail written for explicit surfaces.
const SURFACE_LOD: &str = "2";

/// Adds an object made of one flat quadrilateral with a material attached.
///
/// The material is referenced under the theme `<material name>_<index>`.
pub struct AddBoundaryObject {
    ring: [VertexIndex; 4],
    material: MaterialIndex,
    kind: CityObjectKind,
}

impl AddBoundaryObject {
    /// Creates a new `AddBoundaryObject` operation.
    ///
    /// The ring order is kept as given; winding is not checked.
    #[must_use]
    pub fn new(ring: [VertexIndex; 4], material: MaterialIndex, kind: CityObjectKind) -> Self {
        Self {
            ring,
            material,
            kind,
        }
    }

    /// Executes the operation, returning the id of the new object.
    ///
    /// # Errors
    ///
    /// Returns an error if a ring vertex or the material is not part of
    /// `model`. Nothing is added in that case.
    pub fn execute(&self, model: &mut CityModel) -> Result<ObjectId> {
        for &vertex in &self.ring {
            model.check_vertex(vertex)?;
        }
        let theme = format!("{}_{}", model.materials().get(self.material)?.name, self.material.0);

        let mut material = BTreeMap::new();
        material.insert(
            theme,
            MaterialValues {
                values: vec![self.material],
            },
        );
        let geometry = Geometry::MultiSurface {
            lod: SURFACE_LOD.into(),
            boundaries: vec![vec![self.ring.to_vec()]],
            material,
        };
        Ok(model.insert_object(self.kind, vec![geometry]))
    }
}
