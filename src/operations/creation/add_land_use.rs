use crate::error::Result;
use crate::model::{CityModel, CityObjectKind, Coordinate, ObjectId};

use super::{AddBoundaryObject, LandUseType};

/// Covers one grid cell with a flat land-use square.
///
/// The square is centred on `(x, y)` at `z = 0` with corners visited in the
/// order (-h,-h), (+h,-h), (+h,+h), (-h,+h), where `h` is the configured
/// half extent (50 by default).
pub struct AddLandUse {
    x: Coordinate,
    y: Coordinate,
    land_use: LandUseType,
    kind: CityObjectKind,
}

impl AddLandUse {
    /// Creates a `LandUse` object request.
    #[must_use]
    pub fn new(x: impl Into<Coordinate>, y: impl Into<Coordinate>, land_use: LandUseType) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            land_use,
            kind: CityObjectKind::LandUse,
        }
    }

    /// Creates a request from a land-use name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::OperationError::InvalidLandUseType`] if `name`
    /// is not one of `grass`, `water`, `building` or `asphalt`.
    pub fn from_name(
        x: impl Into<Coordinate>,
        y: impl Into<Coordinate>,
        name: &str,
    ) -> Result<Self> {
        Ok(Self::new(x, y, name.parse()?))
    }

    /// Overrides the object type tag (e.g. `WaterBody`).
    #[must_use]
    pub fn with_kind(mut self, kind: CityObjectKind) -> Self {
        self.kind = kind;
        self
    }

    /// Executes the operation, returning the id of the new object.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ConfigError::InvalidHalfExtent`] if the
    /// configured half extent is not finite and positive. Nothing is added in
    /// that case.
    pub fn execute(&self, model: &mut CityModel) -> Result<ObjectId> {
        model.config().validate()?;
        let h = model.config().landuse_half_extent();
        let z = Coordinate::Int(0);
        let ring = [(-h, -h), (h, -h), (h, h), (-h, h)]
            .map(|(dx, dy)| model.add_vertex(self.x.offset(dx), self.y.offset(dy), z));
        let material = model.add_material(self.land_use.name(), Some(self.land_use.color()));
        AddBoundaryObject::new(ring, material, self.kind).execute(model)
    }
}
