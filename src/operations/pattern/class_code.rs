use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{CityModel, CityObjectKind, ObjectId};
use crate::operations::creation::{AddLandUse, LandUseType};

use super::{LczClass, PlaceLcz};

/// A raw class code from the input classification raster.
///
/// Built types are encoded 51..=59 (LCZ 1-9) and 61 (LCZ 10); 17 and 21
/// denote water. Every other code is treated as generic land use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassCode(pub u16);

/// What a class code puts into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent {
    Built(LczClass),
    Water,
    LandUse,
}

impl ClassCode {
    /// Maps the code to the content of its cell.
    #[must_use]
    pub fn resolve(self) -> CellContent {
        match self.0 {
            code @ 51..=59 => CellContent::Built(LczClass::ALL[usize::from(code - 51)]),
            61 => CellContent::Built(LczClass::HeavyIndustry),
            17 | 21 => CellContent::Water,
            _ => CellContent::LandUse,
        }
    }
}

/// Fills one grid cell according to its raw class code.
pub struct PlaceClassCode {
    code: ClassCode,
    x: f64,
    y: f64,
}

impl PlaceClassCode {
    /// Creates a placement for the cell centred on `(x, y)`.
    #[must_use]
    pub fn new(code: ClassCode, x: f64, y: f64) -> Self {
        Self { code, x, y }
    }

    /// Executes the placement, returning the ids of the objects created.
    ///
    /// Unrecognised codes fall back to the configured land use rather than
    /// failing.
    ///
    /// # Errors
    ///
    /// Returns an error if an object cannot be added.
    pub fn execute(&self, model: &mut CityModel) -> Result<Vec<ObjectId>> {
        match self.code.resolve() {
            CellContent::Built(class) => PlaceLcz::new(class, self.x, self.y).execute(model),
            CellContent::Water => {
                let id = AddLandUse::new(self.x, self.y, LandUseType::Water)
                    .with_kind(CityObjectKind::WaterBody)
                    .execute(model)?;
                Ok(vec![id])
            }
            CellContent::LandUse => {
                let land_use = model.config().fallback_land_use();
                tracing::debug!(code = self.code.0, %land_use, "class code falls back to land use");
                let id = AddLandUse::new(self.x, self.y, land_use).execute(model)?;
                Ok(vec![id])
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;

    #[test]
    fn built_codes_map_to_lcz_numbers() {
        for code in 51..=59 {
            let CellContent::Built(class) = ClassCode(code).resolve() else {
                panic!("code {code} should be built");
            };
            assert_eq!(u16::from(class.number()), code - 50);
        }
        assert_eq!(
            ClassCode(61).resolve(),
            CellContent::Built(LczClass::HeavyIndustry)
        );
    }

    #[test]
    fn water_and_fallback_codes() {
        assert_eq!(ClassCode(17).resolve(), CellContent::Water);
        assert_eq!(ClassCode(21).resolve(), CellContent::Water);
        for code in [0, 11, 50, 60, 62, 255] {
            assert_eq!(ClassCode(code).resolve(), CellContent::LandUse, "code {code}");
        }
    }

    #[test]
    fn dispatch_places_matching_pattern() {
        for code in (51..=59).chain([61]) {
            let mut model = CityModel::new();
            let ids = PlaceClassCode::new(ClassCode(code), 50.0, 50.0)
                .execute(&mut model)
                .unwrap();
            let CellContent::Built(class) = ClassCode(code).resolve() else {
                unreachable!();
            };
            assert_eq!(ids.len(), class.placements().len());
            assert!(model
                .objects()
                .iter()
                .all(|o| o.kind == CityObjectKind::GenericCityObject));
        }
    }

    #[test]
    fn water_codes_create_water_bodies() {
        let mut model = CityModel::new();
        let ids = PlaceClassCode::new(ClassCode(17), 50.0, 50.0)
            .execute(&mut model)
            .unwrap();
        assert_eq!(ids.len(), 1);
        assert_eq!(model.object(&ids[0]).unwrap().kind, CityObjectKind::WaterBody);
        assert_eq!(model.materials().materials()[0].name, "water");
    }

    #[test]
    fn unknown_codes_use_configured_fallback() {
        let config = GeneratorConfig::default().with_fallback_land_use(LandUseType::Asphalt);
        let mut model = CityModel::with_config(config);
        let ids = PlaceClassCode::new(ClassCode(14), 150.0, 50.0)
            .execute(&mut model)
            .unwrap();
        assert_eq!(model.object(&ids[0]).unwrap().kind, CityObjectKind::LandUse);
        assert_eq!(model.materials().materials()[0].name, "asphalt");
    }
}
