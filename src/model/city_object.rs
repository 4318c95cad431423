use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::material::MaterialIndex;
use super::template::TemplateIndex;
use super::vertex::VertexIndex;

/// Unique identifier of a city object within one model (`id_0`, `id_1`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    pub(crate) fn from_counter(n: u64) -> Self {
        Self(format!("id_{n}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The CityJSON type tag of a city object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CityObjectKind {
    #[default]
    GenericCityObject,
    LandUse,
    WaterBody,
    PlantCover,
    Building,
    TransportSquare,
}

/// Material reference of one appearance theme: one value per surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialValues {
    pub values: Vec<MaterialIndex>,
}

/// Geometry attached to a city object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// A library template placed at an anchor vertex.
    GeometryInstance {
        template: TemplateIndex,
        /// Always exactly one anchor vertex.
        boundaries: [VertexIndex; 1],
        /// Row-major 4x4 affine transform.
        #[serde(rename = "transformationMatrix")]
        transformation_matrix: [f64; 16],
    },
    /// Explicit surfaces given as rings of main-vertex indices.
    MultiSurface {
        lod: String,
        boundaries: Vec<Vec<Vec<VertexIndex>>>,
        material: BTreeMap<String, MaterialValues>,
    },
}

impl Geometry {
    /// Every main-vertex index the geometry references.
    #[must_use]
    pub fn vertex_indices(&self) -> Vec<VertexIndex> {
        match self {
            Self::GeometryInstance { boundaries, .. } => boundaries.to_vec(),
            Self::MultiSurface { boundaries, .. } => {
                boundaries.iter().flatten().flatten().copied().collect()
            }
        }
    }

    /// Every material index the geometry references.
    #[must_use]
    pub fn material_indices(&self) -> Vec<MaterialIndex> {
        match self {
            Self::GeometryInstance { .. } => Vec::new(),
            Self::MultiSurface { material, .. } => material
                .values()
                .flat_map(|theme| theme.values.iter().copied())
                .collect(),
        }
    }

    /// The template this geometry instantiates, if any.
    #[must_use]
    pub fn template_index(&self) -> Option<TemplateIndex> {
        match self {
            Self::GeometryInstance { template, .. } => Some(*template),
            Self::MultiSurface { .. } => None,
        }
    }
}

/// A city object record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityObject {
    #[serde(skip)]
    pub id: ObjectId,
    #[serde(rename = "type")]
    pub kind: CityObjectKind,
    pub geometry: Vec<Geometry>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_follow_counter() {
        assert_eq!(ObjectId::from_counter(0).as_str(), "id_0");
        assert_eq!(ObjectId::from_counter(42).to_string(), "id_42");
    }

    #[test]
    fn instance_serializes_with_type_tag() {
        let geometry = Geometry::GeometryInstance {
            template: TemplateIndex(0),
            boundaries: [VertexIndex(3)],
            transformation_matrix: [0.0; 16],
        };
        let value = serde_json::to_value(&geometry).unwrap();
        assert_eq!(value["type"], "GeometryInstance");
        assert_eq!(value["template"], 0);
        assert_eq!(value["boundaries"], json!([3]));
        assert_eq!(value["transformationMatrix"].as_array().unwrap().len(), 16);
    }

    #[test]
    fn multi_surface_lists_all_references() {
        let mut material = BTreeMap::new();
        material.insert(
            "water_1".to_owned(),
            MaterialValues {
                values: vec![MaterialIndex(1)],
            },
        );
        let geometry = Geometry::MultiSurface {
            lod: "2".into(),
            boundaries: vec![vec![vec![VertexIndex(4), VertexIndex(5), VertexIndex(6), VertexIndex(7)]]],
            material,
        };
        let vertices: Vec<_> = geometry.vertex_indices().iter().map(|v| v.0).collect();
        assert_eq!(vertices, vec![4, 5, 6, 7]);
        assert_eq!(geometry.material_indices(), vec![MaterialIndex(1)]);
        assert_eq!(geometry.template_index(), None);

        let value = serde_json::to_value(&geometry).unwrap();
        assert_eq!(value["type"], "MultiSurface");
        assert_eq!(value["boundaries"], json!([[[4, 5, 6, 7]]]));
        assert_eq!(value["material"]["water_1"]["values"], json!([1]));
    }

    #[test]
    fn object_kind_serializes_as_plain_string() {
        assert_eq!(
            serde_json::to_value(CityObjectKind::WaterBody).unwrap(),
            json!("WaterBody")
        );
    }
}
