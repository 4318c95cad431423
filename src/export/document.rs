use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::model::{CityModel, CityObject, GeometryTemplate, Material, Vertex};

pub const CITYJSON_TYPE: &str = "CityJSON";
pub const CITYJSON_VERSION: &str = "2.0";

/// Borrowed view of a model in CityJSON layout.
#[derive(serde::Serialize)]
pub(super) struct Document<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    version: &'static str,
    extensions: Map<String, Value>,
    transform: Transform,
    metadata: Map<String, Value>,
    #[serde(rename = "CityObjects")]
    city_objects: CityObjects<'a>,
    vertices: &'a [Vertex],
    appearance: Appearance<'a>,
    #[serde(rename = "geometry-templates")]
    geometry_templates: GeometryTemplates<'a>,
}

#[derive(serde::Serialize)]
struct Transform {
    scale: [f64; 3],
    translate: [f64; 3],
}

#[derive(serde::Serialize)]
struct Appearance<'a> {
    materials: &'a [Material],
}

#[derive(serde::Serialize)]
struct GeometryTemplates<'a> {
    templates: &'a [GeometryTemplate],
    #[serde(rename = "vertices-templates")]
    vertices_templates: &'a [[i64; 3]],
}

/// Objects keyed by id, in insertion order.
struct CityObjects<'a>(&'a [CityObject]);

impl Serialize for CityObjects<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|object| (&object.id, object)))
    }
}

impl<'a> Document<'a> {
    pub(super) fn new(model: &'a CityModel) -> Self {
        Self {
            kind: CITYJSON_TYPE,
            version: CITYJSON_VERSION,
            extensions: Map::new(),
            transform: Transform {
                scale: [1.0, 1.0, 1.0],
                translate: [0.0, 0.0, 0.0],
            },
            metadata: Map::new(),
            city_objects: CityObjects(model.objects()),
            vertices: model.vertices().as_slice(),
            appearance: Appearance {
                materials: model.materials().materials(),
            },
            geometry_templates: GeometryTemplates {
                templates: model.templates().templates(),
                vertices_templates: model.templates().vertices(),
            },
        }
    }
}
