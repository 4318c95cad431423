use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Position of a template in the model's template library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateIndex(pub usize);

/// Registry key of the unit cube template.
pub const CUBE: &str = "cube";

/// Corners of the unit cube, bottom ring then top ring.
const CUBE_VERTICES: [[i64; 3]; 8] = [
    [0, 0, 0], // bottom south-west
    [1, 0, 0], // bottom south-east
    [1, 1, 0], // bottom north-east
    [0, 1, 0], // bottom north-west
    [0, 0, 1], // top south-west
    [1, 0, 1], // top south-east
    [1, 1, 1], // top north-east
    [0, 1, 1], // top north-west
];

/// Faces of the unit cube as rings of local corner numbers.
const CUBE_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // bottom
    [4, 5, 1, 0], // south
    [5, 6, 2, 1], // east
    [6, 7, 3, 2], // north
    [7, 4, 0, 3], // west
    [7, 6, 5, 4], // top
];

/// A reusable solid shape.
///
/// `boundaries` index into the template vertex list, not the main vertex list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryTemplate {
    #[serde(rename = "type")]
    pub kind: String,
    pub lod: String,
    /// Shells, each a list of surfaces, each a list of rings.
    pub boundaries: Vec<Vec<Vec<Vec<usize>>>>,
}

/// Library of named geometry templates and their local vertices.
///
/// Each name is registered at most once; repeated lookups return the same
/// index and do not touch the stored data.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<GeometryTemplate>,
    vertices: Vec<[i64; 3]>,
    by_name: HashMap<String, TemplateIndex>,
}

impl TemplateRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of the unit cube template, registering it on first use.
    pub fn cube(&mut self) -> TemplateIndex {
        if let Some(&index) = self.by_name.get(CUBE) {
            return index;
        }

        let index = TemplateIndex(self.templates.len());
        // Faces reference the corners through this offset.
        let offset = index.0;
        self.vertices.extend_from_slice(&CUBE_VERTICES);

        let surfaces: Vec<Vec<Vec<usize>>> = CUBE_FACES
            .iter()
            .map(|face| vec![face.iter().map(|&corner| offset + corner).collect()])
            .collect();
        self.templates.push(GeometryTemplate {
            kind: "Solid".into(),
            lod: "1".into(),
            boundaries: vec![surfaces],
        });
        self.by_name.insert(CUBE.into(), index);

        tracing::debug!(index = index.0, "registered cube template");
        index
    }

    /// Looks up a template by name without registering anything.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<TemplateIndex> {
        self.by_name.get(name).copied()
    }

    /// Returns the template at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is past the end of the library.
    pub fn get(&self, index: TemplateIndex) -> Result<&GeometryTemplate, ModelError> {
        self.templates
            .get(index.0)
            .ok_or(ModelError::IndexOutOfBounds {
                collection: "template",
                index: index.0,
                len: self.templates.len(),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    #[must_use]
    pub fn templates(&self) -> &[GeometryTemplate] {
        &self.templates
    }

    /// The local vertices shared by all templates.
    #[must_use]
    pub fn vertices(&self) -> &[[i64; 3]] {
        &self.vertices
    }
}
