pub mod city_object;
pub mod material;
pub mod template;
pub mod vertex;

pub use city_object::{CityObject, CityObjectKind, Geometry, MaterialValues, ObjectId};
pub use material::{Material, MaterialIndex, MaterialRegistry, DEFAULT_COLOR};
pub use template::{GeometryTemplate, TemplateIndex, TemplateRegistry};
pub use vertex::{Coordinate, Vertex, VertexIndex, VertexStore};

use std::collections::HashMap;

use crate::config::GeneratorConfig;
use crate::error::ModelError;

/// The in-memory CityJSON document.
///
/// Owns the vertex list, the template library, the material library and
/// the city objects. Every index handed out by one model refers into that
/// model only; two models never share ids or registry entries.
#[derive(Debug, Clone, Default)]
pub struct CityModel {
    config: GeneratorConfig,
    vertices: VertexStore,
    templates: TemplateRegistry,
    materials: MaterialRegistry,
    objects: Vec<CityObject>,
    positions: HashMap<ObjectId, usize>,
    next_object: u64,
}

impl CityModel {
    /// Creates an empty model with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty model with the given configuration.
    #[must_use]
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    // --- Vertices ---

    /// Appends `[x, y, z]` to the vertex list and returns its index.
    ///
    /// Coincident vertices are not merged.
    pub fn add_vertex(
        &mut self,
        x: impl Into<Coordinate>,
        y: impl Into<Coordinate>,
        z: impl Into<Coordinate>,
    ) -> VertexIndex {
        self.vertices.push([x.into(), y.into(), z.into()])
    }

    /// Appends vertices pairwise from parallel coordinate sequences.
    ///
    /// When `zs` is `None` every vertex gets `z = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::LengthMismatch`] if the sequences differ in
    /// length. Nothing is appended in that case.
    pub fn add_vertices<C: Into<Coordinate> + Copy>(
        &mut self,
        xs: &[C],
        ys: &[C],
        zs: Option<&[C]>,
    ) -> Result<Vec<VertexIndex>, ModelError> {
        let z_len = zs.map(<[C]>::len);
        if xs.len() != ys.len() || z_len.is_some_and(|n| n != xs.len()) {
            return Err(ModelError::LengthMismatch {
                x: xs.len(),
                y: ys.len(),
                z: z_len,
            });
        }

        let indices = xs
            .iter()
            .zip(ys)
            .enumerate()
            .map(|(i, (&x, &y))| {
                let z = zs.map_or(Coordinate::default(), |zs| zs[i].into());
                self.add_vertex(x, y, z)
            })
            .collect();
        Ok(indices)
    }

    #[must_use]
    pub fn vertices(&self) -> &VertexStore {
        &self.vertices
    }

    // --- Templates ---

    /// Returns the unit cube template index, registering it on first use.
    pub fn cube_template(&mut self) -> TemplateIndex {
        self.templates.cube()
    }

    #[must_use]
    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    // --- Materials ---

    /// Returns the index of material `name`, registering it on first use.
    ///
    /// `None` picks [`DEFAULT_COLOR`].
    pub fn add_material(&mut self, name: &str, color: Option<[f64; 3]>) -> MaterialIndex {
        self.materials.add(name, color.unwrap_or(DEFAULT_COLOR))
    }

    #[must_use]
    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    // --- City objects ---

    /// Allocates the next object id. Ids are never reused.
    pub fn new_object_id(&mut self) -> ObjectId {
        let id = ObjectId::from_counter(self.next_object);
        self.next_object += 1;
        id
    }

    /// Stores an object under a freshly allocated id and returns the id.
    pub(crate) fn insert_object(
        &mut self,
        kind: CityObjectKind,
        geometry: Vec<Geometry>,
    ) -> ObjectId {
        let id = self.new_object_id();
        tracing::debug!(id = %id, ?kind, "added city object");
        self.positions.insert(id.clone(), self.objects.len());
        self.objects.push(CityObject {
            id: id.clone(),
            kind,
            geometry,
        });
        id
    }

    /// Objects in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[CityObject] {
        &self.objects
    }

    /// Returns the object with `id`, if present.
    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&CityObject> {
        self.positions.get(id).and_then(|&position| self.objects.get(position))
    }

    // --- Consistency checks ---

    /// Fails if `index` is not a stored vertex.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::IndexOutOfBounds`].
    pub fn check_vertex(&self, index: VertexIndex) -> Result<(), ModelError> {
        self.vertices.check(index)
    }

    /// Fails if `index` is not a registered template.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::IndexOutOfBounds`].
    pub fn check_template(&self, index: TemplateIndex) -> Result<(), ModelError> {
        self.templates.get(index).map(|_| ())
    }

    /// Fails if `index` is not a registered material.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::IndexOutOfBounds`].
    pub fn check_material(&self, index: MaterialIndex) -> Result<(), ModelError> {
        self.materials.get(index).map(|_| ())
    }
}
