use crate::error::Result;
use crate::math::{scale_translate, to_row_major, Vector3};
use crate::model::{CityModel, CityObjectKind, Coordinate, Geometry, ObjectId, TemplateIndex, VertexIndex};

/// Where an instance is anchored.
#[derive(Debug, Clone, Copy)]
enum Anchor {
    /// A new vertex; the transform translates to the same position.
    New([Coordinate; 3]),
    /// An existing vertex; the transform carries no translation.
    Existing(VertexIndex),
}

/// Places a library template in world space as a `GenericCityObject`.
///
/// The transform is diagonal scaling plus translation, never rotation.
pub struct AddTemplateInstance {
    template: TemplateIndex,
    anchor: Anchor,
    scaling: Vector3,
}

impl AddTemplateInstance {
    /// Creates an instance anchored at a new vertex `(x, y, z)`.
    ///
    /// `(x, y, z)` is written both as the anchor vertex and as the translation
    /// column of the transformation matrix. A CityJSON reader that computes
    /// `M * p + anchor` therefore places the template near `2 * (x, y, z)`.
    /// The generated documents rely on this layout; use
    /// [`AddTemplateInstance::at_vertex`] for an instance whose matrix carries
    /// no translation.
    #[must_use]
    pub fn new(
        template: TemplateIndex,
        x: impl Into<Coordinate>,
        y: impl Into<Coordinate>,
        z: impl Into<Coordinate>,
    ) -> Self {
        Self {
            template,
            anchor: Anchor::New([x.into(), y.into(), z.into()]),
            scaling: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// Creates an instance anchored at an already stored vertex.
    #[must_use]
    pub fn at_vertex(template: TemplateIndex, vertex: VertexIndex) -> Self {
        Self {
            template,
            anchor: Anchor::Existing(vertex),
            scaling: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// Sets the per-axis scaling.
    #[must_use]
    pub fn with_scaling(mut self, sx: f64, sy: f64, sz: f64) -> Self {
        self.scaling = Vector3::new(sx, sy, sz);
        self
    }

    /// Executes the operation, returning the id of the new object.
    ///
    /// # Errors
    ///
    /// Returns an error if the template or the existing anchor vertex is not
    /// part of `model`. Nothing is added in that case.
    pub fn execute(&self, model: &mut CityModel) -> Result<ObjectId> {
        model.check_template(self.template)?;

        let (vertex, translation) = match self.anchor {
            Anchor::New([x, y, z]) => {
                let translation = Vector3::new(x.as_f64(), y.as_f64(), z.as_f64());
                (model.add_vertex(x, y, z), translation)
            }
            Anchor::Existing(vertex) => {
                model.check_vertex(vertex)?;
                (vertex, Vector3::zeros())
            }
        };

        let matrix = scale_translate(&self.scaling, &translation);
        let geometry = Geometry::GeometryInstance {
            template: self.template,
            boundaries: [vertex],
            transformation_matrix: to_row_major(&matrix),
        };
        Ok(model.insert_object(CityObjectKind::GenericCityObject, vec![geometry]))
    }
}
