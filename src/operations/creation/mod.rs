mod add_boundary_object;
mod add_cube;
mod add_land_use;
mod add_template_instance;
mod land_use;

pub use add_boundary_object::AddBoundaryObject;
pub use add_cube::AddCube;
pub use add_land_use::AddLandUse;
pub use add_template_instance::AddTemplateInstance;
pub use land_use::LandUseType;
