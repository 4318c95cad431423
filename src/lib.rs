pub mod config;
pub mod error;
pub mod export;
pub mod math;
pub mod model;
pub mod operations;

pub use error::{CityError, Result};
pub use export::ExportCityJson;
pub use model::CityModel;
