mod class_code;
mod lcz;
mod place_lcz;

pub use class_code::{CellContent, ClassCode, PlaceClassCode};
pub use lcz::{LczClass, Placement};
pub use place_lcz::PlaceLcz;
