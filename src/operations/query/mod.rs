mod is_valid;
mod stats;

pub use is_valid::IsValid;
pub use stats::ModelStats;
