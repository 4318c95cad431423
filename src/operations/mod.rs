pub mod creation;
pub mod generate;
pub mod pattern;
pub mod query;
