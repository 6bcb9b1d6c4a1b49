pub mod generator;
pub mod models;
pub mod seed;

pub use generator::*;
pub use models::*;
