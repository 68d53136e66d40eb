pub mod model;
pub mod dsl;
