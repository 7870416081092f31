// I/O module
// Data file generation and loading

pub mod generator;
pub mod loader;

pub use generator::generate;
pub use loader::load;
