pub mod components;
pub mod program;
pub mod utils;

pub use program::Program;
