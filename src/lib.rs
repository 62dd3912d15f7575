pub mod app;
pub mod modules;
pub mod types;
pub mod utils;

pub use types::Context;
