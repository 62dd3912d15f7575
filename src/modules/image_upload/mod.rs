pub mod controller;
mod routes;
pub mod store;
pub mod view;

pub use routes::get_router;
