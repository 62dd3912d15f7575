pub mod auth;
pub mod footer;
pub mod image_upload;
pub mod site;

mod router;
pub use router::get_router;
