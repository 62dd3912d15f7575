pub mod middleware;
pub mod token;

pub use middleware::{AdminSession, SessionToken};
pub use token::{Claims, Session, TokenDecoder};
