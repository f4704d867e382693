pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::{admin_routes, routes};
