pub mod content;
pub mod routes;

pub use routes::{App, Route};
