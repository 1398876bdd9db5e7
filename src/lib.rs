pub mod api;
pub mod config;
pub mod errors;
pub mod listing;
pub mod render;
pub mod site;
pub mod vfs;

pub use api::{build_site, WebwerfError};
