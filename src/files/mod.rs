//! Filesystem access under the webroot.
//!
//! Both the requested resources and the error pages are read fresh on every
//! request; nothing is cached.

pub mod catalog;
pub mod resolver;

pub use catalog::load_error_page;
pub use resolver::{Resource, resolve};
