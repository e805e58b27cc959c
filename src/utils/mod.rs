//! Shared helpers: filesystem copying and HTML escaping.

pub mod fs;
pub mod html;
