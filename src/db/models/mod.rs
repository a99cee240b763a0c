// Sub-modules organized by functional domain
pub mod api;
pub mod client;
pub mod project;

pub use api::*;
pub use client::*;
pub use project::*;
