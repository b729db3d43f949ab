//! HTTP request handlers.

pub mod claims;
pub mod common;
pub mod items;
pub mod pages;

pub use claims::*;
pub use common::*;
pub use items::*;
pub use pages::*;
