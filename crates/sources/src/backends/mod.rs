//! Source backends.

pub mod http;
