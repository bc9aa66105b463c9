//! Adapters - outer-edge implementations over the application core.

pub mod http;
