//! CLI command implementations.

pub mod common;
pub mod inspect;
pub mod panels;
pub mod replay;
pub mod resolve;
