//! HTTP route handlers

pub mod analyze;
pub mod catalog;
pub mod randomize;
pub mod status;
pub mod suggest;
