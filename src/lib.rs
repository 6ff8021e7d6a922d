pub mod config;
pub mod externals;
pub mod internals;
pub mod models;
pub mod session;
pub mod tasks;
