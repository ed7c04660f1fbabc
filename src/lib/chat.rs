pub mod models;
pub mod thread;
