pub mod helpers;
pub mod models;
pub mod store;
