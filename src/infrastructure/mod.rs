pub mod database;
pub mod forum;
