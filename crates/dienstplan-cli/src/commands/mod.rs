pub mod autoplan;
pub mod config;
pub mod demand;
pub mod employee;
pub mod plan;
pub mod summary;
pub mod validate;
