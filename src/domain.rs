pub mod application;
pub mod health;
