pub mod health_check;
pub mod send_application;

pub use health_check::health_check;
pub use send_application::send_application;
