pub mod actuator;
pub mod greeting;
pub mod health;
pub mod info;
