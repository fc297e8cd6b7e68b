pub mod health;
pub mod info;
pub mod status;
pub mod time;
