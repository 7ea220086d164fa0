pub mod appointment;
pub mod counselor;
pub mod forum;
pub mod resource;
pub mod session;
