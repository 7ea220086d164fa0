pub mod appointment_store;
pub mod directory;
pub mod forum_store;
pub mod resources;
pub mod session;
