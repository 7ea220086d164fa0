pub mod counsellors;
pub mod dashboard;
pub mod forum;
pub mod login;
pub mod resources;
