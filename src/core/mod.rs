//! Application services: hub actions and the repository snapshot store.

pub mod hub;
pub mod repos;
