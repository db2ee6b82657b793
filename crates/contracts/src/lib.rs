//! DTOs exchanged between the admin frontend and the REST backend.

pub mod domain;
pub mod system;
