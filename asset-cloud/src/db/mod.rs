//! Database access layer

pub mod affiliations;
pub mod assets;
pub mod assignments;
pub mod employees;
pub mod managers;
pub mod packages;
pub mod payments;
pub mod requests;
