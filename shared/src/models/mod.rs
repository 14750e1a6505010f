//! Domain models for the AssetVerse backend
//!
//! Row structs derive `sqlx::FromRow` behind the `db` feature so the
//! service crate can fetch them directly; JSON field names are camelCase to
//! match the frontend contract.

pub mod affiliation;
pub mod asset;
pub mod assignment;
pub mod employee;
pub mod package;
pub mod payment;
pub mod request;

pub use affiliation::Affiliation;
pub use asset::{Asset, ProductType};
pub use assignment::{Assignment, AssignmentStatus};
pub use employee::{Employee, Manager};
pub use package::{Package, PackageStatus};
pub use payment::Payment;
pub use request::{AssetRequest, RequestStatus};
