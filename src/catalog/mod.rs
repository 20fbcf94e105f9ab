// src/catalog/mod.rs
//! Catalog construction.
//!
//! Two builders share one record type:
//! - `docs::build` crawls the documentation pages and takes whatever
//!   resource names they show;
//! - `schema::build` takes names from a JSON schema and uses the pages only
//!   for camelCase names and permissions.
//!
//! Both hand their records to `Catalog::from_records`, which sorts and counts.

pub mod docs;
pub mod model;
pub mod schema;

pub use model::{ Catalog, OperationPermissionEntry, ResourceIdentifier, ResourceRecord };
pub use schema::BuildReport;
