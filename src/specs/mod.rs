// src/specs/mod.rs
//! # Documentation page "specs"
//!
//! Knowledge of **where the data lives in the docs HTML** and how to pull it
//! out without a DOM.
//!
//! ## What lives here
//! - `section`: bound the part of a page that describes one resource.
//! - `permissions`: the ordered matcher cascade that finds and reads the
//!   application-permissions table inside a section.
//! - `names`: which resource names a page documents, and their camelCase
//!   spellings.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`) and display names (`naming`).
//! - Building records or de-duplicating across pages (`catalog`).
//!
//! ## Conventions
//! - Case-insensitive tag detection; scan inside known blocks where possible.
//! - Markup that matches no known shape degrades to an empty result, never an
//!   error.

pub mod names;
pub mod permissions;
pub mod section;

pub use names::{ camel_case_map, discover_resource_names };
pub use permissions::{ extract_permissions, PermissionSet };
pub use section::{ find_section, locate_section, Section, SectionAnchor };
