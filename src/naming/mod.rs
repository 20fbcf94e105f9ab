// src/naming/mod.rs
//! Display names for resource identifiers.
//!
//! `segment` splits run-together lowercase identifiers with the
//! `dictionary`; `friendly` turns either form into a display name;
//! `resolve` picks between a manual override, the documentation's camelCase
//! spelling and the algorithm.

pub mod dictionary;
pub mod friendly;
pub mod overrides;
pub mod resolve;
pub mod segment;

pub use dictionary::WordDictionary;
pub use friendly::to_friendly_name;
pub use overrides::ManualOverrides;
pub use resolve::{ CamelCaseMap, NameResolver, NameSource };
pub use segment::segment;
