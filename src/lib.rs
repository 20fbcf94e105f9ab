// src/lib.rs

#[macro_use]
pub mod macros;

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod naming;
pub mod progress;
pub mod specs;

pub mod csv;
pub mod file;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;
