//! Assembly Cost Engine
//!
//! This crate estimates the labor, travel and extra costs of multi-day field
//! assemblies carried out by mechanics, electricians and programmers, and
//! renders the resulting day-by-day breakdown as a table or spreadsheet.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod holiday;
pub mod models;
pub mod report;
