//! catalog-relay - push a cached course catalog to an ingestion webhook
//!
//! The cache holds three tiers of documents written by an upstream scraper:
//! semesters, the course sections of each semester, and one schedule per
//! section. This crate reads them back and submits them to a webhook in
//! dependency order:
//!
//! 1. Semesters - one envelope with the whole list
//! 2. Sections - one envelope per semester
//! 3. Schedules - one sparse envelope per semester, keyed by section id
//!
//! The binary (`catalog-relay`) is a thin wrapper around [`submit::run_relay`].

pub mod cache;
pub mod config;
pub mod error;
pub mod payload;
pub mod submit;
pub mod types;
pub mod webhook;
