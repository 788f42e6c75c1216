//! Paper Desk - author-side workflow for a journal submission desk
//!
//! This crate implements the rules behind the paper submission form (author
//! rows, author ⇄ institution linkage, debounced directory search, form
//! validation) and the editorial progress views (status vocabularies and the
//! pipeline timeline).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
