//! Domain layer containing the submission workflow's rules and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, colors, session, errors)
//! - `status` - Status vocabularies normalizing backend status strings
//! - `progress` - Editorial pipeline timeline derived from progress records
//! - `authorship` - Author rows, author ⇄ institution linkage and search fields
//! - `submission` - Paper form keywords, attachment and validation

pub mod authorship;
pub mod foundation;
pub mod progress;
pub mod status;
pub mod submission;
