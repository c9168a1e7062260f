//! Format validation for the fields of CDN delivery rules.
//!
//! [`validate`] holds the format rules themselves; [`check`] applies them to
//! documents read through [`config`].

pub mod check;
pub mod config;
mod configrefs;
pub mod types;
pub mod validate;
