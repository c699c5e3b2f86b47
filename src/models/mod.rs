// src/models/mod.rs
//! Data structures for every subject identifier format.

pub mod account;
pub mod aliases;
pub mod did;
pub mod email;
pub mod format;
pub mod iss_sub;
pub mod opaque;
pub mod phone_number;
pub mod subject_identifier;
pub mod uri;
pub mod wrapper;
