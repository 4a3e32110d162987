//! Entity models and DTOs.
//!
//! Each entity gets a row struct (`FromRow`), a `Create*` DTO, and an
//! `Update*` DTO whose fields are all optional (patch semantics: absent
//! fields are left untouched).

pub mod category;
pub mod note;
pub mod search;
pub mod task;
pub mod user;
