//! Domain model for the content-object persistence layer.
//!
//! # Responsibility
//! - Define the canonical records mirrored verbatim into stored collections.
//!
//! # Invariants
//! - Serialized field names match the persisted wire format, so collections
//!   written by earlier builds keep decoding.

pub mod object;
pub mod resource;
pub mod template;
