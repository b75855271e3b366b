// src/filtering/mod.rs

//! Provides the predicates behind file classification.
//!
//! These functions are used by the discovery stage to decide default
//! inclusion, and by the selection tree to gate folder propagation. They are
//! exposed publicly so the same rules can be applied in other contexts.

mod extension;
mod rules;
mod size;
mod text_detection;

pub use extension::file_extension;
pub use rules::Rules;
pub(crate) use rules::file_name_str;
pub(crate) use size::passes_size_filter;
pub use text_detection::{has_binary_extension, is_binary_file, is_likely_text_from_buffer};
