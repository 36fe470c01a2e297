// src/core/mod.rs

pub mod text;

pub use text::{cut_first, normalize_text, replace_literals, strip_spaces, title_case};
