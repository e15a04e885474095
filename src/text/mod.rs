pub(crate) mod builtin;
/// Font-backed measurement plus character-level wrapping and truncation.
pub mod measure;
