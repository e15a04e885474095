//! Where patron names come from. Ordering is decided here; the layout engine never sorts.

/// Name lists, the patron cache file and sorting.
pub mod source;
