//! Multi-value pages: contiguous runs of fixed-width values.
//!
//! The engine returns duplicate-sorted data in bulk as one buffer holding many
//! values back to back (see `MDB_GET_MULTIPLE`), and accepts the same layout for
//! `MDB_MULTIPLE` writes. Value `i` occupies bytes `i * stride .. (i + 1) * stride`.

mod multi;

pub use multi::UintMulti;

/// A page of densely packed values that all share one stride.
///
/// Implemented by every width-specific page type so bulk cursor operations
/// can move pages without knowing the value type.
pub trait FixedPage {
    /// Number of values in the page
    fn len(&self) -> usize;

    /// Width of each value in bytes
    fn stride(&self) -> usize;

    /// Total page size in bytes (`len() * stride()`)
    fn size(&self) -> usize;

    /// The raw page bytes
    fn page(&self) -> &[u8];

    /// Whether the page holds no values
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
