//! # Uint Codec
//!
//! Fixed-width unsigned integer values for a key-value storage engine that
//! stores opaque byte strings.
//!
//! ## Architecture
//!
//! - **Widths** (`types`): the engine's native uint width, the host's `usize`
//!   width, and the largest storable value, all fixed at compile time
//! - **Values** (`value`): encode a `usize` into one engine-width buffer and
//!   decode engine buffers back with overflow detection
//! - **Pages** (`page`): dense runs of values as produced by multi-value
//!   cursor reads and consumed by bulk writes
//!
//! All values use host byte order, matching how the engine stores its native
//! integers on disk.
//!
//! ## Usage
//!
//! ```rust
//! use uint_codec::{get_uint, uint, Data, UintMulti};
//!
//! // Single value for a key or data buffer
//! let key = uint(42);
//! assert_eq!(get_uint(key.as_bytes()), Some(42));
//!
//! // Malformed buffers are rejected, not trusted
//! assert_eq!(get_uint(&[1, 2, 3]), None);
//!
//! // Multi-value page
//! let page = UintMulti::new().with(1).with(2).with(3);
//! let wrapped = UintMulti::wrap(page.page());
//! assert_eq!(wrapped.len(), 3);
//! assert_eq!(wrapped.get(2), 3);
//!
//! let grown = wrapped.append(4);
//! assert_eq!(wrapped.len(), 3);
//! assert_eq!(grown.get(3), 4);
//! ```
//!
//! ## Features
//!
//! - `wide-engine-uint`: the engine was built with a 64-bit `unsigned int`
//! - `cli` (default): builds the `uint_cli` tool

pub mod error;
pub mod page;
pub mod types;
pub mod value;

#[cfg(test)]
mod proptest_tests;

pub use error::{CodecError, Result};
pub use page::{FixedPage, UintMulti};
pub use types::{
    EngineUint, HostUint, Layout, ENGINE_UINT_MAX, ENGINE_UINT_WIDTH, HOST_UINT_WIDTH, UINT_MAX,
};
pub use value::{get_uint, try_uint, uint, Data, UintData};
