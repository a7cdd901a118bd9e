//! Native integer widths shared by the value and page codecs.
//!
//! The engine stores C `unsigned int` values; the host side of the binding
//! works in `usize`. Both widths are fixed when the crate is compiled, so every
//! overflow check below compares against constants rather than branching on the
//! target at runtime.

mod layout;

pub use layout::Layout;

use std::mem::size_of;

/// The storage engine's native unsigned integer type
#[cfg(not(feature = "wide-engine-uint"))]
pub type EngineUint = u32;

/// The storage engine's native unsigned integer type
#[cfg(feature = "wide-engine-uint")]
pub type EngineUint = u64;

/// The host's native unsigned integer type
pub type HostUint = usize;

/// Width in bytes of one engine value (the stride of a multi-value page)
pub const ENGINE_UINT_WIDTH: usize = size_of::<EngineUint>();

/// Width in bytes of the host's native unsigned integer
pub const HOST_UINT_WIDTH: usize = size_of::<HostUint>();

/// Largest value that can be stored as an engine uint
pub const ENGINE_UINT_MAX: EngineUint = EngineUint::MAX;

/// `ENGINE_UINT_MAX` widened for comparisons against host values
pub const UINT_MAX: u64 = ENGINE_UINT_MAX as u64;

/// Largest host value, widened the same way
pub(crate) const HOST_UINT_MAX: u64 = HostUint::MAX as u64;

/// Host values can exceed `ENGINE_UINT_MAX`, so encoding must range-check
pub(crate) const HOST_WIDER: bool = HOST_UINT_WIDTH > ENGINE_UINT_WIDTH;

/// Engine values can exceed `usize::MAX`, so decoding must range-check
pub(crate) const ENGINE_WIDER: bool = ENGINE_UINT_WIDTH > HOST_UINT_WIDTH;

/// One encoded engine value in host byte order
pub type UintBytes = [u8; ENGINE_UINT_WIDTH];
