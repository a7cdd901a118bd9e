//! Byte-level conversion between host `usize` and engine uint buffers.
//!
//! All values are written in host byte order because the engine compares and
//! stores them as native integers.

use crate::error::{CodecError, Result};
use crate::types::{
    EngineUint, UintBytes, ENGINE_UINT_WIDTH, ENGINE_WIDER, HOST_UINT_MAX, HOST_WIDER, UINT_MAX,
};

/// Encode `x` as one engine value, rejecting values above `UINT_MAX`.
#[inline]
pub(crate) fn encode(x: usize) -> Result<UintBytes> {
    let value = x as u64;
    if HOST_WIDER && value > UINT_MAX {
        return Err(CodecError::Overflow {
            value,
            max: UINT_MAX,
        });
    }
    Ok((x as EngineUint).to_ne_bytes())
}

/// Decode one engine value, rejecting values the host `usize` cannot hold.
#[inline]
pub(crate) fn decode(bytes: UintBytes) -> Result<usize> {
    let raw = EngineUint::from_ne_bytes(bytes);
    if ENGINE_WIDER {
        return check_host_range(u64::from(raw), HOST_UINT_MAX);
    }
    Ok(raw as usize)
}

/// Narrow a decoded value to `usize`, rejecting anything above `max`.
///
/// `decode` passes `HOST_UINT_MAX`; `max` must not exceed it.
#[inline]
pub(crate) fn check_host_range(value: u64, max: u64) -> Result<usize> {
    if value > max {
        return Err(CodecError::ValueNotRepresentable { value, max });
    }
    Ok(value as usize)
}

/// Decode a slice that must be exactly one engine value wide.
pub(crate) fn decode_slice(bytes: &[u8]) -> Result<usize> {
    decode(to_array(bytes)?)
}

/// Copy a slice into a value-sized array after a length check.
pub(crate) fn to_array(bytes: &[u8]) -> Result<UintBytes> {
    bytes.try_into().map_err(|_| CodecError::InvalidLength {
        len: bytes.len(),
        expected: ENGINE_UINT_WIDTH,
    })
}
