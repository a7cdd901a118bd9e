//! Single engine uint values.
//!
//! A [`UintData`] is exactly [`ENGINE_UINT_WIDTH`] bytes and can be handed to
//! the engine as a key or data buffer. Buffers coming back from the engine are
//! read with [`get_uint`], which never panics on malformed input.

mod codec;

pub(crate) use codec::{decode, decode_slice, encode};

use std::fmt;

use crate::error::{CodecError, Result};
use crate::types::{UintBytes, ENGINE_UINT_WIDTH};

/// A fixed-width value that can be passed to the engine as raw bytes.
///
/// Other width-specific codecs implement this as well, so the cursor and
/// transaction layers can accept any of them.
pub trait Data {
    /// Number of bytes every value of this type occupies
    const WIDTH: usize;

    /// The bytes handed to the engine
    fn as_bytes(&self) -> &[u8];

    /// Adopt an engine-produced buffer, or `None` if it is not `WIDTH` bytes
    fn from_bytes(bytes: &[u8]) -> Option<Self>
    where
        Self: Sized;
}

/// Encode `x` as an engine uint value.
///
/// # Panics
///
/// Panics if `x` is greater than [`UINT_MAX`](crate::UINT_MAX). Applications
/// that need the full 64-bit range should use a pointer-width codec instead.
pub fn uint(x: usize) -> UintData {
    UintData::new(x)
}

/// Encode `x` as an engine uint value, returning an error on overflow.
pub fn try_uint(x: usize) -> Result<UintData> {
    UintData::try_new(x)
}

/// Interpret `bytes` as an engine uint.
///
/// Returns `None` if `bytes` is not exactly one value wide, or if the stored
/// value does not fit in a host `usize`.
pub fn get_uint(bytes: &[u8]) -> Option<usize> {
    match decode_slice(bytes) {
        Ok(x) => Some(x),
        Err(err) => {
            tracing::debug!("rejected uint buffer: {}", err);
            None
        }
    }
}

/// An engine uint stored as its native byte representation
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UintData(UintBytes);

impl UintData {
    /// Encode `x`, panicking if it overflows the engine uint
    pub fn new(x: usize) -> Self {
        Self::try_new(x).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Encode `x`, returning an error if it overflows the engine uint
    pub fn try_new(x: usize) -> Result<Self> {
        Ok(Self(encode(x)?))
    }

    /// The contained value.
    ///
    /// # Panics
    ///
    /// Panics if the value does not fit in a host `usize`. This can only
    /// happen when the engine uint is wider than the host's.
    pub fn uint(&self) -> usize {
        self.try_uint().unwrap_or_else(|err| panic!("{}", err))
    }

    /// The contained value, or an error if the host cannot represent it
    pub fn try_uint(&self) -> Result<usize> {
        decode(self.0)
    }

    /// Store `x` in place, panicking if it overflows the engine uint
    pub fn set_uint(&mut self, x: usize) {
        if let Err(err) = self.try_set_uint(x) {
            panic!("{}", err);
        }
    }

    /// Store `x` in place.
    ///
    /// The buffer is only written once `x` has been validated; on error the
    /// previous contents are left untouched.
    pub fn try_set_uint(&mut self, x: usize) -> Result<()> {
        self.0 = encode(x)?;
        Ok(())
    }

    /// Build a value from a buffer of exactly `ENGINE_UINT_WIDTH` bytes
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self> {
        codec::to_array(bytes).map(Self)
    }

    /// The raw byte array
    pub fn to_array(self) -> UintBytes {
        self.0
    }
}

impl Data for UintData {
    const WIDTH: usize = ENGINE_UINT_WIDTH;

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    fn from_bytes(bytes: &[u8]) -> Option<Self> {
        Self::try_from_bytes(bytes).ok()
    }
}

impl AsRef<[u8]> for UintData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<UintBytes> for UintData {
    fn from(bytes: UintBytes) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for UintData {
    type Error = CodecError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::try_from_bytes(bytes)
    }
}

impl fmt::Debug for UintData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_uint() {
            Ok(x) => write!(f, "UintData({})", x),
            Err(_) => write!(f, "UintData({:?})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EngineUint, UINT_MAX};

    #[test]
    fn test_uint_roundtrip() {
        let v = uint(42);
        assert_eq!(v.as_bytes(), &(42 as EngineUint).to_ne_bytes());
        assert_eq!(v.uint(), 42);
        assert_eq!(get_uint(v.as_bytes()), Some(42));
    }

    #[test]
    fn test_uint_width() {
        for x in [0usize, 1, 1000, UINT_MAX as usize] {
            assert_eq!(uint(x).as_bytes().len(), ENGINE_UINT_WIDTH);
            assert_eq!(<UintData as Data>::WIDTH, ENGINE_UINT_WIDTH);
        }
    }

    #[test]
    fn test_uint_max() {
        let v = uint(UINT_MAX as usize);
        assert_eq!(get_uint(v.as_bytes()), Some(UINT_MAX as usize));
    }

    #[cfg(all(target_pointer_width = "64", not(feature = "wide-engine-uint")))]
    #[test]
    #[should_panic(expected = "overflows unsigned int")]
    fn test_uint_overflow_panics() {
        uint(UINT_MAX as usize + 1);
    }

    #[cfg(all(target_pointer_width = "64", not(feature = "wide-engine-uint")))]
    #[test]
    fn test_try_uint_overflow() {
        assert!(matches!(
            try_uint(UINT_MAX as usize + 1),
            Err(CodecError::Overflow { .. })
        ));
    }

    #[test]
    fn test_get_uint_length_guard() {
        let v = uint(9);
        let mut long = v.as_bytes().to_vec();
        long.push(0);

        assert_eq!(get_uint(&[]), None);
        assert_eq!(get_uint(&v.as_bytes()[..ENGINE_UINT_WIDTH - 1]), None);
        assert_eq!(get_uint(&long), None);
        assert_eq!(get_uint(&[0u8; 16]), None);
    }

    #[test]
    fn test_set_uint_in_place() {
        let mut v = uint(1);
        let before = v.as_bytes().as_ptr();
        v.set_uint(77);
        assert_eq!(v.uint(), 77);
        assert_eq!(v.as_bytes().as_ptr(), before);
    }

    #[cfg(all(target_pointer_width = "64", not(feature = "wide-engine-uint")))]
    #[test]
    fn test_failed_set_keeps_value() {
        let mut v = uint(5);
        assert!(v.try_set_uint(usize::MAX).is_err());
        assert_eq!(v.uint(), 5);
    }

    #[cfg(all(target_pointer_width = "32", feature = "wide-engine-uint"))]
    #[test]
    #[should_panic(expected = "overflows host uint")]
    fn test_uint_getter_host_overflow_panics() {
        let v = UintData::from((u32::MAX as u64 + 1).to_ne_bytes());
        assert_eq!(get_uint(v.as_bytes()), None);
        v.uint();
    }

    #[test]
    fn test_from_bytes() {
        let bytes = uint(300).to_array();
        assert_eq!(UintData::from_bytes(&bytes), Some(uint(300)));
        assert_eq!(UintData::from_bytes(&bytes[..1]), None);
        assert_eq!(UintData::try_from(&bytes[..]).unwrap().uint(), 300);
        assert_eq!(UintData::from(bytes), uint(300));
    }

    #[test]
    fn test_default_and_debug() {
        assert_eq!(UintData::default().uint(), 0);
        assert_eq!(format!("{:?}", uint(12)), "UintData(12)");
    }
}
