//! Page of engine uint values.

use std::borrow::Cow;

use super::FixedPage;
use crate::error::{CodecError, Result};
use crate::types::ENGINE_UINT_WIDTH;
use crate::value::{decode_slice, encode};

/// A page of contiguous engine uint values.
///
/// Wrapping a buffer borrows it without copying. Appending never changes a
/// page that may be observed elsewhere: [`append`](Self::append) returns a
/// fresh page and [`with`](Self::with) consumes the page it grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UintMulti<'a> {
    page: Cow<'a, [u8]>,
}

impl UintMulti<'static> {
    /// Create an empty page
    pub fn new() -> Self {
        Self {
            page: Cow::Owned(Vec::new()),
        }
    }

    /// Adopt an owned buffer, panicking if its length is not a multiple of
    /// the stride
    pub fn from_vec(page: Vec<u8>) -> Self {
        Self::try_from_vec(page).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Adopt an owned buffer
    pub fn try_from_vec(page: Vec<u8>) -> Result<Self> {
        check_page(&page)?;
        Ok(Self {
            page: Cow::Owned(page),
        })
    }
}

impl<'a> UintMulti<'a> {
    /// Wrap a page of contiguous uint values.
    ///
    /// # Panics
    ///
    /// Panics if `page.len()` is not a multiple of the engine uint width.
    pub fn wrap(page: &'a [u8]) -> Self {
        Self::try_wrap(page).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Wrap a page of contiguous uint values, rejecting misaligned buffers
    pub fn try_wrap(page: &'a [u8]) -> Result<Self> {
        check_page(page)?;
        tracing::trace!(len = page.len() / ENGINE_UINT_WIDTH, "wrapped uint page");
        Ok(Self {
            page: Cow::Borrowed(page),
        })
    }

    /// Number of values in the page
    pub fn len(&self) -> usize {
        self.page.len() / ENGINE_UINT_WIDTH
    }

    /// Whether the page holds no values
    pub fn is_empty(&self) -> bool {
        FixedPage::is_empty(self)
    }

    /// Width of each value in bytes
    pub fn stride(&self) -> usize {
        ENGINE_UINT_WIDTH
    }

    /// Total page size in bytes
    pub fn size(&self) -> usize {
        self.page.len()
    }

    /// The raw page bytes
    pub fn page(&self) -> &[u8] {
        &self.page
    }

    /// The value at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`, or if the stored value overflows the host
    /// `usize`. Pages come from the engine, so an overflow here means the
    /// engine and host widths were mismatched at build time.
    pub fn get(&self, i: usize) -> usize {
        self.try_get(i).unwrap_or_else(|err| panic!("{}", err))
    }

    /// The value at index `i`, or an error if it is out of bounds or not
    /// representable on this host
    pub fn try_get(&self, i: usize) -> Result<usize> {
        let len = self.len();
        if i >= len {
            return Err(CodecError::IndexOutOfBounds { index: i, len });
        }
        let start = i * ENGINE_UINT_WIDTH;
        decode_slice(&self.page[start..start + ENGINE_UINT_WIDTH])
    }

    /// Iterate over the values in order, panicking on the same overflow as
    /// [`get`](Self::get)
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.page
            .chunks_exact(ENGINE_UINT_WIDTH)
            .map(|chunk| decode_slice(chunk).unwrap_or_else(|err| panic!("{}", err)))
    }

    /// Return a new page holding this page's values followed by `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is greater than [`UINT_MAX`](crate::UINT_MAX).
    pub fn append(&self, x: usize) -> UintMulti<'static> {
        self.try_append(x).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Return a new page holding this page's values followed by `x`, or an
    /// error if `x` overflows the engine uint
    pub fn try_append(&self, x: usize) -> Result<UintMulti<'static>> {
        let bytes = encode(x)?;
        let mut page = Vec::with_capacity(self.page.len() + ENGINE_UINT_WIDTH);
        page.extend_from_slice(&self.page);
        page.extend_from_slice(&bytes);
        tracing::trace!(len = page.len() / ENGINE_UINT_WIDTH, "appended to uint page");
        Ok(UintMulti {
            page: Cow::Owned(page),
        })
    }

    /// Consume the page and return it with `x` appended.
    ///
    /// A borrowed page is copied once; an owned page grows its buffer in
    /// place. Useful when building a page for a bulk write value by value.
    ///
    /// # Panics
    ///
    /// Panics if `x` is greater than [`UINT_MAX`](crate::UINT_MAX).
    pub fn with(self, x: usize) -> Self {
        self.try_with(x).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Consume the page and return it with `x` appended, or an error if `x`
    /// overflows the engine uint
    pub fn try_with(mut self, x: usize) -> Result<Self> {
        let bytes = encode(x)?;
        self.page.to_mut().extend_from_slice(&bytes);
        Ok(self)
    }

    /// Take the page bytes, copying only if the page was borrowed
    pub fn into_vec(self) -> Vec<u8> {
        self.page.into_owned()
    }

    /// Detach the page from the buffer it borrows
    pub fn into_owned(self) -> UintMulti<'static> {
        UintMulti {
            page: Cow::Owned(self.page.into_owned()),
        }
    }
}

impl Default for UintMulti<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedPage for UintMulti<'_> {
    fn len(&self) -> usize {
        UintMulti::len(self)
    }

    fn stride(&self) -> usize {
        UintMulti::stride(self)
    }

    fn size(&self) -> usize {
        UintMulti::size(self)
    }

    fn page(&self) -> &[u8] {
        UintMulti::page(self)
    }
}

impl AsRef<[u8]> for UintMulti<'_> {
    fn as_ref(&self) -> &[u8] {
        &self.page
    }
}

impl FromIterator<usize> for UintMulti<'static> {
    /// Build a page from values, panicking if any overflows the engine uint
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

fn check_page(page: &[u8]) -> Result<()> {
    if page.len() % ENGINE_UINT_WIDTH != 0 {
        return Err(CodecError::InvalidPage {
            len: page.len(),
            stride: ENGINE_UINT_WIDTH,
        });
    }
    Ok(())
}
