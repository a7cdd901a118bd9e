//! Serializable report of the compiled-in widths.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ENGINE_UINT_WIDTH, HOST_UINT_WIDTH, UINT_MAX};

/// Engine and host integer widths this build was compiled for.
///
/// Useful when checking that two processes sharing an environment agree on
/// the on-disk value width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Bytes per engine value
    pub engine_width: usize,
    /// Bytes per host `usize`
    pub host_width: usize,
    /// Largest storable value
    pub engine_max: u64,
}

impl Layout {
    /// The layout of the current build
    pub const fn native() -> Self {
        Self {
            engine_width: ENGINE_UINT_WIDTH,
            host_width: HOST_UINT_WIDTH,
            engine_max: UINT_MAX,
        }
    }

    /// Encoding must reject host values above `engine_max`
    pub const fn host_wider(&self) -> bool {
        self.host_width > self.engine_width
    }

    /// Decoding must reject engine values above `usize::MAX`
    pub const fn engine_wider(&self) -> bool {
        self.engine_width > self.host_width
    }

    /// Check whether buffers written under `other` can be read under `self`
    pub fn is_compatible(&self, other: &Layout) -> bool {
        self.engine_width == other.engine_width
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "engine uint {} bytes, host uint {} bytes, max {}",
            self.engine_width, self.host_width, self.engine_max
        )
    }
}
