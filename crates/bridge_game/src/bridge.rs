//! The bridge itself and how it is built.

use crate::error::InvalidInput;
use crate::generator::LaneGenerator;
use crate::types::Lane;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A bridge length that has passed validation.
///
/// Holding a `BridgeSize` guarantees `MIN <= size <= MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BridgeSize(usize);

impl BridgeSize {
    /// Shortest accepted bridge.
    pub const MIN: usize = 3;
    /// Longest accepted bridge.
    pub const MAX: usize = 20;

    /// Checks that `size` lies in the accepted range.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, InvalidInput> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(InvalidInput::SizeOutOfRange {
                raw: size.to_string(),
            })
        }
    }

    /// Number of segments.
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for BridgeSize {
    type Error = InvalidInput;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BridgeSize> for usize {
    fn from(size: BridgeSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for BridgeSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered safe lanes, one per segment. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bridge {
    lanes: Vec<Lane>,
}

impl Bridge {
    /// Number of segments.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// True only for a bridge with no segments, which the builder never produces.
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Safe lane at `index`.
    pub fn get(&self, index: usize) -> Option<Lane> {
        self.lanes.get(index).copied()
    }

    /// All safe lanes in crossing order.
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }
}

/// Builds bridges by drawing one lane per segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct BridgeBuilder;

impl BridgeBuilder {
    /// Draws exactly `size` lanes from `generator`, position 0 first.
    #[instrument(skip(generator))]
    pub fn build<G: LaneGenerator>(size: BridgeSize, mut generator: G) -> Bridge {
        let lanes: Vec<Lane> = (0..size.get()).map(|_| generator.next_lane()).collect();
        debug!(?lanes, "Bridge built");
        Bridge { lanes }
    }
}
