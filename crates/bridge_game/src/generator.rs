//! Sources of lane values for bridge generation.

use crate::types::Lane;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Produces one lane per call.
///
/// This is the injection seam for bridge generation: production code uses
/// [`RandomLaneGenerator`], tests pass a [`ScriptedLanes`].
pub trait LaneGenerator {
    /// Draws the next lane.
    fn next_lane(&mut self) -> Lane;
}

impl<G: LaneGenerator + ?Sized> LaneGenerator for &mut G {
    fn next_lane(&mut self) -> Lane {
        (**self).next_lane()
    }
}

/// Uniform random lanes from a ChaCha8 stream.
///
/// Each draw picks an integer in `{0, 1}` and maps it through
/// [`Lane::from_number`].
#[derive(Debug, Clone)]
pub struct RandomLaneGenerator {
    inner: ChaCha8Rng,
}

impl RandomLaneGenerator {
    /// Creates a generator seeded from OS entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a deterministic generator; the same seed gives the same bridge.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl LaneGenerator for RandomLaneGenerator {
    fn next_lane(&mut self) -> Lane {
        let n: u8 = self.inner.gen_range(0..=1);
        Lane::from_number(n)
    }
}

/// Replays a fixed lane sequence, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedLanes {
    lanes: Vec<Lane>,
    cursor: usize,
}

impl ScriptedLanes {
    /// Creates a scripted generator.
    ///
    /// An empty script yields [`Lane::Down`] forever, matching a generator
    /// that always draws `0`.
    #[instrument]
    pub fn new(lanes: Vec<Lane>) -> Self {
        Self { lanes, cursor: 0 }
    }

    /// Builds a script from a token string such as `"UDU"`.
    ///
    /// Returns `None` if any character is not a lane token.
    #[instrument]
    pub fn from_tokens(tokens: &str) -> Option<Self> {
        let lanes = tokens
            .chars()
            .map(|c| Lane::from_token(&c.to_string()))
            .collect::<Option<Vec<_>>>()?;
        Some(Self::new(lanes))
    }
}

impl LaneGenerator for ScriptedLanes {
    fn next_lane(&mut self) -> Lane {
        let Some(lane) = self.lanes.get(self.cursor % self.lanes.len().max(1)).copied() else {
            return Lane::Down;
        };
        self.cursor += 1;
        debug!(cursor = self.cursor, ?lane, "Scripted lane drawn");
        lane
    }
}
