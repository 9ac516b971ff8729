//! Discrete planning time.
//!
//! Every move and every wait advances time by exactly one `Timestep`, so the
//! accumulated cost of a single-agent plan equals the timestep it ends on.
//! Agents all start at `Timestep::ZERO`.

use std::fmt;

/// An absolute timestep counter.
///
/// `u32` is plenty: the search bounds itself at `horizon + cell_count`, and
/// a grid with more than four billion cells is not a planning problem this
/// crate is meant for.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestep(pub u32);

impl Timestep {
    pub const ZERO: Timestep = Timestep(0);

    /// The following timestep.  Saturates at `u32::MAX`.
    #[inline]
    pub fn next(self) -> Timestep {
        Timestep(self.0.saturating_add(1))
    }

    /// Cast to `usize` for indexing into a per-timestep `Vec`.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::ops::Add<u32> for Timestep {
    type Output = Timestep;
    #[inline]
    fn add(self, rhs: u32) -> Timestep {
        Timestep(self.0.saturating_add(rhs))
    }
}

/// Timesteps elapsed from `rhs` to `self`, saturating at zero.
impl std::ops::Sub for Timestep {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Timestep) -> u32 {
        self.0.saturating_sub(rhs.0)
    }
}

impl fmt::Display for Timestep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}
