//! Axial hex coordinates.

use serde::{Deserialize, Serialize};

/// Position of a hex tile in axial coordinates.
///
/// Ordering is lexicographic on `(q, r)`, which gives maps a stable
/// iteration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct HexCoord {
    /// Column.
    pub q: i32,
    /// Row.
    pub r: i32,
}

impl HexCoord {
    /// The map center. The player civilization always starts here.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// Create a coordinate.
    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The six adjacent hexes.
    #[must_use]
    pub const fn neighbors(&self) -> [Self; 6] {
        [
            Self::new(self.q + 1, self.r),
            Self::new(self.q + 1, self.r - 1),
            Self::new(self.q, self.r - 1),
            Self::new(self.q - 1, self.r),
            Self::new(self.q - 1, self.r + 1),
            Self::new(self.q, self.r + 1),
        ]
    }

    /// Distance in hex steps.
    #[must_use]
    pub const fn distance(&self, other: &Self) -> u32 {
        let dq = (self.q - other.q).unsigned_abs();
        let dr = (self.r - other.r).unsigned_abs();
        let ds = ((self.q + self.r) - (other.q + other.r)).unsigned_abs();
        (dq + dr + ds) / 2
    }

    /// Every coordinate within `radius` steps of this one, including itself.
    ///
    /// Yields `3 * radius * (radius + 1) + 1` coordinates, ordered by `q`
    /// then `r`.
    pub fn within(self, radius: u32) -> impl Iterator<Item = Self> {
        let radius = i32::try_from(radius).unwrap_or(i32::MAX / 4);
        (-radius..=radius).flat_map(move |dq| {
            let lo = (-radius).max(-dq - radius);
            let hi = radius.min(-dq + radius);
            (lo..=hi).map(move |dr| Self::new(self.q + dq, self.r + dr))
        })
    }
}

impl std::fmt::Display for HexCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = HexCoord::ORIGIN;
        assert_eq!(a.distance(&HexCoord::new(2, 1)), 3);
        assert_eq!(a.distance(&HexCoord::new(0, 3)), 3);
        assert_eq!(a.distance(&HexCoord::new(-2, 2)), 2);
        assert_eq!(a.distance(&a), 0);
    }

    #[test]
    fn test_neighbors_are_adjacent() {
        let center = HexCoord::new(3, -1);
        for neighbor in center.neighbors() {
            assert_eq!(center.distance(&neighbor), 1);
        }
    }

    #[test]
    fn test_within_counts() {
        assert_eq!(HexCoord::ORIGIN.within(0).count(), 1);
        assert_eq!(HexCoord::ORIGIN.within(1).count(), 7);
        assert_eq!(HexCoord::ORIGIN.within(20).count(), 1261);
    }

    #[test]
    fn test_within_respects_radius_and_center() {
        let center = HexCoord::new(5, -2);
        let area: Vec<_> = center.within(3).collect();
        assert!(area.iter().all(|c| c.distance(&center) <= 3));
        assert!(area.contains(&center));
        assert_eq!(area.len(), 37);

        let mut sorted = area.clone();
        sorted.sort();
        assert_eq!(sorted, area);
    }
}
