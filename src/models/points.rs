//! Placement point system.

/// Placement points for final ranks 1..=16 (index 0 is rank 1).
pub const POINT_TABLE: [u32; 16] = [10, 6, 5, 4, 3, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0];

/// Points awarded for finishing at `rank`. Ranks outside 1..=16 (zero and negatives
/// included) score 0.
pub fn placement_points(rank: i64) -> u32 {
    usize::try_from(rank)
        .ok()
        .and_then(|r| r.checked_sub(1))
        .and_then(|i| POINT_TABLE.get(i))
        .copied()
        .unwrap_or(0)
}

/// Winner winner chicken dinner: 1 for rank 1, else 0.
pub fn wwcd(rank: i64) -> u32 {
    u32::from(rank == 1)
}
