//! Overlap clusters and lane assignment for one day column.
//!
//! # Algorithm
//!
//! Greedy interval-graph coloring in start-time order:
//!
//! 1. Sort ranges by start (stable, so ties keep input order).
//! 2. Before placing a range, retire active ranges with `end <= start`.
//! 3. If nothing is active, open a new cluster.
//! 4. Take the lowest lane not held by an active range.
//! 5. Widen the cluster to `lane + 1` if needed.
//!
//! Cluster sizes are back-filled once the day is done, since later
//! arrivals can widen a cluster after its first members were placed.
//!
//! # Complexity
//! O(n log n + n·k) where k is the peak number of concurrent lessons.

use crate::models::ClockRange;

/// Lane placement for one range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneAssignment {
    /// Position of the range in the input slice.
    pub index: usize,
    /// Zero-based lane within the cluster.
    pub lane: usize,
    /// Cluster identifier, counted from 0 within the day.
    pub cluster: usize,
    /// Lanes used by the cluster.
    pub cluster_size: usize,
}

/// Assigns lanes to one day's ranges.
///
/// Returns one assignment per range, ordered by start time.
pub fn assign_lanes(ranges: &[ClockRange]) -> Vec<LaneAssignment> {
    let mut order: Vec<usize> = (0..ranges.len()).collect();
    order.sort_by_key(|&i| ranges[i].start);

    // (end, lane) of ranges still running
    let mut active: Vec<(u32, usize)> = Vec::new();
    let mut cluster_widths: Vec<usize> = Vec::new();
    let mut placed = Vec::with_capacity(ranges.len());

    for index in order {
        let range = ranges[index];

        active.retain(|&(end, _)| end > range.start);
        if active.is_empty() {
            cluster_widths.push(0);
        }
        let cluster = cluster_widths.len() - 1;

        let lane = lowest_free_lane(&active);
        active.push((range.end, lane));
        cluster_widths[cluster] = cluster_widths[cluster].max(lane + 1);

        placed.push(LaneAssignment {
            index,
            lane,
            cluster,
            cluster_size: 0,
        });
    }

    for p in &mut placed {
        p.cluster_size = cluster_widths[p.cluster];
    }
    placed
}

fn lowest_free_lane(active: &[(u32, usize)]) -> usize {
    let mut lane = 0;
    while active.iter().any(|&(_, used)| used == lane) {
        lane += 1;
    }
    lane
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(start: u32, end: u32) -> ClockRange {
        ClockRange::new(start, end)
    }

    fn by_index(placed: &[LaneAssignment]) -> Vec<LaneAssignment> {
        let mut sorted = placed.to_vec();
        sorted.sort_by_key(|p| p.index);
        sorted
    }

    #[test]
    fn test_empty_day() {
        assert!(assign_lanes(&[]).is_empty());
    }

    #[test]
    fn test_back_to_back_share_lane() {
        let placed = assign_lanes(&[r(540, 600), r(600, 660)]);
        assert!(placed.iter().all(|p| p.lane == 0 && p.cluster_size == 1));
        assert_eq!(placed[0].cluster, 0);
        assert_eq!(placed[1].cluster, 1);
    }

    #[test]
    fn test_overlap_gets_second_lane() {
        let placed = by_index(&assign_lanes(&[r(540, 600), r(570, 630)]));
        assert_eq!(placed[0].lane, 0);
        assert_eq!(placed[1].lane, 1);
        assert!(placed.iter().all(|p| p.cluster == 0 && p.cluster_size == 2));
    }

    #[test]
    fn test_transitive_cluster() {
        // A overlaps B, B overlaps C, A does not overlap C
        let placed = by_index(&assign_lanes(&[r(540, 600), r(570, 630), r(615, 660)]));
        assert!(placed.iter().all(|p| p.cluster == 0));
        assert!(placed.iter().all(|p| p.cluster_size == 2));
        assert_eq!(placed[2].lane, 0); // reuses A's lane
    }

    #[test]
    fn test_early_member_sees_final_width() {
        // long lesson first, two later ones stack beside it
        let placed = by_index(&assign_lanes(&[r(480, 720), r(540, 660), r(600, 690)]));
        assert_eq!(placed[0].lane, 0);
        assert_eq!(placed[1].lane, 1);
        assert_eq!(placed[2].lane, 2);
        assert!(placed.iter().all(|p| p.cluster_size == 3));
    }

    #[test]
    fn test_lowest_free_lane_is_reused() {
        // lane 0 frees before the third lesson starts, lane 1 is still busy
        let placed = by_index(&assign_lanes(&[r(480, 540), r(500, 600), r(550, 580)]));
        assert_eq!(placed[2].lane, 0);
        assert!(placed.iter().all(|p| p.cluster_size == 2));
    }

    #[test]
    fn test_lanes_restart_per_cluster() {
        let placed = by_index(&assign_lanes(&[
            r(480, 540),
            r(500, 540),
            r(600, 660),
        ]));
        assert_eq!(placed[2].cluster, 1);
        assert_eq!(placed[2].lane, 0);
        assert_eq!(placed[2].cluster_size, 1);
        assert_eq!(placed[0].cluster_size, 2);
    }

    #[test]
    fn test_start_ties_keep_input_order() {
        let placed = assign_lanes(&[r(540, 600), r(540, 560), r(540, 580)]);
        let order: Vec<usize> = placed.iter().map(|p| p.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
        let lanes: Vec<usize> = placed.iter().map(|p| p.lane).collect();
        assert_eq!(lanes, vec![0, 1, 2]);
    }

    #[test]
    fn test_zero_length_range() {
        let placed = by_index(&assign_lanes(&[r(600, 600), r(600, 660)]));
        assert_eq!(placed[0].lane, 0);
        assert_eq!(placed[1].lane, 0);
        assert_ne!(placed[0].cluster, placed[1].cluster);
    }
}
