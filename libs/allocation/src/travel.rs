//! Travel-time metric between rooms.
//!
//! The metric is a synthetic ranking cost, not a real-world duration:
//! moving one position along a corridor costs 1.0, moving one floor
//! vertically costs 2.0.

use crate::room::Room;

/// Travel time between two rooms.
///
/// Same floor: `|p1 - p2| * 1.0`. Different floors: `|f1 - f2| * 2.0 +
/// |p1 - p2| * 1.0`. Symmetric in its arguments.
pub fn travel_time(a: &Room, b: &Room) -> f64 {
    let horizontal = a.position.abs_diff(b.position) as f64;
    if a.floor == b.floor {
        horizontal
    } else {
        a.floor.abs_diff(b.floor) as f64 * 2.0 + horizontal
    }
}

/// Total travel time for an ordered sequence of rooms: the sum of travel
/// times between each consecutive pair. Zero for sequences of length <= 1.
///
/// The total is order-dependent even though the pairwise metric is
/// symmetric.
pub fn total_travel_time(rooms: &[Room]) -> f64 {
    rooms.windows(2).map(|w| travel_time(&w[0], &w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_floor_is_position_distance() {
        let a = Room::new(3, 2);
        let b = Room::new(3, 9);
        assert_eq!(travel_time(&a, &b), 7.0);
    }

    #[test]
    fn cross_floor_adds_two_per_floor() {
        let a = Room::new(1, 1);
        let b = Room::new(5, 1);
        assert_eq!(travel_time(&a, &b), 8.0);

        let c = Room::new(2, 3);
        let d = Room::new(4, 7);
        assert_eq!(travel_time(&c, &d), 2.0 * 2.0 + 4.0);
    }

    #[test]
    fn pairwise_metric_is_symmetric() {
        let a = Room::new(2, 9);
        let b = Room::new(7, 1);
        assert_eq!(travel_time(&a, &b), travel_time(&b, &a));
    }

    #[test]
    fn total_is_zero_for_short_sequences() {
        assert_eq!(total_travel_time(&[]), 0.0);
        assert_eq!(total_travel_time(&[Room::new(1, 1)]), 0.0);
    }

    #[test]
    fn total_is_order_dependent() {
        let a = Room::new(1, 1);
        let b = Room::new(1, 10);
        let c = Room::new(1, 5);

        // a -> b -> c doubles back; a -> c -> b does not.
        let zigzag = total_travel_time(&[a.clone(), b.clone(), c.clone()]);
        let straight = total_travel_time(&[a, c, b]);
        assert_eq!(zigzag, 14.0);
        assert_eq!(straight, 9.0);
    }
}
