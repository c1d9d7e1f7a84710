//! The room selection engine.
//!
//! Given a snapshot of free rooms and a requested count, selects the subset
//! minimizing total sequential travel time. Same-floor allocations take
//! priority; cross-floor allocations are found by combinatorial search,
//! exhaustive for small inventories and randomly sampled for large ones.

use std::collections::BTreeMap;

use rand::Rng;

use crate::error::AllocationError;
use crate::room::Room;
use crate::travel::{total_travel_time, travel_time};

/// Maximum number of rooms a single request may ask for.
pub const MAX_ROOMS_PER_BOOKING: usize = 5;

/// Above this many free rooms the cross-floor search switches from
/// exhaustive enumeration to random sampling.
const EXHAUSTIVE_SEARCH_LIMIT: usize = 30;

/// Cap on random samples drawn in the fallback path.
const MAX_SAMPLES: u128 = 1000;

/// The outcome of a successful selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Selected rooms, sorted by (floor, position) ascending.
    pub rooms: Vec<Room>,

    /// Total travel time over the selected sequence.
    pub total_travel_time: f64,
}

/// Select `count` rooms from `available` minimizing total travel time.
///
/// Policy, in priority order:
///
/// 1. If any floor has at least `count` free rooms, the lowest such floor
///    wins; its rooms are sorted by position and the first `count` taken.
/// 2. Otherwise combinations of `count` rooms are searched across floors,
///    each measured sorted by (floor, position). With at most 30 free rooms
///    every combination is tried; above that, up to 1000 random samples are
///    drawn and the best among them returned. The sampling path is
///    **non-deterministic and best-effort**: callers must not assume a
///    globally optimal answer when more than 30 rooms are free.
///
/// Never partially allocates: fails with
/// [`AllocationError::InsufficientInventory`] when fewer rooms are free than
/// requested.
pub fn select_rooms(available: &[Room], count: usize) -> Result<Selection, AllocationError> {
    select_rooms_with_rng(available, count, &mut rand::rng())
}

/// [`select_rooms`] with a caller-supplied RNG for the sampling fallback.
pub fn select_rooms_with_rng<R: Rng + ?Sized>(
    available: &[Room],
    count: usize,
    rng: &mut R,
) -> Result<Selection, AllocationError> {
    if count == 0 || count > MAX_ROOMS_PER_BOOKING {
        return Err(AllocationError::InvalidCount {
            requested: count,
            max: MAX_ROOMS_PER_BOOKING,
        });
    }

    if available.len() < count {
        return Err(AllocationError::InsufficientInventory {
            requested: count,
            available: available.len(),
        });
    }

    // Priority 1: a single floor with enough free rooms, lowest floor first.
    let mut by_floor: BTreeMap<u32, Vec<&Room>> = BTreeMap::new();
    for room in available {
        by_floor.entry(room.floor).or_default().push(room);
    }

    for rooms_on_floor in by_floor.values() {
        if rooms_on_floor.len() >= count {
            let mut rooms: Vec<Room> = rooms_on_floor.iter().map(|r| (*r).clone()).collect();
            rooms.sort_by_key(|r| r.position);
            rooms.truncate(count);
            let total_travel_time = total_travel_time(&rooms);
            return Ok(Selection {
                rooms,
                total_travel_time,
            });
        }
    }

    // Priority 2: cross-floor minimization. Sorting once up front means any
    // ascending index combination is already in (floor, position) order.
    let mut sorted: Vec<Room> = available.to_vec();
    sorted.sort_by_key(|r| (r.floor, r.position));

    let (indices, total_travel_time) = if sorted.len() <= EXHAUSTIVE_SEARCH_LIMIT {
        exhaustive_best(&sorted, count)
    } else {
        sampled_best(&sorted, count, rng)
    };

    let rooms = indices.iter().map(|&i| sorted[i].clone()).collect();
    Ok(Selection {
        rooms,
        total_travel_time,
    })
}

/// Travel time over the rooms at `indices` (ascending) in `sorted`.
fn sequence_time(sorted: &[Room], indices: &[usize]) -> f64 {
    indices
        .windows(2)
        .map(|w| travel_time(&sorted[w[0]], &sorted[w[1]]))
        .sum()
}

/// Enumerate every C(n, count) combination in lexicographic order and keep
/// the first one achieving the minimum travel time.
fn exhaustive_best(sorted: &[Room], count: usize) -> (Vec<usize>, f64) {
    let n = sorted.len();
    let mut indices: Vec<usize> = (0..count).collect();
    let mut best_indices = indices.clone();
    let mut best_time = sequence_time(sorted, &indices);

    while advance(&mut indices, n) {
        let time = sequence_time(sorted, &indices);
        if time < best_time {
            best_time = time;
            best_indices.copy_from_slice(&indices);
        }
    }

    (best_indices, best_time)
}

/// Advance `indices` to the next lexicographic combination of `n` items.
/// Returns false once the last combination has been visited.
fn advance(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    for i in (0..k).rev() {
        if indices[i] < n - k + i {
            indices[i] += 1;
            for j in i + 1..k {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Draw up to `MAX_SAMPLES` random combinations (capped at the true
/// combination count) and keep the best seen. May miss the true optimum.
fn sampled_best<R: Rng + ?Sized>(sorted: &[Room], count: usize, rng: &mut R) -> (Vec<usize>, f64) {
    let n = sorted.len();
    let samples = MAX_SAMPLES.min(combination_count(n, count));

    let mut best_indices: Option<Vec<usize>> = None;
    let mut best_time = f64::INFINITY;

    for _ in 0..samples {
        let mut indices = rand::seq::index::sample(rng, n, count).into_vec();
        indices.sort_unstable();
        let time = sequence_time(sorted, &indices);
        if time < best_time {
            best_time = time;
            best_indices = Some(indices);
        }
    }

    // samples >= 1 because n >= count >= 1, so a best always exists.
    (best_indices.unwrap_or_default(), best_time)
}

/// C(n, k), saturating. Exact for every inventory size this engine sees.
fn combination_count(n: usize, k: usize) -> u128 {
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result.saturating_mul((n - i) as u128) / (i as u128 + 1);
    }
    result
}
