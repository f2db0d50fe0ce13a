//! Ride selection as a 0/1 knapsack over minutes.
//!
//! Each eligible ride is an item whose weight is its effective cost and whose
//! value is its thrill, plus a large bonus if the ride is mandatory. The
//! bonus makes mandatory rides win whenever they fit, without ever making a
//! request infeasible.
//!
//! Determinism: items are visited in ascending ride id order, and an entry
//! of the table is only replaced by a strictly better value. Backtracking
//! over the recorded improvements then yields the same subset for the same
//! input every time.

use super::queue::PricedRide;

/// Score of a ride for the knapsack.
fn score(item: &PricedRide, mandatory_bonus: u32) -> u64 {
    let bonus = if item.ride.mandatory {
        u64::from(mandatory_bonus)
    } else {
        0
    };
    u64::from(item.ride.thrill) + bonus
}

/// Choose the best subset of `items` that fits in `budget_mins`.
///
/// `gap_mins` is walking time between consecutive rides: a plan of `n`
/// rides must satisfy `sum(cost) + gap_mins * (n - 1) <= budget_mins`.
/// This is the same as charging every ride `cost + gap_mins` against a
/// capacity of `budget_mins + gap_mins`.
///
/// Returns indices into `items` in ascending ride id order.
pub fn select(
    items: &[PricedRide],
    budget_mins: u32,
    gap_mins: u32,
    mandatory_bonus: u32,
) -> Vec<usize> {
    if items.is_empty() || budget_mins == 0 {
        return Vec::new();
    }

    // Any gap above the budget already rules out pairs; keep the table small
    let gap_mins = gap_mins.min(budget_mins.saturating_add(1));

    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| items[a].ride.id.cmp(&items[b].ride.id));

    let capacity = budget_mins as usize + gap_mins as usize;
    let width = capacity + 1;
    let weight = |i: usize| items[i].cost as usize + gap_mins as usize;

    // best[t]: best score using at most t minutes of capacity.
    let mut best = vec![0u64; width];
    // took[k * width + t]: the k-th item (in id order) improved best[t].
    let mut took = vec![false; order.len() * width];

    for (k, &i) in order.iter().enumerate() {
        let w = weight(i);
        if w > capacity {
            continue;
        }
        let value = score(&items[i], mandatory_bonus);

        for t in (w..=capacity).rev() {
            let candidate = best[t - w] + value;
            if candidate > best[t] {
                best[t] = candidate;
                took[k * width + t] = true;
            }
        }
    }

    let mut chosen = Vec::new();
    let mut t = capacity;
    for (k, &i) in order.iter().enumerate().rev() {
        if took[k * width + t] {
            chosen.push(i);
            t -= weight(i);
        }
    }
    chosen.reverse();
    chosen
}
