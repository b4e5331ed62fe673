use chrono::{DateTime, Utc};
use contracts::dashboards::d501_ticket_sales::TicketSalesItem;
use rand::Rng;

use crate::shared::config::RefreshConfig;
use crate::shared::view_engine::aggregate::percent_change;

/// Per-tick mutation rules of the ticket sales simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefreshPolicy {
    pub update_probability: f64,
    pub delta_min: i64,
    pub delta_max: i64,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self {
            update_probability: 0.3,
            delta_min: -5,
            delta_max: 14,
        }
    }
}

impl From<&RefreshConfig> for RefreshPolicy {
    fn from(config: &RefreshConfig) -> Self {
        Self {
            update_probability: config.update_probability,
            delta_min: config.delta_min,
            delta_max: config.delta_max,
        }
    }
}

/// Result of one tick
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub items: Vec<TicketSalesItem>,
    pub changed: usize,
}

/// Apply one refresh tick to `items`.
///
/// Each row independently changes with `update_probability`; a changed row
/// gets an integer delta from `[delta_min, delta_max]`, is clamped at 0, has
/// its change recomputed and is stamped with `now`. Untouched rows are
/// returned as they were.
pub fn apply_tick<G: Rng + ?Sized>(
    items: &[TicketSalesItem],
    policy: &RefreshPolicy,
    rng: &mut G,
    now: DateTime<Utc>,
) -> TickOutcome {
    let low = policy.delta_min.min(policy.delta_max);
    let high = policy.delta_min.max(policy.delta_max);
    let mut changed = 0;

    let items = items
        .iter()
        .map(|item| {
            if rng.gen::<f64>() >= policy.update_probability {
                return item.clone();
            }
            changed += 1;
            let delta = rng.gen_range(low..=high);
            let total_tickets = (item.total_tickets + delta).max(0);
            TicketSalesItem {
                total_tickets,
                percent_change: percent_change(total_tickets as f64, item.previous_total as f64),
                last_updated: now,
                ..item.clone()
            }
        })
        .collect();

    TickOutcome { items, changed }
}
