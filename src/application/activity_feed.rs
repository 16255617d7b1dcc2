// Activity feed - Samples canned events with randomized figures
use crate::application::clock::Clock;
use crate::application::random_source::RandomSource;
use crate::domain::activity::{ACTIVITY_CATALOG, ActivityEntry, ActivityKind};

pub const FEED_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityFeed {
    pub updated: String,
    pub entries: Vec<ActivityEntry>,
}

/// Display value for one occurrence of `kind`.
pub fn describe(kind: ActivityKind, rng: &mut dyn RandomSource) -> String {
    match kind {
        ActivityKind::NewOrder => format!("+₱{}k", rng.next_int(8, 75)),
        ActivityKind::Renewal => format!("+₱{}k", rng.next_int(20, 60)),
        ActivityKind::ChurnAlert => "-1 acct".to_string(),
        ActivityKind::ProductInquiry => format!("{} leads", rng.next_int(5, 22)),
        ActivityKind::RefundIssued => format!("-₱{}k", rng.next_int(4, 18)),
    }
}

/// Draws [`FEED_LENGTH`] events uniformly, with replacement, then fills in
/// each event's figure, and stamps the feed with the current wall-clock time.
pub fn sample_activity(rng: &mut dyn RandomSource, clock: &dyn Clock) -> ActivityFeed {
    let updated = format!("Updated {}", clock.now().format("%H:%M"));

    let kinds: Vec<ActivityKind> = (0..FEED_LENGTH)
        .map(|_| ACTIVITY_CATALOG[rng.next_int(0, ACTIVITY_CATALOG.len() as i64 - 1) as usize])
        .collect();

    let entries = kinds
        .into_iter()
        .map(|kind| ActivityEntry::new(kind.label(), describe(kind, rng)))
        .collect();

    ActivityFeed { updated, entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::clock::testing::FixedClock;
    use crate::application::random_source::ChaChaSource;
    use crate::application::random_source::testing::ScriptedSource;

    #[test]
    fn test_describe() {
        let mut rng = ScriptedSource::new([42, 33, 9, 4], []);
        assert_eq!(describe(ActivityKind::NewOrder, &mut rng), "+₱42k");
        assert_eq!(describe(ActivityKind::Renewal, &mut rng), "+₱33k");
        assert_eq!(describe(ActivityKind::ChurnAlert, &mut rng), "-1 acct");
        assert_eq!(describe(ActivityKind::ProductInquiry, &mut rng), "9 leads");
        assert_eq!(describe(ActivityKind::RefundIssued, &mut rng), "-₱4k");
        assert_eq!(rng.remaining_ints(), 0);
    }

    #[test]
    fn test_sample_activity_picks_all_events_before_figures() {
        // five picks, then figures for the four events that draw one
        let mut rng = ScriptedSource::new([0, 2, 4, 3, 1, 10, 18, 5, 60], []);
        let feed = sample_activity(&mut rng, &FixedClock::at(9, 5));

        assert_eq!(rng.remaining_ints(), 0);
        assert_eq!(feed.updated, "Updated 09:05");
        assert_eq!(
            feed.entries,
            vec![
                ActivityEntry::new("New order", "+₱10k".into()),
                ActivityEntry::new("Churn alert", "-1 acct".into()),
                ActivityEntry::new("Refund issued", "-₱18k".into()),
                ActivityEntry::new("Product inquiry", "5 leads".into()),
                ActivityEntry::new("Renewal", "+₱60k".into()),
            ]
        );
    }

    #[test]
    fn test_sample_activity_always_five_from_catalog() {
        let mut rng = ChaChaSource::seeded(99);
        let clock = FixedClock::at(14, 30);
        let labels: Vec<&str> = ACTIVITY_CATALOG.iter().map(|k| k.label()).collect();

        for _ in 0..200 {
            let feed = sample_activity(&mut rng, &clock);
            assert_eq!(feed.entries.len(), FEED_LENGTH);
            assert!(feed.entries.iter().all(|e| labels.contains(&e.label)));
        }
    }
}
