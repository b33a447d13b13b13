//! Dashboard overview: headline stats and the recent-activity feed

use std::time::Duration;

use chrono::Duration as ChronoDuration;

use super::{simulate_latency, REFERENCE_TIME};
use crate::model::{Activity, ActivityKind, DashboardStats};
use crate::DataError;

/// Mock overview service backing the landing panel
pub struct Overview {
    delay: Duration,
}

impl Overview {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn stats(&self) -> Result<DashboardStats, DataError> {
        simulate_latency(self.delay).await;
        Ok(DashboardStats {
            total_revenue: 452_890,
            revenue_trend: 12.5,
            total_orders: 1_893,
            orders_trend: 8.2,
            total_customers: 5_423,
            customers_trend: 16.0,
            conversion_rate: 3.4,
            conversion_trend: -2.1,
        })
    }

    /// Most recent entries first; timestamps are minutes behind the
    /// reference instant so the feed reads the same on every run.
    pub async fn recent_activity(&self) -> Result<Vec<Activity>, DataError> {
        simulate_latency(self.delay).await;
        let entries = [
            (ActivityKind::Order, "New order #3847 from Jane Cooper", 5),
            (ActivityKind::Customer, "Floyd Miles signed up", 12),
            (ActivityKind::Payment, "Payment of $890 received", 28),
            (ActivityKind::Product, "Wireless Headphones restocked", 45),
            (ActivityKind::Order, "Order #3846 marked as shipped", 67),
            (ActivityKind::Customer, "Ronald Richards updated billing info", 94),
            (ActivityKind::Payment, "Refund of $120 issued", 120),
            (ActivityKind::Order, "New order #3845 from Devon Lane", 151),
        ];
        Ok(entries
            .iter()
            .enumerate()
            .map(|(index, (kind, message, minutes_ago))| Activity {
                id: format!("act-{}", index + 1),
                kind: *kind,
                message: (*message).to_string(),
                timestamp: *REFERENCE_TIME - ChronoDuration::minutes(*minutes_ago),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_feed_is_newest_first() {
        let feed = Overview::new(Duration::ZERO).recent_activity().await.unwrap();
        assert_eq!(feed.len(), 8);
        for pair in feed.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[tokio::test]
    async fn test_stats_are_stable() {
        let overview = Overview::new(Duration::ZERO);
        let a = overview.stats().await.unwrap();
        let b = overview.stats().await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.total_customers, 5_423);
        assert!(a.conversion_trend < 0.0);
    }
}
