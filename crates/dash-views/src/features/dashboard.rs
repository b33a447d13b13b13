//! Dashboard overview cards and activity feed rendering

use chrono::{DateTime, Utc};
use dash_data::model::{Activity, DashboardStats};

use crate::stats::{format_count, StatCard};

pub fn overview_cards(stats: Option<&DashboardStats>) -> Vec<StatCard> {
    match stats {
        Some(stats) => vec![
            StatCard::ready("Total Revenue", format!("${}", format_count(stats.total_revenue)))
                .with_trend(stats.revenue_trend),
            StatCard::ready("Total Orders", format_count(stats.total_orders))
                .with_trend(stats.orders_trend),
            StatCard::ready("Total Customers", format_count(stats.total_customers))
                .with_trend(stats.customers_trend),
            StatCard::ready("Conversion Rate", format!("{}%", stats.conversion_rate))
                .with_trend(stats.conversion_trend),
        ],
        None => vec![
            StatCard::pending("Total Revenue"),
            StatCard::pending("Total Orders"),
            StatCard::pending("Total Customers"),
            StatCard::pending("Conversion Rate"),
        ],
    }
}

/// "5m ago", "2h ago", "3d ago" relative to the given instant.
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes().max(0);
    if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 24 * 60 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / (24 * 60))
    }
}

pub fn feed_line(activity: &Activity, now: DateTime<Utc>) -> String {
    format!("{} ({})", activity.message, relative_time(activity.timestamp, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc::now();
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(relative_time(now - Duration::minutes(94), now), "1h ago");
        assert_eq!(relative_time(now - Duration::days(3), now), "3d ago");
    }

    #[test]
    fn test_conversion_card_has_its_own_unit() {
        let stats = DashboardStats {
            total_revenue: 452_890,
            revenue_trend: 12.5,
            total_orders: 1_893,
            orders_trend: 8.2,
            total_customers: 5_423,
            customers_trend: 16.0,
            conversion_rate: 3.4,
            conversion_trend: -2.1,
        };
        let cards = overview_cards(Some(&stats));
        assert_eq!(cards[0].display_value(), "$452,890");
        assert_eq!(cards[3].display_value(), "3.4%");
        assert_eq!(cards[3].display_trend().unwrap(), "-2.1%");
    }
}
