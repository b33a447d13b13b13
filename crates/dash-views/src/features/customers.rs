//! Customers panel configuration

use dash_data::model::{Customer, CustomerSort, CustomerStats, CustomerStatus};

use crate::render::{BadgeVariant, PanelCopy};
use crate::stats::{format_count, StatCard};
use crate::table::{Column, TableModel};

pub const SORT_OPTIONS: &[(CustomerSort, &str)] = &[
    (CustomerSort::Newest, "Newest"),
    (CustomerSort::Name, "Name"),
    (CustomerSort::Status, "Status"),
];

pub const COPY: PanelCopy = PanelCopy {
    loading: "Loading customers...",
    load_error: "Failed to load customers",
    empty_title: "No customers found",
    empty_no_data: "No customers have been added yet.",
    empty_no_results: "Try adjusting your search.",
};

pub fn table() -> TableModel<Customer> {
    TableModel::new(
        vec![
            Column::new("Customer Name", |c: &Customer| c.name.clone()),
            Column::new("Company", |c: &Customer| c.company.clone()),
            Column::new("Phone Number", |c: &Customer| c.phone.clone()),
            Column::new("Email", |c: &Customer| c.email.clone()),
            Column::new("Country", |c: &Customer| c.country.clone()),
            Column::new("Status", |c: &Customer| c.status.as_str().to_string()),
        ],
        |c| c.id.clone(),
    )
}

pub fn status_badge(status: CustomerStatus) -> BadgeVariant {
    match status {
        CustomerStatus::Active => BadgeVariant::Success,
        CustomerStatus::Inactive => BadgeVariant::Danger,
    }
}

/// The three cards of the stats strip; placeholders until stats land.
pub fn stats_strip(stats: Option<&CustomerStats>) -> Vec<StatCard> {
    match stats {
        Some(stats) => vec![
            StatCard::ready("Total Customers", format_count(stats.total_customers))
                .with_trend(stats.total_customers_trend),
            StatCard::ready("Members", format_count(stats.members))
                .with_trend(stats.members_trend),
            StatCard::ready("Active Now", format_count(stats.active_now)),
        ],
        None => vec![
            StatCard::pending("Total Customers"),
            StatCard::pending("Members"),
            StatCard::pending("Active Now"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample() -> Customer {
        Customer {
            id: "cust-1".to_string(),
            name: "Jane Cooper".to_string(),
            company: "Microsoft".to_string(),
            phone: "(225) 555-0118".to_string(),
            email: "jane@microsoft.com".to_string(),
            country: "United States".to_string(),
            status: CustomerStatus::Active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_columns_match_the_directory_layout() {
        let table = table();
        assert_eq!(
            table.headers(),
            vec!["Customer Name", "Company", "Phone Number", "Email", "Country", "Status"]
        );
        let cells = table.render_row(&sample());
        assert_eq!(cells[0], "Jane Cooper");
        assert_eq!(cells[5], "active");
        assert_eq!(table.row_key(&sample()), "cust-1");
    }

    #[test]
    fn test_stats_strip_placeholders() {
        let cards = stats_strip(None);
        assert_eq!(cards.len(), 3);
        assert!(cards.iter().all(|c| c.display_value() == "\u{2014}"));
    }

    #[test]
    fn test_stats_strip_values() {
        let stats = CustomerStats {
            total_customers: 5_423,
            total_customers_trend: 16.0,
            members: 1_893,
            members_trend: -1.0,
            active_now: 189,
        };
        let cards = stats_strip(Some(&stats));
        assert_eq!(cards[0].display_value(), "5,423");
        assert_eq!(cards[0].display_trend().unwrap(), "+16%");
        assert_eq!(cards[1].display_trend().unwrap(), "-1%");
        assert_eq!(cards[2].display_value(), "189");
        assert_eq!(cards[2].display_trend(), None);
    }
}
