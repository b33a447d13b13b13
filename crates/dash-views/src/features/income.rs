//! Income panel configuration

use dash_data::model::{IncomeStats, Transaction, TransactionSort, TransactionStatus};

use super::format_full_date;
use crate::render::{BadgeVariant, PanelCopy};
use crate::stats::{format_count, StatCard};
use crate::table::{Column, TableModel};

pub const SORT_OPTIONS: &[(TransactionSort, &str)] = &[
    (TransactionSort::Newest, "Newest"),
    (TransactionSort::Amount, "Amount"),
    (TransactionSort::Status, "Status"),
];

pub const COPY: PanelCopy = PanelCopy {
    loading: "Loading transactions...",
    load_error: "Failed to load transactions",
    empty_title: "No transactions found",
    empty_no_data: "No transactions have been recorded yet.",
    empty_no_results: "Try adjusting your search.",
};

/// Signed dollar amount, `+$890.00` / `-$120.00`.
fn format_amount(amount: i64) -> String {
    let sign = if amount < 0 { '-' } else { '+' };
    format!("{sign}${}.00", format_count(amount.abs()))
}

pub fn table() -> TableModel<Transaction> {
    TableModel::new(
        vec![
            Column::new("Date", |t: &Transaction| format_full_date(t.date)),
            Column::new("Description", |t: &Transaction| t.description.clone()),
            Column::new("Customer", |t: &Transaction| t.customer.clone()),
            Column::new("Type", |t: &Transaction| t.kind.as_str().to_string()),
            Column::new("Amount", |t: &Transaction| format_amount(t.amount)),
            Column::new("Status", |t: &Transaction| t.status.as_str().to_string()),
        ],
        |t| t.id.clone(),
    )
}

pub fn status_badge(status: TransactionStatus) -> BadgeVariant {
    match status {
        TransactionStatus::Completed => BadgeVariant::Success,
        TransactionStatus::Pending => BadgeVariant::Warning,
        TransactionStatus::Failed => BadgeVariant::Danger,
    }
}

pub fn stats_strip(stats: Option<&IncomeStats>) -> Vec<StatCard> {
    match stats {
        Some(stats) => vec![
            StatCard::ready("Total Revenue", format!("${}", format_count(stats.total_revenue)))
                .with_trend(stats.revenue_trend),
            StatCard::ready(
                "Pending Payments",
                format!("${}", format_count(stats.pending_payments)),
            )
            .with_trend(stats.pending_trend),
            StatCard::ready(
                "Completed Transactions",
                format_count(stats.completed_transactions),
            )
            .with_trend(stats.completed_trend),
        ],
        None => vec![
            StatCard::pending("Total Revenue"),
            StatCard::pending("Pending Payments"),
            StatCard::pending("Completed Transactions"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refund_amount_renders_negative() {
        assert_eq!(format_amount(-120), "-$120.00");
        assert_eq!(format_amount(890), "+$890.00");
        assert_eq!(format_amount(1_250), "+$1,250.00");
    }

    #[test]
    fn test_pending_maps_to_warning() {
        assert_eq!(status_badge(TransactionStatus::Pending), BadgeVariant::Warning);
        assert_eq!(status_badge(TransactionStatus::Failed), BadgeVariant::Danger);
    }

    #[test]
    fn test_revenue_card_carries_dollar_sign() {
        let stats = IncomeStats {
            total_revenue: 847_293,
            revenue_trend: 12.5,
            pending_payments: 24_580,
            pending_trend: -3.2,
            completed_transactions: 1_423,
            completed_trend: 8.1,
        };
        let cards = stats_strip(Some(&stats));
        assert_eq!(cards[0].display_value(), "$847,293");
        assert_eq!(cards[1].display_value(), "$24,580");
        assert_eq!(cards[2].display_value(), "1,423");
    }
}
