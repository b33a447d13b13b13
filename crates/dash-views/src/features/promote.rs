//! Promote panel configuration

use dash_data::model::{Campaign, CampaignSort, CampaignStatus};

use super::format_short_date;
use crate::render::{BadgeVariant, PanelCopy};
use crate::stats::format_count;
use crate::table::{Column, TableModel};

pub const SORT_OPTIONS: &[(CampaignSort, &str)] = &[
    (CampaignSort::Newest, "Newest"),
    (CampaignSort::Name, "Name"),
    (CampaignSort::Status, "Status"),
    (CampaignSort::Reach, "Reach"),
];

pub const COPY: PanelCopy = PanelCopy {
    loading: "Loading campaigns...",
    load_error: "Failed to load campaigns",
    empty_title: "No campaigns found",
    empty_no_data: "No campaigns have been created yet.",
    empty_no_results: "Try adjusting your search.",
};

/// `12.3K` above a thousand, plain count below.
fn format_reach(reach: u32) -> String {
    if reach >= 1_000 {
        format!("{:.1}K", reach as f64 / 1_000.0)
    } else {
        reach.to_string()
    }
}

pub fn table() -> TableModel<Campaign> {
    TableModel::new(
        vec![
            Column::new("Campaign Name", |c: &Campaign| c.name.clone()),
            Column::new("Type", |c: &Campaign| c.kind.as_str().to_string()),
            Column::new("Status", |c: &Campaign| c.status.as_str().to_string()),
            Column::new("Duration", |c: &Campaign| {
                format!(
                    "{} - {}",
                    format_short_date(c.start_date),
                    format_short_date(c.end_date)
                )
            }),
            Column::new("Reach", |c: &Campaign| format_reach(c.reach)),
            Column::new("Conversions", |c: &Campaign| c.conversions.to_string()),
            Column::new("Budget", |c: &Campaign| {
                format!(
                    "${} / ${}",
                    format_count(c.spent as i64),
                    format_count(c.budget as i64)
                )
            }),
        ],
        |c| c.id.clone(),
    )
}

pub fn status_badge(status: CampaignStatus) -> BadgeVariant {
    match status {
        CampaignStatus::Active => BadgeVariant::Success,
        CampaignStatus::Paused => BadgeVariant::Warning,
        CampaignStatus::Completed => BadgeVariant::Neutral,
        CampaignStatus::Draft => BadgeVariant::Neutral,
    }
}

/// Budget consumption in percent, clamped to 100.
pub fn budget_progress(campaign: &Campaign) -> f64 {
    if campaign.budget == 0 {
        return 0.0;
    }
    (campaign.spent as f64 / campaign.budget as f64 * 100.0).min(100.0)
}
