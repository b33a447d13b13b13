use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the campaign book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Stable identifier, `camp_{index:04}`
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CampaignKind,
    pub status: CampaignStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub reach: u32,
    pub conversions: u32,
    pub budget: u32,
    /// Never exceeds `budget`
    pub spent: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignKind {
    Email,
    Social,
    Ads,
    Discount,
}

impl CampaignKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignKind::Email => "email",
            CampaignKind::Social => "social",
            CampaignKind::Ads => "ads",
            CampaignKind::Discount => "discount",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
    Draft,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Draft => "draft",
        }
    }

    /// Running campaigns sort first, then finished, then inactive ones.
    pub fn sort_rank(&self) -> u8 {
        match self {
            CampaignStatus::Active => 0,
            CampaignStatus::Completed => 1,
            CampaignStatus::Draft => 2,
            CampaignStatus::Paused => 3,
        }
    }
}

/// Sort orders the promote panel offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignSort {
    Newest,
    Name,
    Status,
    Reach,
}
