//! Campaign book: a bounded collection of 100 rows

use std::cmp::Ordering;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Duration as ChronoDuration;
use dash_core::{CoreError, PageEnvelope, PageFetcher, QueryParams};

use super::{simulate_latency, REFERENCE_TIME};
use crate::engine::{self, cmp_ci};
use crate::model::{Campaign, CampaignKind, CampaignSort, CampaignStatus};
use crate::rng::IndexedRng;
use crate::DataError;

/// Size of the generated campaign book
pub const CAMPAIGN_COUNT: usize = 100;

const CAMPAIGN_NAMES: [&str; 12] = [
    "Summer Sale 2024",
    "New Customer Welcome",
    "Flash Friday",
    "VIP Members Only",
    "Holiday Special",
    "Back to School",
    "Clearance Event",
    "Loyalty Rewards",
    "Product Launch",
    "Anniversary Sale",
    "Free Shipping Week",
    "Bundle Deal",
];

const KINDS: [CampaignKind; 4] = [
    CampaignKind::Email,
    CampaignKind::Social,
    CampaignKind::Ads,
    CampaignKind::Discount,
];

// Weighted: running campaigns are the common case.
const STATUSES: [CampaignStatus; 5] = [
    CampaignStatus::Active,
    CampaignStatus::Active,
    CampaignStatus::Paused,
    CampaignStatus::Completed,
    CampaignStatus::Draft,
];

/// Materialize campaign row `index`. Draw order is fixed: kind, status,
/// start age, duration, budget, spent, reach, conversions.
pub fn generate_campaign(index: usize) -> Campaign {
    let mut rng = IndexedRng::for_index(index);

    let kind = *rng.pick(&KINDS);
    let status = *rng.pick(&STATUSES);
    let start_age = rng.in_range(0, 60 * 24 * 3600);
    let duration = rng.in_range(0, 30 * 24 * 3600);
    let budget = (rng.below(10_000) + 500) as u32;
    let spent = rng.below(budget as usize + 1) as u32;
    let reach = (rng.below(50_000) + 1_000) as u32;
    let conversions = (rng.below(500) + 10) as u32;

    let base = CAMPAIGN_NAMES[index % CAMPAIGN_NAMES.len()];
    let name = if index >= CAMPAIGN_NAMES.len() {
        format!("{base} #{}", index / CAMPAIGN_NAMES.len() + 1)
    } else {
        base.to_string()
    };

    let start_date = *REFERENCE_TIME - ChronoDuration::seconds(start_age);
    Campaign {
        id: format!("camp_{index:04}"),
        name,
        kind,
        status,
        start_date,
        end_date: start_date + ChronoDuration::seconds(duration),
        reach,
        conversions,
        budget,
        spent,
    }
}

fn compare(sort: Option<CampaignSort>, a: &Campaign, b: &Campaign) -> Ordering {
    match sort {
        Some(CampaignSort::Name) => cmp_ci(&a.name, &b.name),
        Some(CampaignSort::Status) => a.status.sort_rank().cmp(&b.status.sort_rank()),
        Some(CampaignSort::Reach) => b.reach.cmp(&a.reach),
        Some(CampaignSort::Newest) => b.start_date.cmp(&a.start_date),
        None => Ordering::Equal,
    }
}

/// Mock promote service over the generated campaign book
pub struct CampaignBook {
    campaigns: Vec<Campaign>,
    delay: Duration,
}

impl CampaignBook {
    pub fn new(delay: Duration) -> Self {
        Self {
            campaigns: (0..CAMPAIGN_COUNT).map(generate_campaign).collect(),
            delay,
        }
    }

    /// Resolve one page of campaigns. Search matches name or channel type.
    pub async fn campaigns(
        &self,
        params: &QueryParams<CampaignSort>,
    ) -> Result<PageEnvelope<Campaign>, DataError> {
        simulate_latency(self.delay).await;
        let sort = params.sort_by;
        engine::resolve_page(
            &self.campaigns,
            params,
            |campaign, needle| {
                campaign.name.to_lowercase().contains(needle)
                    || campaign.kind.as_str().contains(needle)
            },
            move |a, b| compare(sort, a, b),
        )
    }
}

#[async_trait]
impl PageFetcher<Campaign> for CampaignBook {
    type Sort = CampaignSort;

    async fn fetch_page(
        &self,
        params: QueryParams<CampaignSort>,
    ) -> Result<PageEnvelope<Campaign>, CoreError> {
        self.campaigns(&params).await.map_err(Into::into)
    }
}
