//! Signed-in user profile store
//!
//! Unlike the collection services this one holds mutable state: updates
//! are merged field by field over the stored profile.

use std::time::Duration;

use chrono::TimeZone;
use chrono::Utc;
use parking_lot::RwLock;

use super::simulate_latency;
use crate::model::{ProfileStats, ProfileUpdate, UserProfile};
use crate::DataError;

pub struct ProfileStore {
    profile: RwLock<UserProfile>,
    delay: Duration,
}

impl ProfileStore {
    pub fn new(delay: Duration) -> Self {
        Self {
            profile: RwLock::new(default_profile()),
            delay,
        }
    }

    pub async fn profile(&self) -> Result<UserProfile, DataError> {
        simulate_latency(self.delay).await;
        Ok(self.profile.read().clone())
    }

    /// Merge the patch over the stored profile and return the result.
    pub async fn update_profile(&self, patch: ProfileUpdate) -> Result<UserProfile, DataError> {
        simulate_latency(self.delay).await;
        let mut profile = self.profile.write();
        if let Some(name) = patch.name {
            profile.name = name;
        }
        if let Some(email) = patch.email {
            profile.email = email;
        }
        if let Some(role) = patch.role {
            profile.role = role;
        }
        if let Some(phone) = patch.phone {
            profile.phone = phone;
        }
        if let Some(location) = patch.location {
            profile.location = location;
        }
        if let Some(department) = patch.department {
            profile.department = department;
        }
        if let Some(bio) = patch.bio {
            profile.bio = bio;
        }
        Ok(profile.clone())
    }

    pub async fn stats(&self) -> Result<ProfileStats, DataError> {
        simulate_latency(self.delay).await;
        Ok(ProfileStats {
            projects_completed: 47,
            tasks_completed: 312,
            hours_logged: 1_840,
            team_size: 12,
        })
    }
}

fn default_profile() -> UserProfile {
    UserProfile {
        id: "user-1".to_string(),
        name: "Evano".to_string(),
        email: "evano@dashboard.com".to_string(),
        role: "Project Manager".to_string(),
        phone: "(480) 555-0103".to_string(),
        location: "San Francisco, CA".to_string(),
        department: "Operations".to_string(),
        joined_date: Utc.with_ymd_and_hms(2022, 3, 14, 0, 0, 0).unwrap(),
        bio: "Experienced project manager focused on smooth operations and \
              happy customers."
            .to_string(),
    }
}
