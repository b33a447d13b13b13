use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub phone: String,
    pub location: String,
    pub department: String,
    pub joined_date: DateTime<Utc>,
    pub bio: String,
}

/// Partial update applied over the stored profile; absent fields keep
/// their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
    pub bio: Option<String>,
}

/// Numbers for the profile stats strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub projects_completed: i64,
    pub tasks_completed: i64,
    pub hours_logged: i64,
    pub team_size: i64,
}
