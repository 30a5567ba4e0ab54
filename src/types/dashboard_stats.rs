use serde::{Deserialize, Serialize};

/// Aggregates behind `GET /dashboard/stats`. `Default` is the zeroed state shown
/// before (or instead of) a successful load.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_scanned: u64,
    pub total_reported: u64,
    pub risk_distribution: Vec<NamedValue>,
    pub activity_timeline: Vec<ActivityPoint>,
    pub top_suspicious_addresses: Vec<NamedValue>,
}

/// Slice of the donut chart or row of the bar list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NamedValue {
    pub name: String,
    pub value: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActivityPoint {
    pub date: String,
    pub scanned: u64,
    pub reported: u64,
}
