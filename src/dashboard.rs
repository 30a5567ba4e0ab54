use serde::Serialize;

use crate::{client::SolcatClient, types::DashboardStats};

/// Dashboard state. `loading` stays true until the single startup fetch settles,
/// which happens off the request path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub loading: bool,
    pub stats: DashboardStats,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            loading: true,
            stats: DashboardStats::default(),
        }
    }
}

impl Dashboard {
    /// Fetches the stats once. A failure is only logged and leaves the zeroed stats
    /// in place.
    pub async fn load(client: &SolcatClient) -> Self {
        let mut dashboard = Self::default();

        match client.dashboard_stats().await {
            Ok(stats) => dashboard.stats = stats,
            Err(e) => tracing::error!("error fetching dashboard data: {}", e),
        }
        dashboard.loading = false;

        dashboard
    }
}
