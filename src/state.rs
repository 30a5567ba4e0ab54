use std::sync::Mutex;

use tokio::sync::RwLock;

use crate::{client::SolcatClient, dashboard::Dashboard, popup::Popup};

/// Everything the handlers share. The dashboard is written once, when its
/// startup fetch settles.
pub struct State {
    pub client: SolcatClient,
    pub popup: Mutex<Popup>,
    pub dashboard: RwLock<Dashboard>,
    pub dashboard_url: String,
}

impl State {
    pub fn new(client: SolcatClient, dashboard_url: String) -> Self {
        Self {
            client,
            popup: Mutex::new(Popup::new()),
            dashboard: RwLock::new(Dashboard::default()),
            dashboard_url,
        }
    }
}
