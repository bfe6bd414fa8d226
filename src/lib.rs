pub mod app;
pub mod config;
pub mod domain;
pub mod http;
pub mod infra;
pub mod jobs;
pub mod ui;

use parking_lot::RwLock;
use std::sync::Arc;
use time::OffsetDateTime;

use crate::app::dashboard::DashboardStore;
use crate::app::hub::Hub;
use crate::app::notifications::NotificationPanel;
use crate::infra::db::Db;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub hub: Hub,
    pub dashboard: Arc<RwLock<DashboardStore>>,
    pub notifications: Arc<RwLock<NotificationPanel>>,
}

impl AppState {
    /// State seeded with the sample incidents and notifications.
    pub fn new(db: Db, hub: Hub) -> Self {
        Self {
            db,
            hub,
            dashboard: Arc::new(RwLock::new(DashboardStore::with_samples())),
            notifications: Arc::new(RwLock::new(NotificationPanel::with_samples(
                OffsetDateTime::now_utc(),
            ))),
        }
    }
}
