use std::sync::Arc;

use crate::db::Db;
use crate::services::tracking::Tracking;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub tracker: Arc<Tracking>,
}
