use sea_orm::DatabaseConnection;

use crate::server::config::DEFAULT_ADMIN_TITLE;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub admin_title: String,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            admin_title: DEFAULT_ADMIN_TITLE.to_string(),
        }
    }
}
