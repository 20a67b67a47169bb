use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{EmailClient, UserStore};
use crate::utils::Config;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<RwLock<dyn UserStore>>;
pub type EmailClientType = Arc<RwLock<dyn EmailClient>>;
pub type ConfigType = Arc<RwLock<Config>>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub email_client: EmailClientType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        email_client: EmailClientType,
        config: ConfigType,
    ) -> Self {
        Self {
            user_store,
            email_client,
            config,
        }
    }
}
