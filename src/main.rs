use std::sync::Arc;
use tokio::sync::RwLock;

use account_service::app_state::AppState;
use account_service::services::{HashmapUserStore, MockEmailClient};
use account_service::utils::Config;
use account_service::Application;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Arc::new(RwLock::new(
        Config::from_env().expect("Failed to load config"),
    ));
    let user_store = Arc::new(RwLock::new(HashmapUserStore::new()));
    let email_client = Arc::new(RwLock::new(MockEmailClient::default()));

    let app_state = AppState::new(user_store, email_client, config);

    let app = Application::build(app_state, "0.0.0.0:3000")
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
