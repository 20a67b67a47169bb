use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use app_state::AppState;
use routes::{
    activate, activation_status, login, logout, register, resend_activation, verify_twofa,
    welcome,
};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

pub fn app_router(app_state: AppState) -> Router {
    Router::new()
        .route("/register", post(register::register))
        .route("/welcome", get(welcome::welcome))
        .route("/auth/login", post(login::login))
        .route("/auth/verify-2fa", post(verify_twofa::verify_twofa))
        .route("/auth/activate/:user_id", get(activate::activate))
        .route(
            "/auth/access/activation/:user_id",
            get(activation_status::activation_status),
        )
        .route(
            "/auth/resend-activation",
            post(resend_activation::resend_activation),
        )
        .route("/auth/logout", post(logout::logout))
        .fallback_service(ServeDir::new("assets"))
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    listener: TcpListener,
    router: Router,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, std::io::Error> {
        let router = app_router(app_state);
        let listener = TcpListener::bind(address).await?;
        let address = format!("http://{}", listener.local_addr()?);

        Ok(Self {
            listener,
            router,
            address,
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        println!("listening on {}", &self.address);
        axum::serve(self.listener, self.router).await
    }
}
