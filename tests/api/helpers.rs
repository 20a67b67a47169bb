use reqwest::{Client, Response};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::spawn;
use tokio::sync::RwLock;
use uuid::Uuid;

use account_service::app_router;
use account_service::app_state::AppState;
use account_service::domain::{
    LoginRequestBody, RegisterRequestBody, UserStore, VerifyTwoFaRequestBody,
};
use account_service::services::{HashmapUserStore, MockEmailClient};
use account_service::utils::Config;

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub user_store: Arc<RwLock<HashmapUserStore>>,
    pub email_client: Arc<RwLock<MockEmailClient>>,
}

impl TestApp {
    pub async fn new() -> Self {
        let user_store = Arc::new(RwLock::new(HashmapUserStore::new()));
        let email_client = Arc::new(RwLock::new(MockEmailClient::default()));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        // The config advertises the real test address so activation links in
        // outgoing emails point back at this server instance.
        let config = Config::new(
            vec![7u8; 32],
            "test-jwt-secret".to_owned(),
            address.clone(),
        )
        .expect("failed building test config");

        let app_state = AppState::new(
            user_store.clone(),
            email_client.clone(),
            Arc::new(RwLock::new(config)),
        );

        let server = axum::serve(listener, app_router(app_state));

        spawn(async move {
            if let Err(e) = server.await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
            user_store,
            email_client,
        }
    }

    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Response {
        let body = RegisterRequestBody {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            password_confirmation: password_confirmation.to_string(),
        };

        self.http_client
            .post(format!("{}/register", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute register request.")
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        let body = LoginRequestBody {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.http_client
            .post(format!("{}/auth/login", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute login request.")
    }

    pub async fn verify_2fa(&self, code: &str, pending_cookie: Option<&str>) -> Response {
        let body = VerifyTwoFaRequestBody {
            code: code.to_string(),
        };

        let mut request = self
            .http_client
            .post(format!("{}/auth/verify-2fa", &self.address))
            .json(&body);
        if let Some(value) = pending_cookie {
            request = request.header("Cookie", format!("pending_2fa={}", value));
        }

        request
            .send()
            .await
            .expect("Failed to execute verify 2fa request.")
    }

    pub async fn get_link(&self, link: &str) -> Response {
        self.http_client
            .get(link)
            .send()
            .await
            .expect("Failed to execute activation link request.")
    }

    pub async fn activation_status(&self, user_id: Uuid) -> Response {
        self.http_client
            .get(format!(
                "{}/auth/access/activation/{}",
                &self.address, user_id
            ))
            .send()
            .await
            .expect("Failed to execute activation status request.")
    }

    pub async fn resend_activation(&self, user_id: Uuid) -> Response {
        self.http_client
            .post(format!("{}/auth/resend-activation", &self.address))
            .json(&serde_json::json!({ "userId": user_id }))
            .send()
            .await
            .expect("Failed to execute resend activation request.")
    }

    pub async fn logout(&self) -> Response {
        self.http_client
            .post(format!("{}/auth/logout", &self.address))
            .send()
            .await
            .expect("Failed to execute logout request.")
    }

    pub async fn welcome(&self, session_cookie: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .get(format!("{}/welcome", &self.address));
        if let Some(value) = session_cookie {
            request = request.header("Cookie", format!("session={}", value));
        }

        request
            .send()
            .await
            .expect("Failed to execute welcome request.")
    }

    pub async fn last_email_body(&self) -> String {
        self.email_client
            .read()
            .await
            .last_message()
            .expect("no email was sent")
            .body
            .clone()
    }

    /// Register a user and consume the emailed activation link, leaving the
    /// account ready to log in.
    pub async fn register_activated_user(&self, email: &str, password: &str) -> Uuid {
        let response = self
            .register("Test", "User", email, password, password)
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let link = extract_activation_link(&self.last_email_body().await);
        let response = self.get_link(&link).await;
        assert_eq!(response.status().as_u16(), 200);

        let user_id = {
            let email = account_service::domain::Email::parse(email.to_string()).unwrap();
            let store = self.user_store.read().await;
            store.get_user_by_email(&email).await.unwrap().id
        };
        user_id
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

pub fn cookie_value(response: &Response, name: &str) -> Option<String> {
    response
        .cookies()
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

/// Pull the activation URL out of an activation email body.
pub fn extract_activation_link(body: &str) -> String {
    body.lines()
        .find(|line| line.starts_with("http"))
        .expect("no activation link in email body")
        .to_string()
}

/// Pull the first 6-digit run out of a one-time-code email body.
pub fn extract_code(body: &str) -> String {
    let bytes = body.as_bytes();
    let mut start = 0;
    while start < bytes.len() {
        if bytes[start].is_ascii_digit() {
            let end = bytes[start..]
                .iter()
                .position(|b| !b.is_ascii_digit())
                .map(|offset| start + offset)
                .unwrap_or(bytes.len());
            if end - start == 6 {
                return body[start..end].to_string();
            }
            start = end;
        } else {
            start += 1;
        }
    }
    panic!("no 6-digit code in email body");
}
