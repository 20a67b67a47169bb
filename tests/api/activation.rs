use crate::helpers::{extract_activation_link, get_random_email, TestApp};
use account_service::domain::{ActivationStatusResponse, Email, LoginResponse, UserStore};
use uuid::Uuid;

#[tokio::test]
async fn should_activate_the_account_via_the_emailed_link() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app
        .register("Jane", "Doe", &email, "Abc12345!", "Abc12345!")
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let user_id = {
        let parsed = Email::parse(email).unwrap();
        let store = app.user_store.read().await;
        store.get_user_by_email(&parsed).await.unwrap().id
    };

    let response = app.activation_status(user_id).await;
    let status: ActivationStatusResponse = response.json().await.unwrap();
    assert!(!status.is_active);

    let link = extract_activation_link(&app.last_email_body().await);
    let response = app.get_link(&link).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: LoginResponse = response.json().await.unwrap();
    assert_eq!(body.message, "Account activated successfully.");

    let response = app.activation_status(user_id).await;
    let status: ActivationStatusResponse = response.json().await.unwrap();
    assert!(status.is_active);
}

#[tokio::test]
async fn should_return_401_for_a_tampered_link() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app
        .register("Jane", "Doe", &email, "Abc12345!", "Abc12345!")
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let link = extract_activation_link(&app.last_email_body().await);

    // Stretch the expiry without re-signing.
    let (base, rest) = link.split_once("expires=").unwrap();
    let (expires, tail) = rest.split_once('&').unwrap();
    let stretched: i64 = expires.parse::<i64>().unwrap() + 3600;
    let tampered = format!("{}expires={}&{}", base, stretched, tail);

    let response = app.get_link(&tampered).await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(response.text().await.unwrap(), "Invalid or expired URL.");
}

#[tokio::test]
async fn should_return_401_for_a_link_signed_for_another_user() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app
        .register("Jane", "Doe", &email, "Abc12345!", "Abc12345!")
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let user_id = {
        let parsed = Email::parse(email).unwrap();
        let store = app.user_store.read().await;
        store.get_user_by_email(&parsed).await.unwrap().id
    };

    let link = extract_activation_link(&app.last_email_body().await);
    let swapped = link.replace(&user_id.to_string(), &Uuid::new_v4().to_string());

    let response = app.get_link(&swapped).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_404_for_an_unknown_user_status() {
    let app = TestApp::new().await;

    let response = app.activation_status(Uuid::new_v4()).await;
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(response.text().await.unwrap(), "The user does not exist.");
}

#[tokio::test]
async fn should_resend_a_working_link_for_an_inactive_account() {
    let app = TestApp::new().await;
    let email = get_random_email();

    let response = app
        .register("Jane", "Doe", &email, "Abc12345!", "Abc12345!")
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let user_id = {
        let parsed = Email::parse(email).unwrap();
        let store = app.user_store.read().await;
        store.get_user_by_email(&parsed).await.unwrap().id
    };

    let response = app.resend_activation(user_id).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: LoginResponse = response.json().await.unwrap();
    assert_eq!(
        body.message,
        "A new activation link has been sent to your email."
    );
    assert_eq!(app.email_client.read().await.outbox().len(), 2);

    // The reissued link activates the account.
    let link = extract_activation_link(&app.last_email_body().await);
    let response = app.get_link(&link).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn should_not_resend_for_an_active_account() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let user_id = app.register_activated_user(&email, "Abc12345!").await;

    let response = app.resend_activation(user_id).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: LoginResponse = response.json().await.unwrap();
    assert_eq!(body.message, "The account is active, sign in.");
    assert_eq!(app.email_client.read().await.outbox().len(), 1);
}

#[tokio::test]
async fn should_return_404_when_resending_for_an_unknown_user() {
    let app = TestApp::new().await;

    let response = app.resend_activation(Uuid::new_v4()).await;
    assert_eq!(response.status().as_u16(), 404);
}
