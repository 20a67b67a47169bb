use crate::helpers::{cookie_value, extract_code, get_random_email, TestApp};
use account_service::domain::{LoginResponse, LogoutResponse};

#[tokio::test]
async fn should_return_200_even_without_a_session() {
    let app = TestApp::new().await;

    let response = app.logout().await;
    assert_eq!(response.status().as_u16(), 200);

    let body: LogoutResponse = response.json().await.expect("response was not json");
    assert_eq!(body.message, "Logged out successfully");
}

#[tokio::test]
async fn should_expire_both_auth_cookies() {
    let app = TestApp::new().await;

    let response = app.logout().await;

    let session = response
        .cookies()
        .find(|c| c.name() == "session")
        .expect("no session cookie in response");
    assert!(session.value().is_empty());

    let pending = response
        .cookies()
        .find(|c| c.name() == "pending_2fa")
        .expect("no pending cookie in response");
    assert!(pending.value().is_empty());
}

#[tokio::test]
async fn should_return_401_from_welcome_without_a_session() {
    let app = TestApp::new().await;

    let response = app.welcome(None).await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(
        response.text().await.unwrap(),
        "Please log in to continue."
    );
}

#[tokio::test]
async fn should_return_401_from_welcome_with_a_garbage_session() {
    let app = TestApp::new().await;

    let response = app.welcome(Some("not-a-token")).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_not_accept_a_pending_marker_as_a_session() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.register_activated_user(&email, "Abc12345!").await;

    let response = app.login(&email, "Abc12345!").await;
    let pending = cookie_value(&response, "pending_2fa").expect("no pending cookie");

    // The marker is a valid token, but its purpose is not "session".
    let response = app.welcome(Some(&pending)).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_greet_the_user_by_first_name() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.register_activated_user(&email, "Abc12345!").await;

    let response = app.login(&email, "Abc12345!").await;
    let pending = cookie_value(&response, "pending_2fa").expect("no pending cookie");
    let code = extract_code(&app.last_email_body().await);

    let response = app.verify_2fa(&code, Some(&pending)).await;
    assert_eq!(response.status().as_u16(), 200);
    let session = cookie_value(&response, "session").expect("no session cookie");

    let response = app.welcome(Some(&session)).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: LoginResponse = response.json().await.expect("response was not json");
    assert_eq!(body.message, "Welcome back, Test!");
}
