use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app_state::AppState;
use crate::domain::{
    Email, NewUser, Password, PersonName, RegisterRequestBody, RegisterResponse,
};
use crate::errors::{FieldValidationError, RegisterError};
use crate::services::AuthService;

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequestBody>,
) -> Result<impl IntoResponse, RegisterError> {
    let new_user = validate_request(request)?;

    let user = AuthService::register(&state, new_user).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created, check your email to activate your account.".to_string(),
            user_id: user.id,
        }),
    ))
}

// Every field is checked so the client gets all failures in one round trip.
fn validate_request(request: RegisterRequestBody) -> Result<NewUser, RegisterError> {
    let mut errors = Vec::new();

    let first_name = PersonName::parse(request.first_name)
        .map_err(|message| errors.push(FieldValidationError { field: "firstName", message }))
        .ok();
    let last_name = PersonName::parse(request.last_name)
        .map_err(|message| errors.push(FieldValidationError { field: "lastName", message }))
        .ok();
    let email = Email::parse(request.email)
        .map_err(|message| errors.push(FieldValidationError { field: "email", message }))
        .ok();
    let password = Password::parse(request.password)
        .map_err(|message| errors.push(FieldValidationError { field: "password", message }))
        .ok();

    if let Some(ref password) = password {
        if password.as_ref() != request.password_confirmation {
            errors.push(FieldValidationError {
                field: "passwordConfirmation",
                message: "Passwords do not match.".to_string(),
            });
        }
    }

    match (first_name, last_name, email, password) {
        (Some(first_name), Some(last_name), Some(email), Some(password)) if errors.is_empty() => {
            Ok(NewUser::new(first_name, last_name, email, password))
        }
        _ => Err(RegisterError::Validation(errors)),
    }
}
