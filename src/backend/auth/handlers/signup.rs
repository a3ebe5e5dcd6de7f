/**
 * Signup Handlers
 *
 * `GET /sign-up` renders the form; `POST /sign-up` creates the account.
 *
 * # Registration Process
 *
 * 1. Validate required fields
 * 2. Hash password using bcrypt (blocking pool)
 * 3. Insert the user in one write; the store enforces unique usernames
 * 4. Redirect to the board
 *
 * Sign-up does not log the new user in.
 */

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};

use crate::backend::auth::authenticator::Authenticator;
use crate::backend::auth::handlers::types::SignupForm;
use crate::backend::auth::users::NewUser;
use crate::backend::error::BackendError;
use crate::backend::store::Database;
use crate::backend::views;

/// Render the sign-up form
pub async fn sign_up_form() -> Html<String> {
    Html(views::sign_up_page())
}

/// Create a user account
///
/// # Errors
///
/// * `400 Bad Request` - a required field is blank
/// * `409 Conflict` - the username is taken
/// * `500 Internal Server Error` - hashing or storage failed
pub async fn sign_up(
    State(authenticator): State<Authenticator>,
    State(db): State<Database>,
    Form(form): Form<SignupForm>,
) -> Result<Redirect, BackendError> {
    tracing::info!("Signup request for username: {}", form.username.trim());

    form.validate()?;

    let password_hash = authenticator.hasher().hash(&form.password).await?;
    let new_user = NewUser::new(&form.first_name, &form.last_name, &form.username, password_hash)?;

    let user = db.users().create_user(new_user).await?;

    tracing::info!("User created successfully: {} ({})", user.username, user.id);

    Ok(Redirect::to("/"))
}
