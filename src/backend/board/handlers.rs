/**
 * Message Board Handlers
 *
 * - `GET /` lists every post with its author, for anyone
 * - `GET /create-message` renders the form, members only
 * - `POST /create-message` stores a post authored by the session's user,
 *   members only
 *
 * The members-only handlers take `RequireUser`, so an anonymous request is
 * redirected to `/login` before the body is read.
 */

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::{MaybeUser, RequireUser};
use crate::backend::store::Database;
use crate::backend::views;
use crate::shared::NewPost;

/// New message form
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct MessageForm {
    pub title: String,
    pub description: String,
}

/// Home page
pub async fn index(
    State(db): State<Database>,
    MaybeUser(viewer): MaybeUser,
) -> Result<Html<String>, BackendError> {
    let posts = db.posts().list_posts_with_authors().await?;
    tracing::debug!("Rendering {} posts", posts.len());
    Ok(Html(views::index_page(viewer.as_ref(), &posts)))
}

/// Render the new message form
pub async fn create_message_form(RequireUser(identity): RequireUser) -> Html<String> {
    Html(views::create_message_page(&identity))
}

/// Store a new message authored by the signed-in user
///
/// # Errors
///
/// * `400 Bad Request` - title or description blank or too long
/// * `500 Internal Server Error` - storage failed
pub async fn create_message(
    RequireUser(identity): RequireUser,
    State(db): State<Database>,
    Form(form): Form<MessageForm>,
) -> Result<Redirect, BackendError> {
    let new_post = NewPost::new(&form.title, &form.description, identity.user_id)?;
    let post = db.posts().create_post(new_post).await?;

    tracing::info!("Post {} created by {}", post.id, identity.username);

    Ok(Redirect::to("/"))
}
