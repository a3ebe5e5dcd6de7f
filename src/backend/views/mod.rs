//! Page Rendering
//!
//! Minimal server-rendered HTML for the board. Every piece of user-supplied
//! text passes through [`escape`] before it reaches the page.

use axum::http::StatusCode;

use crate::shared::post::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use crate::shared::{Identity, PostWithAuthor};

/// Escape text for inclusion in HTML content or a quoted attribute
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn nav(viewer: Option<&Identity>) -> String {
    match viewer {
        Some(identity) => format!(
            r#"<nav><a href="/">Home</a> | <a href="/create-message">New message</a> | <a href="/logout">Log out</a> <span class="who">Signed in as {}</span></nav>"#,
            escape(&identity.username)
        ),
        None => r#"<nav><a href="/">Home</a> | <a href="/sign-up">Sign up</a> | <a href="/login">Log in</a></nav>"#
            .to_string(),
    }
}

fn layout(title: &str, viewer: Option<&Identity>, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="/style.css">
</head>
<body>
{nav}
<main>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
        nav = nav(viewer),
        body = body,
    )
}

/// Home page listing every post with its author
pub fn index_page(viewer: Option<&Identity>, posts: &[PostWithAuthor]) -> String {
    let mut body = String::from("<h1>Members Only</h1>\n");

    if posts.is_empty() {
        body.push_str("<p>No messages yet.</p>\n");
    } else {
        body.push_str("<ul class=\"posts\">\n");
        for entry in posts {
            let author = entry
                .author
                .as_ref()
                .map(|author| format!("{} (@{})", escape(&author.full_name()), escape(&author.username)))
                .unwrap_or_else(|| "unknown author".to_string());
            body.push_str(&format!(
                "<li><h2>{}</h2><p>{}</p><footer>by {} on {}</footer></li>\n",
                escape(&entry.post.title),
                escape(&entry.post.description),
                author,
                entry.post.date.format("%Y-%m-%d %H:%M UTC"),
            ));
        }
        body.push_str("</ul>\n");
    }

    layout("Members Only", viewer, &body)
}

/// Sign-up form
pub fn sign_up_page() -> String {
    let body = r#"<h1>Sign up</h1>
<form method="post" action="/sign-up">
<label>First name <input name="first_name" required></label>
<label>Last name <input name="last_name" required></label>
<label>Username <input name="username" required></label>
<label>Password <input name="password" type="password" required></label>
<button type="submit">Sign up</button>
</form>"#;
    layout("Sign up", None, body)
}

/// Login form
pub fn login_page() -> String {
    let body = r#"<h1>Log in</h1>
<form method="post" action="/login">
<label>Username <input name="username" required></label>
<label>Password <input name="password" type="password" required></label>
<button type="submit">Log in</button>
</form>"#;
    layout("Log in", None, body)
}

/// New message form for a signed-in member
pub fn create_message_page(identity: &Identity) -> String {
    let body = format!(
        r#"<h1>New message</h1>
<p>Posting as {}</p>
<form method="post" action="/create-message">
<label>Title <input name="title" maxlength="{}" required></label>
<label>Message <textarea name="description" maxlength="{}" required></textarea></label>
<button type="submit">Post</button>
</form>"#,
        escape(&identity.full_name()),
        MAX_TITLE_LEN,
        MAX_DESCRIPTION_LEN,
    );
    layout("New message", Some(identity), &body)
}

/// Generic error page
pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to the board</a></p>",
        status.as_u16(),
        escape(message),
    );
    layout("Error", None, &body)
}
