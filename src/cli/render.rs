//! Plain-text rendering of store snapshots.

use std::fmt::Write;

use crate::models::{Article, Category, UploadedAsset};
use crate::store::{ArticlesState, AuthState};

const EXCERPT_CHARS: usize = 100;

pub fn login_success(auth: &AuthState) -> String {
    match &auth.user {
        Some(user) => format!("Logged in as {} <{}>.", user.username, user.email),
        None => "Logged in.".to_string(),
    }
}

pub fn whoami(auth: &AuthState) -> String {
    match (&auth.user, auth.is_authenticated) {
        (Some(user), true) => format!("{} <{}> (id {})", user.username, user.email, user.id),
        _ => "Not logged in.".to_string(),
    }
}

pub fn article_list(state: &ArticlesState) -> String {
    if state.articles.is_empty() {
        return "No articles found.".to_string();
    }

    let mut out = String::new();
    for article in &state.articles {
        let _ = writeln!(
            out,
            "{}  {}{}",
            article.document_id,
            article.title,
            category_suffix(article)
        );
        let _ = writeln!(out, "    {}", excerpt(&article.description, EXCERPT_CHARS));
    }
    let _ = write!(out, "Page {} of {}", state.current_page, state.total_pages);
    if state.has_more() {
        out.push_str(" (more available)");
    }
    out
}

pub fn article_detail(article: &Article, owned: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}{}", article.title, category_suffix(article));
    if let Some(author) = &article.user {
        let _ = writeln!(out, "by {}", author.username);
    }
    if let Some(published) = &article.published_at {
        let _ = writeln!(out, "published {}", published);
    }
    if !article.cover_image_url.is_empty() {
        let _ = writeln!(out, "cover: {}", article.cover_image_url);
    }
    let _ = writeln!(out);
    out.push_str(&article.description);

    let comments = article.comments.as_deref().unwrap_or_default();
    if !comments.is_empty() {
        let _ = write!(out, "\n\n{} comment(s):", comments.len());
        for comment in comments {
            let author = comment
                .user
                .as_ref()
                .map(|u| u.username.as_str())
                .unwrap_or("anonymous");
            let _ = write!(out, "\n  {}: {}", author, comment.content);
        }
    }
    if owned {
        out.push_str("\n\nYou can edit or delete this article.");
    }
    out
}

pub fn category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories.".to_string();
    }
    categories
        .iter()
        .map(|c| format!("{:>4}  {}", c.id, c.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn uploaded_assets(assets: &[UploadedAsset]) -> String {
    assets
        .iter()
        .map(|a| format!("{} ({}, {:.1} KB) {}", a.name, a.mime, a.size, a.url))
        .collect::<Vec<_>>()
        .join("\n")
}

fn category_suffix(article: &Article) -> String {
    article
        .category
        .as_ref()
        .map(|c| format!(" [{}]", c.name))
        .unwrap_or_default()
}

/// First `max` characters of `text`, with an ellipsis when cut.
fn excerpt(text: &str, max: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{}...", head.trim_end())
    } else {
        head
    }
}
