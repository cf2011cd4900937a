use super::reject;
use crate::{
    config::MAX_POST_CHARS,
    console::Console,
    dto::{SearchRequest, WritePostRequest},
    errors::PostContext,
    models::Post,
    states::{AppState, parse_post_id},
};
use std::io;
use tokio::io::{AsyncBufRead, AsyncWrite};

fn headline(post: &Post) -> String {
    format!("[{}] {}: {}", post.id, post.author, post.text)
}

pub async fn write_post<R, W>(state: &mut AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if let Err(e) = state.ensure_users() {
        return reject(console, e).await;
    }

    let username = console.prompt("Who is posting? (enter username): ").await?;
    if let Err(e) = state.user(&username) {
        return reject(console, e).await;
    }

    let text = console
        .prompt(&format!(
            "What's on your mind? (max {} characters): ",
            MAX_POST_CHARS
        ))
        .await?;

    match state.write_post(WritePostRequest::new(&username, &text)) {
        Ok(created) => {
            if created.truncated {
                console
                    .say(format!("Text truncated to {} characters.", MAX_POST_CHARS))
                    .await?;
            }
            console
                .say(format!("Post created with id {}.\n", created.id))
                .await
        }
        Err(e) => reject(console, e).await,
    }
}

pub async fn view_feed<R, W>(state: &AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if state.posts.is_empty() {
        return console.say("No posts yet. Be the first to post!\n").await;
    }

    console.say("\n--- FEED (most recent first) ---").await?;
    for post in state.feed() {
        console.say(headline(post)).await?;
        console.say(format!("     Likes: {}\n", post.likes)).await?;
    }
    console.say("--- end feed ---\n").await
}

pub async fn like_post<R, W>(state: &mut AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if let Err(e) = state.ensure_posts(PostContext::Like) {
        return reject(console, e).await;
    }

    let raw = console
        .prompt("Enter the post ID you want to like: ")
        .await?;

    match parse_post_id(&raw).and_then(|id| state.like_post(id)) {
        Ok(liked) => {
            let line = format!(
                "You liked post {}. It now has {} likes.\n",
                liked.id, liked.likes
            );
            console.say(line).await
        }
        Err(e) => reject(console, e).await,
    }
}

pub async fn search_feed<R, W>(state: &AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if let Err(e) = state.ensure_posts(PostContext::Search) {
        return reject(console, e).await;
    }

    let query = console
        .prompt("Enter a word or phrase to search for: ")
        .await?;

    let results = match state.search(SearchRequest::new(&query)) {
        Ok(results) => results,
        Err(e) => return reject(console, e).await,
    };

    if results.matches.is_empty() {
        return console.say("No posts matched your search.\n").await;
    }

    console
        .say(format!("\nFound {} match(es):", results.matches.len()))
        .await?;
    for post in &results.matches {
        console
            .say(format!("{}  (Likes: {})", headline(post), post.likes))
            .await?;
    }
    console.say("").await
}

pub async fn show_most_liked<R, W>(state: &AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let top = match state.most_liked() {
        Ok(top) => top,
        Err(e) => return reject(console, e).await,
    };

    console
        .say(format!("\nTop liked post(s): {} like(s):", top.likes))
        .await?;
    for post in &top.posts {
        console.say(headline(post)).await?;
    }
    console.say("").await
}

/// Asks for confirmation only once the ID has matched a post.
pub async fn delete_post<R, W>(state: &mut AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if let Err(e) = state.ensure_posts(PostContext::General) {
        return reject(console, e).await;
    }

    let raw = console.prompt("Enter the post ID to delete: ").await?;
    let id = match parse_post_id(&raw).and_then(|id| state.post(id).map(|p| p.id)) {
        Ok(id) => id,
        Err(e) => return reject(console, e).await,
    };

    let owner = console
        .prompt("Enter your username to confirm deletion: ")
        .await?;

    match state.delete_post(id, &owner) {
        Ok(post) => console.say(format!("Post {} deleted.\n", post.id)).await,
        Err(e) => reject(console, e).await,
    }
}
