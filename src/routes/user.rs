use super::reject;
use crate::{console::Console, dto::CreateUserRequest, states::AppState};
use std::io;
use tokio::io::{AsyncBufRead, AsyncWrite};

/// Re-prompts for the username until it is valid and unused.
pub async fn create_user<R, W>(state: &mut AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let username = loop {
        let raw = console
            .prompt("Choose a username (letters/numbers/underscores/hyphens only): ")
            .await?;

        match state.check_username(&raw) {
            Ok(name) => break name,
            Err(e) => console.say(e.to_string()).await?,
        }
    };

    let bio = console.prompt("Write a short bio (one line): ").await?;

    match state.create_user(CreateUserRequest::new(&username, &bio)) {
        Ok(user) => {
            let line = format!("User '{}' created.\n", user.username);
            console.say(line).await
        }
        Err(e) => reject(console, e).await,
    }
}

pub async fn edit_bio<R, W>(state: &mut AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if let Err(e) = state.ensure_users() {
        return reject(console, e).await;
    }

    let username = console
        .prompt("Which user would you like to edit (username): ")
        .await?;
    let old_bio = match state.user(&username) {
        Ok(user) => user.bio.clone(),
        Err(e) => return reject(console, e).await,
    };

    console.say(format!("Old bio: {}", old_bio)).await?;
    let new_bio = console.prompt("Enter a new bio: ").await?;

    match state.edit_bio(&username, &new_bio) {
        Ok(_) => console.say("Bio updated.\n").await,
        Err(e) => reject(console, e).await,
    }
}
