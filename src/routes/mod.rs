mod post;
mod user;

use crate::{console::Console, errors::FeedError, states::AppState};
use std::io;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::debug;

/// One menu entry per operation, plus exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CreateUser,
    WritePost,
    ViewFeed,
    LikePost,
    SearchFeed,
    MostLiked,
    EditBio,
    DeletePost,
    Exit,
}

impl Command {
    pub const ALL: [Command; 9] = [
        Command::CreateUser,
        Command::WritePost,
        Command::ViewFeed,
        Command::LikePost,
        Command::SearchFeed,
        Command::MostLiked,
        Command::EditBio,
        Command::DeletePost,
        Command::Exit,
    ];

    /// Exact match on the trimmed menu digit.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Command::CreateUser),
            "2" => Some(Command::WritePost),
            "3" => Some(Command::ViewFeed),
            "4" => Some(Command::LikePost),
            "5" => Some(Command::SearchFeed),
            "6" => Some(Command::MostLiked),
            "7" => Some(Command::EditBio),
            "8" => Some(Command::DeletePost),
            "9" => Some(Command::Exit),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Command::CreateUser => "1",
            Command::WritePost => "2",
            Command::ViewFeed => "3",
            Command::LikePost => "4",
            Command::SearchFeed => "5",
            Command::MostLiked => "6",
            Command::EditBio => "7",
            Command::DeletePost => "8",
            Command::Exit => "9",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::CreateUser => "Create a user",
            Command::WritePost => "Write a post",
            Command::ViewFeed => "View the feed",
            Command::LikePost => "Like a post",
            Command::SearchFeed => "Search the feed",
            Command::MostLiked => "Show most-liked post",
            Command::EditBio => "Edit a user's bio",
            Command::DeletePost => "Delete a post",
            Command::Exit => "Exit",
        }
    }
}

/// Prints a rejection followed by a blank line, then control returns to the menu.
pub(crate) async fn reject<R, W>(console: &mut Console<R, W>, err: FeedError) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    debug!("Rejected: {:?}", err);
    console.say(format!("{}\n", err)).await
}

async fn show_menu<R, W>(console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.say("Choose an option:").await?;
    for command in Command::ALL {
        console
            .say(format!("{}. {}", command.key(), command.label()))
            .await?;
    }
    Ok(())
}

/// Menu loop. Returns once the user picks exit; I/O failures (including
/// end of input) end the session early.
pub async fn run<R, W>(state: &mut AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    console.say("Welcome to Mini Twitter!\n").await?;

    loop {
        show_menu(console).await?;
        let choice = console.prompt("Enter a number: ").await?;
        console.say("").await?;

        let Some(command) = Command::parse(&choice) else {
            debug!("Unknown menu choice {:?}", choice);
            console
                .say("Invalid option. Please enter a number from the menu.\n")
                .await?;
            continue;
        };

        match command {
            Command::CreateUser => user::create_user(state, console).await?,
            Command::WritePost => post::write_post(state, console).await?,
            Command::ViewFeed => post::view_feed(state, console).await?,
            Command::LikePost => post::like_post(state, console).await?,
            Command::SearchFeed => post::search_feed(state, console).await?,
            Command::MostLiked => post::show_most_liked(state, console).await?,
            Command::EditBio => user::edit_bio(state, console).await?,
            Command::DeletePost => post::delete_post(state, console).await?,
            Command::Exit => {
                console.say("Goodbye, thanks for using Mini Twitter!").await?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_parses_from_its_key() {
        for command in Command::ALL {
            assert_eq!(Command::parse(command.key()), Some(command));
            assert_eq!(Command::parse(&format!("  {} \n", command.key())), Some(command));
        }
    }

    #[test]
    fn anything_else_is_not_a_command() {
        for input in ["", "0", "10", "01", "one", "1.", "exit"] {
            assert_eq!(Command::parse(input), None, "{:?}", input);
        }
    }
}
