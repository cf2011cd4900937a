// ============================================================================
// MINI TWITTER - in-memory social feed driven from a text menu
// ============================================================================

// - Users with a bio, unique usernames
// - Posts with likes, search and most-liked ranking
// - Owner-only deletion
// - Structured logging on stderr

use mini_twitter::{AppState, Console, config::Config, routes};
use tokio::io::{BufReader, stdin, stdout};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Logs go to stderr so they never interleave with the menu on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let mut state = AppState::new();
    let mut console = Console::new(BufReader::new(stdin()), stdout());

    info!("Session started");

    routes::run(&mut state, &mut console).await?;

    info!(
        "Session ended with {} users and {} posts",
        state.users.len(),
        state.posts.len()
    );

    Ok(())
}
