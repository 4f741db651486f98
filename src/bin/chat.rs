//! Terminal chat client for the Study Buddy relay
//!
//! Reads one message per line from stdin and prints the conversation as it
//! grows. Set `STUDY_BUDDY_URL` to point at a relay other than the default.

use study_buddy::client::{ConversationStore, HttpTransport, DEFAULT_RELAY_URL};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout is the conversation.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "study_buddy=warn".into()),
        )
        .init();

    let base_url =
        std::env::var("STUDY_BUDDY_URL").unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string());
    let transport = HttpTransport::new(base_url)?;

    match transport.health().await {
        Ok(health) => tracing::info!(url = %transport.base_url(), status = %health.status, "Relay is up"),
        Err(e) => tracing::warn!(
            url = %transport.base_url(),
            error = %e,
            "Relay health check failed; messages may not get through"
        ),
    }

    let mut store = ConversationStore::new(transport);

    println!("Start a conversation with Study Buddy!");
    println!("Ask me anything about your studies. (Ctrl-D to quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut shown = 0;

    while let Some(line) = lines.next_line().await? {
        store.set_input(line);
        if !store.can_submit() {
            continue;
        }

        let text = store.pending_input().to_string();
        store
            .submit_with(&text, |store| {
                for message in store.messages().iter().skip(shown) {
                    println!("{message}");
                }
                shown = store.messages().len();
                println!("Study Buddy is thinking...");
            })
            .await;

        for message in store.messages().iter().skip(shown) {
            println!("{message}");
        }
        shown = store.messages().len();
    }

    Ok(())
}
