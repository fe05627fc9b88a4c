//! Interactive session walkthrough for the Livy gateway client.
//!
//! Opens a shell, runs one statement, polls for its result, and tears the
//! session down.
//!
//! To run this example:
//! ```bash
//! export LIVY_URL="http://localhost:8998"
//! export LIVY_USER="alice"
//! export LIVY_PASSWORD="secret"
//! cargo run --example interactive_session
//! ```

use std::time::Duration;

use livy_client::{LivyClient, LivyClientConfig, SessionKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = LivyClientConfig::new(
        std::env::var("LIVY_URL").unwrap_or_else(|_| "http://localhost:8998".to_string()),
        std::env::var("LIVY_USER")?,
        std::env::var("LIVY_PASSWORD")?,
    )
    .with_kind(SessionKind::Spark);

    let client = LivyClient::from_config(config)?;

    println!("=== Opening session ===");
    let session = client.open_session().await?;
    println!("session {} is {}", session.id, session.state);

    // Wait for the interpreter to come up. Polling cadence is the caller's
    // concern; the client only reports snapshots.
    loop {
        let snapshot = client.session_state(&session.id).await?;
        println!("session {} is {}", snapshot.id, snapshot.state);
        if snapshot.state == "idle" {
            break;
        }
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    println!("=== Running statement ===");
    let statement = client.post_statement(&session.id, "1 + 1").await?;
    loop {
        let snapshot = client.statement_result(&session.id, &statement.id).await?;
        if snapshot.state == "available" {
            println!("output: {:?}", snapshot.output);
            break;
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    println!("=== Session log ===");
    let log = client.session_log(&session.id).await?;
    for line in &log.log {
        println!("{line}");
    }

    client.close_session(&session.id).await?;
    println!("session closed");

    Ok(())
}
