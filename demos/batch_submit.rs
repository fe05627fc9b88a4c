//! Batch submission walkthrough for the Livy gateway client.
//!
//! Submits a packaged job, polls its state, and lists all known batches.
//!
//! To run this example:
//! ```bash
//! export LIVY_URL="http://localhost:8998"
//! export LIVY_USER="alice"
//! export LIVY_PASSWORD="secret"
//! cargo run --example batch_submit -- hdfs:///jobs/report.jar com.example.Report
//! ```

use std::time::Duration;

use livy_client::{ClientError, LivyClient, LivyClientConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let file = args
        .next()
        .unwrap_or_else(|| "hdfs:///jobs/report.jar".to_string());
    let class_name = args.next().unwrap_or_else(|| "com.example.Report".to_string());

    let config = LivyClientConfig::new(
        std::env::var("LIVY_URL").unwrap_or_else(|_| "http://localhost:8998".to_string()),
        std::env::var("LIVY_USER")?,
        std::env::var("LIVY_PASSWORD")?,
    );
    let client = LivyClient::from_config(config)?;

    println!("=== Submitting batch ===");
    let batch = client.open_batch(&file, &class_name).await?;
    println!("batch {} is {}", batch.id, batch.state);

    loop {
        match client.batch_state(&batch.id).await {
            Ok(snapshot) => {
                println!("batch {} is {}", snapshot.id, snapshot.state);
                if matches!(snapshot.state.as_str(), "success" | "dead" | "killed" | "error") {
                    break;
                }
            }
            Err(ClientError::Gateway { status, body, .. }) => {
                println!("gateway rejected poll: {status} {body}");
                break;
            }
            Err(other) => return Err(other.into()),
        }
        tokio::time::sleep(Duration::from_secs(5)).await;
    }

    println!("=== Known batches ===");
    let page = client.batches().await?;
    for batch in &page.batches {
        println!("{}: {}", batch.id, batch.state);
    }

    Ok(())
}
