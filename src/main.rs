use anyhow::Result;
use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use threat_geo_v0::Engine;

/// One message per stdin line, either a JSON object or bare text.
#[derive(Deserialize)]
struct InMessage {
    text: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    channel: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let engine = Engine::from_env();
    info!("engine ready ({})", engine.config());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut line_no = 0usize;
    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }

        let msg = match serde_json::from_str::<InMessage>(&line) {
            Ok(msg) => msg,
            Err(_) => InMessage {
                text: line,
                id: None,
                date: None,
                channel: None,
            },
        };

        let id = msg.id.unwrap_or_else(|| line_no.to_string());
        let date = msg
            .date
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339());
        let channel = msg.channel.unwrap_or_else(|| "stdin".to_string());

        let records = engine
            .process_message(&msg.text, &id, &date, &channel)
            .await;
        info!("message {id}: {} record(s)", records.len());
        for record in records {
            match serde_json::to_string(&record) {
                Ok(json) => println!("{json}"),
                Err(e) => warn!("record serialization failed: {e}"),
            }
        }
    }

    Ok(())
}
