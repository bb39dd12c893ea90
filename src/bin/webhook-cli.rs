use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use webhook_log::webhook::types::now_millis;

#[derive(Parser)]
#[command(name = "webhook-cli")]
#[command(about = "Inspect and exercise a running webhook receiver", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000/api/webhook")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stored payloads, newest first
    List,
    /// Clear the stored payloads
    Clear,
    /// Send a payload
    Send {
        /// Value of the `data` field
        data: String,
        /// Value of the `timestamp` field (defaults to now, in milliseconds)
        #[arg(short, long)]
        timestamp: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = match cli.command {
        Commands::List => client.get(&cli.url).send().await?,
        Commands::Clear => client.delete(&cli.url).send().await?,
        Commands::Send { data, timestamp } => {
            let timestamp = timestamp.unwrap_or_else(now_millis);
            client
                .post(&cli.url)
                .json(&json!({ "data": data, "timestamp": timestamp }))
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;
    if !status.is_success() {
        eprintln!("Error: receiver returned status {}", status);
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
