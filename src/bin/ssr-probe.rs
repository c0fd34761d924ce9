use clap::{Parser, Subcommand};
use serde_json::json;

#[derive(Parser)]
#[command(name = "ssr-probe")]
#[command(about = "Probe a running render server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:4000")]
    url: String,

    /// Print a JSON summary instead of the raw body
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the server is alive
    Ping,
    /// Render a page and report status and timing
    Render {
        /// Path to request
        #[arg(default_value = "/")]
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let url = match &cli.command {
        Commands::Ping => format!("{}/ping", base),
        Commands::Render { path } => format!("{}/{}", base, path.trim_start_matches('/')),
    };

    let res = client.get(&url).send().await?;
    print_response(res, cli.json).await
}

async fn print_response(
    res: reqwest::Response,
    as_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let response_time = res
        .headers()
        .get("response-time")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let request_id = res
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = res.text().await?;

    if as_json {
        let summary = json!({
            "status": status.as_u16(),
            "response_time": response_time,
            "request_id": request_id,
            "bytes": body.len(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    eprintln!(
        "{} ({})",
        status,
        response_time.as_deref().unwrap_or("no Response-Time header")
    );
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
    }
    println!("{}", body);
    Ok(())
}
