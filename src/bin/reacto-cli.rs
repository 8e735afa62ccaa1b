use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE, SET_COOKIE};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "reacto-cli")]
#[command(about = "Command-line client for the Reacto gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Session id to reuse (value of the REACTO_SESSID cookie)
    #[arg(short, long)]
    session: Option<String>,

    #[arg(long, default_value = "REACTO_SESSID")]
    cookie_name: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the calls the gateway knows about
    Calls,
    /// Invoke a call with positional arguments
    Call {
        name: String,
        /// Each argument is parsed as JSON, falling back to a plain string
        args: Vec<String>,
    },
    /// Show a captured error record
    Error { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    if let Some(session) = &cli.session {
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("{}={}", cli.cookie_name, session))?,
        );
    }

    match cli.command {
        Commands::Calls => {
            let res = client
                .get(format!("{}/api/calls", cli.url))
                .headers(headers)
                .send()
                .await?;
            print_response(res, &cli.cookie_name).await?;
        }
        Commands::Call { name, args } => {
            let args: Vec<Value> = args.iter().map(String::as_str).map(parse_arg).collect();
            let res = client
                .post(format!("{}/api/{}", cli.url, name))
                .headers(headers)
                .json(&args)
                .send()
                .await?;
            print_response(res, &cli.cookie_name).await?;
        }
        Commands::Error { id } => {
            let res = client
                .get(format!("{}/errors/{}", cli.url, id))
                .headers(headers)
                .send()
                .await?;
            print_response(res, &cli.cookie_name).await?;
        }
    }

    Ok(())
}

fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

async fn print_response(res: reqwest::Response, cookie_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();

    let prefix = format!("{cookie_name}=");
    if let Some(session) = res
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|v| v.strip_prefix(prefix.as_str()))
        .and_then(|rest| rest.split(';').next())
    {
        eprintln!("Session: {session}");
    }

    if let Some(error_id) = res.headers().get("x-reacto-error-id").and_then(|v| v.to_str().ok()) {
        eprintln!("Call failed, error id {error_id}");
        eprintln!("Inspect with: reacto-cli --session <session> error {error_id}");
        return Ok(());
    }

    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
