use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::multipart;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Command line client for the catalog API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every item
    Items,
    /// Look up one item
    Item {
        id: i64,
        #[arg(long, default_value = "")]
        q: String,
        #[arg(long, default_value_t = 1.0)]
        size: f64,
    },
    /// Describe a model (alexnet, resnet, lenet)
    Model { name: String },
    /// Show a user
    User { id: String },
    /// Log in with a username and password
    Login { username: String, password: String },
    /// Upload files and print their names as the server saw them
    Upload {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Items => client.get(format!("{base}/items/")).send().await?,
        Commands::Item { id, q, size } => {
            client
                .get(format!("{base}/items/{id}"))
                .query(&[("q", q), ("size", size.to_string())])
                .send()
                .await?
        }
        Commands::Model { name } => client.get(format!("{base}/models/{name}")).send().await?,
        Commands::User { id } => client.get(format!("{base}/users/{id}")).send().await?,
        Commands::Login { username, password } => {
            client
                .post(format!("{base}/login/"))
                .form(&[("username", username), ("password", password)])
                .send()
                .await?
        }
        Commands::Upload { paths } => {
            let mut form = multipart::Form::new();
            for path in paths {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let bytes = tokio::fs::read(&path).await?;
                form = form.part("files", multipart::Part::bytes(bytes).file_name(name));
            }
            client
                .post(format!("{base}/uploadfiles/"))
                .multipart(form)
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
        eprintln!("Error: API returned status {}", status);
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
