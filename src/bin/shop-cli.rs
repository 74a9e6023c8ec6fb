use clap::{Parser, Subcommand};
use reqwest::Url;
use serde_json::json;

#[derive(Parser)]
#[command(name = "shop-cli")]
#[command(about = "Command-line client for the shop API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3004")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the server is up
    Ping,
    /// Fetch a product by id
    Product { id: String },
    /// Create a product (Basic auth)
    CreateProduct {
        #[arg(long)]
        id: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "john")]
        user: String,
        #[arg(long, default_value = "doe")]
        password: String,
    },
    /// Register a customer
    CreateCustomer {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "BASIC")]
        role: String,
        #[arg(long)]
        street_address: Option<String>,
        #[arg(long)]
        street_number: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = match cli.command {
        Commands::Ping => client.get(endpoint(&cli.url, &["ping"])?).send().await?,
        Commands::Product { id } => {
            client
                .get(endpoint(&cli.url, &["products", id.as_str()])?)
                .send()
                .await?
        }
        Commands::CreateProduct { id, name, user, password } => {
            client
                .post(endpoint(&cli.url, &["products"])?)
                .basic_auth(user, Some(password))
                .json(&json!({ "id": id, "name": name }))
                .send()
                .await?
        }
        Commands::CreateCustomer {
            email,
            password,
            role,
            street_address,
            street_number,
        } => {
            let mut body = json!({
                "email": email,
                "password": password,
                "role": role,
            });
            if let Some(address) = street_address {
                body["streetAddress"] = json!(address);
            }
            if let Some(number) = street_number {
                body["streetNumber"] = json!(number);
            }
            client
                .post(endpoint(&cli.url, &["customers"])?)
                .json(&body)
                .send()
                .await?
        }
    };

    print_response(res).await
}

/// Append `segments` to the base URL, percent-encoding each one.
fn endpoint(base: &str, segments: &[&str]) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| format!("{base} cannot be used as a base URL"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        if !text.is_empty() {
            eprintln!("Response: {}", text);
        }
        return Err(format!("server returned status {}", status).into());
    }

    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(value) if value.is_object() => println!("{}", serde_json::to_string_pretty(&value)?),
        _ => println!("{}", text),
    }
    Ok(())
}
