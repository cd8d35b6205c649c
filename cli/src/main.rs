//! helpdesk-cli - query FAQs and tickets on a running helpdesk server.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "helpdesk-cli")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the helpdesk server
    #[arg(long, env = "HELPDESK_URL", default_value = "http://localhost:3000")]
    url: String,

    /// Print the raw JSON response
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List FAQs visible to a role
    Faqs {
        /// Category name ("All" for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Viewer role (student, staff); anything else sees everything
        #[arg(short, long)]
        role: Option<String>,

        /// Case-insensitive search term
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show how many FAQs each category holds for a role
    Categories {
        /// Viewer role (student, staff)
        #[arg(short, long)]
        role: Option<String>,
    },

    /// Search tickets or FAQs
    Search {
        /// What to search: tickets or faqs
        #[arg(short = 't', long = "type", default_value = "tickets")]
        kind: String,

        /// Search term
        #[arg(short, long)]
        query: Option<String>,

        /// Ticket status (all, open, in_progress, resolved, closed)
        #[arg(short, long)]
        status: Option<String>,

        /// Ticket ordering (newest, oldest)
        #[arg(short, long)]
        ordering: Option<String>,

        /// Bearer token forwarded to the ticket backend
        #[arg(long, env = "HELPDESK_TOKEN")]
        token: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct Faq {
    id: String,
    question: String,
    category: String,
    audience: String,
}

#[derive(Debug, Deserialize)]
struct CategoryCount {
    category: String,
    count: usize,
}

#[derive(Debug, Deserialize)]
struct Ticket {
    id: i64,
    #[serde(default)]
    type_of_issue: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    created_at: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let base_url = cli.url.trim_end_matches('/').to_string();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Faqs {
            category,
            role,
            query,
        } => {
            let params = query_pairs(&[("category", category), ("role", role), ("q", query)]);
            let body = get_json(&client, &base_url, "/api/v1/faqs", &params, None).await?;
            if cli.json {
                return print_json(&body);
            }

            let faqs: Vec<Faq> =
                serde_json::from_value(body).context("Unexpected FAQ list response")?;
            if faqs.is_empty() {
                println!("No FAQs found");
            }
            for faq in faqs {
                println!(
                    "{:<28} [{} / {}] {}",
                    faq.id, faq.category, faq.audience, faq.question
                );
            }
        }
        Commands::Categories { role } => {
            let params = query_pairs(&[("role", role)]);
            let body =
                get_json(&client, &base_url, "/api/v1/faqs/categories", &params, None).await?;
            if cli.json {
                return print_json(&body);
            }

            let counts: Vec<CategoryCount> =
                serde_json::from_value(body).context("Unexpected category count response")?;
            for entry in counts {
                println!("{:<12} {}", entry.category, entry.count);
            }
        }
        Commands::Search {
            kind,
            query,
            status,
            ordering,
            token,
        } => {
            let params = query_pairs(&[
                ("type", Some(kind)),
                ("q", query),
                ("status", status),
                ("ordering", ordering),
            ]);
            let body = get_json(
                &client,
                &base_url,
                "/api/v1/search",
                &params,
                token.as_deref(),
            )
            .await?;
            if cli.json {
                return print_json(&body);
            }
            print_search_results(body)?;
        }
    }

    Ok(())
}

fn query_pairs(pairs: &[(&'static str, Option<String>)]) -> Vec<(&'static str, String)> {
    pairs
        .iter()
        .filter_map(|(key, value)| value.clone().map(|v| (*key, v)))
        .collect()
}

async fn get_json(
    client: &reqwest::Client,
    base_url: &str,
    path: &str,
    params: &[(&str, String)],
    token: Option<&str>,
) -> Result<Value> {
    let url = format!("{base_url}{path}");
    let mut request = client.get(&url).query(params);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request
        .send()
        .await
        .with_context(|| format!("Failed to reach {url}"))?;

    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        bail!("{} returned {}: {}", url, status.as_u16(), error_message(&text));
    }

    response
        .json()
        .await
        .with_context(|| format!("Invalid JSON from {url}"))
}

/// The server's `{"error": ...}` message, or the raw body when it is not JSON.
fn error_message(body: &str) -> String {
    let body = body.trim();
    match serde_json::from_str::<Value>(body) {
        Ok(json) => match json["error"].as_str() {
            Some(message) => message.to_string(),
            None => body.to_string(),
        },
        Err(_) if body.is_empty() => "no response body".to_string(),
        Err(_) => body.to_string(),
    }
}

fn print_json(body: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(body)?);
    Ok(())
}

fn print_search_results(body: Value) -> Result<()> {
    let kind = body["type"].as_str().unwrap_or_default().to_string();
    let results = body
        .get("results")
        .cloned()
        .unwrap_or(Value::Array(Vec::new()));

    if results.as_array().map_or(true, |r| r.is_empty()) {
        println!("No results found");
        return Ok(());
    }

    match kind.as_str() {
        "faqs" => {
            let faqs: Vec<Faq> =
                serde_json::from_value(results).context("Unexpected FAQ results")?;
            for faq in faqs {
                println!("{:<28} [{}] {}", faq.id, faq.category, faq.question);
            }
        }
        _ => {
            let tickets: Vec<Ticket> =
                serde_json::from_value(results).context("Unexpected ticket results")?;
            for ticket in tickets {
                let created = ticket
                    .created_at
                    .as_deref()
                    .and_then(|ts| ts.get(..10))
                    .unwrap_or("");
                println!(
                    "Ticket #{} - {:<24} {:<12} {}",
                    ticket.id,
                    ticket.type_of_issue,
                    format_status(&ticket.status),
                    created
                );
            }
        }
    }

    Ok(())
}

fn format_status(value: &str) -> String {
    value
        .split('_')
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let mut chars = chunk.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
