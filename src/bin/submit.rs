//! Interactive lead submission form for lead-capture.
//!
//! The terminal counterpart of the website contact form: collects the lead
//! fields, validates them locally, performs one POST against the service,
//! and renders the server's feedback.
//!
//! # Usage
//!
//! ```bash
//! # Fully interactive
//! cargo run --bin submit
//!
//! # Non-interactive (all required fields as flags)
//! cargo run --bin submit -- \
//!     --name "Jane Doe" --email jane@example.com \
//!     --company Acme --company-size 6-20
//!
//! # Against a deployed instance
//! cargo run --bin submit -- --endpoint https://leads.example.com
//! ```
//!
//! # Environment Variables
//!
//! - `LEAD_API_URL` (optional): server base URL (default: `http://localhost:3000`)

use lead_capture::client::{LeadFormClient, SubmitError};
use lead_capture::domain::entities::CompanySize;
use lead_capture::prelude::SubmitLeadRequest;

use anyhow::Result;
use clap::Parser;
use colored::*;
use dialoguer::{Input, Select};

/// Fixed confirmation rendered after a successful submission.
const CONFIRMATION: &str = "Thank you! We'll get back to you within 24 hours.";

/// Submit a lead to the lead-capture service.
#[derive(Parser)]
#[command(name = "submit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Server base URL (overrides LEAD_API_URL)
    #[arg(long)]
    endpoint: Option<String>,

    /// Full name
    #[arg(long)]
    name: Option<String>,

    /// Email address
    #[arg(long)]
    email: Option<String>,

    /// Phone number (optional field)
    #[arg(long)]
    phone: Option<String>,

    /// Company name
    #[arg(long)]
    company: Option<String>,

    /// Company size: 1-5, 6-20, 21-50 or 50+
    #[arg(long)]
    company_size: Option<String>,

    /// Main challenge (optional field)
    #[arg(long)]
    challenge: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let base_url = cli
        .endpoint
        .clone()
        .or_else(|| std::env::var("LEAD_API_URL").ok())
        .unwrap_or_else(|| "http://localhost:3000".to_string());

    let request = collect_form(&cli)?;

    let client = LeadFormClient::new(&base_url);
    println!();
    println!("{}", "Submitting lead...".yellow());

    match client.submit(&request).await {
        Ok(response) => {
            println!("{}", CONFIRMATION.green().bold());
            if let Some(page_id) = response.notion_page_id {
                println!("Record id: {}", page_id.dimmed());
            }
            Ok(())
        }
        Err(e) => {
            render_failure(&e);
            std::process::exit(1);
        }
    }
}

/// Gathers the form fields from flags, prompting for anything missing.
///
/// The size prompt is a closed-set selection, so interactive input cannot
/// produce an invalid bracket; flag input is still validated before the
/// request is sent.
fn collect_form(cli: &Cli) -> Result<SubmitLeadRequest> {
    println!("{}", "Lead submission".bright_blue().bold());
    println!();

    let name = required_field(cli.name.clone(), "Name")?;
    let email = required_field(cli.email.clone(), "Email")?;
    let phone = optional_field(cli.phone.clone(), "Phone (optional)")?;
    let company = required_field(cli.company.clone(), "Company")?;

    let company_size = match cli.company_size.clone() {
        Some(size) => size,
        None => {
            let labels: Vec<&str> = CompanySize::ALL.iter().map(|s| s.as_str()).collect();
            let index = Select::new()
                .with_prompt("Company size")
                .items(&labels)
                .default(0)
                .interact()?;
            labels[index].to_string()
        }
    };

    let challenge = optional_field(cli.challenge.clone(), "Main challenge (optional)")?;

    Ok(SubmitLeadRequest {
        name,
        email,
        phone,
        company,
        company_size,
        challenge,
    })
}

/// Resolves a required field from its flag or an interactive prompt.
fn required_field(flag: Option<String>, prompt: &str) -> Result<String> {
    match flag {
        Some(value) => Ok(value),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}

/// Resolves an optional field; blank input collapses to `None`.
fn optional_field(flag: Option<String>, prompt: &str) -> Result<Option<String>> {
    let value = match flag {
        Some(value) => value,
        None => Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?,
    };

    Ok(Some(value).filter(|v| !v.trim().is_empty()))
}

/// Renders one failure line; the phrasing mirrors the website form.
fn render_failure(error: &SubmitError) {
    match error {
        SubmitError::Invalid(message) => {
            println!("{} {}", "✗".red(), message.red());
        }
        SubmitError::Transport(message) => {
            println!("{} {}", "✗".red(), message.red());
            println!("{}", "Check that the service is running and reachable.".dimmed());
        }
        SubmitError::Rejected(message) => {
            println!("{} {}", "✗".red(), message.red());
        }
    }
}
