//! HealthHub CLI
//!
//! Command-line client for the weight backend:
//! - List, add, update and delete records
//! - Export records to CSV and download server files
//! - Browse the blog feed
//! - Compare the sample users side by side

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use async_trait::async_trait;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use healthhub::blog::{fetch_blog_posts, BlogOrder, BlogQuery};
use healthhub::compare::build_comparison;
use healthhub::config::{generate_default_config, Config, LoggingConfig};
use healthhub::gateway::report::{PERMISSION_ACTION, PERMISSION_CONTENT, PERMISSION_TITLE};
use healthhub::gateway::{
    ApiGateway, Confirm, ConfirmPrompt, DeleteOutcome, ErrorReport, ReqwestTransport,
};
use healthhub::query::Pagination;
use healthhub::records::form::parse_weight;
use healthhub::records::{RecordForm, RecordStore, UserDirectory, WeightRecord};

#[derive(Parser)]
#[command(name = "healthhub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Weight records, comparisons and health reading from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config and HEALTHHUB_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List records page by page
    List {
        #[arg(short, long, default_value = "1")]
        page: usize,
        #[arg(short, long, default_value = "10")]
        size: usize,
    },

    /// Add a record
    Add {
        /// Day of the measurement (YYYY-MM-DD)
        date: NaiveDate,
        /// Weight in kg, 20-300
        weight: String,
    },

    /// Change the weight of a record
    Update {
        id: String,
        /// New weight in kg, 20-300
        weight: String,
    },

    /// Delete a record
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Download a file from a server endpoint
    Download {
        /// Where to save the payload
        output: PathBuf,
        /// Endpoint path (default: endpoints.export)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Export all records to CSV
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Records fetched per request
        #[arg(long, default_value = "50")]
        batch: usize,
    },

    /// List blog posts
    Blog {
        #[arg(short, long)]
        limit: Option<u32>,
        #[arg(short, long, default_value = "0")]
        offset: u32,
        /// created_at or views
        #[arg(long, default_value = "created_at")]
        order_by: BlogOrder,
        #[arg(long)]
        ascending: bool,
    },

    /// Compare two of the sample users by date
    Compare {
        #[arg(default_value = "user2")]
        user1: String,
        #[arg(default_value = "user3")]
        user2: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Asks on the terminal unless `--yes` was given
struct TerminalConfirm {
    assume_yes: bool,
}

#[async_trait(?Send)]
impl Confirm for TerminalConfirm {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!("{} {} [y/N] ", prompt.title, prompt.content);
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

fn report_to_terminal(report: ErrorReport) {
    match report {
        ErrorReport::PermissionDenied { message } => {
            eprintln!("{}: {}", PERMISSION_TITLE, message);
            eprintln!("  {} ({})", PERMISSION_CONTENT, PERMISSION_ACTION);
        }
        ErrorReport::Notify(message) => eprintln!("Error: {}", message),
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("healthhub={}", logging.level).into());

    let json = logging.is_json();
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    config.validate()?;

    init_tracing(&config.logging);

    let transport = ReqwestTransport::new(&config.api)?;
    let api = ApiGateway::new(transport, report_to_terminal, config.api.clone())
        .with_endpoints(config.endpoints.clone());

    // Gateway failures have already been printed by the reporter
    match cli.command {
        Commands::List { page, size } => {
            let Ok(result) = api.list_records(page, size).await else {
                std::process::exit(1);
            };

            let mut store = RecordStore::new("me");
            // Number rows across pages, not from 1 on each
            let first_seq = Pagination::new(page, size).offset() + 1;
            store.replace_from_remote_at(result.list, first_seq as u32);

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(store.records())?),
                OutputFormat::Table => {
                    print_records(store.records());
                    println!("Page {} ({} records total)", page, result.total);
                }
            }
        }

        Commands::Add { date, weight } => {
            let draft = match RecordForm::new(Some(date), weight).validate() {
                Ok(draft) => draft,
                Err(errors) => bail!("{}", errors),
            };

            let Ok(created) = api.create_record(&draft).await else {
                std::process::exit(1);
            };
            match created {
                Some(record) => println!("Added record {} ({} kg)", record.id, record.weight),
                None => println!("Added record for {} ({} kg)", draft.date, draft.weight),
            }
        }

        Commands::Update { id, weight } => {
            let weight = match parse_weight(&weight) {
                Ok(weight) => weight,
                Err(message) => bail!("weight: {}", message),
            };

            if api.update_record(&id, weight).await.is_err() {
                std::process::exit(1);
            }
            println!("Updated record {} to {} kg", id, weight.one_decimal());
        }

        Commands::Delete { id, yes } => {
            let confirm = TerminalConfirm { assume_yes: yes };
            match api.delete_record(&id, &confirm).await {
                Ok(DeleteOutcome::Deleted) => println!("Deleted record {}", id),
                Ok(DeleteOutcome::Cancelled) => println!("Cancelled"),
                Err(_) => std::process::exit(1),
            }
        }

        Commands::Download { output, path } => {
            let downloaded = match path {
                Some(path) => api.download(&path, None).await,
                None => api.export_records().await,
            };
            let Ok(bytes) = downloaded else {
                std::process::exit(1);
            };

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, &bytes)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("Saved {} bytes to {:?}", bytes.len(), output);
        }

        Commands::Export { output, batch } => {
            let Ok(remote) = api.fetch_all_records(batch).await else {
                std::process::exit(1);
            };

            let mut store = RecordStore::new("me");
            store.replace_from_remote(remote);

            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    write_csv(file, store.records())?;
                    println!("Exported {} records to {:?}", store.len(), path);
                }
                None => write_csv(std::io::stdout().lock(), store.records())?,
            }
        }

        Commands::Blog {
            limit,
            offset,
            order_by,
            ascending,
        } => {
            let query = BlogQuery {
                limit: limit.unwrap_or(config.blog.page_size),
                offset,
                order_by,
                ascending,
            };

            let posts = fetch_blog_posts(
                api.transport(),
                &config.api.base_url,
                &query,
                config.blog.retry_count,
            )
            .await?;

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&posts)?),
                OutputFormat::Table => {
                    if posts.is_empty() {
                        println!("No posts");
                    }
                    for post in &posts {
                        println!(
                            "{}  {}  ({} views)",
                            post.created_at.format("%Y-%m-%d"),
                            post.title,
                            post.views.unwrap_or(0)
                        );
                        if let Some(summary) = &post.summary {
                            println!("    {}", summary.replace('\n', " "));
                        }
                    }
                }
            }
        }

        Commands::Compare { user1, user2 } => {
            let directory = UserDirectory::sample();
            let rows = build_comparison(&directory, &user1, &user2);

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                OutputFormat::Table => {
                    let left = directory.username(&user1).unwrap_or(&user1);
                    let right = directory.username(&user2).unwrap_or(&user2);

                    println!("{:<12} | {:<10} | {:<10}", "Date", left, right);
                    println!("{}", "-".repeat(38));
                    for row in &rows {
                        println!(
                            "{:<12} | {:<10} | {:<10}",
                            row.date.to_string(),
                            row.user1,
                            row.user2
                        );
                    }
                    if rows.is_empty() {
                        println!("No records for either user");
                    }
                }
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn print_records(records: &[WeightRecord]) {
    if records.is_empty() {
        println!("No records");
        return;
    }

    println!(
        "{:<5} | {:<36} | {:<10} | {:<8} | {:<16}",
        "#", "ID", "Date", "Weight", "Submitted"
    );
    println!("{}", "-".repeat(87));

    for record in records {
        println!(
            "{:<5} | {:<36} | {:<10} | {:<8} | {:<16}",
            record.seq,
            record.id,
            record.date.to_string(),
            record.weight.one_decimal(),
            record.submitted_at.format("%Y-%m-%d %H:%M").to_string()
        );
    }
}

fn write_csv<W: std::io::Write>(writer: W, records: &[WeightRecord]) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["seq", "id", "date", "weight", "submitted_at", "updated_at"])?;

    for record in records {
        csv.write_record([
            record.seq.to_string(),
            record.id.clone(),
            record.date.to_string(),
            record.weight.one_decimal(),
            record.submitted_at.to_rfc3339(),
            record.updated_at.to_rfc3339(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}
