use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use paper_summarizer::config::{find_config_file, get_config, load_config};
use paper_summarizer::models::SummaryLength;
use paper_summarizer::parser::{extract_key_figures, parse_document};
use paper_summarizer::sources::{ArxivSource, Source};
use paper_summarizer::summarizer::OllamaClient;
use paper_summarizer::utils::extract_text;
use paper_summarizer::{server, ui};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Paper Summarizer - section-aware summarization of academic papers with
/// a local Ollama backend
#[derive(Parser, Debug)]
#[command(name = "paper-summarizer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Summarize academic papers with a local Ollama backend", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Summary length for whole-document summaries
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LengthArg {
    Short,
    Medium,
    Long,
}

impl From<LengthArg> for SummaryLength {
    fn from(value: LengthArg) -> Self {
        match value {
            LengthArg::Short => SummaryLength::Short,
            LengthArg::Medium => SummaryLength::Medium,
            LengthArg::Long => SummaryLength::Long,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Bind host (overrides configuration)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides configuration)
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Segment a PDF and print its sections and metadata
    Sections {
        /// Path to the PDF file
        file: PathBuf,
    },

    /// Summarize a whole PDF
    Summarize {
        /// Path to the PDF file
        file: PathBuf,

        /// Summary length
        #[arg(long, short, value_enum, default_value_t = LengthArg::Medium)]
        length: LengthArg,
    },

    /// Fetch paper metadata from arXiv
    Fetch {
        /// arXiv identifier (e.g. "2301.12345" or an abs/pdf URL)
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("paper_summarizer={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if specified or found in the
    // conventional location, else environment + defaults.
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        get_config()?
    };

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            server::serve(config).await?;
        }

        Commands::Sections { file } => {
            let text = extract_text(&file)?;
            let document = parse_document(text);

            ui::heading(&document.metadata.title);
            if !document.metadata.authors.is_empty() {
                ui::field("Authors", &document.metadata.authors.join("; "));
            }
            ui::field(
                "Text length",
                &document.text.chars().count().to_string(),
            );

            ui::heading("Sections");
            for section in document.sections.by_offset() {
                println!(
                    "  {:<14} offset {:>8}  ({} chars)",
                    section.name,
                    section.start,
                    section.text.chars().count()
                );
            }

            let figures = extract_key_figures(&document.text);
            if !figures.is_empty() {
                ui::field("Figures", &figures.join(", "));
            }
        }

        Commands::Summarize { file, length } => {
            let text = extract_text(&file)?;
            let client = OllamaClient::new(&config.backend);

            tracing::info!(model = client.model(), "requesting summary");
            match client.summarize_document_text(&text, length.into()).await {
                Ok(summary) => ui::summary_block("Summary", &summary),
                Err(e) => {
                    ui::error(&e.to_string());
                    std::process::exit(1);
                }
            }
        }

        Commands::Fetch { id } => {
            let source = ArxivSource::new();
            let paper = source.fetch(&id).await?;

            ui::heading(&paper.title);
            ui::field("arXiv id", &paper.paper_id);
            ui::field("Authors", &paper.authors.join("; "));
            if let Some(date) = &paper.published_date {
                ui::field("Published", date);
            }
            ui::field("URL", &paper.url);
            ui::summary_block("Abstract", &paper.abstract_text);
        }
    }

    Ok(())
}
