use anyhow::Result;
use clap::Parser;
use snip::config::Config;
use snip::server;
use tracing_subscriber::EnvFilter;

/// In-memory URL shortener.
///
/// Settings are read from the environment (and `.env`); flags override them.
#[derive(Parser)]
#[command(name = "snip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, e.g. 127.0.0.1:3000 (overrides LISTEN)
    #[arg(long)]
    listen: Option<String>,

    /// Public base for short URLs (overrides BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Length of generated codes (overrides CODE_LENGTH)
    #[arg(long)]
    code_length: Option<usize>,

    /// Log output format: text or json (overrides LOG_FORMAT)
    #[arg(long)]
    log_format: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = Some(base_url);
        }
        if let Some(code_length) = self.code_length {
            config.code_length = code_length;
        }
        if let Some(log_format) = self.log_format {
            config.log_format = log_format;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)?;

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    Ok(())
}
