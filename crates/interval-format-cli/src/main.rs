//! ifmt - format the difference between two timestamps

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use interval_format::{
    Bundle, FormatterConfig, GregorianCalendar, IntervalFormatter, PresentationStyle, TimeUnit,
    ZeroBehavior,
};

#[derive(Parser)]
#[command(
    name = "ifmt",
    version,
    about = "Format the difference between two timestamps as components or a colloquial phrase"
)]
struct Cli {
    #[command(flatten)]
    options: FormatOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format the difference between two RFC 3339 timestamps
    Between {
        /// Start instant (RFC 3339)
        from: String,
        /// End instant (RFC 3339)
        to: String,
    },
    /// Format an elapsed interval in seconds, ending now
    Ago {
        /// Elapsed seconds (negative for a future instant)
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },
}

#[derive(Args)]
struct FormatOptions {
    /// Presentation style: positional, abbreviated, short, full, colloquial
    #[arg(short, long, global = true)]
    style: Option<PresentationStyle>,

    /// Comma-separated units to split into (y,mo,d,h,m,s)
    #[arg(short, long, global = true, value_delimiter = ',')]
    units: Option<Vec<TimeUnit>>,

    /// Maximum number of nonzero units to show
    #[arg(long, global = true)]
    max_units: Option<usize>,

    /// Zero trimming: none, all, or a list of leading,middle,trailing
    #[arg(long, global = true)]
    zeros: Option<ZeroBehavior>,

    /// Append a unit-scaled timestamp to colloquial phrases
    #[arg(long, global = true)]
    relevant_time: bool,

    /// Collapse very small colloquial differences to "now"
    #[arg(long, global = true)]
    allow_now: bool,

    /// IANA timezone the timestamps are read in
    #[arg(short = 'z', long, global = true, default_value = "UTC")]
    timezone: String,

    /// JSON formatter configuration file; flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// JSON localization bundle layered over the built-in English strings
    #[arg(short, long, global = true)]
    bundle: Option<PathBuf>,
}

impl FormatOptions {
    fn to_config(&self) -> Result<FormatterConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                FormatterConfig::from_json(&text)
                    .with_context(|| format!("Failed to load config {}", path.display()))?
            }
            None => FormatterConfig::default(),
        };

        if let Some(style) = self.style {
            config.style = style;
        }
        if let Some(units) = &self.units {
            config.allowed_units = units.iter().copied().collect();
        }
        if let Some(max) = self.max_units {
            config.max_unit_count = Some(max);
        }
        if let Some(zeros) = self.zeros {
            config.zero_behavior = zeros;
        }
        config.include_relevant_time |= self.relevant_time;
        config.allows_now_on_colloquial |= self.allow_now;

        config.validate()?;
        Ok(config)
    }

    fn to_bundle(&self) -> Result<Bundle> {
        let english = Bundle::english();
        let Some(path) = &self.bundle else {
            return Ok(english);
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read bundle {}", path.display()))?;
        let overrides = Bundle::from_json(&text)
            .with_context(|| format!("Failed to load bundle {}", path.display()))?;
        Ok(english.with_overrides(overrides))
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = cli.options.to_config()?;
    tracing::debug!(?config, "resolved configuration");
    let formatter = IntervalFormatter::with_collaborators(
        config,
        Arc::new(cli.options.to_bundle()?),
        Arc::new(GregorianCalendar),
    );

    let output = match &cli.command {
        Command::Between { from, to } => formatter
            .format_rfc3339(from, to, &cli.options.timezone)
            .context("Failed to parse timestamps")?,
        Command::Ago { seconds } => Some(formatter.format_interval(*seconds)),
    };

    match output {
        Some(text) if !text.is_empty() => println!("{text}"),
        Some(_) => {}
        None => tracing::warn!("timestamps use different calendar systems"),
    }
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
