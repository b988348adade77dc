use anyhow::Result;
use clap::{Parser, Subcommand};
use hms_cli::{coercion_options, commands, OutputFormat};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "hms")]
#[command(about = "hms - Format, parse and convert times of day", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Zone used to read timestamps that carry no explicit --tz
    #[arg(long, global = true, env = "HMS_DEFAULT_TZ")]
    default_tz: Option<String>,

    /// Read timestamps in UTC unless --tz is given (legacy behaviour)
    #[arg(long, global = true, env = "HMS_LEGACY_UTC")]
    legacy_utc: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    output_format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format counts of seconds as H:MM:SS
    Format {
        /// Counts of seconds (`NA` for missing)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// Input file, one value per line ("-" for stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Parse H:MM:SS text into counts of seconds
    Parse {
        /// Text values
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,

        /// Input file, one value per line ("-" for stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Fail if any value does not parse
        #[arg(long)]
        strict: bool,
    },

    /// Build values from comma-separated component lists
    Build {
        /// Seconds
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        seconds: Option<Vec<f64>>,

        /// Minutes
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        minutes: Option<Vec<f64>>,

        /// Hours
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        hours: Option<Vec<f64>>,

        /// Days
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        days: Option<Vec<f64>>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Read the time of day off RFC 3339 timestamps
    Clock {
        /// Timestamps
        values: Vec<String>,

        /// Input file, one timestamp per line ("-" for stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Zone to read the clock in (IANA name)
        #[arg(long)]
        tz: Option<String>,
    },

    /// Convert counts of seconds to UTC timestamps on the epoch day
    Timestamp {
        /// Counts of seconds (`NA` for missing)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// Input file, one value per line ("-" for stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Tabulate text values with their seconds and canonical form
    Table {
        /// Text values
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,

        /// Input file, one value per line ("-" for stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let options = coercion_options(cli.default_tz.as_deref(), cli.legacy_utc)?;
    let format = cli.output_format;

    // Execute command
    match cli.command {
        Commands::Format {
            values,
            input,
            output,
        } => commands::format::execute(&values, input.as_deref(), output.as_deref(), format),

        Commands::Parse {
            values,
            input,
            output,
            strict,
        } => commands::parse::execute(
            &values,
            input.as_deref(),
            output.as_deref(),
            strict,
            format,
        ),

        Commands::Build {
            seconds,
            minutes,
            hours,
            days,
            output,
        } => commands::build::execute(
            &commands::build::Components {
                seconds,
                minutes,
                hours,
                days,
            },
            output.as_deref(),
            format,
        ),

        Commands::Clock {
            values,
            input,
            output,
            tz,
        } => commands::clock::execute(
            &values,
            input.as_deref(),
            output.as_deref(),
            tz.as_deref(),
            &options,
            format,
        ),

        Commands::Timestamp {
            values,
            input,
            output,
        } => commands::timestamp::execute(&values, input.as_deref(), output.as_deref(), format),

        Commands::Table {
            values,
            input,
            output,
        } => commands::table::execute(&values, input.as_deref(), output.as_deref()),
    }
}
