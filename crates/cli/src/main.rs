mod config;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;
use uuid62::{base62_to_uuid, decode, encode, uuid_to_base62, BigUint, Uuid62};

use config::{pad_override, CliConfig};

#[derive(Parser)]
#[command(name = "uuid62")]
#[command(about = "Convert UUIDs to and from base 62, and integers to and from any radix 2-62")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a decimal integer in the given radix
    Encode {
        /// Non-negative decimal integer
        value: String,
        /// Target radix (2-62, default from UUID62_RADIX or 62)
        #[arg(long, short)]
        radix: Option<u32>,
    },
    /// Decode text in the given radix to a decimal integer
    Decode {
        /// Digits, most significant first
        text: String,
        /// Source radix (2-62, default from UUID62_RADIX or 62)
        #[arg(long, short)]
        radix: Option<u32>,
    },
    /// Encode a UUID in base 62
    FromUuid {
        /// UUID in any standard text form (hyphenated, simple, braced, urn)
        uuid: String,
        #[command(flatten)]
        pad: PadArgs,
    },
    /// Decode base-62 text to a hyphenated UUID
    ToUuid {
        /// Base-62 text, padded or not
        text: String,
    },
    /// Generate random (v4) identifiers in base 62
    New {
        /// How many identifiers to print
        #[arg(long, short, default_value_t = 1)]
        count: usize,
        #[command(flatten)]
        pad: PadArgs,
    },
}

#[derive(Args)]
struct PadArgs {
    /// Left-pad output with '0' to 23 characters
    #[arg(long, conflicts_with = "no_pad")]
    pad: bool,
    /// Print the shortest form
    #[arg(long)]
    no_pad: bool,
}

/// Entry point for the `uuid62` CLI.
///
/// Logging goes to stderr so stdout carries only results.
///
/// # Environment Variables
/// - `UUID62_RADIX`: default radix for `encode`/`decode` (default: 62)
/// - `UUID62_PAD`: default padding for `from-uuid`/`new` (default: true)
/// - `RUST_LOG`: tracing filter (default directive: `uuid62=info`)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("uuid62=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env()?;
    tracing::debug!(radix = config.radix(), pad = config.pad(), "resolved configuration");

    let Some(command) = cli.command else {
        println!("Use 'uuid62 --help' for commands");
        return Ok(());
    };

    match run(command, config) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            Err(e)
        }
    }
}

/// Executes one subcommand and returns the lines to print.
fn run(command: Commands, config: CliConfig) -> anyhow::Result<Vec<String>> {
    match command {
        Commands::Encode { value, radix } => {
            let config = config.with_overrides(radix, None)?;
            let value: BigUint = value
                .trim()
                .parse()
                .with_context(|| format!("not a non-negative decimal integer: '{value}'"))?;
            Ok(vec![encode(&value, config.radix())?])
        }
        Commands::Decode { text, radix } => {
            let config = config.with_overrides(radix, None)?;
            let value = decode(&text, config.radix())
                .with_context(|| format!("failed to decode '{text}'"))?;
            Ok(vec![value.to_string()])
        }
        Commands::FromUuid { uuid, pad } => {
            let config = config.with_overrides(None, pad_override(pad.pad, pad.no_pad)?)?;
            let id = Uuid::parse_str(uuid.trim())
                .with_context(|| format!("not a valid UUID: '{uuid}'"))?;
            Ok(vec![uuid_to_base62(&id, config.pad())?])
        }
        Commands::ToUuid { text } => {
            let id = base62_to_uuid(text.trim())
                .with_context(|| format!("failed to decode '{text}' as a UUID"))?;
            Ok(vec![id.hyphenated().to_string()])
        }
        Commands::New { count, pad } => {
            let config = config.with_overrides(None, pad_override(pad.pad, pad.no_pad)?)?;
            Ok((0..count)
                .map(|_| Uuid62::new().to_base62(config.pad()))
                .collect())
        }
    }
}
