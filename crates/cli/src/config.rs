//! CLI runtime configuration.
//!
//! Defaults are resolved once at startup from the environment (optionally seeded from a
//! `.env` file) and then overridden by command-line flags. Subcommands only ever see the
//! resolved [`CliConfig`], never the environment.

use anyhow::{anyhow, bail, Context};
use uuid62::{Uuid62Error, MAX_RADIX, MIN_RADIX};

/// Environment variable holding the default radix for `encode` / `decode`.
pub const RADIX_ENV: &str = "UUID62_RADIX";

/// Environment variable holding the default padding choice for UUID output.
pub const PAD_ENV: &str = "UUID62_PAD";

const DEFAULT_RADIX: u32 = 62;
const DEFAULT_PAD: bool = true;

/// CLI configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    radix: u32,
    pad: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            radix: DEFAULT_RADIX,
            pad: DEFAULT_PAD,
        }
    }
}

impl CliConfig {
    /// Create a new `CliConfig`, rejecting radices the codec cannot use.
    pub fn new(radix: u32, pad: bool) -> anyhow::Result<Self> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(Uuid62Error::InvalidRadix(radix).into());
        }
        Ok(Self { radix, pad })
    }

    /// Resolve from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from an arbitrary variable lookup. Unset variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let radix = match lookup(RADIX_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("{RADIX_ENV} is not a number: '{raw}'"))?,
            None => DEFAULT_RADIX,
        };

        let pad = match lookup(PAD_ENV) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                anyhow!("{PAD_ENV} must be true/false, 1/0, yes/no or on/off, got: '{raw}'")
            })?,
            None => DEFAULT_PAD,
        };

        Self::new(radix, pad).with_context(|| format!("invalid {RADIX_ENV}"))
    }

    /// Apply command-line overrides on top of this configuration.
    pub fn with_overrides(self, radix: Option<u32>, pad: Option<bool>) -> anyhow::Result<Self> {
        Self::new(radix.unwrap_or(self.radix), pad.unwrap_or(self.pad))
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    pub fn pad(&self) -> bool {
        self.pad
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Turn a `--pad` / `--no-pad` flag pair into an optional override.
pub fn pad_override(pad: bool, no_pad: bool) -> anyhow::Result<Option<bool>> {
    match (pad, no_pad) {
        (true, true) => bail!("--pad and --no-pad are mutually exclusive"),
        (true, false) => Ok(Some(true)),
        (false, true) => Ok(Some(false)),
        (false, false) => Ok(None),
    }
}
