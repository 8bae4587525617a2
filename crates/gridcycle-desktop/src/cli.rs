use std::path::PathBuf;

use gridcycle_tron::Variant;

pub const USAGE: &str = "\
Usage: gridcycle [--mode=duel|versus-ai] [--seed=<u64>] [--rounds=<n>] [--config=<path>] [--mute]

  --mode     duel: two players on one keyboard (WASD vs arrows)
             versus-ai: WASD against the bot (default)
  --seed     fix the RNG seed for power-ups and obstacles
  --rounds   rounds per session, overrides the config file
  --config   TOML config path, overrides GRIDCYCLE_TRON_CONFIG
  --mute     start with audio disabled

In game: P pauses, Escape quits.";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub variant: Variant,
    pub seed: Option<u64>,
    pub rounds: Option<u8>,
    pub config_path: Option<PathBuf>,
    pub muted: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            variant: Variant::VersusAi,
            seed: None,
            rounds: None,
            config_path: None,
            muted: false,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum CliError {
    HelpRequested,
    UnknownFlag(String),
    InvalidValue { flag: &'static str, value: String },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HelpRequested => write!(f, "help requested"),
            Self::UnknownFlag(arg) => write!(f, "unknown argument '{arg}'"),
            Self::InvalidValue { flag, value } => write!(f, "invalid value '{value}' for --{flag}"),
        }
    }
}

impl std::error::Error for CliError {}

impl CliArgs {
    /// Parse `--key=value` style arguments (program name already stripped).
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        for arg in args {
            if arg == "--help" || arg == "-h" {
                return Err(CliError::HelpRequested);
            } else if arg == "--mute" {
                parsed.muted = true;
            } else if let Some(v) = arg.strip_prefix("--mode=") {
                parsed.variant = v.parse().map_err(|_| invalid("mode", v))?;
            } else if let Some(v) = arg.strip_prefix("--seed=") {
                parsed.seed = Some(v.parse().map_err(|_| invalid("seed", v))?);
            } else if let Some(v) = arg.strip_prefix("--rounds=") {
                let rounds: u8 = v.parse().map_err(|_| invalid("rounds", v))?;
                if rounds == 0 {
                    return Err(invalid("rounds", v));
                }
                parsed.rounds = Some(rounds);
            } else if let Some(v) = arg.strip_prefix("--config=") {
                if v.is_empty() {
                    return Err(invalid("config", v));
                }
                parsed.config_path = Some(PathBuf::from(v));
            } else {
                return Err(CliError::UnknownFlag(arg));
            }
        }
        Ok(parsed)
    }
}

fn invalid(flag: &'static str, value: &str) -> CliError {
    CliError::InvalidValue {
        flag,
        value: value.to_string(),
    }
}
