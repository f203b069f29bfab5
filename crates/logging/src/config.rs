//! crates/logging/src/config.rs
//! Verbosity configuration combining `-v` counts and `--debug` tokens.

use super::levels::{DebugFlag, DebugLevels};

/// Combined verbosity configuration for the debug flags.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Debug flag levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create a new configuration from a verbose level (`-v` count).
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        match level {
            0 => {}
            1 => {
                config.debug.select = 1;
                config.debug.pack = 1;
            }
            2 => {
                config.debug.filter = 1;
                config.debug.walk = 1;
                config.debug.select = 2;
                config.debug.pack = 2;
            }
            _ => {
                config.debug.set_all(level.min(4) - 1);
                config.debug.select = 3;
            }
        }

        config
    }

    /// Apply a single debug flag token (e.g., "filter2", "walk", "all3").
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        if name == "all" {
            self.debug.set_all(level);
            return Ok(());
        }

        let flag =
            DebugFlag::from_name(name).ok_or_else(|| format!("unknown debug flag: {name}"))?;
        self.debug.set(flag, level);
        Ok(())
    }

    /// Apply a comma-separated list of debug tokens.
    pub fn apply_debug_list(&mut self, list: &str) -> Result<(), String> {
        list.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .try_for_each(|token| self.apply_debug_flag(token))
    }

    /// Renders the configuration as `EnvFilter` directives.
    ///
    /// Everything outside the `packlist::*` targets stays at `warn`.
    #[must_use]
    pub fn filter_directives(&self) -> String {
        let mut directives = String::from("warn");
        for flag in DebugFlag::ALL {
            if let Some(level) = tracing_level_name(self.debug.get(flag)) {
                directives.push(',');
                directives.push_str(flag.target());
                directives.push('=');
                directives.push_str(level);
            }
        }
        directives
    }
}

fn tracing_level_name(level: u8) -> Option<&'static str> {
    match level {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Parse a flag token like "filter2" into ("filter", 2) or "walk" into ("walk", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    match token.find(|c: char| c.is_ascii_digit()) {
        Some(pos) => {
            let (name, level_str) = token.split_at(pos);
            let level = level_str
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((name, level))
        }
        None => Ok((token, 1)),
    }
}
