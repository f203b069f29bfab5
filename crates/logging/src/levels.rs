//! crates/logging/src/levels.rs
//! Flag enums and level structures for per-subsystem verbosity.

use std::fmt;

/// Debug flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugFlag {
    /// Rule compilation, scope resolution and per-file verdicts.
    Filter,
    /// Directory traversal and pruning.
    Walk,
    /// Selection engine orchestration and summaries.
    Select,
    /// Tarball construction.
    Pack,
}

impl DebugFlag {
    /// Every flag, in display order.
    pub const ALL: [Self; 4] = [Self::Filter, Self::Walk, Self::Select, Self::Pack];

    /// Returns the `tracing` target events for this flag are emitted under.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Filter => "packlist::filter",
            Self::Walk => "packlist::walk",
            Self::Select => "packlist::select",
            Self::Pack => "packlist::pack",
        }
    }

    /// Returns the token accepted by `--debug`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Filter => "filter",
            Self::Walk => "walk",
            Self::Select => "select",
            Self::Pack => "pack",
        }
    }

    /// Parses a `--debug` flag name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.name() == name)
    }
}

impl fmt::Display for DebugFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Debug verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugLevels {
    /// Filter rule processing level.
    pub filter: u8,
    /// Directory traversal level.
    pub walk: u8,
    /// Selection engine level.
    pub select: u8,
    /// Tarball construction level.
    pub pack: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Filter => self.filter,
            DebugFlag::Walk => self.walk,
            DebugFlag::Select => self.select,
            DebugFlag::Pack => self.pack,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Filter => self.filter = level,
            DebugFlag::Walk => self.walk = level,
            DebugFlag::Select => self.select = level,
            DebugFlag::Pack => self.pack = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        self.filter = level;
        self.walk = level;
        self.select = level;
        self.pack = level;
    }
}
