//! crates/cli/src/arguments.rs
//! Command-line parsing into [`ParsedArgs`].

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

/// Name used in diagnostics and the help banner.
pub(crate) const PROGRAM_NAME: &str = "packlist";

/// Deterministic help text describing the supported options.
const HELP_TEXT: &str = concat!(
    "Usage: packlist [OPTIONS] [DIR]\n",
    "\n",
    "Selects the files of the package rooted at DIR (default: the current\n",
    "directory) and writes them to a gzip-compressed tarball, or copies them\n",
    "into a directory with --copy-to.\n",
    "\n",
    "Options:\n",
    "  -f, --filename FILE    Write the tarball to FILE instead of <name>-v<version>.tgz.\n",
    "  -n, --dry-run          Print the selected paths instead of writing a tarball.\n",
    "      --copy-to DIR      Copy the selected files into DIR instead of packing them.\n",
    "  -v, --verbose          Increase logging verbosity (repeatable).\n",
    "      --debug=FLAGS      Set per-subsystem levels, e.g. filter2,walk or all3.\n",
    "      --no-parallel      Evaluate rules on the calling thread only.\n",
    "  -h, --help             Show this help message and exit.\n",
    "  -V, --version          Output version information and exit.\n",
    "\n",
    "Debug flags: filter, walk, select, pack, all.\n",
    "The PACKLIST_LOG environment variable overrides -v and --debug.\n",
);

/// Arguments recognised by the `packlist` command.
///
/// **Warning**: exposed via `cli::test_utils` for integration tests only.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// `-h`, `--help`
    pub show_help: bool,
    /// `-V`, `--version`
    pub show_version: bool,
    /// `-n`, `--dry-run`
    pub dry_run: bool,
    /// Number of `-v` occurrences.
    pub verbose: u8,
    /// Raw `--debug` lists in command-line order.
    pub debug: Vec<String>,
    /// `--no-parallel`
    pub no_parallel: bool,
    /// `-f`, `--filename`
    pub filename: Option<PathBuf>,
    /// `--copy-to`
    pub copy_to: Option<PathBuf>,
    /// Package root operand.
    pub directory: Option<PathBuf>,
}

fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .short('n')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .value_name("FLAGS")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("no-parallel")
                .long("no-parallel")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("filename")
                .long("filename")
                .short('f')
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("copy-to")
                .long("copy-to")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with_all(["filename", "dry-run"]),
        )
        .arg(
            Arg::new("directory")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf)),
        )
}

/// Parses command-line arguments, `argv[0]` included.
///
/// # Errors
///
/// Returns the `clap` error for unknown options, missing values or extra
/// operands.
pub fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        dry_run: matches.get_flag("dry-run"),
        verbose: matches.get_count("verbose"),
        debug: matches
            .remove_many::<String>("debug")
            .map(Iterator::collect)
            .unwrap_or_default(),
        no_parallel: matches.get_flag("no-parallel"),
        filename: matches.remove_one::<PathBuf>("filename"),
        copy_to: matches.remove_one::<PathBuf>("copy-to"),
        directory: matches.remove_one::<PathBuf>("directory"),
    })
}

/// Renders the help text.
pub(crate) fn render_help() -> &'static str {
    HELP_TEXT
}
