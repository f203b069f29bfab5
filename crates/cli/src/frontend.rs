use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use engine::{Manifest, SelectOptions, SelectionResult, select_files};
use logging::VerbosityConfig;

use crate::arguments::{PROGRAM_NAME, ParsedArgs, parse_args, render_help};
use crate::error::{CliError, EXIT_SUCCESS};

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI using the provided argument iterator and output handles.
///
/// Returns the process exit code: `0` on success, `1` when selection,
/// packing or copying fails and `2` for usage errors. Diagnostics are written to
/// `stderr` prefixed with `packlist error:`.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let result = parse_args(arguments)
        .map_err(|error| CliError::Usage(error.to_string().trim_end().to_owned()))
        .and_then(|parsed| execute(parsed, stdout));

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME} error: {error}");
            error.exit_code()
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}

fn execute<Out: Write>(parsed: ParsedArgs, stdout: &mut Out) -> Result<(), CliError> {
    if parsed.show_help {
        stdout.write_all(render_help().as_bytes())?;
        return Ok(());
    }

    if parsed.show_version {
        writeln!(stdout, "{PROGRAM_NAME} {}", env!("CARGO_PKG_VERSION"))?;
        return Ok(());
    }

    let verbosity = verbosity_config(&parsed)?;
    // A subscriber installed by an embedding process keeps precedence.
    let _ = logging::init_tracing(&verbosity);

    let root = parsed
        .directory
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let options = SelectOptions::default().parallel(!parsed.no_parallel);
    let manifest = Manifest::load(&root)?;

    if parsed.dry_run {
        let selection = select_files(&root, &manifest, &options)?;
        return print_selection(&selection, stdout);
    }

    if let Some(target) = parsed.copy_to.as_deref() {
        let selection = select_files(&root, &manifest, &options)?;
        let summary = archive::copy_selection(&root, &selection, target)?;
        writeln!(
            stdout,
            "copied {} files ({} bytes) to {}",
            summary.files,
            summary.bytes,
            target.display()
        )?;
        return Ok(());
    }

    let (name, version) = manifest.require_identity()?;
    let destination = parsed
        .filename
        .unwrap_or_else(|| root.join(archive::tarball_file_name(name, version)));
    let selection = select_files(&root, &manifest, &options)?;
    logging::trace_pack!(
        "packing {} files into {}",
        selection.len(),
        destination.display()
    );
    let summary = archive::create_tarball(&root, &selection, &destination)?;
    writeln!(
        stdout,
        "wrote {} ({} files, {} bytes)",
        destination.display(),
        summary.entries,
        summary.bytes
    )?;
    Ok(())
}

fn verbosity_config(parsed: &ParsedArgs) -> Result<VerbosityConfig, CliError> {
    let mut config = VerbosityConfig::from_verbose_level(parsed.verbose);
    for list in &parsed.debug {
        config
            .apply_debug_list(list)
            .map_err(|message| CliError::Usage(format!("--debug: {message}")))?;
    }
    Ok(config)
}

fn print_selection<Out: Write>(
    selection: &SelectionResult,
    stdout: &mut Out,
) -> Result<(), CliError> {
    for path in selection.iter() {
        writeln!(stdout, "{}", display_path(path))?;
    }
    Ok(())
}

fn display_path(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
