//! Application orchestrator.
//! Initializes logging, resolves the editor, builds the source set, hands
//! the list to the editor, then runs the filter / cycle-break / rename
//! pipeline and prints a summary.

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::Args;
use crate::editor::{self, EditorConfig};
use crate::engine::{apply_renames, break_cycles, remove_unedited};
use crate::logging::init_tracing;
use crate::output as out;
use crate::set::{build_destination_set, build_source_set};

/// Run the CLI application.
///
/// Setup failures (bad source path, duplicate source, temp file, editor
/// spawn) and cycle-break failures abort with an error; individual rename
/// failures are reported per pair and do not affect the exit status.
pub fn run(args: Args) -> Result<()> {
    let config = args.to_config();

    // Keep the guard alive until exit so file logs are flushed.
    let _guard = init_tracing(&config.log_level, config.log_file.as_deref(), config.json)?;
    debug!(?args, "starting edmv");

    let editor_config = EditorConfig::resolve(args.editor.as_deref());

    let mut sources = build_source_set(&args.paths, config.resolve_paths)?;

    // The destination candidates start out as the source names; the user
    // edits them in place.
    let list_file = editor::write_list_to_tempfile(&sources)?;
    editor::run_editor(&editor_config, list_file.path())?;
    let edited = editor::read_edited_list(list_file.path())?;

    let mut destinations = build_destination_set(&edited, sources.len())?;

    let missing = sources.len().saturating_sub(destinations.len());
    if missing > 0 {
        out::print_warn(&format!(
            "{missing} source(s) have no destination line and will not be renamed"
        ));
    }

    let unchanged = remove_unedited(&sources, &mut destinations);
    break_cycles(&mut sources, &destinations, config.dry_run)?;
    let report = apply_renames(&sources, &destinations, &config);

    info!(
        renamed = report.renamed,
        unchanged,
        missing,
        failed = report.failed,
        "batch complete"
    );

    if report.failed > 0 {
        out::print_warn(&format!(
            "completed with errors: {} renamed, {} failed",
            report.renamed, report.failed
        ));
    } else if config.verbose || config.dry_run {
        out::print_info(&format!(
            "{} renamed, {} unchanged",
            report.renamed,
            unchanged + missing
        ));
    }

    Ok(())
}
