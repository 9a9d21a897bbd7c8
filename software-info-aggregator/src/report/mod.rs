//! Snapshot persistence and report rendering.
//!
//! Publishing happens only after the full table is assembled: a dated CSV
//! snapshot lands in the history directory, then the README report is
//! rendered over the previous one. A second run on the same day overwrites
//! that day's snapshot, which is accepted behavior.

mod error;
mod renderer;

pub use error::ReportError;
pub use renderer::{create_handlebars_registry, ReportRenderer};

use crate::table::SummaryTable;
use std::fs;
use std::path::Path;
use tracing::info;

/// Template file name, resolved against the output root.
pub const TEMPLATE_FILE: &str = "readme_template.md.hbs";

/// Rendered report file name.
pub const REPORT_FILE: &str = "README.md";

/// Snapshot history directory name.
pub const HISTORY_DIR: &str = "hist";

/// Persists the dated CSV snapshot and renders the report.
///
/// # Arguments
///
/// * `renderer` - Configured report renderer
/// * `table` - Fully assembled summary table
/// * `output_root` - Directory holding the template, the history directory
///   and the rendered report
/// * `date` - Run date in `YYYY-MM-DD` form; names the snapshot and fills
///   the report's "last updated" binding
///
/// # Errors
///
/// Returns [`ReportError`] on any filesystem or rendering failure.
pub fn publish(
    renderer: &ReportRenderer,
    table: &SummaryTable,
    output_root: &Path,
    date: &str,
) -> Result<(), ReportError> {
    let history_dir = output_root.join(HISTORY_DIR);
    fs::create_dir_all(&history_dir).map_err(|e| ReportError::Io {
        path: history_dir.display().to_string(),
        source: e,
    })?;

    let snapshot_path = history_dir.join(format!("{date}.csv"));
    fs::write(&snapshot_path, table.to_csv()).map_err(|e| ReportError::Io {
        path: snapshot_path.display().to_string(),
        source: e,
    })?;
    info!(path = %snapshot_path.display(), rows = table.len(), "Wrote snapshot");

    let template_path = output_root.join(TEMPLATE_FILE);
    let template = fs::read_to_string(&template_path).map_err(|e| ReportError::Io {
        path: template_path.display().to_string(),
        source: e,
    })?;

    let content = renderer.render_report(&template, &table.to_markdown(), date)?;

    let report_path = output_root.join(REPORT_FILE);
    fs::write(&report_path, content).map_err(|e| ReportError::Io {
        path: report_path.display().to_string(),
        source: e,
    })?;
    info!(path = %report_path.display(), "Rendered report");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::BasicInfo;
    use crate::table::RepoRecord;
    use tempfile::TempDir;

    fn sample_table() -> SummaryTable {
        SummaryTable::assemble(vec![RepoRecord {
            basic: BasicInfo {
                name: "[foo](http://x/foo)".to_string(),
                stars: 10,
                forks: 2,
            },
            package: None,
            zenodo: None,
        }])
    }

    fn write_template(root: &Path) {
        fs::write(
            root.join(TEMPLATE_FILE),
            "# Software\n\n{{software_info_summary_table}}\nLast updated: {{last_updated}}\n",
        )
        .unwrap();
    }

    #[test]
    fn publish_writes_snapshot_and_report() {
        let temp = TempDir::new().unwrap();
        write_template(temp.path());

        publish(
            &ReportRenderer::new(),
            &sample_table(),
            temp.path(),
            "2026-08-06",
        )
        .unwrap();

        let csv = fs::read_to_string(temp.path().join("hist/2026-08-06.csv")).unwrap();
        assert!(csv.starts_with(",Name,Stars,"));
        assert!(csv.contains("0,[foo](http://x/foo),10,2,-,-,-,-"));

        let report = fs::read_to_string(temp.path().join(REPORT_FILE)).unwrap();
        assert!(report.contains("| [foo](http://x/foo) | 10 | 2 | - | - | - | - |"));
        assert!(report.contains("Last updated: 2026-08-06"));
    }

    #[test]
    fn same_day_rerun_overwrites_snapshot() {
        let temp = TempDir::new().unwrap();
        write_template(temp.path());
        let renderer = ReportRenderer::new();

        publish(&renderer, &sample_table(), temp.path(), "2026-08-06").unwrap();
        publish(&renderer, &SummaryTable::assemble(Vec::new()), temp.path(), "2026-08-06").unwrap();

        let csv = fs::read_to_string(temp.path().join("hist/2026-08-06.csv")).unwrap();
        // Only the header survives from the second, empty run.
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn missing_template_is_an_io_error() {
        let temp = TempDir::new().unwrap();

        let result = publish(
            &ReportRenderer::new(),
            &sample_table(),
            temp.path(),
            "2026-08-06",
        );

        assert!(matches!(result, Err(ReportError::Io { .. })));
    }
}
