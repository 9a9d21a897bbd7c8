//! Summary table assembly and rendering.
//!
//! Extractor outputs stay typed (`Option`) until assembly; the `-`
//! placeholder is applied exactly once, here, never earlier. Rows are
//! sorted by stars descending with a stable sort, so ties retain merge
//! order, and the row index is reset to a dense zero-based sequence.

use crate::extract::{BasicInfo, PackageInfo};

/// Column names, in table order.
pub const COLUMNS: [&str; 7] = [
    "Name",
    "Stars",
    "Forks",
    "Package name",
    "Weekly downloads",
    "Monthly downloads",
    "Zenodo",
];

/// Placeholder for absent optional fields.
const PLACEHOLDER: &str = "-";

/// One repository's merged extractor outputs.
///
/// Basic info is always present; package and citation fields are
/// independent options (presence of one does not imply the other).
#[derive(Debug, Clone)]
pub struct RepoRecord {
    /// Always-present fields.
    pub basic: BasicInfo,

    /// Package fields, when a manifest declared a name.
    pub package: Option<PackageInfo>,

    /// Concatenated citation badges, when the README carried any.
    pub zenodo: Option<String>,
}

/// The normalized, sorted, placeholder-filled summary table.
#[derive(Debug, Clone)]
pub struct SummaryTable {
    rows: Vec<[String; 7]>,
}

impl SummaryTable {
    /// Assembles the table from merged records.
    ///
    /// Sorts by stars descending (stable), fills absent fields with the
    /// placeholder and assigns the dense zero-based row identity implied
    /// by row position.
    #[must_use]
    pub fn assemble(mut records: Vec<RepoRecord>) -> Self {
        records.sort_by(|a, b| b.basic.stars.cmp(&a.basic.stars));

        Self {
            rows: records.iter().map(record_cells).collect(),
        }
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Placeholder-filled display cells, in final row order.
    #[must_use]
    pub fn rows(&self) -> &[[String; 7]] {
        &self.rows
    }

    /// Renders the table as a markdown pipe table (no index column).
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("| {} |\n", COLUMNS.join(" | ")));
        out.push_str(&format!("|{}\n", "---|".repeat(COLUMNS.len())));
        for row in &self.rows {
            out.push_str(&format!("| {} |\n", row.join(" | ")));
        }

        out
    }

    /// Renders the table as CSV with a leading index column.
    ///
    /// The index column keeps an empty header cell, matching the snapshot
    /// format consumers of the history directory already parse.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = String::new();

        out.push(',');
        out.push_str(&COLUMNS.map(csv_field).join(","));
        out.push('\n');

        for (index, row) in self.rows.iter().enumerate() {
            out.push_str(&index.to_string());
            for cell in row {
                out.push(',');
                out.push_str(&csv_field(cell));
            }
            out.push('\n');
        }

        out
    }
}

/// Converts one record into display cells, applying the placeholder.
fn record_cells(record: &RepoRecord) -> [String; 7] {
    let (package_name, weekly, monthly) = match &record.package {
        Some(p) => (
            p.name.clone(),
            p.weekly_downloads.to_string(),
            p.monthly_downloads.to_string(),
        ),
        None => (
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
        ),
    };

    [
        record.basic.name.clone(),
        record.basic.stars.to_string(),
        record.basic.forks.to_string(),
        package_name,
        weekly,
        monthly,
        record.zenodo.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
    ]
}

/// Quotes a CSV field when it contains a delimiter, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
