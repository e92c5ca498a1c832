//! Rendering of the per-file diagnostic stream.

use annolint_error::Result;
use serde_json::json;

use crate::FileReport;

/// Render reports as flake8-style text, one finding per line.
///
/// Columns are printed 1-indexed for editor compatibility even though the
/// model stores them 0-indexed.
pub fn render_text(reports: &[FileReport]) -> String {
    let mut lines = Vec::new();

    for report in reports {
        match &report.result {
            Ok(diagnostics) => {
                for diagnostic in diagnostics {
                    lines.push(format!(
                        "{}:{}:{}: {}",
                        report.path,
                        diagnostic.position.line,
                        diagnostic.position.column + 1,
                        diagnostic
                    ));
                }
            }
            Err(err) => lines.push(format!("{}: error: {}", report.path, err)),
        }
    }

    lines.join("\n")
}

/// Render reports as one JSON object per line, keeping the model's raw
/// 0-indexed columns.
pub fn render_json(reports: &[FileReport]) -> Result<String> {
    let mut lines = Vec::new();

    for report in reports {
        match &report.result {
            Ok(diagnostics) => {
                for diagnostic in diagnostics {
                    let mut record = serde_json::to_value(diagnostic)
                        .map_err(|e| annolint_error::Error::unexpected(e.to_string()))?;
                    record["path"] = json!(report.path);
                    record["message"] = json!(diagnostic.message());
                    lines.push(record.to_string());
                }
            }
            Err(err) => {
                lines.push(
                    json!({
                        "path": report.path,
                        "error": err.to_string(),
                    })
                    .to_string(),
                );
            }
        }
    }

    Ok(lines.join("\n"))
}
