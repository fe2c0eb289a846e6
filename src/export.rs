use crate::error::SsqError;
use crate::types::DrawRecord;
use csv::Writer;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// Header names, identical in both formats and matching `DrawRecord::to_row`.
pub const COLUMNS: [&str; 8] = [
    "issue",
    "draw_date",
    "red_numbers",
    "blue_numbers",
    "sales",
    "pool_money",
    "prize_details",
    "details_link",
];

/// Output paths per format; `None` skips that format. Both `None` is a
/// legal no-op.
#[derive(Debug, Clone, Default)]
pub struct ExportTargets {
    pub xlsx: Option<PathBuf>,
    pub csv: Option<PathBuf>,
}

/// What `export_all` managed to write, and what it did not.
#[derive(Debug, Default)]
pub struct ExportOutcome {
    pub written: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, SsqError)>,
}

impl ExportOutcome {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Writes every configured target, independently: a failure on one target
/// never prevents attempting the other.
pub fn export_all(draws: &[DrawRecord], targets: &ExportTargets) -> ExportOutcome {
    let mut outcome = ExportOutcome::default();

    if let Some(path) = &targets.xlsx {
        match export_xlsx(draws, path) {
            Ok(()) => outcome.written.push(path.clone()),
            Err(e) => outcome.failures.push((path.clone(), e)),
        }
    }

    if let Some(path) = &targets.csv {
        match export_csv(draws, path) {
            Ok(()) => outcome.written.push(path.clone()),
            Err(e) => outcome.failures.push((path.clone(), e)),
        }
    }

    outcome
}

/// Writes header plus one line per record. Ball cells contain the outer
/// delimiter and come out quoted, so the text round-trips losslessly.
pub fn export_csv(draws: &[DrawRecord], path: &Path) -> Result<(), SsqError> {
    let csv_err = |source: csv::Error| SsqError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = Writer::from_path(path).map_err(csv_err)?;
    writer.write_record(COLUMNS).map_err(csv_err)?;
    for draw in draws {
        writer.write_record(draw.to_row()).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| csv_err(e.into()))?;
    Ok(())
}

/// One sheet, header row plus one row per record, all cells as text.
pub fn export_xlsx(draws: &[DrawRecord], path: &Path) -> Result<(), SsqError> {
    let xlsx_err = |source: rust_xlsxwriter::XlsxError| SsqError::Xlsx {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *name)
            .map_err(xlsx_err)?;
    }
    for (row, draw) in draws.iter().enumerate() {
        for (col, cell) in draw.to_row().iter().enumerate() {
            worksheet
                .write_string(row as u32 + 1, col as u16, cell.as_str())
                .map_err(xlsx_err)?;
        }
    }

    workbook.save(path).map_err(xlsx_err)?;
    Ok(())
}
