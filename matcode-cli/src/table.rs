//! Material tables: CSV and spreadsheet input, CSV output.

use std::fs;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use matcode_types::MaterialRecord;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::TableError;

/// Column names tried, in order, when the requested one is missing.
pub const DESCRIPTION_CANDIDATES: [&str; 5] = ["descricao", "descrição", "desc", "material", "produto"];

/// Suffix appended to the input stem for the output file.
pub const OUTPUT_SUFFIX: &str = "_completo";

/// File-name fragments that mark generated tables.
const GENERATED_MARKERS: [&str; 2] = [OUTPUT_SUFFIX, "_com_codigos"];

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Spreadsheet,
}

impl TableFormat {
    /// Format implied by the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "csv" => Ok(TableFormat::Csv),
            "xlsx" | "xls" => Ok(TableFormat::Spreadsheet),
            _ => Err(TableError::UnsupportedFormat(ext)),
        }
    }
}

/// A header row plus data rows.
///
/// Headers are trimmed; data cells are kept exactly as read. Every record of
/// the source is a row, including ones whose cells are all empty, so row
/// positions match the input. Only lines with no content at all are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table from already split cells.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Reads a `.csv`, `.xlsx` or `.xls` file.
    ///
    /// # Errors
    ///
    /// [`TableError::FileNotFound`] for a missing path,
    /// [`TableError::UnsupportedFormat`] for other extensions, and the
    /// underlying parser error otherwise.
    pub fn read(path: &Path) -> Result<Self, TableError> {
        if !path.exists() {
            return Err(TableError::FileNotFound(path.display().to_string()));
        }

        let table = match TableFormat::from_path(path)? {
            TableFormat::Csv => Self::read_csv(path)?,
            TableFormat::Spreadsheet => Self::read_spreadsheet(path)?,
        };

        debug!(
            path = %path.display(),
            columns = table.headers.len(),
            rows = table.rows.len(),
            "table read"
        );
        Ok(table)
    }

    fn read_csv(path: &Path) -> Result<Self, TableError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        // byte records: legacy exports are often Latin-1, decode lossily
        let headers: Vec<String> = reader
            .byte_headers()?
            .iter()
            .map(|cell| cell_text(cell).trim().to_owned())
            .collect();
        if headers.iter().all(String::is_empty) {
            return Err(TableError::NoHeader);
        }

        // the reader already skips empty lines
        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.byte_records() {
            rows.push(record?.iter().map(cell_text).collect());
        }

        Ok(Self { headers, rows })
    }

    fn read_spreadsheet(path: &Path) -> Result<Self, TableError> {
        let mut workbook = open_workbook_auto(path)?;

        let Some(sheet) = workbook.sheet_names().first().cloned() else {
            return Err(TableError::NoHeader);
        };
        let range = workbook.worksheet_range(&sheet)?;

        let mut cells = range.rows();
        let headers: Vec<String> = cells
            .next()
            .ok_or(TableError::NoHeader)?
            .iter()
            .map(|cell| cell.to_string().trim().to_owned())
            .collect();

        let rows = cells
            .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect();

        Ok(Self { headers, rows })
    }

    /// Header names, trimmed.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Finds the description column.
    ///
    /// `requested` is matched case-insensitively first; failing that, the
    /// first of [`DESCRIPTION_CANDIDATES`] present wins.
    ///
    /// # Errors
    ///
    /// [`TableError::ColumnNotFound`] listing the available headers.
    pub fn resolve_column(&self, requested: &str) -> Result<usize, TableError> {
        let position = |wanted: &str| {
            let wanted = wanted.to_lowercase();
            self.headers.iter().position(|h| h.to_lowercase() == wanted)
        };

        if let Some(index) = position(requested) {
            return Ok(index);
        }

        if let Some(index) = DESCRIPTION_CANDIDATES.iter().find_map(|&c| position(c)) {
            warn!(
                requested,
                detected = %self.headers[index],
                "description column not found, using detected column"
            );
            return Ok(index);
        }

        Err(TableError::ColumnNotFound {
            requested: requested.to_owned(),
            available: self.headers.clone(),
        })
    }

    /// Cells of one column; empty or missing cells are `None`.
    pub fn column(&self, index: usize) -> Vec<Option<&str>> {
        self.rows
            .iter()
            .map(|row| row.get(index).map(String::as_str).filter(|s| !s.is_empty()))
            .collect()
    }
}

fn cell_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// `<dir>/<stem>_completo.csv` next to `input`.
pub fn output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.csv"))
}

/// Returns `true` for a file name that could be an input table.
pub fn is_candidate(file_name: &str) -> bool {
    !file_name.starts_with('~')
        && !GENERATED_MARKERS.iter().any(|m| file_name.contains(m))
        && TableFormat::from_path(Path::new(file_name)).is_ok()
}

/// Input tables in `dir`, sorted by name.
///
/// Office lock files (`~...`) and generated tables are skipped.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, TableError> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry.file_name().to_str().is_some_and(is_candidate) {
            found.push(entry.path());
        }
    }
    found.sort();
    Ok(found)
}

#[derive(Serialize)]
struct OutputRow<'a> {
    descricao: &'a str,
    categoria: &'a str,
    unidade: &'a str,
    nome: &'a str,
    codigo: &'a str,
}

impl<'a> From<&'a MaterialRecord> for OutputRow<'a> {
    fn from(record: &'a MaterialRecord) -> Self {
        Self {
            descricao: record.description(),
            categoria: record.category().label(),
            unidade: record.unit().label(),
            nome: record.name(),
            codigo: record.code(),
        }
    }
}

/// Writes `records` as CSV with columns
/// `descricao, categoria, unidade, nome, codigo`.
///
/// # Errors
///
/// [`TableError::Csv`] or [`TableError::Io`] if the file cannot be written.
pub fn write_records(path: &Path, records: &[MaterialRecord]) -> Result<(), TableError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(OutputRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}
