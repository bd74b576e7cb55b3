use super::domain::DomainKey;
use super::input::{CoverageEstimates, DiagnosticInput, DomainScores};
use super::scoring::{clamp_coverage, clamp_score};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum ScoreSheetImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownDomain { row: usize, value: String },
    InvalidNumber { row: usize, column: &'static str, value: String },
    DuplicateDomain { row: usize, domain: DomainKey },
}

impl std::fmt::Display for ScoreSheetImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreSheetImportError::Io(err) => write!(f, "failed to read score sheet: {}", err),
            ScoreSheetImportError::Csv(err) => write!(f, "invalid score sheet CSV: {}", err),
            ScoreSheetImportError::UnknownDomain { row, value } => {
                write!(f, "row {}: '{}' is not a known capability domain", row, value)
            }
            ScoreSheetImportError::InvalidNumber { row, column, value } => {
                write!(f, "row {}: {} '{}' is not a number", row, column, value)
            }
            ScoreSheetImportError::DuplicateDomain { row, domain } => {
                write!(f, "row {}: domain {} appears more than once", row, domain)
            }
        }
    }
}

impl std::error::Error for ScoreSheetImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScoreSheetImportError::Io(err) => Some(err),
            ScoreSheetImportError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScoreSheetImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ScoreSheetImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Scores and coverage parsed from a `Domain,Score,Coverage` sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreSheet {
    pub scores: DomainScores,
    pub coverage: Option<CoverageEstimates>,
}

impl ScoreSheet {
    /// Attach the sheet to a submission for the named organisation.
    pub fn into_input(self, org_name: impl Into<String>) -> DiagnosticInput {
        let input = DiagnosticInput::new(org_name, self.scores);
        match self.coverage {
            Some(coverage) => input.with_coverage(coverage),
            None => input,
        }
    }
}

/// Hydrates submissions from spreadsheet exports of a team scoring session.
pub struct ScoreSheetImporter;

impl ScoreSheetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ScoreSheet, ScoreSheetImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ScoreSheet, ScoreSheetImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut sheet = ScoreSheet::default();
        let mut coverage = CoverageEstimates::default();
        let mut seen = HashSet::new();

        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            // Quoted cells may span lines, so report the line the record starts on.
            let row_number = record
                .position()
                .map(|position| position.line() as usize)
                .unwrap_or(index + 2);
            let row: ScoreRow = record.deserialize(Some(&headers))?;

            let domain = DomainKey::parse(&row.domain).ok_or_else(|| {
                ScoreSheetImportError::UnknownDomain {
                    row: row_number,
                    value: row.domain.clone(),
                }
            })?;
            if !seen.insert(domain) {
                return Err(ScoreSheetImportError::DuplicateDomain {
                    row: row_number,
                    domain,
                });
            }

            let score = parse_number(row.score.as_deref(), row_number, "score")?
                .map(|value| clamp_score(value.round() as i32))
                .unwrap_or(0);
            sheet.scores.set(domain, score);

            let estimate = parse_number(row.coverage.as_deref(), row_number, "coverage")?
                .and_then(clamp_coverage);
            coverage.set(domain, estimate);
        }

        if !coverage.is_empty() {
            sheet.coverage = Some(coverage);
        }

        Ok(sheet)
    }
}

#[derive(Debug, Deserialize)]
struct ScoreRow {
    #[serde(rename = "Domain")]
    domain: String,
    #[serde(rename = "Score", default, deserialize_with = "empty_string_as_none")]
    score: Option<String>,
    #[serde(rename = "Coverage", default, deserialize_with = "empty_string_as_none")]
    coverage: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_number(
    raw: Option<&str>,
    row: usize,
    column: &'static str,
) -> Result<Option<f64>, ScoreSheetImportError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let trimmed = raw.trim().trim_end_matches('%').trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Some)
        .ok_or_else(|| ScoreSheetImportError::InvalidNumber {
            row,
            column,
            value: raw.to_string(),
        })
}
