pub mod csv;
pub mod report;
pub mod storage;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::{
    consts::consts::EXPORT_DATE_FORMAT,
    model::{lead::Lead, user::User},
};

use self::{csv::to_csv, report::ReportSnapshot, storage::StorageError};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unable to serialize export: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unable to store export: {0}")]
    Storage(#[from] StorageError),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// A snapshot of in-memory records, ready to be written as a download
#[derive(Clone, Debug, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub contents: String,
}

pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8;";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// `<prefix>-YYYY-MM-DD.<extension>`
pub fn export_file_name(prefix: &str, date: NaiveDate, extension: &str) -> String {
    format!(
        "{}-{}.{}",
        prefix,
        date.format(EXPORT_DATE_FORMAT),
        extension
    )
}

pub fn leads_csv(leads: &[Lead], date: NaiveDate) -> ExportFile {
    ExportFile {
        file_name: export_file_name("leads-export", date, "csv"),
        content_type: CSV_CONTENT_TYPE,
        contents: to_csv(leads),
    }
}

pub fn users_csv(users: &[User], date: NaiveDate) -> ExportFile {
    ExportFile {
        file_name: export_file_name("users-export", date, "csv"),
        content_type: CSV_CONTENT_TYPE,
        contents: to_csv(users),
    }
}

/// Pretty printed with two space indentation
pub fn json<T: Serialize>(prefix: &str, value: &T, date: NaiveDate) -> ExportResult<ExportFile> {
    Ok(ExportFile {
        file_name: export_file_name(prefix, date, "json"),
        content_type: JSON_CONTENT_TYPE,
        contents: serde_json::to_string_pretty(value)?,
    })
}

pub fn settings_json<T: Serialize>(settings: &T, date: NaiveDate) -> ExportResult<ExportFile> {
    json("system-settings", settings, date)
}

pub fn report_json(report: &ReportSnapshot) -> ExportResult<ExportFile> {
    json("comprehensive-reports", report, report.export_date)
}
