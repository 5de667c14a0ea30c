use thiserror::Error;

use crate::report::ReportKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("confidence {value} exceeds the fixed-point scale of 10000")]
    InvalidConfidence { value: u16 },

    #[error("no report with id {id}")]
    NotFound { id: u64 },

    #[error("report {id} is not a {expected} report")]
    WrongReportKind { id: u64, expected: ReportKind },

    #[error("caller is not the required reporter")]
    Unauthorized,

    #[error("reports {lost_id} and {found_id} are not a matched pair")]
    NotMatched { lost_id: u64, found_id: u64 },

    #[error("report {id} has already left the open state")]
    AlreadyMatched { id: u64 },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
