use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration label '{label}': no price band defined")]
    InvalidConfiguration { label: String },

    #[error("No domain for category '{category}' in segment '{segment}'")]
    UnknownDomain { segment: String, category: String },

    #[error("Invalid domain table '{name}': {reason}")]
    InvalidDomain { name: String, reason: String },

    #[error("Header mismatch at column {position}: expected '{expected}', got '{actual}'")]
    SchemaMismatch {
        position: usize,
        expected: String,
        actual: String,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ForgeResult<T> = Result<T, ForgeError>;
