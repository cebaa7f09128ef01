use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum RelmatError {
    #[error("Invalid edge line {line_no}: '{line}'")]
    #[diagnostic(
        code(relmat::invalid_edge_line),
        help("usage: relmat <matrices|entropy> <edges.csv|\"1,2\\n1,3...\"> <root_id>")
    )]
    InvalidEdgeLine { line_no: usize, line: String },

    #[error("Non-integer vertex id in line {line_no}: '{line}'")]
    #[diagnostic(
        code(relmat::non_integer_vertex),
        help("usage: relmat <matrices|entropy> <edges.csv|\"1,2\\n1,3...\"> <root_id>")
    )]
    NonIntegerVertex { line_no: usize, line: String },

    #[error("Root id is not an integer: '{token}'")]
    #[diagnostic(
        code(relmat::invalid_root),
        help("usage: relmat <matrices|entropy> <edges.csv|\"1,2\\n1,3...\"> <root_id>")
    )]
    InvalidRoot { token: String },

    #[error("Default input file not found: {}", path.display())]
    #[diagnostic(
        code(relmat::input_not_found),
        help("usage: relmat <matrices|entropy> <edges.csv|\"1,2\\n1,3...\"> <root_id>")
    )]
    InputNotFound { path: PathBuf },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(relmat::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(relmat::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(relmat::json))]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RelmatError>;
