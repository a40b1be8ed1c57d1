use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Failed to parse annotations JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("{kind} reports cannot take input from {input}")]
    UnsupportedInput {
        kind: &'static str,
        input: &'static str,
    },

    #[error(transparent)]
    Parser(#[from] ParserError),
}

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Required file not found: {0}")]
    MissingFile(PathBuf),

    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: &'static str,
        source: std::io::Error,
    },

    #[error("{tool} failed with exit code {code}: {stderr}")]
    NonZeroExit {
        tool: &'static str,
        code: i32,
        stderr: String,
    },
}

#[derive(Error, Debug)]
pub enum BitbucketError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server rejected request to {url} with HTTP {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },
}

impl BitbucketError {
    /// True when the server answered, as opposed to the request never completing.
    pub fn is_rejection(&self) -> bool {
        matches!(self, BitbucketError::Status { .. })
    }
}
