use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid selector `{0}`")]
    InvalidSelector(String),

    #[error("No element matches selector `{0}`")]
    NoMatch(String),

    #[error("Element `{selector}` has no handler for {kind} events")]
    NoHandler { selector: String, kind: String },
}
