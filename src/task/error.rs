use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Invalid due date '{input}': expected YYYY-MM-DD")]
    InvalidDueDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, TaskError>;
