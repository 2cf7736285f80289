use thiserror::Error;

const FOREIGN_KEY_VIOLATION: &str = "23503";
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Database error: {0}")]
    Sqlx(#[source] sqlx::Error),

    #[error("Custom error: {0}")]
    Custom(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = err {
            return RepositoryError::NotFound;
        }

        if let sqlx::Error::Database(db_err) = &err {
            let code = db_err.code().map(|c| c.into_owned());
            match code.as_deref() {
                Some(FOREIGN_KEY_VIOLATION) => {
                    return RepositoryError::ForeignKey(
                        db_err.constraint().unwrap_or("unknown").to_string(),
                    );
                }
                Some(UNIQUE_VIOLATION) => {
                    return RepositoryError::Conflict(db_err.message().to_string());
                }
                _ => {}
            }
        }

        RepositoryError::Sqlx(err)
    }
}
