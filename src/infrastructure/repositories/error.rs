use crate::domain::errors::DomainError;

// SQLSTATE values reported by MySQL.
const SQLSTATE_ACCESS_DENIED: &str = "28000";
const SQLSTATE_NO_SUCH_TABLE: &str = "42S02";

/// Maps sqlx failures onto the domain taxonomy. Anything that means "the
/// server could not be reached or used" becomes `Unavailable`.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => DomainError::Unavailable(err.to_string()),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some(SQLSTATE_ACCESS_DENIED) => DomainError::Unavailable(db_err.message().to_string()),
            Some(SQLSTATE_NO_SUCH_TABLE) => {
                DomainError::Persistence(format!("missing table: {}", db_err.message()))
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity_errors_are_unavailable() {
        let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(matches!(
            map_sqlx(sqlx::Error::Io(refused)),
            DomainError::Unavailable(_)
        ));
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Unavailable(_)
        ));
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolClosed),
            DomainError::Unavailable(_)
        ));
    }

    #[test]
    fn decoding_errors_are_persistence_failures() {
        let err = map_sqlx(sqlx::Error::ColumnNotFound("health_topics".into()));
        assert!(matches!(err, DomainError::Persistence(_)));
        assert!(err.is_source_failure());
    }
}
