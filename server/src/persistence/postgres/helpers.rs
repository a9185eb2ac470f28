//! Mapping of `sqlx` errors onto [`PersistenceError`].

use crate::persistence::PersistenceError;

/// Errors that mean the store could not be reached right now, as opposed to
/// the statement itself failing.
fn is_unavailable(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
    )
}

pub fn query_error(err: sqlx::Error) -> PersistenceError {
    if is_unavailable(&err) {
        PersistenceError::Unavailable(err.to_string())
    } else {
        PersistenceError::Query(err.to_string())
    }
}

pub fn insert_error(err: sqlx::Error) -> PersistenceError {
    if is_unavailable(&err) {
        PersistenceError::Unavailable(err.to_string())
    } else {
        PersistenceError::Insert(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_unavailable() {
        let err = query_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, PersistenceError::Unavailable(_)));
        assert!(err.is_retryable());

        let err = insert_error(sqlx::Error::PoolClosed);
        assert!(matches!(err, PersistenceError::Unavailable(_)));
    }

    #[test]
    fn io_error_is_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
        assert!(matches!(
            query_error(sqlx::Error::Io(io)),
            PersistenceError::Unavailable(_)
        ));
    }

    #[test]
    fn row_not_found_keeps_driver_text() {
        let err = query_error(sqlx::Error::RowNotFound);
        assert_eq!(err, PersistenceError::Query(sqlx::Error::RowNotFound.to_string()));
        assert!(!err.is_retryable());

        let err = insert_error(sqlx::Error::Protocol("bad message".to_string()));
        assert!(matches!(err, PersistenceError::Insert(msg) if msg.contains("bad message")));
    }
}
