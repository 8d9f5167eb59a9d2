use sea_orm::{DbErr, SqlErr};

/// Whether the error came from a unique constraint or unique index rejecting a write
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
