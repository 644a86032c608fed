//! Scoped database transaction.

use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::domain::foundation::DomainError;

use super::errors::storage_failure;

/// A transaction that commits only when asked to.
///
/// Dropping a `UnitOfWork` without calling [`UnitOfWork::commit`] rolls the
/// transaction back. This covers early returns via `?` as well as request
/// futures cancelled by a client disconnect or a timeout.
pub struct UnitOfWork {
    tx: Transaction<'static, Postgres>,
}

impl UnitOfWork {
    pub async fn begin(pool: &PgPool) -> Result<Self, DomainError> {
        let tx = pool
            .begin()
            .await
            .map_err(|e| storage_failure("begin transaction", e))?;
        Ok(Self { tx })
    }

    /// Connection bound to this transaction.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    pub async fn commit(self) -> Result<(), DomainError> {
        self.tx
            .commit()
            .await
            .map_err(|e| storage_failure("commit transaction", e))
    }
}
