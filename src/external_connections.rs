use sqlx::PgConnection;
use std::future::Future;

/// A live database connection handed out by [ExternalConnectivity]. Driven adapters borrow
/// the underlying connection for the duration of a query.
pub trait ConnectionHandle {
    fn borrow_connection(&mut self) -> &mut PgConnection;
}

/// Owns the clients used to talk to systems outside this service. Business logic only ever
/// sees this trait, so driven adapters can be swapped without touching the domain.
pub trait ExternalConnectivity: Send + Sync {
    type DbHandle<'cxn_borrow>: ConnectionHandle + Send
    where
        Self: 'cxn_borrow;

    /// Acquires a database connection, waiting for one to free up if the pool is exhausted
    fn database_cxn(
        &mut self,
    ) -> impl Future<Output = Result<Self::DbHandle<'_>, anyhow::Error>> + Send;
}
