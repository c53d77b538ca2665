use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntrospectError {
    #[error("connect to database: {0}")]
    Connect(#[source] tokio_postgres::Error),
    #[error("catalog query failed: {0}")]
    Query(#[from] tokio_postgres::Error),
}
