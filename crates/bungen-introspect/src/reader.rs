use bungen_core::ColumnInfo;
use tokio_postgres::{Client, NoTls};

use crate::error::IntrospectError;

// Catalog values are cast to text in SQL so the driver always decodes plain
// strings; nothing downstream sees a driver-level representation.
const LIST_TABLES: &str = "SELECT table_name::text \
     FROM information_schema.tables \
     WHERE table_schema = $1 \
     ORDER BY table_name";

const LIST_COLUMNS: &str = "SELECT column_name::text, data_type::text \
     FROM information_schema.columns \
     WHERE table_name = $1 \
     ORDER BY ordinal_position";

/// Read-only view over a database's `information_schema`.
///
/// Holds the single connection for a run; all queries execute one at a time.
pub struct SchemaReader {
    client: Client,
}

impl SchemaReader {
    /// Open a connection and drive it on a background task.
    pub async fn connect(connection_string: &str) -> Result<Self, IntrospectError> {
        let (client, connection) = tokio_postgres::connect(connection_string, NoTls)
            .await
            .map_err(IntrospectError::Connect)?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                eprintln!("connection error: {e}");
            }
        });

        Ok(Self { client })
    }

    /// Verify the connection is alive with a trivial query.
    pub async fn ping(&self) -> Result<(), IntrospectError> {
        self.client.batch_execute("SELECT 1").await?;
        Ok(())
    }

    /// All table names visible in `schema`, ordered by name.
    pub async fn list_tables(&self, schema: &str) -> Result<Vec<String>, IntrospectError> {
        let rows = self.client.query(LIST_TABLES, &[&schema]).await?;
        Ok(rows.iter().map(|row| row.get::<_, String>(0)).collect())
    }

    /// Columns of `table_name` in ordinal order.
    ///
    /// The table's existence is not validated; an absent table yields an
    /// empty vector, not an error.
    pub async fn list_columns(
        &self,
        table_name: &str,
    ) -> Result<Vec<ColumnInfo>, IntrospectError> {
        let rows = self.client.query(LIST_COLUMNS, &[&table_name]).await?;
        Ok(rows
            .iter()
            .map(|row| ColumnInfo::new(row.get::<_, String>(0), row.get::<_, String>(1)))
            .collect())
    }
}
