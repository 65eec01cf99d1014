//! Core ConnectionManager struct and connection methods.

use std::time::Duration;

use mongodb::Client;
use mongodb::bson::{Document, doc};
use tokio::runtime::Runtime;

use crate::config::ConnectionConfig;
use crate::error::{Error, Result};
use crate::model::Model;
use crate::schema::Schema;

/// Runs store operations to completion on a private Tokio runtime
pub struct ConnectionManager {
    pub(crate) runtime: Runtime,
}

impl ConnectionManager {
    /// Create a new connection manager
    pub fn new() -> Result<Self> {
        let runtime = Runtime::new()?;
        Ok(Self { runtime })
    }

    /// Get a handle to the Tokio runtime for spawning parallel tasks
    pub fn runtime_handle(&self) -> tokio::runtime::Handle {
        self.runtime.handle().clone()
    }

    /// Connect and ping, giving up after the configured timeout (runs in Tokio runtime)
    pub fn connect(&self, config: &ConnectionConfig) -> Result<Client> {
        self.connect_within(&config.uri, config.connect_timeout())
    }

    /// Test connectivity with an explicit timeout (runs in Tokio runtime)
    pub fn test_connection(&self, config: &ConnectionConfig, timeout: Duration) -> Result<()> {
        self.connect_within(&config.uri, timeout).map(|_| ())
    }

    fn connect_within(&self, uri: &str, timeout: Duration) -> Result<Client> {
        let uri = uri.to_string();
        self.runtime.block_on(async {
            let fut = async {
                let client = Client::with_uri_str(&uri).await?;
                client.database("admin").run_command(doc! { "ping": 1 }).await?;
                Ok::<_, mongodb::error::Error>(client)
            };

            match tokio::time::timeout(timeout, fut).await {
                Ok(result) => result.map_err(Error::from),
                Err(_) => Err(Error::Timeout("Connection timed out".to_string())),
            }
        })
    }

    /// Bind `schema` to a collection on `client`.
    pub(crate) fn model(
        client: &Client,
        database: &str,
        collection: &str,
        schema: &Schema,
    ) -> Model<mongodb::Collection<Document>> {
        let coll = client.database(database).collection::<Document>(collection);
        Model::new(schema.clone(), coll)
    }
}
