//! NATS-backed inventory client
//!
//! Production adapter resolving inventory references over NATS request/reply.
//! Each provider's inventory service listens on a provider-scoped subject per
//! object kind (see [`subjects`](crate::inventory::subjects)) and answers
//! with a snapshot record envelope.

use async_nats::{Client, ConnectOptions};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{Ref, RefKind, SourceProvider};
use crate::inventory::subjects::FindSubject;
use crate::inventory::{Host, InventoryClient, InventoryError, InventoryResult, Vm};

/// Configuration for the inventory NATS connection
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    /// NATS server URLs
    pub servers: Vec<String>,
    /// Client name
    pub name: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Request timeout
    pub request_timeout: Duration,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            servers: vec!["nats://localhost:4222".to_string()],
            name: "cim-migration".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(5),
        }
    }
}

/// Resolve request sent to an inventory service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindRequest {
    /// Provider-side identifier to resolve
    pub id: String,
}

/// Snapshot record envelope returned by an inventory service
///
/// `object` is `None` when the reference does not resolve in the snapshot at
/// `revision`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord<T> {
    /// Snapshot revision the answer was taken from
    pub revision: u64,
    /// When the service produced the answer
    pub retrieved_at: DateTime<Utc>,
    /// The resolved object, absent when not found
    pub object: Option<T>,
}

/// Inventory client resolving references over NATS request/reply
#[derive(Clone)]
pub struct NatsInventoryClient {
    client: Client,
    provider: Uuid,
}

impl NatsInventoryClient {
    /// Connect to the inventory service for the given source provider
    pub async fn connect(
        config: InventoryConfig,
        provider: &SourceProvider,
    ) -> InventoryResult<Self> {
        let connect_options = ConnectOptions::new()
            .name(&config.name)
            .connection_timeout(config.connect_timeout)
            .request_timeout(Some(config.request_timeout));

        let client = async_nats::connect_with_options(config.servers.join(","), connect_options)
            .await
            .map_err(|e| InventoryError::Connection(e.to_string()))?;

        info!(
            "Connected to inventory for provider {} ({}) at {:?}",
            provider.name, provider.kind, config.servers
        );

        Ok(Self {
            client,
            provider: provider.uid,
        })
    }

    /// Resolve one reference against the provider's snapshot
    async fn find<T>(&self, kind: RefKind, id: &str) -> InventoryResult<T>
    where
        T: DeserializeOwned,
    {
        let subject = FindSubject::new(self.provider, kind).to_string();
        let payload = serde_json::to_vec(&FindRequest { id: id.to_string() })?;

        let response = self
            .client
            .request(subject.clone(), payload.into())
            .await
            .map_err(|e| InventoryError::Request(e.to_string()))?;

        let record: InventoryRecord<T> = serde_json::from_slice(&response.payload)
            .map_err(|e| InventoryError::Deserialization(e.to_string()))?;

        debug!(
            "Resolved {} {} against snapshot revision {} on {}",
            kind, id, record.revision, subject
        );

        record.object.ok_or_else(|| InventoryError::NotFound {
            kind,
            id: id.to_string(),
        })
    }

    /// Get the underlying NATS client for advanced operations
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl InventoryClient for NatsInventoryClient {
    async fn find_vm(&self, vm_ref: &Ref) -> InventoryResult<Vm> {
        self.find(RefKind::Vm, &vm_ref.id).await
    }

    async fn find_host(&self, host_ref: &Ref) -> InventoryResult<Host> {
        self.find(RefKind::Host, &host_ref.id).await
    }
}
