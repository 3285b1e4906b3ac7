#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use portside_domain::container::{ContainerEngine, ContainerSummary, EngineError};
use portside_domain::icon::{FetchError, IconSource};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Engine with a fixed set of containers.
#[derive(Default)]
pub struct FakeEngine {
    pub containers: Vec<ContainerSummary>,
}

impl FakeEngine {
    pub fn with(containers: &[(&str, &str)]) -> Self {
        Self {
            containers: containers
                .iter()
                .map(|(id, name)| ContainerSummary {
                    id: id.to_string(),
                    names: vec![name.to_string()],
                    state: "running".to_string(),
                    status: "Up 1 minute".to_string(),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl ContainerEngine for FakeEngine {
    async fn list(&self, _all: bool) -> Result<Vec<ContainerSummary>, EngineError> {
        Ok(self.containers.clone())
    }

    async fn name_of(&self, id: &str) -> Result<Option<String>, EngineError> {
        Ok(self
            .containers
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name().to_string()))
    }

    async fn start(&self, id: &str) -> Result<(), EngineError> {
        self.name_of(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| EngineError::NotFound(id.to_string()))
    }

    async fn stop(&self, id: &str) -> Result<(), EngineError> {
        self.start(id).await
    }
}

/// Serves canned bodies; HEAD succeeds for `existing`, fails for `broken`.
#[derive(Default)]
pub struct FakeSource {
    pub bodies: HashMap<String, Bytes>,
    pub existing: HashSet<String>,
    pub broken: HashSet<String>,
    pub probed: Mutex<Vec<String>>,
}

#[async_trait]
impl IconSource for FakeSource {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        self.bodies.get(url).cloned().ok_or_else(|| FetchError::Status {
            url: url.to_string(),
            status: 404,
        })
    }

    async fn exists(&self, url: &str) -> Result<bool, FetchError> {
        self.probed.lock().unwrap().push(url.to_string());
        if self.broken.contains(url) {
            return Err(FetchError::Network {
                url: url.to_string(),
                reason: "connection reset".to_string(),
            });
        }
        Ok(self.existing.contains(url))
    }
}
