use crate::state::AppState;
use async_trait::async_trait;
use axum::response::Response;
use bytes::Bytes;
use portside_common::config::Config;
use portside_domain::container::{ContainerEngine, ContainerSummary, EngineError};
use portside_domain::icon::{FetchError, IconSource};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[derive(Default)]
pub struct FakeEngine {
    pub containers: Vec<ContainerSummary>,
    pub started: Mutex<Vec<String>>,
    pub fail_with: Option<String>,
}

impl FakeEngine {
    /// `(id, comma-separated names, state)`
    pub fn with(containers: &[(&str, &str, &str)]) -> Self {
        Self {
            containers: containers
                .iter()
                .map(|(id, names, state)| ContainerSummary {
                    id: id.to_string(),
                    names: names.split(',').map(str::to_string).collect(),
                    state: state.to_string(),
                    status: format!("{} for a while", state),
                })
                .collect(),
            ..Default::default()
        }
    }

    fn check(&self, id: &str) -> Result<(), EngineError> {
        if let Some(reason) = &self.fail_with {
            return Err(EngineError::Request(reason.clone()));
        }
        if self.containers.iter().any(|c| c.id == id) {
            Ok(())
        } else {
            Err(EngineError::NotFound(id.to_string()))
        }
    }
}

#[async_trait]
impl ContainerEngine for FakeEngine {
    async fn list(&self, _all: bool) -> Result<Vec<ContainerSummary>, EngineError> {
        if let Some(reason) = &self.fail_with {
            return Err(EngineError::Request(reason.clone()));
        }
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
        self.check(id)?;
        self.started.lock().unwrap().push(id.to_string());
        Ok(())
    }

    async fn stop(&self, id: &str) -> Result<(), EngineError> {
        self.check(id)
    }
}

#[derive(Default)]
pub struct FakeSource {
    pub bodies: HashMap<String, Bytes>,
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
        Ok(self.bodies.contains_key(url))
    }
}

pub struct TestApp {
    pub tmp: TempDir,
    pub engine: Arc<FakeEngine>,
    pub state: AppState,
}

pub fn app(engine: FakeEngine, source: FakeSource) -> TestApp {
    let tmp = TempDir::new().unwrap();
    let mut config = <Config as clap::Parser>::parse_from(["portsided"]);
    config.public_dir = tmp.path().to_path_buf();
    config.icon_repository = "https://icons.example.com".to_string();

    let engine = Arc::new(engine);
    let state = AppState::new(&config, engine.clone(), Arc::new(source));
    TestApp { tmp, engine, state }
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
