//! Docker engine adapter backed by `bollard`.

mod summary;

use async_trait::async_trait;
use bollard::errors::Error;
use bollard::query_parameters::{
    InspectContainerOptions, ListContainersOptions, StartContainerOptions, StopContainerOptions,
};
use bollard::Docker;
use portside_domain::container::{strip_name_prefix, ContainerEngine, ContainerSummary, EngineError};
use tracing::{debug, info};

#[derive(Clone)]
pub struct DockerEngine {
    docker: Docker,
}

impl DockerEngine {
    /// Connects through `DOCKER_HOST` or the platform's default socket.
    pub fn connect() -> Result<Self, EngineError> {
        let docker = Docker::connect_with_local_defaults().map_err(map_error)?;
        Ok(Self { docker })
    }

    pub fn with_client(docker: Docker) -> Self {
        Self { docker }
    }
}

#[async_trait]
impl ContainerEngine for DockerEngine {
    async fn list(&self, all: bool) -> Result<Vec<ContainerSummary>, EngineError> {
        let options = ListContainersOptions {
            all,
            ..Default::default()
        };
        let containers = self
            .docker
            .list_containers(Some(options))
            .await
            .map_err(map_error)?;
        debug!(count = containers.len(), "Listed containers");
        Ok(containers.into_iter().map(summary::from_engine).collect())
    }

    async fn name_of(&self, id: &str) -> Result<Option<String>, EngineError> {
        match self
            .docker
            .inspect_container(id, None::<InspectContainerOptions>)
            .await
        {
            Ok(details) => Ok(Some(
                details
                    .name
                    .as_deref()
                    .map(strip_name_prefix)
                    .unwrap_or_default()
                    .to_string(),
            )),
            Err(Error::DockerResponseServerError { status_code: 404, .. }) => Ok(None),
            Err(e) => Err(map_error(e)),
        }
    }

    async fn start(&self, id: &str) -> Result<(), EngineError> {
        match self
            .docker
            .start_container(id, None::<StartContainerOptions>)
            .await
        {
            Ok(()) => {}
            // 304: already running
            Err(Error::DockerResponseServerError { status_code: 304, .. }) => {
                debug!(id = %id, "Container already running");
            }
            Err(e) => return Err(map_container_error(id, e)),
        }
        info!(id = %id, "Container started");
        Ok(())
    }

    async fn stop(&self, id: &str) -> Result<(), EngineError> {
        match self
            .docker
            .stop_container(id, None::<StopContainerOptions>)
            .await
        {
            Ok(()) => {}
            // 304: already stopped
            Err(Error::DockerResponseServerError { status_code: 304, .. }) => {
                debug!(id = %id, "Container already stopped");
            }
            Err(e) => return Err(map_container_error(id, e)),
        }
        info!(id = %id, "Container stopped");
        Ok(())
    }
}

fn map_container_error(id: &str, err: Error) -> EngineError {
    match err {
        Error::DockerResponseServerError { status_code: 404, .. } => EngineError::NotFound(id.to_string()),
        other => map_error(other),
    }
}

fn map_error(err: Error) -> EngineError {
    EngineError::Request(err.to_string())
}
