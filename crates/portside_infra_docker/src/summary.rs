use bollard::models::ContainerSummary as EngineSummary;
use portside_domain::container::{strip_name_prefix, ContainerSummary};

pub(crate) fn from_engine(c: EngineSummary) -> ContainerSummary {
    ContainerSummary {
        id: c.id.unwrap_or_default(),
        names: c
            .names
            .unwrap_or_default()
            .iter()
            .map(|n| strip_name_prefix(n).to_string())
            .collect(),
        state: c.state.map(|s| s.to_string()).unwrap_or_default(),
        status: c.status.unwrap_or_default(),
    }
}
