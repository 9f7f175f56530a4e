use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::DeployError;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DeployedContract {
    pub name: String,
    pub address: String,
    /// Not set for contracts that were already deployed, like an external price feed
    pub code_id: Option<u64>,
}

#[derive(Serialize, Debug)]
pub struct DeploymentReport {
    pub chain_id: String,
    pub deployer: String,
    pub contracts: Vec<DeployedContract>,
}

impl DeploymentReport {
    pub fn file_name(&self) -> String {
        format!("{}_deployment.json", self.chain_id)
    }

    /// Writes the report as `<chain_id>_deployment.json` into `dir`.
    pub fn write_to_json(&self, dir: impl AsRef<Path>) -> Result<PathBuf, DeployError> {
        let path = dir.as_ref().join(self.file_name());
        let json_data = serde_json::to_string_pretty(&self)?;
        std::fs::write(&path, json_data)?;
        Ok(path)
    }
}
