pub mod branches;
pub mod groups;
pub mod issues;
pub mod merge_requests;
pub mod notes;
pub mod projects;
pub mod system_hooks;
pub mod users;

use crate::core::config::Configuration;
use crate::error::Result;

/// Endpoint methods, one file per resource group.
pub struct Client {
    pub http_client: crate::core::client::Client,
}

impl Client {
    pub fn new(config: Configuration) -> Result<Self> {
        Ok(Self {
            http_client: crate::core::client::Client::new(config)?,
        })
    }

    pub fn config(&self) -> &Configuration {
        self.http_client.config()
    }
}
