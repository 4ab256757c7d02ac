use super::Client;
use crate::core::object::Object;
use crate::core::params::Params;
use crate::error::Result;
use std::fmt::Display;

impl Client {
    pub fn hooks(&self, options: &Params) -> Result<Vec<Object>> {
        self.http_client.get("/hooks", options)
    }

    pub fn add_hook(&self, url: &str) -> Result<Object> {
        self.http_client.post("/hooks", &Params::new().with("url", url))
    }

    /// Triggers a test event for the hook.
    pub fn hook(&self, id: impl Display) -> Result<Object> {
        self.http_client.get(format!("/hooks/{id}"), &Params::new())
    }

    pub fn delete_hook(&self, id: impl Display) -> Result<Object> {
        self.http_client.delete(format!("/hooks/{id}"), &Params::new())
    }
}
