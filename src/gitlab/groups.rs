use super::Client;
use crate::core::object::Object;
use crate::core::params::Params;
use crate::error::Result;
use std::fmt::Display;

impl Client {
    pub fn groups(&self, options: &Params) -> Result<Vec<Object>> {
        self.http_client.get("/groups", options)
    }

    pub fn group(&self, id: impl Display) -> Result<Object> {
        self.http_client.get(format!("/groups/{id}"), &Params::new())
    }

    pub fn create_group(&self, name: &str, path: &str) -> Result<Object> {
        let body = Params::new().with("name", name).with("path", path);

        self.http_client.post("/groups", &body)
    }

    pub fn group_members(&self, id: impl Display, options: &Params) -> Result<Vec<Object>> {
        self.http_client.get(format!("/groups/{id}/members"), options)
    }

    pub fn add_group_member(
        &self,
        group: impl Display,
        user_id: impl Display,
        access_level: impl Display,
    ) -> Result<Object> {
        let body = Params::new()
            .with("user_id", user_id.to_string())
            .with("access_level", access_level.to_string());

        self.http_client.post(format!("/groups/{group}/members"), &body)
    }

    pub fn remove_group_member(&self, group: impl Display, user_id: impl Display) -> Result<Object> {
        self.http_client
            .delete(format!("/groups/{group}/members/{user_id}"), &Params::new())
    }

    pub fn transfer_project_to_group(
        &self,
        id: impl Display,
        project_id: impl Display,
    ) -> Result<Object> {
        let body = Params::new()
            .with("id", id.to_string())
            .with("project_id", project_id.to_string());

        self.http_client
            .post(format!("/groups/{id}/projects/{project_id}"), &body)
    }
}
