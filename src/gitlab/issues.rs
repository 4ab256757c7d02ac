use super::Client;
use crate::core::object::Object;
use crate::core::params::Params;
use crate::error::Result;
use std::fmt::Display;

impl Client {
    /// Issues across every project visible to the authenticated user.
    pub fn issues(&self, options: &Params) -> Result<Vec<Object>> {
        self.http_client.get("/issues", options)
    }

    pub fn project_issues(&self, project: impl Display, options: &Params) -> Result<Vec<Object>> {
        self.http_client.get(format!("/projects/{project}/issues"), options)
    }

    pub fn issue(&self, project: impl Display, id: impl Display) -> Result<Object> {
        self.http_client
            .get(format!("/projects/{project}/issues/{id}"), &Params::new())
    }

    pub fn create_issue(&self, project: impl Display, title: &str, options: &Params) -> Result<Object> {
        let body = Params::new().with("title", title).merge(options);

        self.http_client.post(format!("/projects/{project}/issues"), &body)
    }

    pub fn edit_issue(&self, project: impl Display, id: impl Display, options: &Params) -> Result<Object> {
        self.http_client
            .put(format!("/projects/{project}/issues/{id}"), options)
    }

    pub fn close_issue(&self, project: impl Display, id: impl Display) -> Result<Object> {
        self.edit_issue(project, id, &Params::new().with("state_event", "close"))
    }

    pub fn reopen_issue(&self, project: impl Display, id: impl Display) -> Result<Object> {
        self.edit_issue(project, id, &Params::new().with("state_event", "reopen"))
    }
}
