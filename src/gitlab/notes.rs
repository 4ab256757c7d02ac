use super::Client;
use crate::core::object::Object;
use crate::core::params::Params;
use crate::error::Result;
use std::fmt::Display;

impl Client {
    /// Wall notes of a project.
    pub fn notes(&self, project: impl Display) -> Result<Vec<Object>> {
        self.http_client
            .get(format!("/projects/{project}/notes"), &Params::new())
    }

    pub fn issue_notes(&self, project: impl Display, issue: impl Display) -> Result<Vec<Object>> {
        self.http_client
            .get(format!("/projects/{project}/issues/{issue}/notes"), &Params::new())
    }

    pub fn snippet_notes(&self, project: impl Display, snippet: impl Display) -> Result<Vec<Object>> {
        self.http_client
            .get(format!("/projects/{project}/snippets/{snippet}/notes"), &Params::new())
    }

    pub fn note(&self, project: impl Display, id: impl Display) -> Result<Object> {
        self.http_client
            .get(format!("/projects/{project}/notes/{id}"), &Params::new())
    }

    pub fn issue_note(&self, project: impl Display, issue: impl Display, id: impl Display) -> Result<Object> {
        self.http_client.get(
            format!("/projects/{project}/issues/{issue}/notes/{id}"),
            &Params::new(),
        )
    }

    pub fn snippet_note(
        &self,
        project: impl Display,
        snippet: impl Display,
        id: impl Display,
    ) -> Result<Object> {
        self.http_client.get(
            format!("/projects/{project}/snippets/{snippet}/notes/{id}"),
            &Params::new(),
        )
    }

    pub fn create_note(&self, project: impl Display, body: &str) -> Result<Object> {
        self.http_client.post(
            format!("/projects/{project}/notes"),
            &Params::new().with("body", body),
        )
    }

    pub fn create_issue_note(&self, project: impl Display, issue: impl Display, body: &str) -> Result<Object> {
        self.http_client.post(
            format!("/projects/{project}/issues/{issue}/notes"),
            &Params::new().with("body", body),
        )
    }

    pub fn create_snippet_note(
        &self,
        project: impl Display,
        snippet: impl Display,
        body: &str,
    ) -> Result<Object> {
        self.http_client.post(
            format!("/projects/{project}/snippets/{snippet}/notes"),
            &Params::new().with("body", body),
        )
    }
}
