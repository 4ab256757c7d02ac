use super::Client;
use crate::core::object::Object;
use crate::core::params::Params;
use crate::error::Result;
use std::fmt::Display;

impl Client {
    pub fn merge_requests(&self, project: impl Display, options: &Params) -> Result<Vec<Object>> {
        self.http_client
            .get(format!("/projects/{project}/merge_requests"), options)
    }

    pub fn merge_request(&self, project: impl Display, id: impl Display) -> Result<Object> {
        self.http_client
            .get(format!("/projects/{project}/merge_request/{id}"), &Params::new())
    }

    /// `options` must carry `source_branch` and `target_branch`; nothing is
    /// sent otherwise.
    pub fn create_merge_request(
        &self,
        project: impl Display,
        title: &str,
        options: &Params,
    ) -> Result<Object> {
        options.require(&["source_branch", "target_branch"])?;

        let body = Params::new().with("title", title).merge(options);

        self.http_client
            .post(format!("/projects/{project}/merge_requests"), &body)
    }

    pub fn update_merge_request(
        &self,
        project: impl Display,
        id: impl Display,
        options: &Params,
    ) -> Result<Object> {
        self.http_client
            .put(format!("/projects/{project}/merge_request/{id}"), options)
    }

    pub fn create_merge_request_comment(
        &self,
        project: impl Display,
        id: impl Display,
        note: &str,
    ) -> Result<Object> {
        self.http_client.post(
            format!("/projects/{project}/merge_request/{id}/comments"),
            &Params::new().with("note", note),
        )
    }

    pub fn merge_request_comments(&self, project: impl Display, id: impl Display) -> Result<Vec<Object>> {
        self.http_client.get(
            format!("/projects/{project}/merge_request/{id}/comments"),
            &Params::new(),
        )
    }
}
