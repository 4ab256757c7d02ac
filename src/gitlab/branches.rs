use super::Client;
use crate::core::object::Object;
use crate::core::params::Params;
use crate::error::Result;
use std::fmt::Display;

impl Client {
    pub fn branches(&self, project: impl Display, options: &Params) -> Result<Vec<Object>> {
        self.http_client
            .get(format!("/projects/{project}/repository/branches"), options)
    }

    pub fn branch(&self, project: impl Display, branch: impl Display) -> Result<Object> {
        self.http_client.get(
            format!("/projects/{project}/repository/branches/{branch}"),
            &Params::new(),
        )
    }

    pub fn protect_branch(&self, project: impl Display, branch: impl Display) -> Result<Object> {
        self.http_client.put(
            format!("/projects/{project}/repository/branches/{branch}/protect"),
            &Params::new(),
        )
    }

    pub fn unprotect_branch(&self, project: impl Display, branch: impl Display) -> Result<Object> {
        self.http_client.put(
            format!("/projects/{project}/repository/branches/{branch}/unprotect"),
            &Params::new(),
        )
    }

    /// Creates `branch` in the repository, pointing at `git_ref`.
    pub fn create_branch(
        &self,
        project: impl Display,
        branch: &str,
        git_ref: &str,
    ) -> Result<Object> {
        let body = Params::new().with("branch_name", branch).with("ref", git_ref);

        self.http_client
            .post(format!("/projects/{project}/repository/branches"), &body)
    }
}
