use super::Client;
use crate::core::object::Object;
use crate::core::params::Params;
use crate::error::Result;
use serde_json::Value;
use std::fmt::Display;

const HOOK_EVENTS: [&str; 3] = ["push_events", "merge_requests_events", "issues_events"];

/// Plain text of an option value; strings are taken without quotes.
fn option_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

impl Client {
    /// Projects of the authenticated user, or `/projects/{scope}` when the
    /// `scope` option is given (`owned`, `all`).
    pub fn projects(&self, options: &Params) -> Result<Vec<Object>> {
        let url = match options.get("scope") {
            Some(scope) => format!("/projects/{}", option_text(scope)),
            None => "/projects".to_owned(),
        };

        self.http_client.get(url, options)
    }

    pub fn project(&self, id: impl Display) -> Result<Object> {
        self.http_client.get(format!("/projects/{id}"), &Params::new())
    }

    pub fn project_events(&self, project: impl Display, options: &Params) -> Result<Vec<Object>> {
        self.http_client.get(format!("/projects/{project}/events"), options)
    }

    pub fn create_project(&self, name: &str, options: &Params) -> Result<Object> {
        let url = match options.get("user_id") {
            Some(user_id) => format!("/projects/user/{}", option_text(user_id)),
            None => "/projects".to_owned(),
        };

        let body = Params::new().with("name", name).merge(options);

        self.http_client.post(url, &body)
    }

    pub fn delete_project(&self, id: impl Display) -> Result<Object> {
        self.http_client.delete(format!("/projects/{id}"), &Params::new())
    }

    pub fn team_members(&self, project: impl Display, options: &Params) -> Result<Vec<Object>> {
        self.http_client.get(format!("/projects/{project}/members"), options)
    }

    pub fn team_member(&self, project: impl Display, id: impl Display) -> Result<Object> {
        self.http_client
            .get(format!("/projects/{project}/members/{id}"), &Params::new())
    }

    pub fn add_team_member(
        &self,
        project: impl Display,
        id: impl Display,
        access_level: impl Display,
    ) -> Result<Object> {
        let body = Params::new()
            .with("user_id", id.to_string())
            .with("access_level", access_level.to_string());

        self.http_client.post(format!("/projects/{project}/members"), &body)
    }

    pub fn edit_team_member(
        &self,
        project: impl Display,
        id: impl Display,
        access_level: impl Display,
    ) -> Result<Object> {
        let body = Params::new().with("access_level", access_level.to_string());

        self.http_client
            .put(format!("/projects/{project}/members/{id}"), &body)
    }

    pub fn remove_team_member(&self, project: impl Display, id: impl Display) -> Result<Object> {
        self.http_client
            .delete(format!("/projects/{project}/members/{id}"), &Params::new())
    }

    pub fn project_hooks(&self, project: impl Display, options: &Params) -> Result<Vec<Object>> {
        self.http_client.get(format!("/projects/{project}/hooks"), options)
    }

    pub fn project_hook(&self, project: impl Display, id: impl Display) -> Result<Object> {
        self.http_client
            .get(format!("/projects/{project}/hooks/{id}"), &Params::new())
    }

    /// Only the enabled event flags among `push_events`, `merge_requests_events`
    /// and `issues_events` are forwarded.
    pub fn add_project_hook(&self, project: impl Display, url: &str, options: &Params) -> Result<Object> {
        let mut body = Params::new().with("url", url);

        for event in HOOK_EVENTS {
            if let Some(value) = options.get(event).filter(|v| is_truthy(v)) {
                body.insert(event, value.clone());
            }
        }

        self.http_client.post(format!("/projects/{project}/hooks"), &body)
    }

    pub fn edit_project_hook(&self, project: impl Display, id: impl Display, url: &str) -> Result<Object> {
        self.http_client.put(
            format!("/projects/{project}/hooks/{id}"),
            &Params::new().with("url", url),
        )
    }

    pub fn delete_project_hook(&self, project: impl Display, id: impl Display) -> Result<Object> {
        self.http_client
            .delete(format!("/projects/{project}/hooks/{id}"), &Params::new())
    }

    /// Marks `project` as forked from project `id`.
    pub fn make_forked_from(&self, project: impl Display, id: impl Display) -> Result<Object> {
        self.http_client
            .post(format!("/projects/{project}/fork/{id}"), &Params::new())
    }

    pub fn remove_forked(&self, project: impl Display) -> Result<Object> {
        self.http_client
            .delete(format!("/projects/{project}/fork"), &Params::new())
    }

    pub fn deploy_keys(&self, project: impl Display, options: &Params) -> Result<Vec<Object>> {
        self.http_client.get(format!("/projects/{project}/keys"), options)
    }

    pub fn deploy_key(&self, project: impl Display, id: impl Display) -> Result<Object> {
        self.http_client
            .get(format!("/projects/{project}/keys/{id}"), &Params::new())
    }

    pub fn create_deploy_key(&self, project: impl Display, title: &str, key: &str) -> Result<Object> {
        let body = Params::new().with("title", title).with("key", key);

        self.http_client.post(format!("/projects/{project}/keys"), &body)
    }

    pub fn delete_deploy_key(&self, project: impl Display, id: impl Display) -> Result<Object> {
        self.http_client
            .delete(format!("/projects/{project}/keys/{id}"), &Params::new())
    }
}
