use super::Client;
use crate::core::object::Object;
use crate::core::params::Params;
use crate::error::Result;
use std::fmt::Display;

impl Client {
    pub fn users(&self, options: &Params) -> Result<Vec<Object>> {
        self.http_client.get("/users", options)
    }

    pub fn user(&self, id: impl Display) -> Result<Object> {
        self.http_client.get(format!("/users/{id}"), &Params::new())
    }

    /// The user the private token belongs to.
    pub fn current_user(&self) -> Result<Object> {
        self.http_client.get("/user", &Params::new())
    }

    /// `name` defaults to `email` unless given in `options`.
    pub fn create_user(&self, email: &str, password: &str, options: &Params) -> Result<Object> {
        let body = Params::new()
            .with("email", email)
            .with("password", password)
            .with("name", email)
            .merge(options);

        self.http_client.post("/users", &body)
    }

    pub fn edit_user(&self, id: impl Display, options: &Params) -> Result<Object> {
        self.http_client.put(format!("/users/{id}"), options)
    }

    /// Signs in with email and password; the response carries the private token.
    pub fn session(&self, email: &str, password: &str) -> Result<Object> {
        let body = Params::new().with("email", email).with("password", password);

        self.http_client.post("/session", &body)
    }

    pub fn ssh_keys(&self, options: &Params) -> Result<Vec<Object>> {
        self.http_client.get("/user/keys", options)
    }

    pub fn ssh_key(&self, id: impl Display) -> Result<Object> {
        self.http_client.get(format!("/user/keys/{id}"), &Params::new())
    }

    pub fn create_ssh_key(&self, title: &str, key: &str) -> Result<Object> {
        let body = Params::new().with("title", title).with("key", key);

        self.http_client.post("/user/keys", &body)
    }

    pub fn delete_ssh_key(&self, id: impl Display) -> Result<Object> {
        self.http_client.delete(format!("/user/keys/{id}"), &Params::new())
    }
}
