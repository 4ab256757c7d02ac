use super::config::Configuration;
use super::params::Params;
use crate::error::{Error, ResponseError, Result};
use derive_more::Display;
use reqwest::header;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, info};
use url::Url;

pub const PRIVATE_TOKEN_HEADER: &str = "private-token";
pub const SUDO_HEADER: &str = "sudo";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Method {
    #[display(fmt = "GET")]
    Get,

    #[display(fmt = "POST")]
    Post,

    #[display(fmt = "PUT")]
    Put,

    #[display(fmt = "DELETE")]
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Blocking request dispatcher shared by every endpoint method.
pub struct Client {
    http_client: reqwest::blocking::Client,
    config: Configuration,
}

impl Client {
    pub fn new(config: Configuration) -> Result<Self> {
        let http_client = reqwest::blocking::Client::builder()
            .default_headers(Self::default_headers())
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    fn default_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();

        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        headers
    }

    fn request_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();

        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&self.config.user_agent)?,
        );

        if let Some(token) = &self.config.private_token {
            let mut value = header::HeaderValue::from_str(token)?;
            value.set_sensitive(true);
            headers.insert(PRIVATE_TOKEN_HEADER, value);
        }

        if let Some(sudo) = &self.config.sudo {
            headers.insert(SUDO_HEADER, header::HeaderValue::from_str(sudo)?);
        }

        Ok(headers)
    }

    /// Full URL for `path`, with `query` encoded onto it.
    pub fn url(&self, path: &str, query: &Params) -> Result<Url> {
        let base = self.config.base_url()?;
        let mut url = Url::parse(&format!("{}{}", base.as_str().trim_end_matches('/'), path))?;

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.to_pairs());
        }

        Ok(url)
    }

    pub fn request<R>(&self, method: Method, path: &str, query: &Params, body: &Params) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.url(path, query)?;

        info!("{method} {url}");

        let mut request = self
            .http_client
            .request(method.into(), url.clone())
            .headers(self.request_headers()?);

        if matches!(method, Method::Post | Method::Put) {
            let form = body.to_pairs();
            debug!(?form, "form body");
            request = request.form(&form);
        }

        let response = request.send().map_err(Error::Connection)?;

        handle_response(response, &url)
    }

    pub fn get<U, R>(&self, path: U, query: &Params) -> Result<R>
    where
        U: Into<String>,
        R: DeserializeOwned,
    {
        self.request(Method::Get, &path.into(), query, &Params::new())
    }

    pub fn post<U, R>(&self, path: U, body: &Params) -> Result<R>
    where
        U: Into<String>,
        R: DeserializeOwned,
    {
        self.request(Method::Post, &path.into(), &Params::new(), body)
    }

    pub fn put<U, R>(&self, path: U, body: &Params) -> Result<R>
    where
        U: Into<String>,
        R: DeserializeOwned,
    {
        self.request(Method::Put, &path.into(), &Params::new(), body)
    }

    pub fn delete<U, R>(&self, path: U, query: &Params) -> Result<R>
    where
        U: Into<String>,
        R: DeserializeOwned,
    {
        self.request(Method::Delete, &path.into(), query, &Params::new())
    }
}

fn handle_response<R>(response: reqwest::blocking::Response, url: &Url) -> Result<R>
where
    R: DeserializeOwned,
{
    let status = response.status();
    let body = response.text().map_err(Error::Connection)?;

    debug!(%status, "{url}");

    if status.is_success() {
        return decode_success(&body);
    }

    Err(Error::from_status(ResponseError {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_owned(),
        uri: url.to_string(),
        message: error_detail(&body),
    }))
}

/// Empty and `null` bodies decode as an empty mapping, or as an empty list
/// when the caller expects one.
fn decode_success<R>(body: &str) -> Result<R>
where
    R: DeserializeOwned,
{
    let value = match body.trim() {
        "" => Value::Null,
        body => serde_json::from_str(body)?,
    };

    if !value.is_null() {
        return Ok(serde_json::from_value(value)?);
    }

    serde_json::from_value(Value::Object(Map::new()))
        .or_else(|_| serde_json::from_value(Value::Array(Vec::new())))
        .map_err(Error::from)
}

/// Pulls a readable message out of an error body.
fn error_detail(body: &str) -> Option<String> {
    let body = body.trim();

    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map.get("message").or_else(|| map.get("error")).map(describe),
        Ok(other) => Some(describe(&other)),
        Err(_) => Some(body.to_owned()),
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(describe).collect::<Vec<_>>().join(", "),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("'{k}' {}", describe(v)))
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
