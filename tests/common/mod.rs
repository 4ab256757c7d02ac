//! Shared harness for the integration tests.
//!
//! The client is blocking, so the wiremock server is started on a private
//! tokio runtime and every async wiremock call goes through `block_on`.
//! Requests are then made from the plain test thread.

#![allow(dead_code)]

use brat::{Client, Configuration};
use tokio::runtime::Runtime;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const PRIVATE_TOKEN: &str = "secret";

pub fn load_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}.json", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("fixture {path}: {e}"))
}

pub struct TestServer {
    server: MockServer,
    runtime: Runtime,
}

impl TestServer {
    pub fn start() -> Self {
        let runtime = Runtime::new().expect("tokio runtime");
        let server = runtime.block_on(MockServer::start());

        Self { server, runtime }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn config(&self) -> Configuration {
        Configuration::default()
            .with_endpoint(self.uri())
            .with_private_token(PRIVATE_TOKEN)
    }

    pub fn client(&self) -> Client {
        Client::new(self.config()).expect("client")
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    pub fn requests(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    /// Body of the only request received, decoded as text.
    pub fn single_body(&self) -> String {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        String::from_utf8(requests[0].body.clone()).expect("utf-8 body")
    }

    pub fn stub(&self, verb: &str, route: &str, fixture: &str, status: u16) {
        self.mount(
            Mock::given(method(verb))
                .and(path(route))
                .and(header("private-token", PRIVATE_TOKEN))
                .respond_with(ResponseTemplate::new(status).set_body_string(load_fixture(fixture)))
                .expect(1),
        );
    }

    pub fn stub_get(&self, route: &str, fixture: &str) {
        self.stub("GET", route, fixture, 200);
    }

    pub fn stub_post(&self, route: &str, fixture: &str) {
        self.stub("POST", route, fixture, 201);
    }

    pub fn stub_put(&self, route: &str, fixture: &str) {
        self.stub("PUT", route, fixture, 200);
    }

    pub fn stub_delete(&self, route: &str, fixture: &str) {
        self.stub("DELETE", route, fixture, 200);
    }
}
