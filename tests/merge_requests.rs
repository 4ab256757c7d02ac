mod common;

use brat::{Error, Params};
use common::TestServer;

fn branches() -> Params {
    Params::new()
        .with("source_branch", "api")
        .with("target_branch", "master")
}

#[test]
fn merge_requests() {
    let server = TestServer::start();
    server.stub_get("/projects/3/merge_requests", "merge_requests");

    let mrs = server.client().merge_requests(3, &Params::new()).unwrap();

    assert_eq!(mrs[0].get("project_id").unwrap().as_i64(), Some(3));
    assert!(mrs[0].get("assignee").unwrap().is_null());
}

#[test]
fn merge_request() {
    let server = TestServer::start();
    server.stub_get("/projects/3/merge_request/1", "merge_request");

    let mr = server.client().merge_request(3, 1).unwrap();

    let assignee = mr.get("assignee").unwrap().as_node().unwrap();
    assert_eq!(assignee.get("name").unwrap().as_str(), Some("Jack Smith"));
}

#[test]
fn create_merge_request() {
    let server = TestServer::start();
    server.stub_post("/projects/3/merge_requests", "merge_request");

    let mr = server
        .client()
        .create_merge_request(3, "New feature", &branches().with("assignee_id", 42))
        .unwrap();

    assert_eq!(
        server.single_body(),
        "title=New+feature&source_branch=api&target_branch=master&assignee_id=42"
    );
    assert_eq!(mr.get("title").unwrap().as_str(), Some("New feature"));
}

#[test]
fn create_merge_request_without_target_branch_sends_nothing() {
    let server = TestServer::start();

    let err = server
        .client()
        .create_merge_request(3, "New feature", &Params::new().with("source_branch", "api"))
        .unwrap_err();

    assert!(matches!(err, Error::MissingAttributes(_)));
    assert!(err.to_string().contains("target_branch"));
    assert!(server.requests().is_empty());
}

#[test]
fn update_merge_request() {
    let server = TestServer::start();
    server.stub_put("/projects/3/merge_request/2", "merge_request");

    server
        .client()
        .update_merge_request(3, 2, &Params::new().with("state_event", "close"))
        .unwrap();

    assert_eq!(server.single_body(), "state_event=close");
}

#[test]
fn merge_request_comments() {
    let server = TestServer::start();
    server.stub_post("/projects/3/merge_request/2/comments", "comment_merge_request");

    let note = server
        .client()
        .create_merge_request_comment(3, 2, "Cool Merge Request!")
        .unwrap();

    assert_eq!(server.single_body(), "note=Cool+Merge+Request%21");
    assert_eq!(note.get("note").unwrap().as_str(), Some("Cool Merge Request!"));
}
