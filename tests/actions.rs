mod common;

use brat::{Action, Output, Params};
use common::TestServer;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn list_action_returns_list_output() {
    let server = TestServer::start();
    server.stub_get("/projects/3/notes", "notes");

    let output = Action::Notes
        .run(&server.client(), &args(&["3"]), &Params::new())
        .unwrap();

    match output {
        Output::List(notes) => assert_eq!(notes.len(), 2),
        other => panic!("expected a list, got {other:?}"),
    }
}

#[test]
fn single_action_returns_object_output() {
    let server = TestServer::start();
    server.stub_post("/projects/3/merge_requests", "merge_request");

    let options = Params::new()
        .with("source_branch", "api")
        .with("target_branch", "master");
    let output = Action::CreateMergeRequest
        .run(&server.client(), &args(&["3", "New feature"]), &options)
        .unwrap();

    match output {
        Output::Object(mr) => assert_eq!(mr.get("id").unwrap().as_i64(), Some(1)),
        other => panic!("expected an object, got {other:?}"),
    }
}

#[test]
fn parsed_name_dispatches_to_endpoint() {
    let server = TestServer::start();
    server.stub_delete("/projects/3/hooks/1", "project_hook");

    let action: Action = "delete_project_hook".parse().unwrap();
    assert!(action.is_destructive());

    action
        .run(&server.client(), &args(&["3", "1"]), &Params::new())
        .unwrap();
}

#[test]
fn output_serializes_as_plain_json() {
    let server = TestServer::start();
    server.stub_get("/user/keys", "keys");

    let output = Action::SshKeys
        .run(&server.client(), &[], &Params::new())
        .unwrap();

    let value = serde_json::to_value(&output).unwrap();
    assert_eq!(value[0]["title"], "narkoz@helium");
}

#[test]
fn session_action_signs_in_with_email_and_password() {
    let server = TestServer::start();
    server.stub_post("/session", "session");

    let output = Action::Session
        .run(&server.client(), &args(&["email", "pass"]), &Params::new())
        .unwrap();

    match output {
        Output::Object(session) => assert_eq!(
            session.get("private_token").unwrap().as_str(),
            Some("qEsq1pt6HJPaNciie3MG")
        ),
        other => panic!("expected an object, got {other:?}"),
    }
    assert_eq!(server.single_body(), "email=email&password=pass");
}
