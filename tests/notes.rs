mod common;

use common::TestServer;

#[test]
fn wall_notes() {
    let server = TestServer::start();
    server.stub_get("/projects/3/notes", "notes");

    let notes = server.client().notes(3).unwrap();

    let author = notes[0].get("author").unwrap().as_node().unwrap();
    assert_eq!(author.get("name").unwrap().as_str(), Some("John Smith"));
}

#[test]
fn issue_notes() {
    let server = TestServer::start();
    server.stub_get("/projects/3/issues/7/notes", "notes");

    let notes = server.client().issue_notes(3, 7).unwrap();

    assert_eq!(notes.len(), 2);
}

#[test]
fn snippet_note() {
    let server = TestServer::start();
    server.stub_get("/projects/3/snippets/7/notes/1201", "note");

    let note = server.client().snippet_note(3, 7, 1201).unwrap();

    assert_eq!(note.get("body").unwrap().as_str(), Some("The solution is rather tricky"));
}

#[test]
fn create_issue_note() {
    let server = TestServer::start();
    server.stub_post("/projects/3/issues/7/notes", "note");

    server.client().create_issue_note(3, 7, "The solution is rather tricky").unwrap();

    assert_eq!(server.single_body(), "body=The+solution+is+rather+tricky");
}
