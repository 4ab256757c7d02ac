//! Every endpoint operation under its command name.
//!
//! `Action::run` maps positional string arguments onto the matching
//! `gitlab::Client` method, so callers that only have a command word and
//! arguments (the `brat` binary) need no reflection.

use crate::core::object::Object;
use crate::core::params::Params;
use crate::error::{Error, Result};
use crate::gitlab::Client;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

macro_rules! actions {
    ($($variant:ident => $name:literal,)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Action {
            $($variant,)+
        }

        impl Action {
            pub const ALL: &'static [Action] = &[$(Action::$variant,)+];

            pub fn name(self) -> &'static str {
                match self {
                    $(Action::$variant => $name,)+
                }
            }
        }
    };
}

actions! {
    AddGroupMember => "add_group_member",
    AddHook => "add_hook",
    AddProjectHook => "add_project_hook",
    AddTeamMember => "add_team_member",
    Branch => "branch",
    Branches => "branches",
    CloseIssue => "close_issue",
    CreateBranch => "create_branch",
    CreateDeployKey => "create_deploy_key",
    CreateGroup => "create_group",
    CreateIssue => "create_issue",
    CreateIssueNote => "create_issue_note",
    CreateMergeRequest => "create_merge_request",
    CreateMergeRequestComment => "create_merge_request_comment",
    CreateNote => "create_note",
    CreateProject => "create_project",
    CreateSnippetNote => "create_snippet_note",
    CreateSshKey => "create_ssh_key",
    CreateUser => "create_user",
    CurrentUser => "current_user",
    DeleteDeployKey => "delete_deploy_key",
    DeleteHook => "delete_hook",
    DeleteProject => "delete_project",
    DeleteProjectHook => "delete_project_hook",
    DeleteSshKey => "delete_ssh_key",
    DeployKey => "deploy_key",
    DeployKeys => "deploy_keys",
    EditIssue => "edit_issue",
    EditProjectHook => "edit_project_hook",
    EditTeamMember => "edit_team_member",
    EditUser => "edit_user",
    Group => "group",
    GroupMembers => "group_members",
    Groups => "groups",
    Hook => "hook",
    Hooks => "hooks",
    Issue => "issue",
    IssueNote => "issue_note",
    IssueNotes => "issue_notes",
    Issues => "issues",
    MakeForkedFrom => "make_forked_from",
    MergeRequest => "merge_request",
    MergeRequestComments => "merge_request_comments",
    MergeRequests => "merge_requests",
    Note => "note",
    Notes => "notes",
    Project => "project",
    ProjectEvents => "project_events",
    ProjectHook => "project_hook",
    ProjectHooks => "project_hooks",
    ProjectIssues => "project_issues",
    Projects => "projects",
    ProtectBranch => "protect_branch",
    RemoveForked => "remove_forked",
    RemoveGroupMember => "remove_group_member",
    RemoveTeamMember => "remove_team_member",
    ReopenIssue => "reopen_issue",
    Session => "session",
    SnippetNote => "snippet_note",
    SnippetNotes => "snippet_notes",
    SshKey => "ssh_key",
    SshKeys => "ssh_keys",
    TeamMember => "team_member",
    TeamMembers => "team_members",
    TransferProjectToGroup => "transfer_project_to_group",
    UnprotectBranch => "unprotect_branch",
    UpdateMergeRequest => "update_merge_request",
    User => "user",
    Users => "users",
}

/// Result of running an action: one resource or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Object(Object),
    List(Vec<Object>),
}

impl From<Object> for Output {
    fn from(object: Object) -> Self {
        Output::Object(object)
    }
}

impl From<Vec<Object>> for Output {
    fn from(list: Vec<Object>) -> Self {
        Output::List(list)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Action::ALL
            .iter()
            .copied()
            .find(|action| action.name() == s)
            .ok_or_else(|| Error::Arguments(format!("unknown action '{s}'")))
    }
}

struct Args<'a> {
    action: Action,
    values: &'a [String],
}

impl<'a> Args<'a> {
    fn at(&self, index: usize, name: &str) -> Result<&'a str> {
        self.values.get(index).map(String::as_str).ok_or_else(|| {
            Error::Arguments(format!(
                "{} expects <{name}> as argument {}",
                self.action,
                index + 1
            ))
        })
    }
}

impl Action {
    /// Deleting and removing actions, which callers should confirm first.
    pub fn is_destructive(self) -> bool {
        let name = self.name();
        name.starts_with("delete_") || name.starts_with("remove_")
    }

    pub fn run(self, client: &Client, args: &[String], options: &Params) -> Result<Output> {
        let a = Args {
            action: self,
            values: args,
        };

        let output = match self {
            Action::Branches => client.branches(a.at(0, "project")?, options)?.into(),
            Action::Branch => client.branch(a.at(0, "project")?, a.at(1, "branch")?)?.into(),
            Action::ProtectBranch => client
                .protect_branch(a.at(0, "project")?, a.at(1, "branch")?)?
                .into(),
            Action::UnprotectBranch => client
                .unprotect_branch(a.at(0, "project")?, a.at(1, "branch")?)?
                .into(),
            Action::CreateBranch => client
                .create_branch(a.at(0, "project")?, a.at(1, "branch")?, a.at(2, "ref")?)?
                .into(),

            Action::Groups => client.groups(options)?.into(),
            Action::Group => client.group(a.at(0, "id")?)?.into(),
            Action::CreateGroup => client.create_group(a.at(0, "name")?, a.at(1, "path")?)?.into(),
            Action::GroupMembers => client.group_members(a.at(0, "id")?, options)?.into(),
            Action::AddGroupMember => client
                .add_group_member(a.at(0, "group")?, a.at(1, "user_id")?, a.at(2, "access_level")?)?
                .into(),
            Action::RemoveGroupMember => client
                .remove_group_member(a.at(0, "group")?, a.at(1, "user_id")?)?
                .into(),
            Action::TransferProjectToGroup => client
                .transfer_project_to_group(a.at(0, "id")?, a.at(1, "project_id")?)?
                .into(),

            Action::Issues => client.issues(options)?.into(),
            Action::ProjectIssues => client.project_issues(a.at(0, "project")?, options)?.into(),
            Action::Issue => client.issue(a.at(0, "project")?, a.at(1, "id")?)?.into(),
            Action::CreateIssue => client
                .create_issue(a.at(0, "project")?, a.at(1, "title")?, options)?
                .into(),
            Action::EditIssue => client
                .edit_issue(a.at(0, "project")?, a.at(1, "id")?, options)?
                .into(),
            Action::CloseIssue => client.close_issue(a.at(0, "project")?, a.at(1, "id")?)?.into(),
            Action::ReopenIssue => client.reopen_issue(a.at(0, "project")?, a.at(1, "id")?)?.into(),

            Action::MergeRequests => client.merge_requests(a.at(0, "project")?, options)?.into(),
            Action::MergeRequest => client
                .merge_request(a.at(0, "project")?, a.at(1, "id")?)?
                .into(),
            Action::CreateMergeRequest => client
                .create_merge_request(a.at(0, "project")?, a.at(1, "title")?, options)?
                .into(),
            Action::UpdateMergeRequest => client
                .update_merge_request(a.at(0, "project")?, a.at(1, "id")?, options)?
                .into(),
            Action::CreateMergeRequestComment => client
                .create_merge_request_comment(a.at(0, "project")?, a.at(1, "id")?, a.at(2, "note")?)?
                .into(),
            Action::MergeRequestComments => client
                .merge_request_comments(a.at(0, "project")?, a.at(1, "id")?)?
                .into(),

            Action::Notes => client.notes(a.at(0, "project")?)?.into(),
            Action::IssueNotes => client.issue_notes(a.at(0, "project")?, a.at(1, "issue")?)?.into(),
            Action::SnippetNotes => client
                .snippet_notes(a.at(0, "project")?, a.at(1, "snippet")?)?
                .into(),
            Action::Note => client.note(a.at(0, "project")?, a.at(1, "id")?)?.into(),
            Action::IssueNote => client
                .issue_note(a.at(0, "project")?, a.at(1, "issue")?, a.at(2, "id")?)?
                .into(),
            Action::SnippetNote => client
                .snippet_note(a.at(0, "project")?, a.at(1, "snippet")?, a.at(2, "id")?)?
                .into(),
            Action::CreateNote => client.create_note(a.at(0, "project")?, a.at(1, "body")?)?.into(),
            Action::CreateIssueNote => client
                .create_issue_note(a.at(0, "project")?, a.at(1, "issue")?, a.at(2, "body")?)?
                .into(),
            Action::CreateSnippetNote => client
                .create_snippet_note(a.at(0, "project")?, a.at(1, "snippet")?, a.at(2, "body")?)?
                .into(),

            Action::Projects => client.projects(options)?.into(),
            Action::Project => client.project(a.at(0, "id")?)?.into(),
            Action::ProjectEvents => client.project_events(a.at(0, "project")?, options)?.into(),
            Action::CreateProject => client.create_project(a.at(0, "name")?, options)?.into(),
            Action::DeleteProject => client.delete_project(a.at(0, "id")?)?.into(),
            Action::TeamMembers => client.team_members(a.at(0, "project")?, options)?.into(),
            Action::TeamMember => client.team_member(a.at(0, "project")?, a.at(1, "id")?)?.into(),
            Action::AddTeamMember => client
                .add_team_member(a.at(0, "project")?, a.at(1, "id")?, a.at(2, "access_level")?)?
                .into(),
            Action::EditTeamMember => client
                .edit_team_member(a.at(0, "project")?, a.at(1, "id")?, a.at(2, "access_level")?)?
                .into(),
            Action::RemoveTeamMember => client
                .remove_team_member(a.at(0, "project")?, a.at(1, "id")?)?
                .into(),
            Action::ProjectHooks => client.project_hooks(a.at(0, "project")?, options)?.into(),
            Action::ProjectHook => client.project_hook(a.at(0, "project")?, a.at(1, "id")?)?.into(),
            Action::AddProjectHook => client
                .add_project_hook(a.at(0, "project")?, a.at(1, "url")?, options)?
                .into(),
            Action::EditProjectHook => client
                .edit_project_hook(a.at(0, "project")?, a.at(1, "id")?, a.at(2, "url")?)?
                .into(),
            Action::DeleteProjectHook => client
                .delete_project_hook(a.at(0, "project")?, a.at(1, "id")?)?
                .into(),
            Action::MakeForkedFrom => client
                .make_forked_from(a.at(0, "project")?, a.at(1, "id")?)?
                .into(),
            Action::RemoveForked => client.remove_forked(a.at(0, "project")?)?.into(),
            Action::DeployKeys => client.deploy_keys(a.at(0, "project")?, options)?.into(),
            Action::DeployKey => client.deploy_key(a.at(0, "project")?, a.at(1, "id")?)?.into(),
            Action::CreateDeployKey => client
                .create_deploy_key(a.at(0, "project")?, a.at(1, "title")?, a.at(2, "key")?)?
                .into(),
            Action::DeleteDeployKey => client
                .delete_deploy_key(a.at(0, "project")?, a.at(1, "id")?)?
                .into(),

            Action::Hooks => client.hooks(options)?.into(),
            Action::AddHook => client.add_hook(a.at(0, "url")?)?.into(),
            Action::Hook => client.hook(a.at(0, "id")?)?.into(),
            Action::DeleteHook => client.delete_hook(a.at(0, "id")?)?.into(),

            Action::Users => client.users(options)?.into(),
            Action::User => client.user(a.at(0, "id")?)?.into(),
            Action::CurrentUser => client.current_user()?.into(),
            Action::CreateUser => client
                .create_user(a.at(0, "email")?, a.at(1, "password")?, options)?
                .into(),
            Action::EditUser => client.edit_user(a.at(0, "id")?, options)?.into(),
            Action::Session => client
                .session(a.at(0, "email")?, a.at(1, "password")?)?
                .into(),
            Action::SshKeys => client.ssh_keys(options)?.into(),
            Action::SshKey => client.ssh_key(a.at(0, "id")?)?.into(),
            Action::CreateSshKey => client
                .create_ssh_key(a.at(0, "title")?, a.at(1, "key")?)?
                .into(),
            Action::DeleteSshKey => client.delete_ssh_key(a.at(0, "id")?)?.into(),
        };

        Ok(output)
    }
}

/// Names of every action, sorted.
pub fn actions() -> Vec<&'static str> {
    let mut names: Vec<_> = Action::ALL.iter().map(|a| a.name()).collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Configuration;

    #[test]
    fn names_round_trip() {
        for action in Action::ALL {
            assert_eq!(action.name().parse::<Action>().unwrap(), *action);
        }
    }

    #[test]
    fn names_are_unique() {
        let names = actions();
        let mut deduped = names.clone();
        deduped.dedup();

        assert_eq!(names, deduped);
    }

    #[test]
    fn sorted_actions_start_with_add() {
        assert!(actions()[0].starts_with("add_"));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(matches!("endpoint".parse::<Action>(), Err(Error::Arguments(_))));
    }

    #[test]
    fn destructive_actions() {
        assert!(Action::DeleteProject.is_destructive());
        assert!(Action::RemoveTeamMember.is_destructive());
        assert!(!Action::CreateProject.is_destructive());
        assert!(!Action::CloseIssue.is_destructive());
    }

    #[test]
    fn missing_positional_argument_fails_before_request() {
        let client = Client::new(Configuration::default().with_endpoint("http://127.0.0.1:9")).unwrap();

        let err = Action::Issue
            .run(&client, &["3".to_owned()], &Params::new())
            .unwrap_err();

        assert_eq!(err.to_string(), "invalid arguments: issue expects <id> as argument 2");
    }
}
