//! Webhook deliveries shaped like the ones GitHub sends, trimmed to the
//! fields octocrab's models require.

use crate::workflow::Label;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

const REPO_API: &str = "https://api.github.com/repos/xitu/gold-miner";
const REPO_HTML: &str = "https://github.com/xitu/gold-miner";

pub fn user(login: &str) -> Value {
    let api = format!("https://api.github.com/users/{}", login);
    json!({
        "login": login,
        "id": 1,
        "node_id": "MDQ6VXNlcjE=",
        "avatar_url": "https://avatars.githubusercontent.com/u/1",
        "gravatar_id": "",
        "url": api,
        "html_url": format!("https://github.com/{}", login),
        "followers_url": format!("{}/followers", api),
        "following_url": format!("{}/following{{/other_user}}", api),
        "gists_url": format!("{}/gists{{/gist_id}}", api),
        "starred_url": format!("{}/starred{{/owner}}{{/repo}}", api),
        "subscriptions_url": format!("{}/subscriptions", api),
        "organizations_url": format!("{}/orgs", api),
        "repos_url": format!("{}/repos", api),
        "events_url": format!("{}/events{{/privacy}}", api),
        "received_events_url": format!("{}/received_events", api),
        "type": "User",
        "site_admin": false
    })
}

pub fn label(label: Label) -> Value {
    json!({
        "id": 208045946,
        "node_id": "MDU6TGFiZWwyMDgwNDU5NDY=",
        "url": format!("{}/labels/{}", REPO_API, label.text()),
        "name": label.text(),
        "description": null,
        "color": "ededed",
        "default": false
    })
}

/// An issue, or with `pull` set, a pull request as delivered under `issue`.
pub fn issue(number: u64, title: &str, body: Option<&str>, labels: &[Label], pull: bool) -> Value {
    let kind = if pull { "pull" } else { "issues" };
    let mut issue = json!({
        "id": 1000 + number,
        "node_id": "I_kwDOAAABc84AAAAB",
        "url": format!("{}/issues/{}", REPO_API, number),
        "repository_url": REPO_API,
        "labels_url": format!("{}/issues/{}/labels{{/name}}", REPO_API, number),
        "comments_url": format!("{}/issues/{}/comments", REPO_API, number),
        "events_url": format!("{}/issues/{}/events", REPO_API, number),
        "html_url": format!("{}/{}/{}", REPO_HTML, kind, number),
        "number": number,
        "state": "open",
        "title": title,
        "body": body,
        "user": user("alice"),
        "labels": labels.iter().map(|l| label(*l)).collect::<Vec<_>>(),
        "assignees": [],
        "author_association": "CONTRIBUTOR",
        "locked": false,
        "comments": 0,
        "created_at": "2024-01-15T10:30:00Z",
        "updated_at": "2024-01-15T10:30:00Z"
    });

    if pull {
        issue["pull_request"] = json!({
            "url": format!("{}/pulls/{}", REPO_API, number),
            "html_url": format!("{}/pull/{}", REPO_HTML, number),
            "diff_url": format!("{}/pull/{}.diff", REPO_HTML, number),
            "patch_url": format!("{}/pull/{}.patch", REPO_HTML, number)
        });
    }

    issue
}

pub fn comment(issue_number: u64, body: &str, login: &str) -> Value {
    json!({
        "id": 900,
        "node_id": "IC_kwDOAAABc84AAAOE",
        "url": format!("{}/issues/comments/900", REPO_API),
        "html_url": format!("{}/issues/{}#issuecomment-900", REPO_HTML, issue_number),
        "issue_url": format!("{}/issues/{}", REPO_API, issue_number),
        "body": body,
        "user": user(login),
        "author_association": "CONTRIBUTOR",
        "created_at": "2024-01-15T10:30:00Z",
        "updated_at": "2024-01-15T10:30:00Z"
    })
}

pub fn pull_request(number: u64, body: Option<&str>) -> Value {
    json!({
        "url": format!("{}/pulls/{}", REPO_API, number),
        "id": 2000 + number,
        "node_id": "PR_kwDOAAABc84AAAAC",
        "html_url": format!("{}/pull/{}", REPO_HTML, number),
        "number": number,
        "state": "open",
        "locked": false,
        "title": "Translate some article",
        "user": user("alice"),
        "body": body,
        "labels": [],
        "head": { "label": "alice:translate", "ref": "translate", "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e" },
        "base": { "label": "xitu:master", "ref": "master", "sha": "7638417db6d59f3c431d3e1f261cc637155684cd" },
        "draft": false
    })
}

/// `issue_comment` delivery for a comment by `sender` on `issue`.
pub fn issue_comment_delivery(issue: Value, comment_body: &str, sender: &str) -> Value {
    let number = issue["number"].as_u64().unwrap_or_default();
    json!({
        "action": "created",
        "issue": issue,
        "comment": comment(number, comment_body, sender),
        "sender": user(sender)
    })
}

pub fn pull_request_delivery(action: &str, number: u64, body: Option<&str>, sender: &str) -> Value {
    json!({
        "action": action,
        "number": number,
        "pull_request": pull_request(number, body),
        "sender": user(sender)
    })
}

pub fn issues_delivery(action: &str, number: u64, title: &str, sender: &str) -> Value {
    json!({
        "action": action,
        "issue": issue(number, title, None, &[], false),
        "sender": user(sender)
    })
}

/// Deserializes the event-specific payload out of a delivery.
pub fn payload<T: DeserializeOwned>(delivery: Value) -> Box<T> {
    Box::new(serde_json::from_value(delivery).unwrap())
}
