pub mod issue_comment;
pub mod issues;
pub mod pull_request;

use crate::app::App;
use octocrab::models::webhook_events::payload::{
    IssueCommentWebhookEventAction, IssueCommentWebhookEventPayload, IssuesWebhookEventAction,
    IssuesWebhookEventPayload, PullRequestWebhookEventAction, PullRequestWebhookEventPayload,
};
use octocrab::models::webhook_events::{WebhookEvent, WebhookEventPayload};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// One inbound delivery, classified once so handlers never look at event
/// names or actions again.
#[derive(Debug)]
pub enum Event {
    CommentOnIssue(Box<IssueCommentWebhookEventPayload>),
    CommentOnPull(Box<IssueCommentWebhookEventPayload>),
    PullOpened(Box<PullRequestWebhookEventPayload>),
    IssueOpened(Box<IssuesWebhookEventPayload>),
    Unhandled,
}

impl Event {
    pub fn classify(payload: WebhookEventPayload) -> Self {
        match payload {
            WebhookEventPayload::IssueComment(p)
                if p.action == IssueCommentWebhookEventAction::Created =>
            {
                if p.issue.pull_request.is_some() || p.issue.html_url.path().contains("/pull/") {
                    Event::CommentOnPull(p)
                } else {
                    Event::CommentOnIssue(p)
                }
            },
            WebhookEventPayload::PullRequest(p)
                if p.action == PullRequestWebhookEventAction::Opened =>
            {
                Event::PullOpened(p)
            },
            WebhookEventPayload::Issues(p) if p.action == IssuesWebhookEventAction::Opened => {
                Event::IssueOpened(p)
            },
            _ => Event::Unhandled,
        }
    }
}

/// Entry point for a delivery whose body is valid JSON. Returns the handle
/// of the spawned handler, or `None` when nothing runs. Handlers are
/// detached: the caller is free to drop the handle and answer the webhook
/// immediately.
pub fn receive(app: &App, event_name: &str, body: &[u8]) -> Option<JoinHandle<()>> {
    let event = match WebhookEvent::try_from_header_and_body(event_name, body) {
        Ok(event) => event,
        Err(e) => {
            error!(
                %e,
                "Failed to parse {} event, octocrab might be outdated or github's api updated",
                event_name
            );
            return None;
        },
    };

    let sender = event
        .sender
        .as_ref()
        .map(|sender| sender.login.as_str())
        .unwrap_or_default();

    if sender == &*app.bot_login {
        debug!("Ignoring {} event sent by the bot itself", event_name);
        return None;
    }

    info!("Received GitHub event {} from {}", event_name, sender);

    dispatch(app, Event::classify(event.specific))
}

pub fn dispatch(app: &App, event: Event) -> Option<JoinHandle<()>> {
    let tracker = app.tracker.clone();

    let task = match event {
        Event::CommentOnIssue(p) => tokio::spawn(async move {
            log_failure(issue_comment::handle_translation_claim(p, tracker.as_ref()).await)
        }),
        Event::CommentOnPull(p) => tokio::spawn(async move {
            log_failure(issue_comment::handle_review_claim(p, tracker.as_ref()).await)
        }),
        Event::PullOpened(p) => tokio::spawn(async move {
            log_failure(pull_request::handle(p, tracker.as_ref()).await)
        }),
        Event::IssueOpened(p) => tokio::spawn(async move {
            log_failure(issues::handle(p, tracker.as_ref()).await)
        }),
        Event::Unhandled => {
            debug!("No response.");
            return None;
        },
    };

    Some(task)
}

fn log_failure(result: anyhow::Result<()>) {
    if let Err(e) = result {
        error!("{:#}", e);
    }
}
