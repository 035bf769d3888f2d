use crate::github::client::Tracker;
use crate::workflow::{RECOMMENDATION_MARKER, RECOMMENDATION_THANKS};
use octocrab::models::webhook_events::payload::IssuesWebhookEventPayload;
use tracing::{debug, info};

pub async fn handle(
    payload: Box<IssuesWebhookEventPayload>,
    tracker: &dyn Tracker,
) -> anyhow::Result<()> {
    let issue = payload.issue;

    if issue.title.contains(RECOMMENDATION_MARKER) {
        debug!("{} recommended an article in #{}", issue.user.login, issue.number);
        tracker.add_comment(issue.number, RECOMMENDATION_THANKS).await?;
        info!("Reply issue #{} with title {} successfully.", issue.number, issue.title);
    }

    Ok(())
}
