use crate::github::client::Tracker;
use crate::utils::extract_reference;
use crate::workflow::{self, Label};
use anyhow::Context;
use octocrab::models::webhook_events::payload::PullRequestWebhookEventPayload;
use tracing::{debug, error, info};

/// A translation was submitted: open the pull request for review claims and
/// move the issue it references from translating to waiting for reviewers.
pub async fn handle(
    payload: Box<PullRequestWebhookEventPayload>,
    tracker: &dyn Tracker,
) -> anyhow::Result<()> {
    let pull = payload.pull_request;
    let author = pull.user.as_ref().map(|user| user.login.as_str()).unwrap_or_default();

    debug!("Pull #{} opened by {}.", pull.number, author);
    debug!("Trying to add label \"{}\" to pull {}.", Label::ReviewClaim, pull.number);

    tracker
        .add_labels(pull.number, &[Label::ReviewClaim])
        .await
        .with_context(|| {
            format!("Failed to add label \"{}\" to pull {}", Label::ReviewClaim, pull.number)
        })?;

    info!("Add label \"{}\" to pull {} successfully.", Label::ReviewClaim, pull.number);

    let Some(reference) = pull.body.as_deref().and_then(extract_reference) else {
        return Ok(());
    };

    debug!("Got the reference #{} from pull #{}.", reference, pull.number);

    let announcement = workflow::pull_request_address(pull.number);
    let (announced, untranslated, labelled) = tokio::join!(
        tracker.add_comment(reference, &announcement),
        tracker.remove_label(reference, Label::Translating),
        tracker.add_labels(reference, &[Label::PleaseClaimReviewOnPr]),
    );

    match announced.and(untranslated).and(labelled) {
        Ok(()) => info!("Update issue #{} status successfully.", reference),
        Err(e) => error!(
            "Failed to update issue #{} for pull #{}: {:#}",
            reference, pull.number, e
        ),
    }

    Ok(())
}
