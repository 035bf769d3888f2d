use crate::github::client::Tracker;
use crate::utils::{contains_any, extract_reference};
use crate::workflow::{self, Label, CLAIM_KEYWORDS};
use anyhow::Context;
use octocrab::models::webhook_events::payload::IssueCommentWebhookEventPayload;
use tracing::{debug, error, info};

/// A translator claims an issue that is waiting for one.
pub async fn handle_translation_claim(
    payload: Box<IssueCommentWebhookEventPayload>,
    tracker: &dyn Tracker,
) -> anyhow::Result<()> {
    let IssueCommentWebhookEventPayload { issue, comment, .. } = *payload;
    let login = &comment.user.login;
    let message = comment.body.as_deref().unwrap_or_default();

    if !Label::TranslationClaim.is_in(&issue.labels) {
        return Ok(());
    }

    if !contains_any(message, CLAIM_KEYWORDS) {
        debug!(
            "Can not handle request of {} from #{} with message {}.",
            login, issue.number, message
        );
        return Ok(());
    }

    let reply = workflow::translation_claimed(login);
    let (replied, unclaimed, labelled) = tokio::join!(
        tracker.add_comment(issue.number, &reply),
        tracker.remove_label(issue.number, Label::TranslationClaim),
        tracker.add_labels(issue.number, &[Label::Translating]),
    );
    replied.and(unclaimed).and(labelled).with_context(|| {
        format!("Failed to hand issue #{} to {}", issue.number, login)
    })?;

    info!(
        "Handle request of {} from #{} with message {} successfully.",
        login, issue.number, message
    );

    Ok(())
}

/// A reviewer claims a pull request. The first claimer marks the pull
/// request as being reviewed; the next one closes the claim.
pub async fn handle_review_claim(
    payload: Box<IssueCommentWebhookEventPayload>,
    tracker: &dyn Tracker,
) -> anyhow::Result<()> {
    let IssueCommentWebhookEventPayload { issue: pull, comment, .. } = *payload;
    let login = &comment.user.login;
    let message = comment.body.as_deref().unwrap_or_default();

    if !Label::ReviewClaim.is_in(&pull.labels) {
        return Ok(());
    }

    if !contains_any(message, CLAIM_KEYWORDS) {
        debug!(
            "Can not handle request of {} from #{} with message {}.",
            login, pull.number, message
        );
        return Ok(());
    }

    let has_reviewer = Label::Reviewing.is_in(&pull.labels);

    debug!("Trying to update PR #{} status.", pull.number);

    let updated = if has_reviewer {
        let reply = workflow::another_reviewer(login);
        let (replied, unclaimed) = tokio::join!(
            tracker.add_comment(pull.number, &reply),
            tracker.remove_label(pull.number, Label::ReviewClaim),
        );
        replied.and(unclaimed)
    } else {
        let reply = workflow::first_reviewer(login);
        let (replied, labelled) = tokio::join!(
            tracker.add_comment(pull.number, &reply),
            tracker.add_labels(pull.number, &[Label::Reviewing]),
        );
        replied.and(labelled)
    };
    updated.with_context(|| format!("Failed to update PR #{} status", pull.number))?;

    info!("Update PR #{} status successfully.", pull.number);

    if let Some(reference) = pull.body.as_deref().and_then(extract_reference) {
        debug!("Trying to update reference issue #{} status.", reference);

        let result = if has_reviewer {
            tracker
                .remove_label(reference, Label::PleaseClaimReviewOnPr)
                .await
        } else {
            tracker.add_labels(reference, &[Label::Reviewing]).await
        };

        match result {
            Ok(()) => info!("Update reference issue #{} status successfully.", reference),
            Err(e) => error!(
                "Failed to update reference issue #{} of PR #{}: {:#}",
                reference, pull.number, e
            ),
        }
    }

    info!(
        "Handle request of {} from #{} with message {} successfully.",
        login, pull.number, message
    );

    Ok(())
}
