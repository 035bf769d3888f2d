use crate::config::Config;
use crate::workflow::Label;
use async_trait::async_trait;
use axum::http::StatusCode;
use octocrab::Octocrab;
use tracing::debug;

/// The three mutations the workflow issues against the tracker. None of them
/// retry, a failure is returned to the caller as is.
#[async_trait]
pub trait Tracker: Send + Sync {
    async fn add_comment(&self, number: u64, body: &str) -> anyhow::Result<()>;

    /// Removing a label the issue does not carry is not an error.
    async fn remove_label(&self, number: u64, label: Label) -> anyhow::Result<()>;

    /// Labels must already exist on the repository.
    async fn add_labels(&self, number: u64, labels: &[Label]) -> anyhow::Result<()>;
}

/// [`Tracker`] backed by the GitHub REST API, bound to a single repository.
pub struct GithubTracker {
    octocrab: Octocrab,
    owner: String,
    repo: String,
}

impl GithubTracker {
    pub fn new(octocrab: Octocrab, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            octocrab,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let mut builder = Octocrab::builder().personal_token(config.token.clone());

        if let Some(api_url) = &config.api_url {
            builder = builder.base_uri(api_url.as_str())?;
        }

        Ok(Self::new(builder.build()?, &config.owner, &config.repo))
    }
}

#[async_trait]
impl Tracker for GithubTracker {
    async fn add_comment(&self, number: u64, body: &str) -> anyhow::Result<()> {
        self.octocrab
            .issues(&self.owner, &self.repo)
            .create_comment(number, body)
            .await?;

        Ok(())
    }

    async fn remove_label(&self, number: u64, label: Label) -> anyhow::Result<()> {
        let removed = self
            .octocrab
            .issues(&self.owner, &self.repo)
            .remove_label(number, label.text())
            .await;

        match removed {
            Ok(_) => Ok(()),
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == StatusCode::NOT_FOUND =>
            {
                debug!(
                    "Removing label \"{}\" from #{} returned 404: {}",
                    label, number, source.message
                );
                Ok(())
            },
            Err(e) => Err(e.into()),
        }
    }

    async fn add_labels(&self, number: u64, labels: &[Label]) -> anyhow::Result<()> {
        let labels: Vec<String> = labels.iter().map(|label| label.text().to_string()).collect();

        self.octocrab
            .issues(&self.owner, &self.repo)
            .add_labels(number, &labels)
            .await?;

        Ok(())
    }
}
