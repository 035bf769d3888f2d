//! Fixed vocabulary of the translation workflow: label names, trigger
//! phrases and reply templates. Everything here must match the labels
//! configured on the repository exactly.

use octocrab::models;

crate::vocabulary! {
    pub enum Label {
        /// Issue is waiting for a translator.
        TranslationClaim => "翻译认领",
        /// A translator has claimed the issue.
        Translating => "正在翻译",
        /// Pull request is waiting for reviewers.
        ReviewClaim => "校对认领",
        /// At least one reviewer has claimed the pull request.
        Reviewing => "正在校对",
        /// Translation is done, reviewers should claim on the pull request.
        PleaseClaimReviewOnPr => "请到对应的 PR 下认领校对",
    }
}

impl Label {
    /// Linear scan of a label snapshot delivered with the event.
    pub fn is_in(self, labels: &[models::Label]) -> bool {
        labels.iter().any(|label| label.name == self.text())
    }
}

/// Any of these in a comment counts as a claim.
pub const CLAIM_KEYWORDS: &[&str] = &["认领", "claim", "Claim"];

/// Title marker of issues recommending articles for translation.
pub const RECOMMENDATION_MARKER: &str = "推荐优秀英文文章";

pub fn translation_claimed(login: &str) -> String {
    format!("@{} 棒极啦 :tada:", login)
}

pub fn first_reviewer(login: &str) -> String {
    format!("@{} 好的呢 :beer:", login)
}

pub fn another_reviewer(login: &str) -> String {
    format!("@{} 妥妥哒 :beers:", login)
}

pub fn pull_request_address(pull_number: u64) -> String {
    format!("PR 地址：#{}", pull_number)
}

pub const RECOMMENDATION_THANKS: &str = ":heart: 感谢有你 ♪(*´▽｀*)ノ";
