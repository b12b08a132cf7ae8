//! Repository identity recovered from the fork's `.git/config`.

use serde::{Deserialize, Serialize};

const GITHUB_PREFIX: &str = "https://github.com/";
const ORIGIN_SECTION: &str = "[remote \"origin\"]";

/// Owner and fork name of the user's Hydra fork on GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryIdentity {
    pub owner: String,
    pub fork: String,
}

impl RepositoryIdentity {
    pub fn new(owner: impl Into<String>, fork: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            fork: fork.into(),
        }
    }

    /// The owner's GitHub profile.
    pub fn profile_url(&self) -> String {
        format!("{GITHUB_PREFIX}{}", self.owner)
    }

    /// Hosted viewer page for an exported example.
    pub fn viewer_url(&self, file_name: &str) -> String {
        format!(
            "http://hydrashare.github.io/hydra/viewer?owner={}&fork={}&id={}",
            self.owner, self.fork, file_name
        )
    }

    /// Raw-content URL of an example's thumbnail on the fork's master branch.
    pub fn thumbnail_url(&self, file_name: &str) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/master/{}/thumbnail.png",
            self.owner, self.fork, file_name
        )
    }
}

/// Classification of a single git config line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLine {
    /// `[remote "origin"]`
    OriginSection,
    /// Any other `[...]` section header.
    OtherSection,
    /// A line carrying a well-formed GitHub HTTPS remote URL.
    GithubUrl(RepositoryIdentity),
    /// A line mentioning a GitHub URL that could not be split into owner/fork.
    MalformedUrl,
    Other,
}

impl ConfigLine {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            return if trimmed == ORIGIN_SECTION {
                Self::OriginSection
            } else {
                Self::OtherSection
            };
        }
        if !trimmed.contains(GITHUB_PREFIX) {
            return Self::Other;
        }
        match parse_github_url(trimmed) {
            Some(identity) => Self::GithubUrl(identity),
            None => Self::MalformedUrl,
        }
    }
}

/// Extract owner/fork from text containing `https://github.com/<owner>/<fork>(.git)`.
pub fn parse_github_url(text: &str) -> Option<RepositoryIdentity> {
    let (_, rest) = text.split_once(GITHUB_PREFIX)?;
    let rest = rest.trim().trim_end_matches('/');
    let mut segments = rest.split('/');
    let owner = segments.next()?.trim();
    let fork = segments.last()?.trim();
    let fork = fork.strip_suffix(".git").unwrap_or(fork);

    if owner.is_empty() || fork.is_empty() {
        return None;
    }
    Some(RepositoryIdentity::new(owner, fork))
}

/// Recover the identity of the `origin` remote from git config contents.
///
/// Seeing `[remote "origin"]` arms the parser; the first GitHub URL line
/// after it yields the identity. Any other section header disarms it, so
/// URLs of other remotes are never picked up.
pub fn parse_git_config(content: &str) -> Option<RepositoryIdentity> {
    let mut in_origin = false;
    for line in content.lines() {
        match ConfigLine::parse(line) {
            ConfigLine::OriginSection => in_origin = true,
            ConfigLine::OtherSection => in_origin = false,
            ConfigLine::GithubUrl(identity) if in_origin => return Some(identity),
            _ => {}
        }
    }
    None
}
