//! User entity - an account that writes and interacts with posts

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// User account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub country: Option<String>,
    pub twitter_acc: Option<String>,
    pub github_acc: Option<String>,
    pub linkedin_acc: Option<String>,
    pub another_acc: Option<String>,
    pub profile_views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: UserId, email: String, username: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            username,
            name,
            bio: None,
            avatar: None,
            country: None,
            twitter_acc: None,
            github_acc: None,
            linkedin_acc: None,
            another_acc: None,
            profile_views: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// The public subset shown next to a post or comment
    pub fn summary(&self) -> AuthorSummary {
        AuthorSummary {
            id: self.id,
            username: self.username.clone(),
            name: self.name.clone(),
            bio: self.bio.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Author fields joined onto posts and comments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorSummary {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

/// Derive the username base from an email address: the local part,
/// lowercased, with every character outside `[a-z0-9]` replaced by `_`.
pub fn username_base(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default().to_lowercase();
    local
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '_' })
        .collect()
}

/// The n-th username candidate: the base, then `base_1`, `base_2`, ...
pub fn username_candidate(base: &str, attempt: u32) -> String {
    if attempt == 0 {
        base.to_string()
    } else {
        format!("{base}_{attempt}")
    }
}
