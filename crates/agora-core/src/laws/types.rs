//! Law domain types and error definitions
//!
//! Contains the core types shared by the store and the ballot service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Result type for law operations
pub type Result<T> = std::result::Result<T, LawsError>;

/// Law operation error types
#[derive(Debug, thiserror::Error)]
pub enum LawsError {
    /// Law does not exist
    #[error("law not found: {0}")]
    NotFound(String),
    /// The user already has a recorded vote on this law
    #[error("user {user_id} has already voted on law {law_id}")]
    AlreadyVoted {
        /// Voter identifier
        user_id: String,
        /// Law identifier
        law_id: String,
    },
    /// Malformed request payload
    #[error("invalid request: {0}")]
    Validation(String),
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    /// Stored data failed to decode, or an update affected no rows where one was required
    #[error("storage error: {0}")]
    Storage(String),
}

/// A yes/no ballot choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    /// In favour
    Yes,
    /// Against
    No,
}

impl VoteChoice {
    /// Column-safe storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    /// Parse the storage representation
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            other => Err(LawsError::Storage(format!("invalid vote choice: {other}"))),
        }
    }
}

impl std::fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Yes/no vote counters on a law
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Votes in favour
    pub yes: i64,
    /// Votes against
    pub no: i64,
}

/// A comment on a law's thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment ID
    pub id: Uuid,
    /// Author display name (caller-supplied, not verified)
    pub author: String,
    /// Free-text content
    pub content: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment with a server-side id and timestamp
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: author.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// A bill record with its tally and comment thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Law {
    /// Unique law ID (e.g. "BILL1")
    pub id: String,
    /// Bill title
    pub title: String,
    /// Bill description
    pub description: String,
    /// The representative's comment on the bill
    pub mp_comment: String,
    /// External reference link
    pub link: String,
    /// Vote tally
    pub votes: Tally,
    /// Comment thread, newest first
    pub comments: Vec<Comment>,
}

/// A recorded vote, immutable once created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vote {
    /// Unique vote ID
    pub id: Uuid,
    /// Voter identifier (browser-local token, unauthenticated)
    pub user_id: String,
    /// Law the vote applies to
    pub law_id: String,
    /// The choice cast
    pub choice: VoteChoice,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Vote {
    /// Create a new vote with a server-side id and timestamp
    pub fn new(
        user_id: impl Into<String>,
        law_id: impl Into<String>,
        choice: VoteChoice,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            law_id: law_id.into(),
            choice,
            created_at: Utc::now(),
        }
    }
}

/// Internal row type for law queries
#[derive(FromRow)]
pub(super) struct LawRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub mp_comment: String,
    pub link: String,
    pub yes_votes: i64,
    pub no_votes: i64,
}

impl LawRow {
    /// Assemble a full law from the row plus its comment thread
    pub(super) fn into_law(self, comments: Vec<Comment>) -> Law {
        Law {
            id: self.id,
            title: self.title,
            description: self.description,
            mp_comment: self.mp_comment,
            link: self.link,
            votes: Tally {
                yes: self.yes_votes,
                no: self.no_votes,
            },
            comments,
        }
    }
}

/// Internal row type for comment queries
#[derive(FromRow)]
pub(super) struct CommentRow {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = LawsError;

    fn try_from(row: CommentRow) -> Result<Self> {
        Ok(Comment {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| LawsError::Storage(format!("invalid comment ID: {e}")))?,
            author: row.author,
            content: row.content,
            created_at: row.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_choice_roundtrip() {
        assert_eq!(VoteChoice::parse("yes").unwrap(), VoteChoice::Yes);
        assert_eq!(VoteChoice::parse("no").unwrap(), VoteChoice::No);
        assert_eq!(VoteChoice::Yes.as_str(), "yes");
        assert!(VoteChoice::parse("maybe").is_err());
    }

    #[test]
    fn test_vote_choice_serde() {
        let json = serde_json::to_string(&VoteChoice::Yes).unwrap();
        assert_eq!(json, "\"yes\"");
        let parsed: VoteChoice = serde_json::from_str("\"no\"").unwrap();
        assert_eq!(parsed, VoteChoice::No);
    }

    #[test]
    fn test_comment_new_sets_id_and_timestamp() {
        let a = Comment::new("Alice", "hello");
        let b = Comment::new("Alice", "hello");
        assert_ne!(a.id, b.id);
        assert_eq!(a.author, "Alice");
        assert_eq!(a.content, "hello");
    }

    #[test]
    fn test_vote_new() {
        let vote = Vote::new("u1", "BILL1", VoteChoice::Yes);
        assert_eq!(vote.user_id, "u1");
        assert_eq!(vote.law_id, "BILL1");
        assert_eq!(vote.choice, VoteChoice::Yes);
    }
}
