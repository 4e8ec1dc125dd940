//! Vote/comment contract
//!
//! Wraps the store with the submission rules: a law must exist before it can
//! be voted on or commented, and each user gets exactly one vote per law.


use tracing::{info, warn};

use crate::laws::store::LawStore;
use crate::laws::types::{Comment, Law, Result, Vote, VoteChoice};

/// Service enforcing the vote/comment submission contract
pub struct BallotService {
    store: LawStore,
}

impl BallotService {
    /// Create a service over the given store
    pub fn new(store: LawStore) -> Self {
        Self { store }
    }

    /// Get a law together with the given user's recorded choice, if any
    pub async fn law_for_user(
        &self,
        law_id: &str,
        user_id: Option<&str>,
    ) -> Result<(Law, Option<VoteChoice>)> {
        let law = self.store.get_law(law_id).await?;
        let user_vote = match user_id {
            Some(user_id) => self.store.find_vote(user_id, law_id).await?,
            None => None,
        };
        Ok((law, user_vote))
    }

    /// List all laws
    pub async fn list_laws(&self) -> Result<Vec<Law>> {
        self.store.list_laws().await
    }

    /// Cast a vote and return the updated law
    ///
    /// Rejects with NotFound for an unknown law and AlreadyVoted when the
    /// user has a recorded vote on it; the tally is untouched in both cases.
    pub async fn submit_vote(
        &self,
        law_id: &str,
        user_id: &str,
        choice: VoteChoice,
    ) -> Result<Law> {
        let vote = Vote::new(user_id, law_id, choice);
        if let Err(e) = self.store.record_vote(&vote).await {
            warn!(law_id, user_id, error = %e, "vote rejected");
            return Err(e);
        }

        info!(law_id, user_id, choice = %choice, "vote recorded");
        self.store.get_law(law_id).await
    }

    /// Post a comment and return the updated law
    ///
    /// The comment id and timestamp are generated server-side; the author
    /// string is taken as given.
    pub async fn submit_comment(
        &self,
        law_id: &str,
        author: &str,
        content: &str,
    ) -> Result<Law> {
        let comment = Comment::new(author, content);
        self.store.prepend_comment(law_id, &comment).await?;

        info!(law_id, author, "comment posted");
        self.store.get_law(law_id).await
    }

    /// Check that the backing store is reachable
    pub async fn ping(&self) -> Result<()> {
        self.store.ping().await
    }

    /// Access the underlying store (seed/admin paths)
    pub fn store(&self) -> &LawStore {
        &self.store
    }
}
