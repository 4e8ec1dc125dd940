use super::LawStore;
use crate::laws::types::{Comment, CommentRow, Law, LawRow, LawsError, Result, Vote, VoteChoice};

impl LawStore {
    /// Get a law by ID, with its comment thread (newest first)
    pub async fn get_law(&self, id: &str) -> Result<Law> {
        let row: LawRow = sqlx::query_as("SELECT * FROM laws WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| LawsError::NotFound(id.to_string()))?;

        let comments = self.comments_for(id).await?;
        Ok(row.into_law(comments))
    }

    /// List all laws in insertion order
    pub async fn list_laws(&self) -> Result<Vec<Law>> {
        let rows: Vec<LawRow> = sqlx::query_as("SELECT * FROM laws ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        let mut laws = Vec::with_capacity(rows.len());
        for row in rows {
            let comments = self.comments_for(&row.id).await?;
            laws.push(row.into_law(comments));
        }
        Ok(laws)
    }

    /// Atomically increment the named tally counter
    pub async fn increment_tally(&self, id: &str, choice: VoteChoice) -> Result<()> {
        let query = match choice {
            VoteChoice::Yes => "UPDATE laws SET yes_votes = yes_votes + 1 WHERE id = ?",
            VoteChoice::No => "UPDATE laws SET no_votes = no_votes + 1 WHERE id = ?",
        };

        let result = sqlx::query(query).bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(LawsError::NotFound(id.to_string()));
        }

        Ok(())
    }

    /// Insert a comment at the head of a law's thread
    ///
    /// The existence check and the insert are a single statement; zero rows
    /// affected means the law is missing.
    pub async fn prepend_comment(&self, law_id: &str, comment: &Comment) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO comments (id, law_id, author, content, created_at)
            SELECT ?, ?, ?, ?, ?
            WHERE EXISTS (SELECT 1 FROM laws WHERE id = ?)
            "#,
        )
        .bind(comment.id.to_string())
        .bind(law_id)
        .bind(&comment.author)
        .bind(&comment.content)
        .bind(comment.created_at)
        .bind(law_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(LawsError::NotFound(law_id.to_string()));
        }

        Ok(())
    }

    /// Persist a vote and bump the matching tally in one transaction
    ///
    /// Fails with NotFound if the law is missing and AlreadyVoted if the
    /// (user, law) pair already has a row; in both cases nothing is written.
    pub async fn record_vote(&self, vote: &Vote) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let query = match vote.choice {
            VoteChoice::Yes => "UPDATE laws SET yes_votes = yes_votes + 1 WHERE id = ?",
            VoteChoice::No => "UPDATE laws SET no_votes = no_votes + 1 WHERE id = ?",
        };

        let updated = sqlx::query(query)
            .bind(&vote.law_id)
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            return Err(LawsError::NotFound(vote.law_id.clone()));
        }

        let inserted = sqlx::query(
            r#"
            INSERT INTO votes (id, user_id, law_id, choice, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(vote.id.to_string())
        .bind(&vote.user_id)
        .bind(&vote.law_id)
        .bind(vote.choice.as_str())
        .bind(vote.created_at)
        .execute(&mut *tx)
        .await;

        match inserted {
            Ok(_) => {}
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(LawsError::AlreadyVoted {
                    user_id: vote.user_id.clone(),
                    law_id: vote.law_id.clone(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        tx.commit().await?;
        Ok(())
    }

    /// Get a user's recorded choice on a law, if any
    pub async fn find_vote(&self, user_id: &str, law_id: &str) -> Result<Option<VoteChoice>> {
        let choice: Option<(String,)> =
            sqlx::query_as("SELECT choice FROM votes WHERE user_id = ? AND law_id = ?")
                .bind(user_id)
                .bind(law_id)
                .fetch_optional(&self.pool)
                .await?;

        choice.map(|(c,)| VoteChoice::parse(&c)).transpose()
    }

    /// Insert a law unless its id already exists; returns whether it was inserted
    pub async fn insert_law(&self, law: &Law) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO laws (id, title, description, mp_comment, link, yes_votes, no_votes)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(&law.id)
        .bind(&law.title)
        .bind(&law.description)
        .bind(&law.mp_comment)
        .bind(&law.link)
        .bind(law.votes.yes)
        .bind(law.votes.no)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        // Seed data may carry a pre-existing thread; insert oldest first so
        // the newest-first read order matches the given sequence.
        for comment in law.comments.iter().rev() {
            self.prepend_comment(&law.id, comment).await?;
        }

        Ok(true)
    }

    /// Clear all laws, votes, and comments and load the given laws
    pub async fn replace_all(&self, laws: &[Law]) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM votes").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM comments").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM laws").execute(&mut *tx).await?;
        tx.commit().await?;

        for law in laws {
            self.insert_law(law).await?;
        }
        Ok(())
    }

    /// Comment thread for a law, newest first (reverse insertion order)
    async fn comments_for(&self, law_id: &str) -> Result<Vec<Comment>> {
        let rows: Vec<CommentRow> = sqlx::query_as(
            r#"
            SELECT id, author, content, created_at
            FROM comments
            WHERE law_id = ?
            ORDER BY rowid DESC
            "#,
        )
        .bind(law_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }
}
