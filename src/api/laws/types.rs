use agora_core::{Comment, Law, VoteChoice};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Wire representation of a ballot choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceView {
    Yes,
    No,
}

impl From<ChoiceView> for VoteChoice {
    fn from(choice: ChoiceView) -> Self {
        match choice {
            ChoiceView::Yes => VoteChoice::Yes,
            ChoiceView::No => VoteChoice::No,
        }
    }
}

impl From<VoteChoice> for ChoiceView {
    fn from(choice: VoteChoice) -> Self {
        match choice {
            VoteChoice::Yes => ChoiceView::Yes,
            VoteChoice::No => ChoiceView::No,
        }
    }
}

/// Vote counters for API responses
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct TallyView {
    pub yes: i64,
    pub no: i64,
}

/// Comment view for API responses
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentView {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Law view for API responses
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LawView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub mp_comment: String,
    pub link: String,
    pub votes: TallyView,
    pub comments: Vec<CommentView>,
}

/// Law detail plus the requesting user's recorded choice (`null` if none)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserLawView {
    #[serde(flatten)]
    pub law: LawView,
    #[serde(rename = "userVote")]
    pub user_vote: Option<ChoiceView>,
}

/// POST body for a law, discriminated by the `type` field
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SubmitRequest {
    /// Cast a yes/no vote
    Vote {
        vote: ChoiceView,
        #[serde(rename = "userId")]
        user_id: String,
    },
    /// Post a comment; the author string is taken as given
    Comment {
        author: String,
        content: String,
        #[serde(rename = "userId", default)]
        user_id: Option<String>,
    },
}

/// Query parameters for law detail
#[derive(Debug, Default, Deserialize)]
pub struct LawQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Convert a Law to a LawView for API responses
pub fn law_to_view(law: Law) -> LawView {
    LawView {
        id: law.id,
        title: law.title,
        description: law.description,
        mp_comment: law.mp_comment,
        link: law.link,
        votes: TallyView {
            yes: law.votes.yes,
            no: law.votes.no,
        },
        comments: law.comments.into_iter().map(comment_to_view).collect(),
    }
}

fn comment_to_view(comment: Comment) -> CommentView {
    CommentView {
        id: comment.id,
        author: comment.author,
        content: comment.content,
        timestamp: comment.created_at,
    }
}
