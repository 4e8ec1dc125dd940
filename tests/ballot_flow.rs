//! End-to-end ballot flow over the core service.

use agora_core::{BallotService, Law, LawStore, LawsError, Tally, VoteChoice};
use tempfile::TempDir;

async fn service_with_bill(id: &str) -> (BallotService, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = LawStore::from_path(&dir.path().join("ballot_flow.db"))
        .await
        .unwrap();

    let law = Law {
        id: id.to_string(),
        title: "Test Bill".to_string(),
        description: "A bill for testing.".to_string(),
        mp_comment: String::new(),
        link: String::new(),
        votes: Tally::default(),
        comments: Vec::new(),
    };
    store.insert_law(&law).await.unwrap();

    (BallotService::new(store), dir)
}

#[tokio::test]
async fn bill1_scenario() {
    let (service, _dir) = service_with_bill("BILL1").await;

    // Starts clean
    let (law, _) = service.law_for_user("BILL1", None).await.unwrap();
    assert_eq!(law.votes, Tally { yes: 0, no: 0 });
    assert!(law.comments.is_empty());

    // u1 votes yes
    let law = service
        .submit_vote("BILL1", "u1", VoteChoice::Yes)
        .await
        .unwrap();
    assert_eq!(law.votes, Tally { yes: 1, no: 0 });

    // u1 votes again: rejected, tally unchanged
    let result = service.submit_vote("BILL1", "u1", VoteChoice::Yes).await;
    assert!(matches!(result, Err(LawsError::AlreadyVoted { .. })));
    let (law, user_vote) = service.law_for_user("BILL1", Some("u1")).await.unwrap();
    assert_eq!(law.votes, Tally { yes: 1, no: 0 });
    assert_eq!(user_vote, Some(VoteChoice::Yes));

    // u2 votes no
    let law = service
        .submit_vote("BILL1", "u2", VoteChoice::No)
        .await
        .unwrap();
    assert_eq!(law.votes, Tally { yes: 1, no: 1 });

    // Alice then Bob comment; thread reads newest first
    let law = service
        .submit_comment("BILL1", "Alice", "hello")
        .await
        .unwrap();
    assert_eq!(law.comments.len(), 1);
    assert_eq!(law.comments[0].author, "Alice");
    assert_eq!(law.comments[0].content, "hello");

    let law = service.submit_comment("BILL1", "Bob", "hi").await.unwrap();
    let authors: Vec<&str> = law.comments.iter().map(|c| c.author.as_str()).collect();
    assert_eq!(authors, vec!["Bob", "Alice"]);

    // Read-your-write: a fresh read matches the last returned state
    let (read_back, _) = service.law_for_user("BILL1", None).await.unwrap();
    assert_eq!(read_back.votes, law.votes);
    assert_eq!(read_back.comments.len(), law.comments.len());
}

#[tokio::test]
async fn unknown_law_is_not_found_everywhere() {
    let (service, _dir) = service_with_bill("BILL1").await;

    assert!(matches!(
        service.law_for_user("NOPE", None).await,
        Err(LawsError::NotFound(_))
    ));
    assert!(matches!(
        service.submit_vote("NOPE", "u1", VoteChoice::Yes).await,
        Err(LawsError::NotFound(_))
    ));
    assert!(matches!(
        service.submit_comment("NOPE", "Alice", "hello").await,
        Err(LawsError::NotFound(_))
    ));
}

#[tokio::test]
async fn tallies_accumulate_across_users() {
    let (service, _dir) = service_with_bill("BILL1").await;

    for (user, choice) in [
        ("u1", VoteChoice::Yes),
        ("u2", VoteChoice::Yes),
        ("u3", VoteChoice::No),
        ("u4", VoteChoice::Yes),
    ] {
        service.submit_vote("BILL1", user, choice).await.unwrap();
    }

    let (law, _) = service.law_for_user("BILL1", None).await.unwrap();
    assert_eq!(law.votes, Tally { yes: 3, no: 1 });
}
