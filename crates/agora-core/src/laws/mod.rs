//! Law records, votes, and comments
//!
//! The one invariant worth protecting lives here: at most one vote per
//! (user, law) pair. Everything else is plain reads and single-document
//! updates.

pub mod service;
pub mod store;
pub mod types;

pub use service::BallotService;
pub use store::LawStore;
pub use types::{Comment, Law, LawsError, Result, Tally, Vote, VoteChoice};
