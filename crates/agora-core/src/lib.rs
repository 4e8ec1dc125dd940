//! Agora Core - Civic ballot engine
//!
//! This crate provides the domain model and persistence for the Agora
//! platform, including:
//! - Laws: bill records with vote tallies and comment threads
//! - Store: SQLite-backed law/vote/comment storage
//! - Service: the vote/comment contract (one vote per user per law)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod laws;

pub use laws::service::BallotService;
pub use laws::store::LawStore;
pub use laws::types::{Comment, Law, LawsError, Result, Tally, Vote, VoteChoice};
