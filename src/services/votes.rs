/// Vote service - toggles the live vote for a `(post_id, client_id)` pair.
use mongodb::bson::oid::ObjectId;
use mongodb::Database;

use crate::db::vote_repo;
use crate::error::Result;
use crate::metrics;
use crate::models::VoteRecord;
use crate::services::require_post;

/// Outcome of a toggle call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteToggle {
    Voted { id: ObjectId },
    Unvoted,
}

/// Mutation implied by the current state of the pair.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ToggleAction {
    Insert,
    Remove(ObjectId),
}

fn toggle_action(existing: Option<&VoteRecord>) -> ToggleAction {
    match existing {
        Some(vote) => ToggleAction::Remove(vote.id),
        None => ToggleAction::Insert,
    }
}

pub struct VoteService {
    db: Database,
}

impl VoteService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Toggle the vote for `(post_id, client_id)`: delete the live vote if
    /// one exists, insert one otherwise. The post must exist.
    ///
    /// The find and the mutation are two independent store operations;
    /// concurrent toggles for the same pair can race and strand duplicate
    /// votes. No store-level uniqueness constraint guards the pair.
    pub async fn toggle(&self, post_id: &str, client_id: &str) -> Result<VoteToggle> {
        require_post(&self.db, post_id).await?;

        let existing = vote_repo::find_vote(&self.db, post_id, client_id).await?;
        match toggle_action(existing.as_ref()) {
            ToggleAction::Remove(vote_id) => {
                vote_repo::delete_vote_by_id(&self.db, vote_id).await?;
                metrics::VOTES_TOGGLED_TOTAL
                    .with_label_values(&["unvoted"])
                    .inc();
                Ok(VoteToggle::Unvoted)
            }
            ToggleAction::Insert => {
                let record = VoteRecord::new(post_id, client_id);
                let id = vote_repo::insert_vote(&self.db, &record).await?;
                metrics::VOTES_TOGGLED_TOTAL
                    .with_label_values(&["voted"])
                    .inc();
                Ok(VoteToggle::Voted { id })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_inserts_when_no_vote_exists() {
        assert_eq!(toggle_action(None), ToggleAction::Insert);
    }

    #[test]
    fn test_toggle_removes_the_existing_vote() {
        let vote = VoteRecord::new("pid", "client-1");
        assert_eq!(toggle_action(Some(&vote)), ToggleAction::Remove(vote.id));
    }

    #[test]
    fn test_two_toggles_round_trip() {
        // First toggle: nothing live, so insert.
        assert_eq!(toggle_action(None), ToggleAction::Insert);
        let inserted = VoteRecord::new("pid", "client-1");

        // Second toggle observes the inserted vote and removes exactly it,
        // returning the pair to zero live votes.
        match toggle_action(Some(&inserted)) {
            ToggleAction::Remove(id) => assert_eq!(id, inserted.id),
            other => panic!("expected removal, got {:?}", other),
        }
    }
}
