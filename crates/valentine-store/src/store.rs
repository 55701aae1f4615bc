//! Proposal store implementations.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use valentine_core::{NewProposal, Proposal, ProposalId, ProposalUpdate, Result, ValentineError};

/// Upper bound on records returned by [`ProposalStore::list`].
pub const LIST_LIMIT: usize = 1000;

/// Trait for proposal stores.
#[async_trait]
pub trait ProposalStore: Send + Sync {
    /// Validate a request and persist it under a fresh id.
    async fn create(&self, request: NewProposal) -> Result<Proposal>;

    /// Get a proposal by id.
    async fn get(&self, id: &ProposalId) -> Result<Option<Proposal>>;

    /// Apply a partial update and return the updated record.
    async fn update(&self, id: &ProposalId, update: ProposalUpdate) -> Result<Proposal>;

    /// Proposals in creation order, at most [`LIST_LIMIT`].
    async fn list(&self) -> Result<Vec<Proposal>>;

    /// Number of stored proposals.
    async fn len(&self) -> usize;
}

#[derive(Default)]
struct Records {
    by_id: HashMap<ProposalId, Proposal>,
    /// Insertion order.
    order: Vec<ProposalId>,
}

/// In-memory implementation of ProposalStore.
#[derive(Clone, Default)]
pub struct InMemoryProposalStore {
    records: Arc<RwLock<Records>>,
}

impl InMemoryProposalStore {
    /// Create a new in-memory proposal store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist an already-built record. Fails if the id is taken.
    pub async fn insert(&self, proposal: Proposal) -> Result<()> {
        let mut records = self.records.write().await;

        if records.by_id.contains_key(&proposal.id) {
            return Err(ValentineError::Internal(format!(
                "Proposal id {} already exists",
                proposal.id
            )));
        }

        records.order.push(proposal.id.clone());
        records.by_id.insert(proposal.id.clone(), proposal);
        Ok(())
    }
}

#[async_trait]
impl ProposalStore for InMemoryProposalStore {
    async fn create(&self, request: NewProposal) -> Result<Proposal> {
        let proposal = Proposal::create(request)?;
        self.insert(proposal.clone()).await?;

        tracing::info!(
            proposal_id = %proposal.id,
            character = %proposal.character_choice,
            "Created proposal"
        );

        Ok(proposal)
    }

    async fn get(&self, id: &ProposalId) -> Result<Option<Proposal>> {
        let records = self.records.read().await;
        Ok(records.by_id.get(id).cloned())
    }

    async fn update(&self, id: &ProposalId, update: ProposalUpdate) -> Result<Proposal> {
        let mut records = self.records.write().await;

        let proposal = records
            .by_id
            .get_mut(id)
            .ok_or_else(|| ValentineError::proposal_not_found(id.as_str()))?;
        proposal.apply(update);

        tracing::info!(proposal_id = %id, accepted = update.accepted, "Updated proposal");

        Ok(proposal.clone())
    }

    async fn list(&self) -> Result<Vec<Proposal>> {
        let records = self.records.read().await;

        let proposals = records
            .order
            .iter()
            .filter_map(|id| records.by_id.get(id).cloned())
            .take(LIST_LIMIT)
            .collect();

        Ok(proposals)
    }

    async fn len(&self) -> usize {
        self.records.read().await.by_id.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valentine_core::CharacterKey;

    fn request(name: &str) -> NewProposal {
        NewProposal::builder()
            .valentine_name(name)
            .character(CharacterKey::Bear)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = InMemoryProposalStore::new();

        let created = store.create(request("Sam")).await.unwrap();
        let fetched = store.get(&created.id).await.unwrap().unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.character_choice, "bear");
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = InMemoryProposalStore::new();
        let id = ProposalId::new("zzz").unwrap();
        assert!(store.get(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid() {
        let store = InMemoryProposalStore::new();
        let result = store
            .create(NewProposal {
                valentine_name: String::new(),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(ValentineError::Validation { .. })));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_update() {
        let store = InMemoryProposalStore::new();
        let created = store.create(request("Sam")).await.unwrap();

        let updated = store.update(&created.id, ProposalUpdate::accept()).await.unwrap();
        assert_eq!(updated.accepted, Some(true));
        assert!(updated.accepted_at.is_some());

        let stored = store.get(&created.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let store = InMemoryProposalStore::new();
        let id = ProposalId::new("zzz").unwrap();

        let err = store.update(&id, ProposalUpdate::accept()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_in_creation_order() {
        let store = InMemoryProposalStore::new();
        for name in ["Ann", "Ben", "Cat"] {
            store.create(request(name)).await.unwrap();
        }

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.valentine_name)
            .collect();
        assert_eq!(names, ["Ann", "Ben", "Cat"]);
    }

    #[tokio::test]
    async fn test_insert_duplicate_id() {
        let store = InMemoryProposalStore::new();
        let proposal = Proposal::create(request("Sam")).unwrap();

        store.insert(proposal.clone()).await.unwrap();
        assert!(store.insert(proposal).await.is_err());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_is_capped_in_creation_order() {
        let store = InMemoryProposalStore::new();
        for i in 0..=LIST_LIMIT {
            store.create(request(&format!("p{i}"))).await.unwrap();
        }
        assert_eq!(store.len().await, LIST_LIMIT + 1);

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), LIST_LIMIT);
        assert_eq!(listed[0].valentine_name, "p0");
        assert_eq!(listed[LIST_LIMIT - 1].valentine_name, "p999");
        assert!(listed.iter().all(|p| p.valentine_name != "p1000"));
    }
}
