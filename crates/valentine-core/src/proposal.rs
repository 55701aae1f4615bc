//! Proposal records and the builder used to create them.
//!
//! A [`Proposal`] is created once, fetched any number of times by viewers and
//! updated through [`ProposalUpdate`] when the recipient accepts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::CharacterKey;
use crate::error::{Result, ValentineError};
use crate::types::ProposalId;

/// Message used when the creator leaves the message blank.
pub const DEFAULT_MESSAGE: &str = "Will you be my Valentine?";

/// Maximum length of `valentine_name`, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Maximum length of `custom_message`, in characters.
pub const MAX_MESSAGE_CHARS: usize = 500;

/// A persisted proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    /// Unique identifier, never reused.
    pub id: ProposalId,

    /// Who the proposal is addressed to.
    pub valentine_name: String,

    /// Message shown under the name.
    pub custom_message: Option<String>,

    /// Raw catalog key as submitted by the creator.
    pub character_choice: String,

    /// When the proposal was created.
    pub created_at: DateTime<Utc>,

    /// `None` until the recipient answers.
    pub accepted: Option<bool>,

    /// When the proposal was accepted.
    pub accepted_at: Option<DateTime<Utc>>,
}

/// Request body for creating a proposal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProposal {
    pub valentine_name: String,

    #[serde(default)]
    pub custom_message: Option<String>,

    #[serde(default)]
    pub character_choice: Option<String>,
}

/// Partial update of a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalUpdate {
    pub accepted: bool,
}

impl ProposalUpdate {
    /// The only update the recipient page ever sends.
    pub fn accept() -> Self {
        Self { accepted: true }
    }
}

/// The fields a recipient page needs to render a proposal.
///
/// Every other field of the stored record is ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalView {
    pub valentine_name: String,

    #[serde(default)]
    pub custom_message: Option<String>,

    #[serde(default)]
    pub character_choice: Option<String>,
}

impl ProposalView {
    /// Character to render, falling back to the catalog default.
    pub fn character(&self) -> CharacterKey {
        CharacterKey::resolve(self.character_choice.as_deref())
    }
}

impl From<Proposal> for ProposalView {
    fn from(proposal: Proposal) -> Self {
        Self {
            valentine_name: proposal.valentine_name,
            custom_message: proposal.custom_message,
            character_choice: Some(proposal.character_choice),
        }
    }
}

impl NewProposal {
    /// Create a new builder.
    pub fn builder() -> ProposalBuilder {
        ProposalBuilder::new()
    }

    /// Check length limits.
    pub fn validate(&self) -> Result<()> {
        let name_len = self.valentine_name.chars().count();
        if name_len == 0 {
            return Err(ValentineError::validation(
                "valentine_name",
                "must not be empty",
            ));
        }
        if name_len > MAX_NAME_CHARS {
            return Err(ValentineError::validation(
                "valentine_name",
                format!("must be at most {MAX_NAME_CHARS} characters, got {name_len}"),
            ));
        }

        if let Some(message) = &self.custom_message {
            let message_len = message.chars().count();
            if message_len > MAX_MESSAGE_CHARS {
                return Err(ValentineError::validation(
                    "custom_message",
                    format!("must be at most {MAX_MESSAGE_CHARS} characters, got {message_len}"),
                ));
            }
        }

        Ok(())
    }
}

/// Builder for [`NewProposal`] with a fluent API.
#[derive(Debug, Default)]
pub struct ProposalBuilder {
    valentine_name: Option<String>,
    custom_message: Option<String>,
    character: Option<CharacterKey>,
}

impl ProposalBuilder {
    /// Create a new ProposalBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recipient's name.
    pub fn valentine_name(mut self, name: impl Into<String>) -> Self {
        self.valentine_name = Some(name.into());
        self
    }

    /// Set the message.
    pub fn custom_message(mut self, message: impl Into<String>) -> Self {
        self.custom_message = Some(message.into());
        self
    }

    /// Pick the character.
    pub fn character(mut self, character: CharacterKey) -> Self {
        self.character = Some(character);
        self
    }

    /// Build and validate the request.
    pub fn build(self) -> Result<NewProposal> {
        let valentine_name = self
            .valentine_name
            .ok_or_else(|| ValentineError::validation("valentine_name", "is required"))?;

        let proposal = NewProposal {
            valentine_name,
            custom_message: self.custom_message,
            character_choice: self.character.map(|c| c.as_str().to_string()),
        };
        proposal.validate()?;
        Ok(proposal)
    }
}

impl Proposal {
    /// Turn a creation request into a stored record with a fresh id.
    ///
    /// A blank message becomes [`DEFAULT_MESSAGE`] and a missing character
    /// becomes the catalog default. Unknown character keys are kept as-is.
    pub fn create(request: NewProposal) -> Result<Self> {
        request.validate()?;

        let custom_message = request
            .custom_message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

        let character_choice = request
            .character_choice
            .unwrap_or_else(|| CharacterKey::default().as_str().to_string());

        Ok(Self {
            id: ProposalId::generate(),
            valentine_name: request.valentine_name,
            custom_message: Some(custom_message),
            character_choice,
            created_at: Utc::now(),
            accepted: None,
            accepted_at: None,
        })
    }

    /// Apply a partial update. `accepted_at` tracks the flag.
    pub fn apply(&mut self, update: ProposalUpdate) {
        self.accepted = Some(update.accepted);
        self.accepted_at = update.accepted.then(Utc::now);
    }

    /// Whether the recipient said yes.
    pub fn is_accepted(&self) -> bool {
        self.accepted.unwrap_or(false)
    }

    /// Character to render, falling back to the catalog default.
    pub fn character(&self) -> CharacterKey {
        CharacterKey::resolve(Some(&self.character_choice))
    }
}
