//! Topic payloads and views

use serde::{Deserialize, Serialize};

use crate::shared::error::{require_max_chars, require_non_blank, SharedError};

/// Longest accepted topic name, in characters
pub const MAX_TOPIC_NAME_CHARS: usize = 100;
/// Longest accepted topic description, in characters
pub const MAX_TOPIC_DESCRIPTION_CHARS: usize = 1000;

/// A topic as stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct TopicView {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// A catalog entry annotated for the requesting user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopicWithSubscription {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub subscribed: bool,
}

impl TopicWithSubscription {
    pub fn new(topic: TopicView, subscribed: bool) -> Self {
        Self {
            id: topic.id,
            name: topic.name,
            description: topic.description,
            subscribed,
        }
    }
}

/// Body of `POST /topics`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTopicRequest {
    pub name: String,
    pub description: String,
}

impl CreateTopicRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_blank("name", &self.name, "Topic name is required")?;
        require_max_chars("name", &self.name, MAX_TOPIC_NAME_CHARS)?;
        require_non_blank(
            "description",
            &self.description,
            "Topic description is required",
        )?;
        require_max_chars("description", &self.description, MAX_TOPIC_DESCRIPTION_CHARS)
    }
}
