//! Audience analytics payload.
//!
//! Only selected sub-items are emitted; topic order follows the buckets.

use crate::model::audience::AudienceSnapshot;
use crate::model::topic::Topic;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSubItem {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTopic {
    pub id: String,
    pub name: String,
    pub children: Vec<OutputSubItem>,
}

/// Payload handed to downstream audience analytics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceOutput {
    pub core_topics: Vec<OutputTopic>,
    pub supportive_topics: Vec<OutputTopic>,
}

impl AudienceOutput {
    pub fn from_snapshot(snapshot: &AudienceSnapshot) -> Self {
        Self {
            core_topics: snapshot.core.iter().map(output_topic).collect(),
            supportive_topics: snapshot.supportive.iter().map(output_topic).collect(),
        }
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn output_topic(topic: &Topic) -> OutputTopic {
    OutputTopic {
        id: topic.id.clone(),
        name: topic.name.clone(),
        children: topic
            .selected_sub_items()
            .map(|item| OutputSubItem {
                id: item.id.clone(),
                name: item.name.clone(),
            })
            .collect(),
    }
}
