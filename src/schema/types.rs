//! Value data wire types
//!
//! Defines the persisted aggregate (`UserData`) and its children with
//! camelCase JSON serialization. Optional fields are omitted when absent so
//! the stored blob matches what the browser front end writes.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of fixed categories
pub const CATEGORY_COUNT: u32 = 8;

/// Answers per category
pub const ANSWERS_PER_CATEGORY: u32 = 3;

/// Slot whose answer carries a "what is this for?" purpose
pub const PURPOSE_INDEX: u32 = 2;

/// Group colours, assigned by creation order modulo palette size
pub const PALETTE: [&str; 8] = [
    "hsl(0, 70%, 60%)",
    "hsl(30, 70%, 60%)",
    "hsl(60, 70%, 60%)",
    "hsl(120, 70%, 60%)",
    "hsl(180, 70%, 60%)",
    "hsl(240, 70%, 60%)",
    "hsl(280, 70%, 60%)",
    "hsl(320, 70%, 60%)",
];

/// Palette colour for the n-th group created
pub fn palette_color(existing_groups: usize) -> &'static str {
    PALETTE[existing_groups % PALETTE.len()]
}

/// Compute the answer id for a (category, index) slot.
///
/// `id = (category - 1) * 3 + index`, rejecting slots outside
/// category 1..=8 and index 1..=3.
pub fn answer_id(category: u32, index: u32) -> Result<u32> {
    if !(1..=CATEGORY_COUNT).contains(&category) || !(1..=ANSWERS_PER_CATEGORY).contains(&index) {
        return Err(Error::InvalidSlot { category, index });
    }
    Ok((category - 1) * ANSWERS_PER_CATEGORY + index)
}

/// One free-text answer tied to a (category, index) slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: u32,
    pub category: u32,
    pub index: u32,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl Answer {
    /// Build an ungrouped answer for a validated slot
    pub fn new(
        category: u32,
        index: u32,
        text: impl Into<String>,
        purpose: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            id: answer_id(category, index)?,
            category,
            index,
            text: text.into(),
            purpose,
            group_id: None,
        })
    }

    /// Purpose text, if set and non-empty
    pub fn purpose_text(&self) -> Option<&str> {
        self.purpose.as_deref().filter(|p| !p.is_empty())
    }
}

/// A user-defined cluster of answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub label: String,
    pub color: String,
    pub answer_ids: Vec<u32>,
}

impl Group {
    pub fn contains(&self, answer_id: u32) -> bool {
        self.answer_ids.contains(&answer_id)
    }
}

/// Reflection attached to one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub group_id: String,
    pub reflection: String,
}

/// The aggregate root; the only thing that is persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub answers: Vec<Answer>,
    pub groups: Vec<Group>,
    pub insights: Vec<Insight>,
    /// Epoch milliseconds of the last mutation
    pub timestamp: u64,
}

impl UserData {
    /// Empty aggregate stamped with the current time
    pub fn new() -> Self {
        Self {
            answers: Vec::new(),
            groups: Vec::new(),
            insights: Vec::new(),
            timestamp: now_millis(),
        }
    }
}

impl Default for UserData {
    fn default() -> Self {
        Self::new()
    }
}

/// Current time in Unix milliseconds
pub fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
