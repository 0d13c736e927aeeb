//! Read-side derivations over a `UserData` snapshot
//!
//! Dangling references are tolerated everywhere: an answer whose `group_id`
//! names no group is ungrouped, and group members that no longer resolve to
//! an answer are skipped.

use crate::schema::{Answer, Group, Insight, UserData};
use serde::Serialize;

/// Per-group member count, as fed to charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub group_id: String,
    pub label: String,
    pub count: usize,
    pub color: String,
}

impl UserData {
    /// Answers of one category, ascending by index
    pub fn answers_for_category(&self, category: u32) -> Vec<&Answer> {
        let mut answers: Vec<&Answer> = self
            .answers
            .iter()
            .filter(|a| a.category == category)
            .collect();
        answers.sort_by_key(|a| a.index);
        answers
    }

    /// Answer stored at a (category, index) slot
    pub fn answer(&self, category: u32, index: u32) -> Option<&Answer> {
        self.answers
            .iter()
            .find(|a| a.category == category && a.index == index)
    }

    pub fn group(&self, group_id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    /// Group an answer belongs to; `None` when ungrouped or dangling
    pub fn group_of(&self, answer: &Answer) -> Option<&Group> {
        answer.group_id.as_deref().and_then(|id| self.group(id))
    }

    /// Answers listed in a group, in stored answer order
    pub fn members_of<'a>(&'a self, group: &'a Group) -> impl Iterator<Item = &'a Answer> + 'a {
        self.answers.iter().filter(move |a| group.contains(a.id))
    }

    pub fn insight_for(&self, group_id: &str) -> Option<&Insight> {
        self.insights.iter().find(|i| i.group_id == group_id)
    }

    /// Label, colour and resolvable member count for every group
    pub fn group_summaries(&self) -> Vec<GroupSummary> {
        self.groups
            .iter()
            .map(|g| GroupSummary {
                group_id: g.id.clone(),
                label: g.label.clone(),
                count: self.members_of(g).count(),
                color: g.color.clone(),
            })
            .collect()
    }
}
