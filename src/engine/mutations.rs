//! Copy-on-write mutations of the `UserData` aggregate
//!
//! Every operation borrows the current snapshot and returns a new one with a
//! refreshed timestamp. The input is never modified, so a failed save can
//! always fall back to the value the caller still holds.

use crate::error::{Error, Result};
use crate::schema::{answer_id, now_millis, palette_color, Answer, Group, Insight, UserData, PURPOSE_INDEX};
use uuid::Uuid;

impl UserData {
    /// Overwrite (or append) the answer at a (category, index) slot.
    ///
    /// The new record replaces the old one wholesale: a `purpose` or
    /// `group_id` not supplied again is cleared.
    pub fn update_answer(
        &self,
        category: u32,
        index: u32,
        text: impl Into<String>,
        purpose: Option<String>,
    ) -> Result<UserData> {
        let answer = Answer::new(category, index, text, purpose)?;
        let mut next = self.clone();

        // Collapse any duplicates of this id into the single new record.
        match next.answers.iter().position(|a| a.id == answer.id) {
            Some(pos) => {
                next.answers.retain(|a| a.id != answer.id);
                next.answers.insert(pos, answer);
            }
            None => next.answers.push(answer),
        }

        next.timestamp = now_millis();
        Ok(next)
    }

    /// Save the three slots of one category in a single step.
    ///
    /// Blank slots are skipped and keep whatever was stored before. The
    /// purpose is attached to the second slot only.
    pub fn record_category(
        &self,
        category: u32,
        texts: [&str; 3],
        purpose: Option<&str>,
    ) -> Result<UserData> {
        // Validate up front so a bad category never yields a partial result.
        answer_id(category, 1)?;

        let mut next = self.clone();
        for (slot, text) in (1u32..).zip(texts) {
            if text.trim().is_empty() {
                continue;
            }
            let purpose = if slot == PURPOSE_INDEX {
                purpose.map(str::to_string)
            } else {
                None
            };
            next = next.update_answer(category, slot, text, purpose)?;
        }

        next.timestamp = now_millis();
        Ok(next)
    }

    /// Cluster existing answers into a new group.
    ///
    /// Selected answers are moved out of any group they belonged to, both on
    /// the answer (`group_id`) and in the old group's `answer_ids`. Unknown
    /// and repeated ids are dropped from the selection.
    pub fn create_group(&self, label: &str, answer_ids: &[u32]) -> Result<UserData> {
        let label = label.trim();
        if label.is_empty() {
            return Err(Error::InvalidGroup("label is empty".to_string()));
        }

        let mut selected: Vec<u32> = Vec::with_capacity(answer_ids.len());
        for id in answer_ids {
            if !selected.contains(id) && self.answers.iter().any(|a| a.id == *id) {
                selected.push(*id);
            }
        }
        if selected.is_empty() {
            return Err(Error::InvalidGroup("no answers selected".to_string()));
        }

        let group = Group {
            id: format!("group-{}", Uuid::new_v4()),
            label: label.to_string(),
            color: palette_color(self.groups.len()).to_string(),
            answer_ids: selected,
        };

        let mut next = self.clone();
        for answer in next.answers.iter_mut() {
            if group.contains(answer.id) {
                answer.group_id = Some(group.id.clone());
            }
        }
        for other in next.groups.iter_mut() {
            other.answer_ids.retain(|id| !group.contains(*id));
        }

        tracing::debug!(
            group_id = %group.id,
            members = group.answer_ids.len(),
            color = %group.color,
            "Created group"
        );
        next.groups.push(group);
        next.timestamp = now_millis();
        Ok(next)
    }

    /// Delete a group, ungrouping its answers and dropping its insight.
    /// Unknown ids change nothing but the timestamp.
    pub fn remove_group(&self, group_id: &str) -> UserData {
        let mut next = self.clone();

        next.groups.retain(|g| g.id != group_id);
        for answer in next.answers.iter_mut() {
            if answer.group_id.as_deref() == Some(group_id) {
                answer.group_id = None;
            }
        }
        next.insights.retain(|i| i.group_id != group_id);

        next.timestamp = now_millis();
        next
    }

    /// Insert or replace the reflection for `group_id`
    pub fn set_insight(&self, group_id: &str, reflection: impl Into<String>) -> UserData {
        let reflection = reflection.into();
        let mut next = self.clone();

        match next.insights.iter_mut().find(|i| i.group_id == group_id) {
            Some(existing) => existing.reflection = reflection,
            None => next.insights.push(Insight {
                group_id: group_id.to_string(),
                reflection,
            }),
        }

        next.timestamp = now_millis();
        next
    }

    /// Replace the whole insight collection. Later entries for the same
    /// group win; order of first appearance is kept.
    pub fn replace_insights<I, G, R>(&self, entries: I) -> UserData
    where
        I: IntoIterator<Item = (G, R)>,
        G: Into<String>,
        R: Into<String>,
    {
        let mut insights: Vec<Insight> = Vec::new();
        for (group_id, reflection) in entries {
            let group_id = group_id.into();
            let reflection = reflection.into();
            match insights.iter_mut().find(|i| i.group_id == group_id) {
                Some(existing) => existing.reflection = reflection,
                None => insights.push(Insight {
                    group_id,
                    reflection,
                }),
            }
        }

        let mut next = self.clone();
        next.insights = insights;
        next.timestamp = now_millis();
        next
    }
}
