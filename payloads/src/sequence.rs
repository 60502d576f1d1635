//! Ordered drip-campaign step list.
//!
//! The list is edited in memory before submission and carries no ordering or
//! uniqueness guarantees for day offsets; the backend owns validation.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Days between a newly appended step and the previous last step.
pub const DAY_OFFSET_STRIDE: u32 = 2;

/// Subject pre-filled in the first step of a fresh draft.
pub const STARTER_SUBJECT: &str = "Quick question";

/// One email in a campaign, sent `day_offset` days after enrollment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceStep {
    #[serde(default, deserialize_with = "deserialize_day_offset")]
    pub day_offset: u32,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

/// In-place edit applied by [`Sequence::update_step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepEdit {
    DayOffset(u32),
    Subject(String),
    Body(String),
}

/// Campaign steps in send order as entered by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    steps: Vec<SequenceStep>,
}

impl Sequence {
    /// A one-step sequence used for fresh drafts.
    #[must_use]
    pub fn starter() -> Self {
        Self {
            steps: vec![SequenceStep {
                day_offset: 0,
                subject: STARTER_SUBJECT.to_owned(),
                body: String::new(),
            }],
        }
    }

    #[must_use]
    pub fn steps(&self) -> &[SequenceStep] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Day offset the next appended step receives.
    #[must_use]
    pub fn next_day_offset(&self) -> u32 {
        self.steps
            .last()
            .map_or(0, |last| last.day_offset.saturating_add(DAY_OFFSET_STRIDE))
    }

    /// Append an empty step and return its index.
    pub fn add_step(&mut self) -> usize {
        self.add_step_with(String::new(), String::new())
    }

    /// Append a step with the given copy and return its index.
    pub fn add_step_with(&mut self, subject: impl Into<String>, body: impl Into<String>) -> usize {
        let day_offset = self.next_day_offset();
        self.steps.push(SequenceStep {
            day_offset,
            subject: subject.into(),
            body: body.into(),
        });
        self.steps.len() - 1
    }

    /// Remove the step at `index`, keeping the remaining steps in order.
    ///
    /// Returns `None` without touching the list when `index` is out of range.
    pub fn remove_step(&mut self, index: usize) -> Option<SequenceStep> {
        (index < self.steps.len()).then(|| self.steps.remove(index))
    }

    /// Apply `edit` to the step at `index`. Returns `false` when out of range.
    pub fn update_step(&mut self, index: usize, edit: StepEdit) -> bool {
        let Some(step) = self.steps.get_mut(index) else {
            return false;
        };
        match edit {
            StepEdit::DayOffset(day_offset) => step.day_offset = day_offset,
            StepEdit::Subject(subject) => step.subject = subject,
            StepEdit::Body(body) => step.body = body,
        }
        true
    }
}

impl From<Vec<SequenceStep>> for Sequence {
    fn from(steps: Vec<SequenceStep>) -> Self {
        Self { steps }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a SequenceStep;
    type IntoIter = std::slice::Iter<'a, SequenceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

fn deserialize_day_offset<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Number(number) = Value::deserialize(deserializer)? else {
        return Err(D::Error::custom("expected number"));
    };
    if let Some(int) = number.as_u64() {
        return u32::try_from(int).map_err(|_| D::Error::custom("day offset out of range"));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= 0.0
        && float <= f64::from(u32::MAX)
    {
        return Ok(float as u32);
    }
    Err(D::Error::custom("expected non-negative integer day offset"))
}
