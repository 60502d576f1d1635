//! Campaign builder draft.
//!
//! DESIGN
//! ======
//! Steps are edited by index in `payloads::Sequence`. A parallel list of
//! client-only row keys lets keyed rendering survive removals; rows resolve
//! their current index from the key at event time.

#[cfg(test)]
#[path = "campaign_test.rs"]
mod campaign_test;

use payloads::{
    Campaign, DEFAULT_CAMPAIGN_NAME, GeneratedEmail, NewCampaign, Sequence, SequenceStep, StepEdit, Workspace,
};
use serde::{Deserialize, Serialize};

/// The persisted part of the builder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignDraft {
    pub name: String,
    pub workspace_id: Option<String>,
    pub sequence: Sequence,
}

impl Default for CampaignDraft {
    fn default() -> Self {
        Self {
            name: DEFAULT_CAMPAIGN_NAME.to_owned(),
            workspace_id: None,
            sequence: Sequence::starter(),
        }
    }
}

impl CampaignDraft {
    pub fn to_request(&self) -> NewCampaign {
        NewCampaign {
            name: self.name.clone(),
            workspace_id: self.workspace_id.clone(),
            sequence: self.sequence.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CampaignDraftState {
    pub draft: CampaignDraft,
    keys: Vec<String>,
    pub pending: bool,
    pub last_created: Option<Campaign>,
}

impl Default for CampaignDraftState {
    fn default() -> Self {
        Self::from_draft(CampaignDraft::default())
    }
}

fn new_row_key() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl CampaignDraftState {
    /// Wrap a draft (fresh or restored from storage) with new row keys.
    pub fn from_draft(draft: CampaignDraft) -> Self {
        let keys = draft.sequence.steps().iter().map(|_| new_row_key()).collect();
        Self { draft, keys, pending: false, last_created: None }
    }

    /// Replace the draft while keeping submit bookkeeping.
    pub fn restore(&mut self, draft: CampaignDraft) {
        let pending = self.pending;
        let last_created = self.last_created.take();
        *self = Self { pending, last_created, ..Self::from_draft(draft) };
    }

    pub fn steps(&self) -> &[SequenceStep] {
        self.draft.sequence.steps()
    }

    pub fn row_keys(&self) -> &[String] {
        &self.keys
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    pub fn step_by_key(&self, key: &str) -> Option<&SequenceStep> {
        self.index_of(key).and_then(|index| self.steps().get(index))
    }

    pub fn add_step(&mut self) -> usize {
        self.keys.push(new_row_key());
        self.draft.sequence.add_step()
    }

    /// Append generated copy as a new step.
    pub fn add_generated(&mut self, email: &GeneratedEmail) -> usize {
        self.keys.push(new_row_key());
        self.draft.sequence.add_step_with(email.subject.clone(), email.body.clone())
    }

    pub fn remove_step(&mut self, index: usize) -> Option<SequenceStep> {
        let removed = self.draft.sequence.remove_step(index)?;
        self.keys.remove(index);
        Some(removed)
    }

    pub fn remove_by_key(&mut self, key: &str) -> Option<SequenceStep> {
        let index = self.index_of(key)?;
        self.remove_step(index)
    }

    pub fn update_step(&mut self, index: usize, edit: StepEdit) -> bool {
        self.draft.sequence.update_step(index, edit)
    }

    pub fn update_by_key(&mut self, key: &str, edit: StepEdit) -> bool {
        self.index_of(key).is_some_and(|index| self.update_step(index, edit))
    }

    /// Point the draft at a newly created workspace.
    pub fn link_workspace(&mut self, workspace: &Workspace) {
        self.draft.workspace_id = Some(workspace.id.clone());
    }

    pub fn begin_submit(&mut self) -> Option<NewCampaign> {
        if self.pending {
            return None;
        }
        self.pending = true;
        Some(self.draft.to_request())
    }

    pub fn record_created(&mut self, campaign: Campaign) {
        self.pending = false;
        self.last_created = Some(campaign);
    }

    pub fn fail(&mut self) {
        self.pending = false;
    }
}

/// Parse a day-offset input; blank or invalid input yields `None`.
pub fn parse_day_offset(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}
