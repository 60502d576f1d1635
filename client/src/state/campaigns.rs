//! Campaign list state loaded from `GET /campaigns`.
//!
//! DESIGN
//! ======
//! Kept apart from the builder draft so refreshing the list never touches
//! unsaved edits.

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use payloads::Campaign;

#[derive(Clone, Debug, Default)]
pub struct CampaignsState {
    pub items: Vec<Campaign>,
    pub loading: bool,
    /// Whether at least one load has completed successfully.
    pub loaded: bool,
    pub error: Option<String>,
    /// A load was requested while another was in flight; its response is stale.
    pub reload_requested: bool,
}

impl CampaignsState {
    /// Start a load. Returns `false` if one is already in flight, in which
    /// case a follow-up load is queued for when it finishes.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            self.reload_requested = true;
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Apply a load response. Returns `true` when a queued reload should be
    /// issued now; the load is already marked in flight in that case.
    ///
    /// A response superseded by a queued reload may predate campaigns
    /// upserted locally, so those are kept until the reload lands.
    pub fn finish_load(&mut self, items: Vec<Campaign>) -> bool {
        self.loaded = true;
        if std::mem::take(&mut self.reload_requested) {
            let local: Vec<Campaign> = self
                .items
                .drain(..)
                .filter(|c| !items.iter().any(|fresh| fresh.id == c.id))
                .collect();
            self.items = items;
            self.items.extend(local);
            return true;
        }
        self.items = items;
        self.loading = false;
        false
    }

    /// Record a failed load. Items stay as they were and any queued reload is
    /// dropped.
    pub fn fail_load(&mut self, message: String) {
        self.loading = false;
        self.reload_requested = false;
        self.error = Some(message);
    }

    /// Insert or replace a campaign by id without waiting for a reload.
    pub fn upsert(&mut self, campaign: Campaign) {
        match self.items.iter_mut().find(|c| c.id == campaign.id) {
            Some(existing) => *existing = campaign,
            None => self.items.push(campaign),
        }
    }
}
