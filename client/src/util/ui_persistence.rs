//! Browser localStorage persistence for the campaign builder draft.
//!
//! SYSTEM CONTEXT
//! ==============
//! The draft is saved on every edit so a reload does not lose an unsent
//! sequence. Storage is best-effort and hydrate-only; SSR and native tests
//! see an empty store.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::campaign::CampaignDraft;

pub const CAMPAIGN_DRAFT_KEY: &str = "outreach_campaign_draft";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("discarding unreadable {key}: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

pub fn load_campaign_draft() -> Option<CampaignDraft> {
    load_json(CAMPAIGN_DRAFT_KEY)
}

pub fn save_campaign_draft(draft: &CampaignDraft) {
    save_json(CAMPAIGN_DRAFT_KEY, draft);
}
