#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_is_empty_outside_the_browser() {
    assert!(load_campaign_draft().is_none());
    assert!(load_json::<serde_json::Value>("anything").is_none());
}

#[test]
fn save_is_noop_but_callable() {
    save_campaign_draft(&CampaignDraft::default());
    assert!(load_campaign_draft().is_none());
}
