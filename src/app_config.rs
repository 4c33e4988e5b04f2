use glassfx_core::EffectsConfig;

use crate::dom;

pub(crate) const CONFIG_ELEMENT_ID: &str = "glassfx-config";

/// Reads overrides from `<script type="application/json" id="glassfx-config">`.
/// A missing element means defaults; a broken one is reported and ignored.
pub(crate) fn load_effects_config() -> EffectsConfig {
    let Some(element) = dom::by_id(CONFIG_ELEMENT_ID) else {
        return EffectsConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    match EffectsConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            gloo::console::warn!("glassfx: falling back to default config", err.to_string());
            EffectsConfig::default()
        }
    }
}
