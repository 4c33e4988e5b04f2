use serde::{Deserialize, Serialize};

/// What to do with the default jump navigation of an in-page anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorPolicy {
    /// Cancel the jump only when there is a target to scroll to; a dangling
    /// anchor falls back to the browser's own navigation.
    #[default]
    PreventWhenTargetExists,
    /// Always cancel the jump, even when nothing matches.
    AlwaysPrevent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorAction {
    pub prevent_default: bool,
    pub scroll: bool,
}

/// Element id referenced by an in-page `href`, if it is one.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(id)
}

pub fn route_anchor_click(policy: AnchorPolicy, target_exists: bool) -> AnchorAction {
    let prevent_default = match policy {
        AnchorPolicy::PreventWhenTargetExists => target_exists,
        AnchorPolicy::AlwaysPrevent => true,
    };
    AnchorAction {
        prevent_default,
        scroll: target_exists,
    }
}
