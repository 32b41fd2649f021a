//! # Arc Label Derivation
//!
//! Labeled arc actions are encoded as ``LEFT-ARC(label)`` or ``RIGHT-ARC(label)``.
//! Every other action (``SHIFT``, ``SWAP``, unlabeled reductions, ...) carries no label.

use std::sync::LazyLock;

use regex::Regex;

/// The label reported for actions which do not build a labeled arc.
pub const NO_ARC_LABEL: &str = "NONE";

/// The arc-action encoding; group 1 is the label.
pub const ARC_ACTION_PATTERN: &str = r"^(?:LEFT|RIGHT)-ARC\((.+)\)$";

static ARC_ACTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ARC_ACTION_PATTERN).expect("invalid ARC_ACTION_PATTERN"));

/// Extract the arc label embedded in an action.
///
/// ## Returns
/// The label; or [`NO_ARC_LABEL`] if `action` is not a labeled arc action.
pub fn derive_arc_label(action: &str) -> &str {
    ARC_ACTION_REGEX
        .captures(action)
        .and_then(|caps| caps.get(1))
        .map_or(NO_ARC_LABEL, |m| m.as_str())
}

/// Derive the arc label for each action, in order.
pub fn derive_arc_labels<'a, I>(actions: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    actions
        .into_iter()
        .map(|action| derive_arc_label(action).to_string())
        .collect()
}
