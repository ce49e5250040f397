//! Which pointer-downs may start a burst
//!
//! The shallow policy inspects the event target alone. The ancestor walk inspects the
//! target and every parent up to the document root.

use serde::{Deserialize, Serialize};

use crate::domain::ExplosionConfig;

/// Tags that are interactive on their own
const INTERACTIVE_TAGS: [&str; 5] = ["A", "BUTTON", "INPUT", "SELECT", "TEXTAREA"];
/// Tags the shallow check refuses on the target itself
const SHALLOW_TAGS: [&str; 2] = ["A", "IMG"];

/// Read-only view of a DOM element.
pub trait TargetNode: Sized {
    /// Tag name in any case; compared case-insensitively
    fn tag_name(&self) -> String;
    fn id(&self) -> String;
    fn attribute(&self, name: &str) -> Option<String>;
    fn has_class(&self, class: &str) -> bool;
    /// Parent element, `None` above the document root
    fn parent(&self) -> Option<Self>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterPolicy {
    /// Look at the event target only
    Shallow,
    /// Look at the target and every ancestor
    #[default]
    AncestorWalk,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InteractivityFilter {
    policy: FilterPolicy,
    blocked_ids: Vec<String>,
    blocked_classes: Vec<String>,
}

impl InteractivityFilter {
    pub fn new(policy: FilterPolicy, blocked_ids: Vec<String>, blocked_classes: Vec<String>) -> Self {
        Self { policy, blocked_ids, blocked_classes }
    }

    pub fn from_config(config: &ExplosionConfig) -> Self {
        Self::new(config.filter, config.blocked_ids.clone(), config.blocked_classes.clone())
    }

    /// `true` when a pointer-down on `target` should start a burst. Events without an
    /// element target are accepted.
    pub fn accepts<T: TargetNode>(&self, target: Option<&T>) -> bool {
        let Some(target) = target else {
            return true;
        };
        match self.policy {
            FilterPolicy::Shallow => {
                !tag_is(target, &SHALLOW_TAGS) && !self.inside_blocked_id(target)
            }
            FilterPolicy::AncestorWalk => !self.any_in_chain(target, |node| self.is_interactive(node)),
        }
    }

    fn is_interactive<T: TargetNode>(&self, node: &T) -> bool {
        tag_is(node, &INTERACTIVE_TAGS)
            || non_empty(node.attribute("href"))
            || node.attribute("onclick").is_some()
            || node
                .attribute("role")
                .is_some_and(|role| role.trim().eq_ignore_ascii_case("button"))
            || self.blocked_classes.iter().any(|c| node.has_class(c))
            || self.has_blocked_id(node)
    }

    fn has_blocked_id<T: TargetNode>(&self, node: &T) -> bool {
        let id = node.id();
        !id.is_empty() && self.blocked_ids.iter().any(|b| *b == id)
    }

    // The sidebar swallows its descendants under every policy.
    fn inside_blocked_id<T: TargetNode>(&self, target: &T) -> bool {
        self.any_in_chain(target, |node| self.has_blocked_id(node))
    }

    fn any_in_chain<T: TargetNode>(&self, target: &T, hit: impl Fn(&T) -> bool) -> bool {
        if hit(target) {
            return true;
        }
        let mut current = target.parent();
        while let Some(node) = current {
            if hit(&node) {
                return true;
            }
            current = node.parent();
        }
        false
    }
}

impl Default for InteractivityFilter {
    fn default() -> Self {
        Self::from_config(&ExplosionConfig::default())
    }
}

fn tag_is<T: TargetNode>(node: &T, tags: &[&str]) -> bool {
    let tag = node.tag_name();
    tags.iter().any(|t| t.eq_ignore_ascii_case(&tag))
}

fn non_empty(value: Option<String>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
