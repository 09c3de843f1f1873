// Confirmation gate for guarded elements.

use std::collections::HashSet;

use super::model::{resolve_message, CONFIRM_ATTR};
use crate::core::capability::ConfirmPrompt;
use crate::core::document::Document;
use crate::core::model::{ClickOutcome, ElementId};

/// Click interception for elements carrying the confirmation attribute.
///
/// Armed once from a page-ready scan; elements added to the document later
/// are not picked up. The gate itself is stateless across clicks - every
/// click on an armed element re-runs the full prompt.
pub struct ConfirmGate {
    armed: HashSet<ElementId>,
    default_message: String,
}

impl ConfirmGate {
    /// Gate with nothing armed yet.
    pub fn empty(default_message: &str) -> Self {
        Self {
            armed: HashSet::new(),
            default_message: default_message.to_string(),
        }
    }

    /// Scan the document once and arm every guarded element found.
    pub fn arm(doc: &Document, default_message: &str) -> Self {
        let armed: HashSet<ElementId> = doc.elements_with_attr(CONFIRM_ATTR).into_iter().collect();
        if !armed.is_empty() {
            log::debug!("confirmation gate armed for {} element(s)", armed.len());
        }
        Self {
            armed,
            default_message: default_message.to_string(),
        }
    }

    pub fn is_armed(&self, id: ElementId) -> bool {
        self.armed.contains(&id)
    }

    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }

    /// Gate a single click.
    ///
    /// The message is read from the live attribute at click time. The caller
    /// performs the default action when the outcome is not prevented.
    pub fn intercept(
        &self,
        doc: &Document,
        id: ElementId,
        prompt: &mut dyn ConfirmPrompt,
    ) -> ClickOutcome {
        if !self.is_armed(id) {
            return ClickOutcome::passthrough();
        }

        let message = resolve_message(doc.attr(id, CONFIRM_ATTR), &self.default_message);
        let accepted = prompt.confirm(&message);
        if !accepted {
            log::debug!("action declined: {}", message);
        }

        ClickOutcome {
            prompted: Some(message),
            default_prevented: !accepted,
        }
    }
}
