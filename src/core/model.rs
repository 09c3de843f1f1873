pub type TagName = String;
pub type ClassName = String;

/// Opaque handle to an element slot in a `Document`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub(crate) usize);

/// What an element does when activated and not prevented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefaultAction {
    /// Follow a link to the given target.
    Navigate(String),
    /// Submit to the given endpoint.
    Submit(String),
    /// Inert element, activation has no effect.
    None,
}

/// Record of a default action that actually ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PerformedAction {
    pub element: ElementId,
    pub action: DefaultAction,
}

/// Result of dispatching a single click through the page behaviors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Message the user was prompted with, when the gate intercepted.
    pub prompted: Option<String>,
    /// True when the element's default action was cancelled.
    pub default_prevented: bool,
}

impl ClickOutcome {
    /// Outcome for a click the gate did not intercept.
    pub fn passthrough() -> Self {
        Self {
            prompted: None,
            default_prevented: false,
        }
    }
}
