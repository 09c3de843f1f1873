use super::behaviors::dismiss::sweep_notices;
use super::behaviors::gate::ConfirmGate;
use super::behaviors::model::BehaviorConfig;
use super::capability::{ConfirmPrompt, NoticeDismisser};
use super::document::Document;
use super::model::{ClickOutcome, ElementId};
use super::scheduler::Scheduler;

/// Tasks the page schedules against its own event queue.
enum PageTask {
    DismissNotices,
}

/// Owns one page view: the document, its event queue and the two behaviors.
///
/// Nothing happens until `install` runs (the page-ready moment), and nothing
/// runs concurrently: clicks are dispatched synchronously, timers fire when
/// the clock is driven via `advance_to`.
pub struct PageRuntime {
    document: Document,
    scheduler: Scheduler<PageTask>,
    gate: ConfirmGate,
    dismisser: Box<dyn NoticeDismisser>,
    prompt: Box<dyn ConfirmPrompt>,
    config: BehaviorConfig,
    installed: bool,
}

impl PageRuntime {
    pub fn new(
        document: Document,
        config: BehaviorConfig,
        dismisser: Box<dyn NoticeDismisser>,
        prompt: Box<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            document,
            scheduler: Scheduler::new(),
            gate: ConfirmGate::empty(&config.default_confirm_message),
            dismisser,
            prompt,
            config,
            installed: false,
        }
    }

    /// Register both behaviors. Invoked once per page view; a second call is
    /// ignored so the dismiss timer cannot be doubled up.
    pub fn install(&mut self) {
        if self.installed {
            log::warn!("install called twice, ignoring");
            return;
        }
        self.installed = true;

        log::info!("Colab Hub запущен!");

        self.scheduler
            .schedule(self.config.dismiss_delay_ms, PageTask::DismissNotices);
        self.gate = ConfirmGate::arm(&self.document, &self.config.default_confirm_message);
    }

    /// Dispatch a click. The gate may block the default action; otherwise it
    /// runs against the document.
    pub fn click(&mut self, id: ElementId) -> ClickOutcome {
        let outcome = self
            .gate
            .intercept(&self.document, id, self.prompt.as_mut());
        if !outcome.default_prevented {
            self.document.perform_default(id);
        }
        outcome
    }

    /// Drive the page clock forward to an absolute time, running due timers.
    pub fn advance_to(&mut self, target_ms: u64) {
        for task in self.scheduler.advance_to(target_ms) {
            self.run_task(task);
        }
    }

    /// Drive the page clock forward by a delta, running due timers.
    pub fn advance(&mut self, delta_ms: u64) {
        self.advance_to(self.scheduler.now_ms().saturating_add(delta_ms));
    }

    fn run_task(&mut self, task: PageTask) {
        match task {
            PageTask::DismissNotices => {
                sweep_notices(&mut self.document, self.dismisser.as_ref());
            }
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Earliest pending timer deadline, if any.
    pub fn next_due(&self) -> Option<u64> {
        self.scheduler.next_due()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::behaviors::model::{CONFIRM_ATTR, NOTICE_CLASS};
    use crate::core::capability::{RemovingDismisser, ScriptedPrompt};
    use crate::core::document::Element;
    use crate::core::model::DefaultAction;

    fn runtime_with(doc: Document, prompt: ScriptedPrompt) -> PageRuntime {
        PageRuntime::new(
            doc,
            BehaviorConfig::default(),
            Box::new(RemovingDismisser),
            Box::new(prompt),
        )
    }

    #[test]
    fn test_dismiss_timer_fires_at_configured_delay() {
        let mut doc = Document::new();
        let notice = doc.insert(Element::new("div").with_class(NOTICE_CLASS));

        let mut page = runtime_with(doc, ScriptedPrompt::always(false));
        page.install();

        page.advance_to(4999);
        assert!(page.document().contains(notice), "not due yet");

        page.advance_to(5000);
        assert!(!page.document().contains(notice));
    }

    #[test]
    fn test_install_twice_schedules_one_timer() {
        let doc = Document::new();
        let mut page = runtime_with(doc, ScriptedPrompt::always(false));
        page.install();
        page.install();
        assert_eq!(page.pending_timers(), 1);
    }

    #[test]
    fn test_click_on_guarded_element_gates_default_action() {
        let mut doc = Document::new();
        let delete = doc.insert(
            Element::new("button")
                .with_attr(CONFIRM_ATTR, "Удалить проект?")
                .with_action(DefaultAction::Submit("/project/1/delete".to_string())),
        );

        let mut page = runtime_with(doc, ScriptedPrompt::with_answers(false, [false, true]));
        page.install();

        // Declined: nothing happens.
        let declined = page.click(delete);
        assert!(declined.default_prevented);
        assert!(page.document().performed().is_empty());

        // Accepted: the submit goes through.
        let accepted = page.click(delete);
        assert!(!accepted.default_prevented);
        assert_eq!(page.document().performed().len(), 1);
        assert_eq!(
            page.document().performed()[0].action,
            DefaultAction::Submit("/project/1/delete".to_string())
        );
    }

    #[test]
    fn test_unguarded_click_never_prompts() {
        let mut doc = Document::new();
        let link = doc.insert(
            Element::new("a").with_action(DefaultAction::Navigate("/profile".to_string())),
        );

        // Default answer false would block everything if the prompt were consulted.
        let mut page = runtime_with(doc, ScriptedPrompt::always(false));
        page.install();

        let outcome = page.click(link);
        assert_eq!(outcome, ClickOutcome::passthrough());
        assert_eq!(page.document().performed().len(), 1);
    }

    #[test]
    fn test_notice_added_after_sweep_survives() {
        let doc = Document::new();
        let mut page = runtime_with(doc, ScriptedPrompt::always(false));
        page.install();
        page.advance_to(5000);

        let late = page
            .document_mut()
            .insert(Element::new("div").with_class(NOTICE_CLASS));
        page.advance_to(60_000);
        assert!(page.document().contains(late), "sweep is one-shot");
    }
}
