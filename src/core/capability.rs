// Host-supplied capabilities: the UI toolkit's notice widget and the
// blocking confirmation dialog, reduced to the operations the behaviors need.

use std::collections::VecDeque;
use std::io::{self, Write};

use super::document::Document;
use super::model::ElementId;

/// Closes notice elements on behalf of the page's UI toolkit.
pub trait NoticeDismisser {
    fn close(&self, doc: &mut Document, id: ElementId);
}

/// Dismisser that drops the element from the document outright, standing in
/// for the toolkit's close-with-animation.
pub struct RemovingDismisser;

impl NoticeDismisser for RemovingDismisser {
    fn close(&self, doc: &mut Document, id: ElementId) {
        if doc.remove(id).is_none() {
            log::warn!("dismiss requested for element no longer present: {:?}", id);
        }
    }
}

/// Blocking yes/no prompt. Returns true only on explicit affirmation; a
/// dismissed or failed prompt counts as declined.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Interactive prompt on stdin/stdout. Blocks the caller until answered,
/// the way the page blocks while a native dialog is open.
pub struct ConsolePrompt;

impl ConfirmPrompt for ConsolePrompt {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{} [y/N]: ", message);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return false;
        }

        let answer = input.trim().to_lowercase();
        matches!(answer.as_str(), "y" | "yes" | "д" | "да")
    }
}

/// Deterministic prompt for tests: canned answers consumed in order, then a
/// fixed default.
pub struct ScriptedPrompt {
    answers: VecDeque<bool>,
    default_answer: bool,
}

impl ScriptedPrompt {
    pub fn always(default_answer: bool) -> Self {
        Self {
            answers: VecDeque::new(),
            default_answer,
        }
    }

    pub fn with_answers(default_answer: bool, answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            default_answer,
        }
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&mut self, _message: &str) -> bool {
        self.answers.pop_front().unwrap_or(self.default_answer)
    }
}
