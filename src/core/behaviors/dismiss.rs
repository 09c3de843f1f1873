// Delayed notice sweep.

use super::model::NOTICE_CLASS;
use crate::core::capability::NoticeDismisser;
use crate::core::document::Document;

/// Close every notice present in the document right now.
///
/// Single pass over live state: notices inserted after this runs stay up,
/// and each matched notice is handed to the dismisser exactly once.
/// Returns how many notices were closed.
pub fn sweep_notices(doc: &mut Document, dismisser: &dyn NoticeDismisser) -> usize {
    let notices = doc.elements_with_class(NOTICE_CLASS);
    let count = notices.len();

    for id in notices {
        dismisser.close(doc, id);
    }

    if count > 0 {
        log::info!("auto-dismissed {} notice(s)", count);
    }
    count
}
