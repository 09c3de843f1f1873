use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::core::{
    behaviors::model::{CONFIRM_ATTR, NOTICE_CLASS},
    capability::{ConsolePrompt, RemovingDismisser},
    config::ConfigManager,
    document::{Document, Element},
    model::{DefaultAction, ElementId},
    runtime::PageRuntime,
};

struct DemoPage {
    profile_link: ElementId,
    cancel_application: ElementId,
    delete_project: ElementId,
}

/// A view the way the site renders one: flash banners from the last request,
/// a guarded delete control, a guarded control without its own message and a
/// plain navigation link.
fn build_demo_page(doc: &mut Document) -> DemoPage {
    doc.insert(
        Element::new("div")
            .with_class(NOTICE_CLASS)
            .with_class("alert-success")
            .with_attr("text", "Проект успешно создан!"),
    );
    doc.insert(
        Element::new("div")
            .with_class(NOTICE_CLASS)
            .with_class("alert-info")
            .with_attr("text", "Вы успешно вошли!"),
    );

    let profile_link = doc.insert(
        Element::new("a").with_action(DefaultAction::Navigate("/profile".to_string())),
    );
    let cancel_application = doc.insert(
        Element::new("button")
            .with_class("btn")
            .with_attr(CONFIRM_ATTR, "")
            .with_action(DefaultAction::Submit("/application/3/cancel".to_string())),
    );
    let delete_project = doc.insert(
        Element::new("button")
            .with_class("btn")
            .with_class("btn-danger")
            .with_attr(CONFIRM_ATTR, "Удалить проект? Это действие нельзя отменить.")
            .with_action(DefaultAction::Submit("/project/1/delete".to_string())),
    );

    DemoPage {
        profile_link,
        cancel_application,
        delete_project,
    }
}

pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_dir = std::env::var("HOME")
        .map(|home| PathBuf::from(home).join(".config/hub-behaviors"))
        .unwrap_or_else(|_| PathBuf::from("."));
    let config_manager = ConfigManager::new(config_dir);
    let settings = config_manager.load();

    let mut doc = Document::new();
    let demo = build_demo_page(&mut doc);

    let mut page = PageRuntime::new(
        doc,
        settings.behavior,
        Box::new(RemovingDismisser),
        Box::new(ConsolePrompt),
    );

    let started = Instant::now();
    page.install();

    println!(
        "Страница загружена: {} элементов, {} уведомлений.",
        page.document().element_count(),
        page.document().elements_with_class(NOTICE_CLASS).len()
    );

    // Walk the interactive controls. Guarded ones block on the console
    // prompt, the way the page blocks while a native dialog is open.
    let clicks = [
        ("профиль", demo.profile_link),
        ("отменить заявку", demo.cancel_application),
        ("удалить проект", demo.delete_project),
    ];
    for (label, id) in clicks {
        page.advance_to(started.elapsed().as_millis() as u64);

        println!("\nКлик: {label}");
        let outcome = page.click(id);
        match (&outcome.prompted, outcome.default_prevented) {
            (None, _) => println!("  без подтверждения, действие выполнено"),
            (Some(_), false) => println!("  подтверждено, действие выполнено"),
            (Some(_), true) => println!("  отменено пользователем"),
        }
    }

    // Let the dismiss timer run out against the wall clock.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("failed to build tokio runtime");
    runtime.block_on(async {
        while page.pending_timers() > 0 {
            page.advance_to(started.elapsed().as_millis() as u64);
            if page.pending_timers() == 0 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(250)).await;
        }
    });

    println!(
        "\nУведомлений осталось: {}",
        page.document().elements_with_class(NOTICE_CLASS).len()
    );
    println!("Выполненные действия:");
    for performed in page.document().performed() {
        match &performed.action {
            DefaultAction::Navigate(target) => println!("  переход: {target}"),
            DefaultAction::Submit(endpoint) => println!("  отправка: {endpoint}"),
            DefaultAction::None => {}
        }
    }
}
