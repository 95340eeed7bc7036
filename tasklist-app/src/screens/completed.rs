use tasklist::TaskStore;

use super::Screen;
use crate::strings;

/// Message shown instead of the list, if any.
pub fn empty_state(store: &TaskStore) -> Option<&'static str> {
    (store.completed_count() == 0).then_some(strings::EMPTY_COMPLETED)
}

/// Completed tasks, read-only. Returns the screen to navigate to, if any.
pub fn show(ui: &mut egui::Ui, store: &TaskStore) -> Option<Screen> {
    let mut navigate = None;
    if ui.link(strings::BACK_LINK).clicked() {
        navigate = Some(Screen::List);
    }

    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.heading(strings::COMPLETED_TITLE);
        ui.add_space(8.0);
    });

    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            if let Some(message) = empty_state(store) {
                ui.weak(message);
                return;
            }
            for (_, task) in store.completed() {
                ui.label(&task.text);
                ui.separator();
            }
        });

    navigate
}
