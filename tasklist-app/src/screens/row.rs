use tasklist::Task;

use crate::strings;

/// What happened to a row this frame.
pub struct RowResponse {
    /// The completion toggle was clicked; the task has already been flipped.
    pub toggled: bool,
    /// Covers the whole row.
    pub response: egui::Response,
}

/// Draw one task: a completion toggle followed by its text.
///
/// The toggle flips `task.is_completed` in place.
pub fn task_row(ui: &mut egui::Ui, task: &mut Task) -> RowResponse {
    let inner = ui.horizontal(|ui| {
        let icon = if task.is_completed {
            strings::ICON_DONE
        } else {
            strings::ICON_OPEN
        };
        let toggled = ui
            .add(egui::Button::new(egui::RichText::new(icon).weak()).frame(false))
            .clicked();
        if toggled {
            task.toggle();
        }
        ui.label(&task.text);
        toggled
    });

    RowResponse {
        toggled: inner.inner,
        response: inner.response,
    }
}
