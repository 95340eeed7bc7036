//! The main screen: input row, incomplete tasks, and the way to the rest.

use std::collections::HashMap;

use tasklist::{TaskId, TaskStore, ThemeFlag};

use super::{Screen, row};
use crate::strings;

/// How far a row must be dragged to the left before it is deleted.
pub const SWIPE_DELETE_DISTANCE: f32 = 80.0;

/// Reserved below the list for the link to the completed screen.
const FOOTER_HEIGHT: f32 = 32.0;

/// Horizontal drag distance accumulated per row while a swipe is in progress.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    offsets: HashMap<TaskId, f32>,
}

impl SwipeTracker {
    pub fn drag(&mut self, id: TaskId, dx: f32) {
        *self.offsets.entry(id).or_default() += dx;
    }

    /// Current offset for `id`, negative when dragged left.
    pub fn offset(&self, id: TaskId) -> f32 {
        self.offsets.get(&id).copied().unwrap_or_default()
    }

    /// End the drag on `id`. Returns `true` if it went far enough left to delete.
    pub fn release(&mut self, id: TaskId) -> bool {
        self.offsets
            .remove(&id)
            .is_some_and(|dx| dx <= -SWIPE_DELETE_DISTANCE)
    }

    /// Forget drags on tasks that are no longer shown.
    pub fn retain(&mut self, mut keep: impl FnMut(TaskId) -> bool) {
        self.offsets.retain(|id, _| keep(*id));
    }
}

/// Interaction id of the swipe area over a task's row.
fn swipe_id(id: TaskId) -> egui::Id {
    egui::Id::new(("swipe", id))
}

/// Message shown instead of the list, if any.
pub fn empty_state(store: &TaskStore) -> Option<&'static str> {
    (store.incomplete_count() == 0).then_some(strings::EMPTY_INCOMPLETE)
}

/// Per-screen state that outlives a single frame.
#[derive(Debug, Default)]
pub struct ListScreen {
    swipes: SwipeTracker,
}

impl ListScreen {
    /// Draw the screen. Returns the screen to navigate to, if any.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        store: &mut TaskStore,
        theme: &mut ThemeFlag,
    ) -> Option<Screen> {
        theme_toggle(ui, theme);
        input_row(ui, store);
        ui.add_space(8.0);

        let list_height = (ui.available_height() - FOOTER_HEIGHT).max(0.0);
        egui::ScrollArea::vertical()
            .max_height(list_height)
            .auto_shrink([false, true])
            .show(ui, |ui| self.task_list(ui, store));

        ui.add_space(8.0);
        let mut navigate = None;
        ui.vertical_centered(|ui| {
            if ui.link(egui::RichText::new(strings::COMPLETED_LINK).weak()).clicked() {
                navigate = Some(Screen::Completed);
            }
        });
        navigate
    }

    fn task_list(&mut self, ui: &mut egui::Ui, store: &mut TaskStore) {
        if let Some(message) = empty_state(store) {
            self.swipes = SwipeTracker::default();
            ui.weak(message);
            return;
        }

        // Rows toggled this frame leave the view before deletions are applied,
        // so display indices are resolved against the view as it was drawn.
        let shown = store.incomplete_ids();
        let mut to_delete = Vec::new();
        for (index, task) in store.incomplete_mut() {
            let id = task.id();
            let inner = ui.horizontal(|ui| {
                if row::task_row(ui, task).toggled {
                    tracing::debug!(%id, completed = task.is_completed, "row toggled");
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small_button(strings::DELETE_BUTTON)
                        .on_hover_text(strings::DELETE_HINT)
                        .clicked()
                })
                .inner
            });
            let rect = inner.response.rect;

            let swipe = ui.interact(rect, swipe_id(id), egui::Sense::drag());
            if swipe.dragged() {
                self.swipes.drag(id, swipe.drag_delta().x);
                paint_swipe_hint(ui, rect, self.swipes.offset(id));
            }
            let swiped = swipe.drag_stopped() && self.swipes.release(id);

            if inner.inner || swiped {
                to_delete.push(index);
            }
            ui.separator();
        }

        if !to_delete.is_empty() {
            store.delete_ids(to_delete.into_iter().filter_map(|i| shown.get(i).copied()));
        }
        self.swipes
            .retain(|id| store.get(id).is_some_and(|task| !task.is_completed));
    }
}

fn paint_swipe_hint(ui: &egui::Ui, rect: egui::Rect, offset: f32) {
    if offset >= 0.0 {
        return;
    }
    let progress = (-offset / SWIPE_DELETE_DISTANCE).min(1.0);
    let alpha = (progress * 96.0) as u8;
    ui.painter().rect_filled(
        rect,
        4.0,
        egui::Color32::from_rgba_unmultiplied(220, 60, 60, alpha),
    );
}

fn theme_toggle(ui: &mut egui::Ui, theme: &mut ThemeFlag) {
    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            theme_button(ui, theme);
        });
    });
}

fn theme_button(ui: &mut egui::Ui, theme: &mut ThemeFlag) {
    let icon = if theme.is_dark() {
        strings::ICON_LIGHT
    } else {
        strings::ICON_DARK
    };
    let button = egui::Button::new(egui::RichText::new(icon).size(20.0)).frame(false);
    if ui.add(button).on_hover_text(strings::THEME_HINT).clicked()
        && let Err(e) = theme.toggle()
    {
        tracing::error!("couldn't save theme preference: {e}");
    }
}

fn input_row(ui: &mut egui::Ui, store: &mut TaskStore) {
    ui.horizontal(|ui| {
        let field = egui::TextEdit::singleline(&mut store.pending_input)
            .hint_text(strings::ADD_PLACEHOLDER)
            .desired_width(ui.available_width() - 32.0);
        let text_edit = ui.add(field);
        let add = egui::Button::new(egui::RichText::new(strings::ADD_BUTTON).weak()).frame(false);
        if ui.add(add).clicked()
            || text_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
        {
            store.submit_pending();
        }
    });
}
