//! The root application: owns all state and lends it to the active screen.

use tasklist::{TaskStore, ThemeFlag};

use crate::config::AppConfig;
use crate::screens::{ListScreen, Screen, completed};

pub struct TaskListApp {
    store: TaskStore,
    theme: ThemeFlag,
    screen: Screen,
    list: ListScreen,
}

impl TaskListApp {
    /// Build the app around existing state and hook the theme flag up to `ctx`.
    pub fn new(store: TaskStore, mut theme: ThemeFlag, ctx: &egui::Context) -> Self {
        apply_theme(ctx, theme.is_dark());
        theme.subscribe({
            let ctx = ctx.clone();
            move |is_dark| {
                tracing::info!(is_dark, "appearance changed");
                apply_theme(&ctx, is_dark);
                ctx.request_repaint();
            }
        });

        Self {
            store,
            theme,
            screen: Screen::default(),
            list: ListScreen::default(),
        }
    }

    pub fn from_config(config: &AppConfig, ctx: &egui::Context) -> Self {
        let store = TaskStore::with_input_policy(config.input_policy);
        let theme = ThemeFlag::load(config.preferences());
        tracing::info!(
            is_dark = theme.is_dark(),
            policy = ?config.input_policy,
            "starting task list"
        );
        Self::new(store, theme, ctx)
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    pub fn theme(&self) -> &ThemeFlag {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeFlag {
        &mut self.theme
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn navigate(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::debug!(from = ?self.screen, to = ?screen, "navigating");
            self.screen = screen;
        }
    }

    /// Draw one frame.
    pub fn ui(&mut self, ctx: &egui::Context) {
        let next = egui::CentralPanel::default()
            .show(ctx, |ui| match self.screen {
                Screen::List => self.list.show(ui, &mut self.store, &mut self.theme),
                Screen::Completed => completed::show(ui, &self.store),
            })
            .inner;

        if let Some(next) = next {
            self.navigate(next);
        }
    }
}

impl eframe::App for TaskListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

fn apply_theme(ctx: &egui::Context, is_dark: bool) {
    ctx.set_theme(if is_dark {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    });
}
