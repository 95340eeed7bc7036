//! Text shown to the user.
//!
//! Labels are English renderings of the Japanese ones the app first shipped
//! with; each constant's doc gives the Japanese it stands for.

/// 「あたらしいTODO」
pub const ADD_PLACEHOLDER: &str = "New to-do";
pub const ADD_BUTTON: &str = "➕";
pub const DELETE_BUTTON: &str = "🗑";
pub const DELETE_HINT: &str = "Delete (or swipe left)";

/// 「なにもないです」
pub const EMPTY_INCOMPLETE: &str = "Nothing here";
/// 「おわったTODO」
pub const COMPLETED_LINK: &str = "Finished to-dos";

/// 「おつかれさまでした」
pub const COMPLETED_TITLE: &str = "Nice work!";
/// 「すべておわりです！」
pub const EMPTY_COMPLETED: &str = "All done!";
pub const BACK_LINK: &str = "⏴ Back";

pub const ICON_DONE: &str = "✔";
pub const ICON_OPEN: &str = "○";

pub const ICON_LIGHT: &str = "☀";
pub const ICON_DARK: &str = "🌙";
pub const THEME_HINT: &str = "Toggle light/dark";
