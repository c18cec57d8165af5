//! Screen renderers. Each one clears the canvas and redraws its screen from
//! [`AppState`] alone.

use super::canvas::{Canvas, Font, VAlign};
use super::cursor::visible_range;
use super::state::{header, AppState, Screen, APP_TITLE, MAIN_MENU_ITEMS};
use crate::catalog;
use crate::config::{COMMAND_PREVIEW_CHARS, VISIBLE_ROWS};

const LIST_TOP: i32 = 20;
const ROW_HEIGHT: i32 = 10;
const CURSOR_X: i32 = 4;
const LABEL_X: i32 = 12;

/// Draw the current screen.
pub fn render<C: Canvas>(canvas: &mut C, state: &AppState) {
    match state.screen {
        Screen::Splash => render_splash(canvas),
        Screen::MainMenu => render_main_menu(canvas, state),
        Screen::TarotMenu | Screen::ContentMenu | Screen::NsfwMenu => render_submenu(canvas, state),
        Screen::Confirm => render_confirm(canvas, state),
        Screen::Executing => render_executing(canvas),
    }
}

fn render_splash<C: Canvas>(canvas: &mut C) {
    canvas.clear();

    canvas.set_font(Font::Primary);
    canvas.draw_str_centered(64, 10, VAlign::Top, APP_TITLE);

    canvas.set_font(Font::Secondary);
    canvas.draw_str_centered(64, 25, VAlign::Top, "Remote Controller");

    // Logo placeholder
    canvas.draw_frame(50, 35, 28, 20);
    canvas.draw_str_centered(64, 42, VAlign::Top, "C");

    canvas.draw_str_centered(64, 58, VAlign::Bottom, "Press OK to start");
}

fn render_main_menu<C: Canvas>(canvas: &mut C, state: &AppState) {
    canvas.clear();

    canvas.set_font(Font::Primary);
    canvas.draw_str(2, 10, APP_TITLE);

    for (row, label) in MAIN_MENU_ITEMS.iter().enumerate() {
        draw_row(canvas, row, label, row == state.selected);
    }

    canvas.set_font(Font::Secondary);
    canvas.draw_str_centered(64, 62, VAlign::Bottom, "OK=Select  Back=Exit");
}

fn render_submenu<C: Canvas>(canvas: &mut C, state: &AppState) {
    canvas.clear();

    canvas.set_font(Font::Primary);
    canvas.draw_str(2, 10, header(state.category));

    let count = catalog::count_items(state.category);
    let visible = visible_range(state.selected, count, VISIBLE_ROWS);
    let first = visible.start;
    let entries = catalog::items(state.category)
        .enumerate()
        .skip(visible.start)
        .take(visible.len());
    for (index, entry) in entries {
        draw_row(canvas, index - first, entry.name, index == state.selected);
    }

    canvas.set_font(Font::Secondary);
    canvas.draw_str_centered(64, 62, VAlign::Bottom, "OK=Send  Back=Menu");
}

fn render_confirm<C: Canvas>(canvas: &mut C, state: &AppState) {
    canvas.clear();

    canvas.set_font(Font::Primary);
    canvas.draw_str_centered(64, 10, VAlign::Top, "SEND COMMAND?");

    if let Some(cmd) = state.command {
        canvas.set_font(Font::Secondary);
        canvas.draw_str_centered(64, 25, VAlign::Top, cmd.name);
        canvas.draw_str_centered(64, 40, VAlign::Top, preview(cmd.command));
    }

    canvas.set_font(Font::Secondary);
    canvas.draw_str_centered(64, 58, VAlign::Bottom, "OK=Send  Back=Cancel");
}

fn render_executing<C: Canvas>(canvas: &mut C) {
    canvas.clear();

    canvas.set_font(Font::Primary);
    canvas.draw_str_centered(64, 30, VAlign::Center, "SENDING...");

    canvas.set_font(Font::Secondary);
    canvas.draw_str_centered(64, 45, VAlign::Center, "Check host terminal");
}

/// One list row: cursor marker plus label. Rows are counted from the top of
/// the visible window.
fn draw_row<C: Canvas>(canvas: &mut C, row: usize, label: &str, selected: bool) {
    let y = LIST_TOP + row as i32 * ROW_HEIGHT;
    if selected {
        canvas.draw_str(CURSOR_X, y, ">");
    }
    canvas.draw_str(LABEL_X, y, label);
}

/// Leading part of a command shown on the confirm screen.
pub fn preview(command: &str) -> &str {
    match command.char_indices().nth(COMMAND_PREVIEW_CHARS) {
        Some((end, _)) => &command[..end],
        None => command,
    }
}
