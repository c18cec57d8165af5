//! Menu state machine.
//!
//! ```text
//! Splash ──OK──▶ MainMenu ──OK──▶ Tarot/Content/NSFW menu ──OK──▶ Confirm
//!    ▲  (or 300 ticks)  ▲                │ Back                     │ OK
//!    │                  └────────────────┘                          ▼
//!  Back: exit           ◀──────────── finish_send() ──────────── Executing
//! ```
//!
//! [`AppState`] is only mutated here; the renderer reads it.

use super::cursor::{select_next, select_prev};
use super::{ButtonEvent, Edge, InputEvent};
use crate::catalog::{self, Category, CommandEntry};
use crate::config::SPLASH_TICKS;

/// Labels of the main menu, in selection order.
pub const MAIN_MENU_ITEMS: [&str; 4] = ["Tarot Readings", "Content Gen", "NSFW Mode", "Settings"];

/// Title shown on the splash screen and main menu.
pub const APP_TITLE: &str = "CELESTE CLI";

/// Screens (views) the UI can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    Splash,
    MainMenu,
    TarotMenu,
    ContentMenu,
    NsfwMenu,
    /// Shows the staged command and waits for OK / Back.
    Confirm,
    /// Typing is in progress. No input is read while here.
    Executing,
}

impl Screen {
    /// The submenu listing `category`. `Main` has no list and falls back to
    /// the Tarot menu.
    pub const fn submenu_for(category: Category) -> Screen {
        match category {
            Category::Tarot | Category::Main => Screen::TarotMenu,
            Category::Content => Screen::ContentMenu,
            Category::Nsfw => Screen::NsfwMenu,
        }
    }

    pub const fn is_submenu(self) -> bool {
        matches!(
            self,
            Screen::TarotMenu | Screen::ContentMenu | Screen::NsfwMenu
        )
    }
}

/// Header line of a submenu.
pub const fn header(category: Category) -> &'static str {
    match category {
        Category::Tarot => "TAROT READINGS",
        Category::Content => "CONTENT GEN",
        Category::Nsfw => "NSFW MODE",
        Category::Main => APP_TITLE,
    }
}

/// Work the state machine hands back to the application loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    /// Type this command on the host, then call [`AppState::finish_send`].
    Send(&'static CommandEntry),
}

/// Single mutable state of the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    pub screen: Screen,
    pub selected: usize,
    pub category: Category,
    pub command: Option<&'static CommandEntry>,
    pub splash_ticks: u32,
    pub running: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub const fn new() -> Self {
        Self {
            screen: Screen::Splash,
            selected: 0,
            category: Category::Main,
            command: None,
            splash_ticks: 0,
            running: true,
        }
    }

    /// Number of selectable rows on the current screen.
    pub fn item_count(&self) -> usize {
        match self.screen {
            Screen::MainMenu => MAIN_MENU_ITEMS.len(),
            s if s.is_submenu() => catalog::count_items(self.category),
            _ => 0,
        }
    }

    /// Feed one button edge. Release edges are ignored.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<Request> {
        if event.edge != Edge::Press {
            return None;
        }
        match event.button {
            ButtonEvent::Up => {
                self.move_up();
                None
            }
            ButtonEvent::Down => {
                self.move_down();
                None
            }
            ButtonEvent::Select => self.confirm(),
            ButtonEvent::Back => {
                self.back();
                None
            }
        }
    }

    /// One loop tick. Advances the splash screen after [`SPLASH_TICKS`].
    pub fn tick(&mut self) {
        if self.screen != Screen::Splash {
            return;
        }
        self.splash_ticks += 1;
        if self.splash_ticks >= SPLASH_TICKS {
            self.go_main_menu();
        }
    }

    /// Typing finished (or was abandoned); back to the main menu.
    pub fn finish_send(&mut self) {
        if self.screen == Screen::Executing {
            self.go_main_menu();
        }
    }

    fn move_up(&mut self) {
        if self.screen == Screen::MainMenu || self.screen.is_submenu() {
            self.selected = select_prev(self.selected);
        }
    }

    fn move_down(&mut self) {
        if self.screen == Screen::MainMenu || self.screen.is_submenu() {
            self.selected = select_next(self.selected, self.item_count());
        }
    }

    fn confirm(&mut self) -> Option<Request> {
        match self.screen {
            Screen::Splash => self.go_main_menu(),
            Screen::MainMenu => match self.selected {
                0 => self.enter_submenu(Category::Tarot),
                1 => self.enter_submenu(Category::Content),
                2 => self.enter_submenu(Category::Nsfw),
                // Settings: not implemented yet.
                _ => {}
            },
            s if s.is_submenu() => {
                if let Some(cmd) = catalog::get_item(self.category, self.selected) {
                    self.command = Some(cmd);
                    self.screen = Screen::Confirm;
                }
            }
            Screen::Confirm => {
                if let Some(cmd) = self.command {
                    self.screen = Screen::Executing;
                    return Some(Request::Send(cmd));
                }
            }
            _ => {}
        }
        None
    }

    fn back(&mut self) {
        match self.screen {
            Screen::Splash | Screen::MainMenu => self.running = false,
            Screen::Confirm => self.screen = Screen::submenu_for(self.category),
            _ => self.go_main_menu(),
        }
    }

    fn enter_submenu(&mut self, category: Category) {
        self.category = category;
        self.screen = Screen::submenu_for(category);
        self.selected = 0;
    }

    fn go_main_menu(&mut self) {
        self.screen = Screen::MainMenu;
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: &mut AppState, button: ButtonEvent) -> Option<Request> {
        state.handle_event(InputEvent::press(button))
    }

    fn at_main_menu() -> AppState {
        let mut state = AppState::new();
        press(&mut state, ButtonEvent::Select);
        state
    }

    fn in_submenu(index: usize) -> AppState {
        let mut state = at_main_menu();
        for _ in 0..index {
            press(&mut state, ButtonEvent::Down);
        }
        press(&mut state, ButtonEvent::Select);
        state
    }

    #[test]
    fn starts_on_splash() {
        let state = AppState::new();
        assert_eq!(state.screen, Screen::Splash);
        assert_eq!(state.category, Category::Main);
        assert!(state.command.is_none());
        assert!(state.running);
    }

    #[test]
    fn ok_on_splash_opens_main_menu() {
        let state = at_main_menu();
        assert_eq!(state.screen, Screen::MainMenu);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn splash_advances_after_timeout() {
        let mut state = AppState::new();
        for _ in 0..SPLASH_TICKS - 1 {
            state.tick();
        }
        assert_eq!(state.screen, Screen::Splash);
        state.tick();
        assert_eq!(state.screen, Screen::MainMenu);
        // Further ticks do nothing.
        state.selected = 2;
        state.tick();
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn release_edges_are_ignored() {
        let mut state = AppState::new();
        state.handle_event(InputEvent::release(ButtonEvent::Select));
        state.handle_event(InputEvent::release(ButtonEvent::Back));
        assert_eq!(state, AppState::new());
    }

    #[test]
    fn main_menu_cursor_is_bounded() {
        let mut state = at_main_menu();
        press(&mut state, ButtonEvent::Up);
        assert_eq!(state.selected, 0);
        for _ in 0..10 {
            press(&mut state, ButtonEvent::Down);
        }
        assert_eq!(state.selected, 3);
        press(&mut state, ButtonEvent::Up);
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn submenu_cursor_is_bounded_by_category() {
        for (index, category) in [
            (0, Category::Tarot),
            (1, Category::Content),
            (2, Category::Nsfw),
        ] {
            let mut state = in_submenu(index);
            let count = catalog::count_items(category);
            for _ in 0..count + 5 {
                press(&mut state, ButtonEvent::Down);
                assert!(state.selected < count);
            }
            assert_eq!(state.selected, count - 1);
            for _ in 0..count + 5 {
                press(&mut state, ButtonEvent::Up);
            }
            assert_eq!(state.selected, 0);
        }
    }

    #[test]
    fn main_menu_entries_open_their_category() {
        for (index, screen, category) in [
            (0, Screen::TarotMenu, Category::Tarot),
            (1, Screen::ContentMenu, Category::Content),
            (2, Screen::NsfwMenu, Category::Nsfw),
        ] {
            let state = in_submenu(index);
            assert_eq!(state.screen, screen);
            assert_eq!(state.category, category);
            assert_eq!(state.selected, 0);
        }
    }

    #[test]
    fn settings_entry_is_a_placeholder() {
        let mut state = at_main_menu();
        for _ in 0..3 {
            press(&mut state, ButtonEvent::Down);
        }
        let before = state.clone();
        assert_eq!(press(&mut state, ButtonEvent::Select), None);
        assert_eq!(state, before);
    }

    #[test]
    fn back_from_submenu_resets_selection() {
        let mut state = at_main_menu();
        press(&mut state, ButtonEvent::Down);
        press(&mut state, ButtonEvent::Select);
        press(&mut state, ButtonEvent::Down);
        press(&mut state, ButtonEvent::Back);
        assert_eq!(state.screen, Screen::MainMenu);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn back_on_splash_or_main_menu_exits() {
        let mut state = AppState::new();
        press(&mut state, ButtonEvent::Back);
        assert!(!state.running);

        let mut state = at_main_menu();
        press(&mut state, ButtonEvent::Back);
        assert!(!state.running);
    }

    #[test]
    fn ok_on_submenu_stages_command() {
        let mut state = in_submenu(2);
        press(&mut state, ButtonEvent::Down);
        assert_eq!(press(&mut state, ButtonEvent::Select), None);
        assert_eq!(state.screen, Screen::Confirm);
        assert_eq!(state.command.map(|c| c.name), Some("NSFW Image"));
    }

    #[test]
    fn stale_selection_is_a_no_op() {
        let mut state = in_submenu(2);
        state.selected = 9;
        let before = state.clone();
        press(&mut state, ButtonEvent::Select);
        assert_eq!(state, before);
    }

    #[test]
    fn back_from_confirm_returns_to_origin_submenu() {
        for (index, screen) in [
            (0, Screen::TarotMenu),
            (1, Screen::ContentMenu),
            (2, Screen::NsfwMenu),
        ] {
            let mut state = in_submenu(index);
            press(&mut state, ButtonEvent::Select);
            assert_eq!(state.screen, Screen::Confirm);
            press(&mut state, ButtonEvent::Back);
            assert_eq!(state.screen, screen);
        }
    }

    #[test]
    fn back_from_confirm_with_main_category_falls_back_to_tarot() {
        let mut state = AppState::new();
        state.screen = Screen::Confirm;
        press(&mut state, ButtonEvent::Back);
        assert_eq!(state.screen, Screen::TarotMenu);
    }

    #[test]
    fn ok_on_confirm_requests_send() {
        let mut state = in_submenu(0);
        press(&mut state, ButtonEvent::Down);
        press(&mut state, ButtonEvent::Select);
        let request = press(&mut state, ButtonEvent::Select);

        let entry = catalog::get_item(Category::Tarot, 1).unwrap();
        assert_eq!(request, Some(Request::Send(entry)));
        assert_eq!(state.screen, Screen::Executing);

        state.finish_send();
        assert_eq!(state.screen, Screen::MainMenu);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn ok_on_confirm_without_command_does_nothing() {
        let mut state = AppState::new();
        state.screen = Screen::Confirm;
        assert_eq!(press(&mut state, ButtonEvent::Select), None);
        assert_eq!(state.screen, Screen::Confirm);
    }

    #[test]
    fn back_on_executing_returns_to_main_menu() {
        let mut state = AppState::new();
        state.screen = Screen::Executing;
        state.selected = 2;
        press(&mut state, ButtonEvent::Back);
        assert_eq!(state.screen, Screen::MainMenu);
        assert_eq!(state.selected, 0);
        assert!(state.running);
    }

    #[test]
    fn navigation_ignored_outside_lists() {
        let mut state = in_submenu(0);
        press(&mut state, ButtonEvent::Select);
        press(&mut state, ButtonEvent::Down);
        assert_eq!(state.selected, 0);
        assert_eq!(state.screen, Screen::Confirm);
    }

    #[test]
    fn headers_cover_every_category() {
        assert_eq!(header(Category::Tarot), "TAROT READINGS");
        assert_eq!(header(Category::Content), "CONTENT GEN");
        assert_eq!(header(Category::Nsfw), "NSFW MODE");
        assert_eq!(header(Category::Main), APP_TITLE);
    }
}
