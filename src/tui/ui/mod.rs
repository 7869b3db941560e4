//! UI rendering module - screen-specific rendering functions
//!
//! This module contains the UI rendering logic organized by screen type.
//! Each screen has its own file for better maintainability.

mod add_contact;
mod delete_contact;
mod list_contacts;
mod main_menu;
mod search_contact;

use crate::router::Route;
use crate::tui::app::App;
use ratatui::Frame;

// Re-export render functions
pub use add_contact::render_add_contact;
pub use delete_contact::render_delete_contact;
pub use list_contacts::render_list_contacts;
pub use main_menu::render_main_menu;
pub use search_contact::render_search_contact;

/// Main UI rendering function - dispatches to screen-specific render functions
pub fn ui(f: &mut Frame, app: &App) {
    match app.current_route() {
        Route::MainMenu => render_main_menu(f, app),
        Route::AddContact => render_add_contact(f, app),
        Route::SearchContact => render_search_contact(f, app),
        Route::DeleteContact => render_delete_contact(f, app),
        Route::ListContacts => render_list_contacts(f, app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
    }

    #[test]
    fn test_render_every_screen_without_panic() {
        let mut app = App::new();
        draw(&app);

        app.show_add_contact_screen();
        draw(&app);
        app.back_to_main_menu();

        app.show_search_contact_screen();
        draw(&app);
        app.back_to_main_menu();

        app.show_delete_contact_screen();
        draw(&app);
        app.back_to_main_menu();

        app.show_list_contacts_screen();
        app.request_delete_selected();
        draw(&app);
    }

    #[test]
    fn test_render_empty_store() {
        let mut app = App::new();
        let all: Vec<_> = app.store.all().to_vec();
        for contact in &all {
            app.store.remove(contact);
        }
        app.show_list_contacts_screen();
        draw(&app);
    }
}
