//! Main TUI application state and logic

use crate::contacts::{Contact, ContactStore};
use crate::router::{Route, Router};
use crate::tui::screens::*;
use crate::tui::types::MenuItem;

/// Application state
///
/// Owns the contact store and the navigation stack; every screen reads and
/// mutates the store through the handlers below. All mutation happens
/// synchronously inside a key-event handler, there is no background work.
pub struct App {
    /// Navigation stack; its top decides which screen is rendered
    pub router: Router,
    /// Currently selected menu item
    pub selected_index: usize,
    /// Menu items
    pub menu_items: Vec<MenuItem>,
    /// Shared contact list, the single source of truth for all screens
    pub store: ContactStore,
    /// Should quit
    pub should_quit: bool,
    /// Add contact screen (when active)
    pub add_contact_screen: Option<AddContactScreen>,
    /// Search contact screen (when active)
    pub search_contact_screen: Option<SearchContactScreen>,
    /// Delete contact screen (when active)
    pub delete_contact_screen: Option<DeleteContactScreen>,
    /// List contacts screen (when active)
    pub list_contacts_screen: Option<ListContactsScreen>,
}

impl App {
    /// Create a new application with the seed contacts
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            selected_index: 0,
            menu_items: MenuItem::all(),
            store: ContactStore::seeded(),
            should_quit: false,
            add_contact_screen: None,
            search_contact_screen: None,
            delete_contact_screen: None,
            list_contacts_screen: None,
        }
    }

    /// Currently visible route
    pub fn current_route(&self) -> Route {
        self.router.current()
    }

    /// Get currently selected menu item
    pub fn selected_item(&self) -> MenuItem {
        self.menu_items[self.selected_index]
    }

    /// Move to next menu item
    pub fn next(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.menu_items.len();
    }

    /// Move to previous menu item
    pub fn previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.menu_items.len() - 1;
        }
    }

    /// Select current menu item
    pub fn select(&mut self) {
        match self.selected_item() {
            MenuItem::AddContact => self.show_add_contact_screen(),
            MenuItem::SearchContact => self.show_search_contact_screen(),
            MenuItem::DeleteContact => self.show_delete_contact_screen(),
            MenuItem::ListContacts => self.show_list_contacts_screen(),
            MenuItem::Exit => self.should_quit = true,
        }
    }

    /// Show add contact screen
    pub fn show_add_contact_screen(&mut self) {
        self.add_contact_screen = Some(AddContactScreen::new());
        self.router.navigate(Route::AddContact);
    }

    /// Show search contact screen
    pub fn show_search_contact_screen(&mut self) {
        self.search_contact_screen = Some(SearchContactScreen::new());
        self.router.navigate(Route::SearchContact);
    }

    /// Show delete contact screen
    pub fn show_delete_contact_screen(&mut self) {
        self.delete_contact_screen = Some(DeleteContactScreen::new());
        self.router.navigate(Route::DeleteContact);
    }

    /// Show list contacts screen
    pub fn show_list_contacts_screen(&mut self) {
        self.list_contacts_screen = Some(ListContactsScreen::new());
        self.router.navigate(Route::ListContacts);
    }

    /// Return to main menu, dropping any transient screen state
    pub fn back_to_main_menu(&mut self) {
        self.router.back();
        self.add_contact_screen = None;
        self.search_contact_screen = None;
        self.delete_contact_screen = None;
        self.list_contacts_screen = None;
    }

    /// Save the add-contact form into the store and reset the form
    ///
    /// No validation: empty name and phone are accepted.
    pub fn save_contact(&mut self) {
        if let Some(screen) = &mut self.add_contact_screen {
            let contact = screen.contact();
            self.store.add(contact.clone());
            screen.reset(&contact);
        }
    }

    /// Filtered view for the delete screen, in store order
    pub fn delete_screen_rows(&self) -> Vec<Contact> {
        match &self.delete_contact_screen {
            Some(screen) => self.store.filter(&screen.query).cloned().collect(),
            None => Vec::new(),
        }
    }

    /// Remove the selected filtered row immediately, without confirmation
    pub fn delete_filtered_selected(&mut self) {
        let target = match &self.delete_contact_screen {
            Some(screen) => self
                .store
                .filter(&screen.query)
                .nth(screen.selected_index)
                .cloned(),
            None => None,
        };
        if let Some(contact) = target {
            self.store.remove(&contact);
            let remaining = match &self.delete_contact_screen {
                Some(screen) => self.store.filter(&screen.query).count(),
                None => 0,
            };
            if let Some(screen) = &mut self.delete_contact_screen {
                screen.clamp(remaining);
            }
        }
    }

    /// Open the confirmation popup for the selected contact
    pub fn request_delete_selected(&mut self) {
        if let Some(screen) = &mut self.list_contacts_screen {
            if let Some(contact) = self.store.all().get(screen.selected_index) {
                screen.request_delete(contact.clone());
            }
        }
    }

    /// Confirm the pending deletion: remove the contact and close the popup
    pub fn confirm_delete(&mut self) {
        let pending = self
            .list_contacts_screen
            .as_mut()
            .and_then(|screen| screen.pending_delete.take());
        if let Some(contact) = pending {
            self.store.remove(&contact);
            let remaining = self.store.len();
            if let Some(screen) = &mut self.list_contacts_screen {
                screen.set_status(format!("Contacto eliminado: {}", contact.name));
                screen.clamp(remaining);
            }
        }
    }

    /// Cancel the pending deletion: close the popup, store unchanged
    pub fn cancel_delete(&mut self) {
        if let Some(screen) = &mut self.list_contacts_screen {
            screen.clear_pending();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_selection_navigates() {
        let mut app = App::new();
        assert_eq!(app.current_route(), Route::MainMenu);

        app.select(); // first item: AddContact
        assert_eq!(app.current_route(), Route::AddContact);
        assert!(app.add_contact_screen.is_some());

        app.back_to_main_menu();
        assert_eq!(app.current_route(), Route::MainMenu);
        assert!(app.add_contact_screen.is_none());
    }

    #[test]
    fn test_exit_item_quits() {
        let mut app = App::new();
        app.previous(); // wraps to last item: Exit
        app.select();
        assert!(app.should_quit);
        assert_eq!(app.current_route(), Route::MainMenu);
    }

    #[test]
    fn test_save_contact_appends_and_resets_fields() {
        let mut app = App::new();
        app.show_add_contact_screen();
        {
            let screen = app.add_contact_screen.as_mut().unwrap();
            for c in "Ana".chars() {
                screen.add_char(c);
            }
            screen.toggle_focus();
            for c in "999".chars() {
                screen.add_char(c);
            }
        }
        app.save_contact();

        assert_eq!(app.store.all().last(), Some(&Contact::new("Ana", "999")));
        let screen = app.add_contact_screen.as_ref().unwrap();
        assert_eq!(screen.name, "");
        assert_eq!(screen.phone, "");
    }

    #[test]
    fn test_save_contact_accepts_empty_fields() {
        let mut app = App::new();
        app.show_add_contact_screen();
        app.save_contact();
        assert_eq!(app.store.all().last(), Some(&Contact::new("", "")));
    }

    #[test]
    fn test_delete_screen_removes_immediately() {
        let mut app = App::new();
        app.show_delete_contact_screen();
        {
            let screen = app.delete_contact_screen.as_mut().unwrap();
            for c in "juan".chars() {
                screen.add_char(c);
            }
        }
        assert_eq!(app.delete_screen_rows().len(), 1);

        app.delete_filtered_selected();
        assert_eq!(app.store.len(), 2);
        assert!(!app.store.all().contains(&Contact::new("Juan López", "321")));
        assert!(app.delete_screen_rows().is_empty());
    }

    #[test]
    fn test_delete_screen_noop_when_no_rows() {
        let mut app = App::new();
        app.show_delete_contact_screen();
        {
            let screen = app.delete_contact_screen.as_mut().unwrap();
            for c in "zzz".chars() {
                screen.add_char(c);
            }
        }
        app.delete_filtered_selected();
        assert_eq!(app.store.len(), 3);
    }

    #[test]
    fn test_list_confirm_delete_removes_contact() {
        let mut app = App::new();
        app.show_list_contacts_screen();
        {
            let screen = app.list_contacts_screen.as_mut().unwrap();
            screen.next(app.store.len()); // select Juan López
        }
        app.request_delete_selected();
        assert_eq!(
            app.list_contacts_screen.as_ref().unwrap().pending_delete,
            Some(Contact::new("Juan López", "321"))
        );

        app.confirm_delete();
        assert_eq!(app.store.len(), 2);
        assert!(!app.store.all().contains(&Contact::new("Juan López", "321")));
        assert!(!app.list_contacts_screen.as_ref().unwrap().confirming());
    }

    #[test]
    fn test_list_cancel_delete_keeps_store() {
        let mut app = App::new();
        app.show_list_contacts_screen();
        app.request_delete_selected();
        assert!(app.list_contacts_screen.as_ref().unwrap().confirming());

        app.cancel_delete();
        assert_eq!(app.store.len(), 3);
        assert!(!app.list_contacts_screen.as_ref().unwrap().confirming());
    }

    #[test]
    fn test_confirm_delete_clamps_selection() {
        let mut app = App::new();
        app.show_list_contacts_screen();
        {
            let screen = app.list_contacts_screen.as_mut().unwrap();
            screen.selected_index = 2; // last seed contact
        }
        app.request_delete_selected();
        app.confirm_delete();
        assert_eq!(
            app.list_contacts_screen.as_ref().unwrap().selected_index,
            1
        );
    }
}
