//! Screen state structures for TUI

use crate::contacts::Contact;

/// Field focus on the add-contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddContactField {
    /// Name input field
    Name,
    /// Phone input field
    Phone,
}

/// Add Contact screen state
#[derive(Debug)]
pub struct AddContactScreen {
    /// Name input buffer
    pub name: String,
    /// Phone input buffer
    pub phone: String,
    /// Currently focused field
    pub focus: AddContactField,
    /// Status message (save feedback)
    pub status_message: Option<String>,
}

impl AddContactScreen {
    /// Create new add contact screen with empty fields
    pub fn new() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            focus: AddContactField::Name,
            status_message: None,
        }
    }

    /// Add character to the focused field
    pub fn add_char(&mut self, c: char) {
        match self.focus {
            AddContactField::Name => self.name.push(c),
            AddContactField::Phone => self.phone.push(c),
        }
    }

    /// Remove last character from the focused field
    pub fn backspace(&mut self) {
        match self.focus {
            AddContactField::Name => self.name.pop(),
            AddContactField::Phone => self.phone.pop(),
        };
    }

    /// Switch focus between the two fields
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            AddContactField::Name => AddContactField::Phone,
            AddContactField::Phone => AddContactField::Name,
        };
    }

    /// Build the contact from the current field values
    ///
    /// No validation: empty strings are accepted.
    pub fn contact(&self) -> Contact {
        Contact::new(self.name.clone(), self.phone.clone())
    }

    /// Reset both fields after a save
    pub fn reset(&mut self, saved: &Contact) {
        self.name.clear();
        self.phone.clear();
        self.focus = AddContactField::Name;
        self.status_message = Some(format!("Contacto guardado: {}", saved.name));
    }
}

impl Default for AddContactScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Search Contact screen state
///
/// The filtered view is not stored here: it is derived from the store and the
/// query at render time, so it is always consistent with both.
#[derive(Debug, Default)]
pub struct SearchContactScreen {
    /// Search query buffer
    pub query: String,
}

impl SearchContactScreen {
    /// Create new search screen with an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Add character to the query
    pub fn add_char(&mut self, c: char) {
        self.query.push(c);
    }

    /// Remove last character from the query
    pub fn backspace(&mut self) {
        self.query.pop();
    }
}

/// Delete Contact screen state
///
/// Same derived filtering as the search screen, plus a row selection for the
/// immediate (no confirmation) delete action.
#[derive(Debug, Default)]
pub struct DeleteContactScreen {
    /// Search query buffer
    pub query: String,
    /// Selected row in the filtered list
    pub selected_index: usize,
}

impl DeleteContactScreen {
    /// Create new delete screen with an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Add character to the query
    pub fn add_char(&mut self, c: char) {
        self.query.push(c);
        self.selected_index = 0;
    }

    /// Remove last character from the query
    pub fn backspace(&mut self) {
        self.query.pop();
        self.selected_index = 0;
    }

    /// Move to next filtered row
    pub fn next(&mut self, row_count: usize) {
        if row_count > 0 {
            self.selected_index = (self.selected_index + 1) % row_count;
        }
    }

    /// Move to previous filtered row
    pub fn previous(&mut self, row_count: usize) {
        if row_count > 0 {
            if self.selected_index > 0 {
                self.selected_index -= 1;
            } else {
                self.selected_index = row_count - 1;
            }
        }
    }

    /// Keep the selection inside the filtered list after a removal
    pub fn clamp(&mut self, row_count: usize) {
        if self.selected_index >= row_count && row_count > 0 {
            self.selected_index = row_count - 1;
        }
        if row_count == 0 {
            self.selected_index = 0;
        }
    }
}

/// List Contacts screen state
#[derive(Debug, Default)]
pub struct ListContactsScreen {
    /// Selected row in the full list
    pub selected_index: usize,
    /// Contact awaiting confirmation; `Some` only while the popup is open
    pub pending_delete: Option<Contact>,
    /// Status message
    pub status_message: Option<String>,
}

impl ListContactsScreen {
    /// Create new list screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to next row
    pub fn next(&mut self, row_count: usize) {
        if row_count > 0 {
            self.selected_index = (self.selected_index + 1) % row_count;
        }
    }

    /// Move to previous row
    pub fn previous(&mut self, row_count: usize) {
        if row_count > 0 {
            if self.selected_index > 0 {
                self.selected_index -= 1;
            } else {
                self.selected_index = row_count - 1;
            }
        }
    }

    /// Open the confirmation popup for `contact`
    pub fn request_delete(&mut self, contact: Contact) {
        self.pending_delete = Some(contact);
    }

    /// Close the popup and clear the pending selection
    pub fn clear_pending(&mut self) {
        self.pending_delete = None;
    }

    /// Whether the confirmation popup is open
    pub fn confirming(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Set status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Keep the selection inside the list after a removal
    pub fn clamp(&mut self, row_count: usize) {
        if self.selected_index >= row_count && row_count > 0 {
            self.selected_index = row_count - 1;
        }
        if row_count == 0 {
            self.selected_index = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_contact_focus_switch() {
        let mut screen = AddContactScreen::new();
        screen.add_char('A');
        screen.toggle_focus();
        screen.add_char('9');
        assert_eq!(screen.name, "A");
        assert_eq!(screen.phone, "9");
    }

    #[test]
    fn test_add_contact_reset_clears_fields() {
        let mut screen = AddContactScreen::new();
        screen.name = "Ana".to_string();
        screen.phone = "999".to_string();
        let contact = screen.contact();
        screen.reset(&contact);
        assert_eq!(screen.name, "");
        assert_eq!(screen.phone, "");
        assert_eq!(screen.focus, AddContactField::Name);
        assert!(screen.status_message.is_some());
    }

    #[test]
    fn test_delete_screen_selection_wraps() {
        let mut screen = DeleteContactScreen::new();
        screen.next(3);
        screen.next(3);
        screen.next(3);
        assert_eq!(screen.selected_index, 0);
        screen.previous(3);
        assert_eq!(screen.selected_index, 2);
    }

    #[test]
    fn test_delete_screen_query_edit_resets_selection() {
        let mut screen = DeleteContactScreen::new();
        screen.next(3);
        screen.add_char('a');
        assert_eq!(screen.selected_index, 0);
    }

    #[test]
    fn test_list_screen_pending_lifecycle() {
        let mut screen = ListContactsScreen::new();
        assert!(!screen.confirming());
        screen.request_delete(Contact::new("Ana", "1"));
        assert!(screen.confirming());
        screen.clear_pending();
        assert!(!screen.confirming());
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut screen = ListContactsScreen::new();
        screen.selected_index = 2;
        screen.clamp(2);
        assert_eq!(screen.selected_index, 1);
        screen.clamp(0);
        assert_eq!(screen.selected_index, 0);
    }
}
