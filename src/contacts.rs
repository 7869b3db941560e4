//! Contact model and in-memory contact store

/// A single contact: a name/phone pair
///
/// Contacts are plain values with structural equality. There is no identifier
/// field, so two contacts with the same name and phone are indistinguishable;
/// removal by value always takes the first structural match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Display name
    pub name: String,
    /// Phone number (free-form, not validated)
    pub phone: String,
}

impl Contact {
    /// Create a new contact
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// Ordered, in-memory collection of contacts
///
/// Insertion order is preserved except for removals. Duplicates are allowed;
/// no uniqueness constraint is enforced. The store is the single source of
/// truth shared by every screen for the lifetime of the session.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the session seed contacts
    pub fn seeded() -> Self {
        Self {
            contacts: vec![
                Contact::new("Pepe Pérez", "123"),
                Contact::new("Juan López", "321"),
                Contact::new("Beatriz Gómez", "213"),
            ],
        }
    }

    /// Append a contact at the end of the sequence
    ///
    /// Always succeeds; no duplicate check is performed.
    pub fn add(&mut self, contact: Contact) {
        tracing::debug!(name = %contact.name, "contact added");
        self.contacts.push(contact);
    }

    /// Remove the first contact structurally equal to `contact`
    ///
    /// Returns whether an entry was removed. Removing an absent contact is a
    /// silent no-op, not an error.
    pub fn remove(&mut self, contact: &Contact) -> bool {
        match self.contacts.iter().position(|c| c == contact) {
            Some(index) => {
                self.contacts.remove(index);
                tracing::debug!(name = %contact.name, "contact removed");
                true
            }
            None => false,
        }
    }

    /// Iterate over contacts whose name contains `query` case-insensitively
    ///
    /// A blank query yields the full sequence unfiltered, in original order.
    pub fn filter<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Contact> {
        let blank = query.trim().is_empty();
        let needle = query.to_lowercase();
        self.contacts
            .iter()
            .filter(move |c| blank || c.name.to_lowercase().contains(&needle))
    }

    /// Read-only view of the current sequence
    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of contacts in the store
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> ContactStore {
        ContactStore::seeded()
    }

    #[test]
    fn test_seed_contacts_in_order() {
        let store = seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(store.all()[0], Contact::new("Pepe Pérez", "123"));
        assert_eq!(store.all()[1], Contact::new("Juan López", "321"));
        assert_eq!(store.all()[2], Contact::new("Beatriz Gómez", "213"));
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut store = seeded();
        store.add(Contact::new("Ana", "999"));
        assert_eq!(store.len(), 4);
        assert_eq!(store.all().last(), Some(&Contact::new("Ana", "999")));
    }

    #[test]
    fn test_add_allows_duplicates() {
        let mut store = ContactStore::new();
        store.add(Contact::new("Ana", "999"));
        store.add(Contact::new("Ana", "999"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_first_match_preserves_order() {
        let mut store = ContactStore::new();
        store.add(Contact::new("Ana", "1"));
        store.add(Contact::new("Eva", "2"));
        store.add(Contact::new("Ana", "1"));

        let removed = store.remove(&Contact::new("Ana", "1"));
        assert!(removed);
        assert_eq!(
            store.all(),
            &[Contact::new("Eva", "2"), Contact::new("Ana", "1")]
        );
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = seeded();
        let removed = store.remove(&Contact::new("Nadie", "000"));
        assert!(!removed);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_filter_case_insensitive_substring() {
        let store = seeded();
        let hits: Vec<&Contact> = store.filter("pérez").collect();
        assert_eq!(hits, vec![&Contact::new("Pepe Pérez", "123")]);

        let hits: Vec<&Contact> = store.filter("JUAN").collect();
        assert_eq!(hits, vec![&Contact::new("Juan López", "321")]);
    }

    #[test]
    fn test_filter_blank_returns_everything() {
        let store = seeded();
        let all: Vec<&Contact> = store.filter("").collect();
        assert_eq!(all.len(), 3);
        let all_ws: Vec<&Contact> = store.filter("   ").collect();
        assert_eq!(all_ws.len(), 3);
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let mut store = ContactStore::new();
        store.add(Contact::new("Bea", "1"));
        store.add(Contact::new("Abel", "2"));
        store.add(Contact::new("Beatriz", "3"));

        let hits: Vec<String> = store.filter("be").map(|c| c.name.clone()).collect();
        assert_eq!(hits, vec!["Bea", "Abel", "Beatriz"]);
    }

    #[test]
    fn test_filter_padded_query_matches_literally() {
        let store = seeded();
        // "pérez " is not a substring of "Pepe Pérez"; only a fully blank
        // query bypasses the substring match.
        assert_eq!(store.filter("pérez ").count(), 0);
        assert_eq!(store.filter(" pérez").count(), 0);
        let hits: Vec<&Contact> = store.filter("e p").collect();
        assert_eq!(hits, vec![&Contact::new("Pepe Pérez", "123")]);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let store = seeded();
        assert_eq!(store.filter("zzz").count(), 0);
    }
}
