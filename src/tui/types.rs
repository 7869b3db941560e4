//! Core types for the main menu

use crate::router::Route;

/// Main menu items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Navigate to the add-contact form
    AddContact,
    /// Navigate to the contact search
    SearchContact,
    /// Navigate to the delete-contact list
    DeleteContact,
    /// Navigate to the full contact list
    ListContacts,
    /// Exit application
    Exit,
}

impl MenuItem {
    /// Get all menu items in order
    pub fn all() -> Vec<Self> {
        vec![
            Self::AddContact,
            Self::SearchContact,
            Self::DeleteContact,
            Self::ListContacts,
            Self::Exit,
        ]
    }

    /// Get display label for menu item
    pub fn label(&self) -> &str {
        match self {
            Self::AddContact => "Agregar contacto",
            Self::SearchContact => "Buscar contacto",
            Self::DeleteContact => "Eliminar contacto",
            Self::ListContacts => "Lista de contactos",
            Self::Exit => "Salir",
        }
    }

    /// Get description for menu item
    pub fn description(&self) -> &str {
        match self {
            Self::AddContact => "Añadir un contacto nuevo a la agenda",
            Self::SearchContact => "Buscar contactos por nombre",
            Self::DeleteContact => "Eliminar contactos directamente desde la búsqueda",
            Self::ListContacts => "Ver todos los contactos y eliminar con confirmación",
            Self::Exit => "Salir de la agenda",
        }
    }

    /// Route this menu item navigates to, if any
    pub fn route(&self) -> Option<Route> {
        match self {
            Self::AddContact => Some(Route::AddContact),
            Self::SearchContact => Some(Route::SearchContact),
            Self::DeleteContact => Some(Route::DeleteContact),
            Self::ListContacts => Some(Route::ListContacts),
            Self::Exit => None,
        }
    }
}
