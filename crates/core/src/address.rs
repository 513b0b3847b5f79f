//! Delivery addresses and the per-visitor address catalog.
//!
//! The catalog is append-only: addresses are never edited or removed once
//! added, which is what keeps count-based ID assignment collision-free.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{AddressId, RegionCode};

/// Errors raised by [`AddressCatalog`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// No address with this ID exists in the catalog.
    #[error("unknown address: {0}")]
    UnknownAddress(AddressId),
}

/// A delivery address owned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    /// Free-text label such as "Home" or "Office".
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: RegionCode,
    /// Not format-checked.
    pub zip_code: String,
    /// Presentation preference only; more than one address may carry it.
    pub is_default: bool,
}

impl Address {
    /// Single-line form used in the address list, e.g.
    /// "123 Coffee Street, Bean City, CA 90210".
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.zip_code
        )
    }
}

/// A completed address that has not been assigned an ID yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDraft {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: RegionCode,
    pub zip_code: String,
    /// What the customer asked for. The catalog decides the final value.
    pub is_default: bool,
}

/// The known delivery addresses and which one is selected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressCatalog {
    addresses: Vec<Address>,
    selected: Option<AddressId>,
}

impl AddressCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-populated with existing addresses.
    ///
    /// Nothing is selected; defaults are taken as given.
    #[must_use]
    pub const fn with_addresses(addresses: Vec<Address>) -> Self {
        Self {
            addresses,
            selected: None,
        }
    }

    /// All addresses in insertion order.
    #[must_use]
    pub fn list_addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Number of addresses in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// True if the catalog holds no addresses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Look up an address by ID.
    #[must_use]
    pub fn get(&self, id: AddressId) -> Option<&Address> {
        self.addresses.iter().find(|address| address.id == id)
    }

    /// ID of the selected address, if any.
    #[must_use]
    pub const fn selected_id(&self) -> Option<AddressId> {
        self.selected
    }

    /// The selected address, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Address> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Select an existing address.
    ///
    /// # Errors
    ///
    /// Returns `AddressError::UnknownAddress` if `id` is not in the catalog.
    /// The current selection is left unchanged in that case.
    pub fn select_address(&mut self, id: AddressId) -> Result<&Address, AddressError> {
        let address = self
            .addresses
            .iter()
            .find(|address| address.id == id)
            .ok_or(AddressError::UnknownAddress(id))?;
        self.selected = Some(id);
        Ok(address)
    }

    /// Append a new address and select it.
    ///
    /// The ID is `count + 1`. The new address is the default only when the
    /// catalog was empty, whatever the draft requested.
    pub fn add_address(&mut self, draft: AddressDraft) -> Address {
        let id = AddressId::new(u32::try_from(self.addresses.len() + 1).unwrap_or(u32::MAX));
        let address = Address {
            id,
            name: draft.name,
            street: draft.street,
            city: draft.city,
            state: draft.state,
            zip_code: draft.zip_code,
            is_default: self.addresses.is_empty(),
        };

        self.addresses.push(address.clone());
        self.selected = Some(id);
        address
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft(name: &str, is_default: bool) -> AddressDraft {
        AddressDraft {
            name: name.to_string(),
            street: "123 Coffee Street".to_string(),
            city: "Bean City".to_string(),
            state: RegionCode::CA,
            zip_code: "90210".to_string(),
            is_default,
        }
    }

    #[test]
    fn test_first_address_is_default_and_selected() {
        let mut catalog = AddressCatalog::new();
        let added = catalog.add_address(draft("Home", false));

        assert_eq!(added.id, AddressId::new(1));
        assert!(added.is_default);
        assert_eq!(catalog.selected_id(), Some(added.id));
        assert_eq!(catalog.selected(), Some(&added));
    }

    #[test]
    fn test_later_address_is_never_default() {
        let mut catalog = AddressCatalog::new();
        catalog.add_address(draft("Home", false));
        let added = catalog.add_address(draft("Office", true));

        assert_eq!(added.id, AddressId::new(2));
        assert!(!added.is_default);
        assert_eq!(catalog.selected_id(), Some(AddressId::new(2)));
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut catalog = AddressCatalog::new();
        catalog.add_address(draft("Home", false));
        catalog.add_address(draft("Office", false));
        catalog.add_address(draft("Gym", false));

        let names: Vec<_> = catalog
            .list_addresses()
            .iter()
            .map(|address| address.name.as_str())
            .collect();
        assert_eq!(names, ["Home", "Office", "Gym"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_id_follows_seeded_count() {
        let mut catalog = AddressCatalog::new();
        catalog.add_address(draft("Home", false));
        let seeded = catalog.list_addresses().to_vec();

        let mut catalog = AddressCatalog::with_addresses(seeded);
        assert_eq!(catalog.selected_id(), None);
        let added = catalog.add_address(draft("Office", true));
        assert_eq!(added.id, AddressId::new(2));
        assert!(!added.is_default);
    }

    #[test]
    fn test_select_existing_address() {
        let mut catalog = AddressCatalog::new();
        catalog.add_address(draft("Home", false));
        catalog.add_address(draft("Office", false));

        let selected = catalog.select_address(AddressId::new(1)).unwrap();
        assert_eq!(selected.name, "Home");
        assert_eq!(catalog.selected_id(), Some(AddressId::new(1)));
    }

    #[test]
    fn test_select_unknown_address_keeps_selection() {
        let mut catalog = AddressCatalog::new();
        catalog.add_address(draft("Home", false));

        let err = catalog.select_address(AddressId::new(9)).unwrap_err();
        assert_eq!(err, AddressError::UnknownAddress(AddressId::new(9)));
        assert_eq!(catalog.selected_id(), Some(AddressId::new(1)));
    }

    #[test]
    fn test_multiple_defaults_are_not_enforced() {
        let home = Address {
            id: AddressId::new(1),
            name: "Home".to_string(),
            street: "123 Coffee Street".to_string(),
            city: "Bean City".to_string(),
            state: RegionCode::CA,
            zip_code: "90210".to_string(),
            is_default: true,
        };
        let office = Address {
            id: AddressId::new(2),
            name: "Office".to_string(),
            is_default: true,
            ..home.clone()
        };
        let catalog = AddressCatalog::with_addresses(vec![home, office]);
        assert_eq!(
            catalog
                .list_addresses()
                .iter()
                .filter(|address| address.is_default)
                .count(),
            2
        );
    }

    #[test]
    fn test_summary_line() {
        let mut catalog = AddressCatalog::new();
        let added = catalog.add_address(draft("Home", false));
        assert_eq!(added.summary_line(), "123 Coffee Street, Bean City, CA 90210");
    }
}
