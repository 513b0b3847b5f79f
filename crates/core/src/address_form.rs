//! The new-address form.
//!
//! The form holds its own draft fields and never touches the catalog. Each
//! user action yields at most one [`AddressFormEvent`] for the owner to apply.

use serde::{Deserialize, Serialize};

use crate::address::AddressDraft;
use crate::types::RegionCode;

/// Outcome of a user action on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressFormEvent {
    /// All required fields were present.
    Submitted(AddressDraft),
    /// The user backed out. No validation is performed.
    Cancelled,
}

/// Required fields of the address form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Name,
    Street,
    City,
    State,
    ZipCode,
}

/// Editable draft of a new address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressForm {
    pub name: String,
    pub street: String,
    pub city: String,
    /// `None` until a region is chosen.
    pub state: Option<RegionCode>,
    pub zip_code: String,
    pub is_default: bool,
}

impl AddressForm {
    /// An empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_street(&mut self, value: impl Into<String>) {
        self.street = value.into();
    }

    pub fn set_city(&mut self, value: impl Into<String>) {
        self.city = value.into();
    }

    /// Set the region from its submitted string value.
    ///
    /// Anything that is not a supported code leaves the region unchosen.
    pub fn set_state_code(&mut self, value: &str) {
        self.state = RegionCode::parse(value).ok();
    }

    pub fn set_zip_code(&mut self, value: impl Into<String>) {
        self.zip_code = value.into();
    }

    pub const fn set_is_default(&mut self, value: bool) {
        self.is_default = value;
    }

    /// Required fields that are still empty, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<AddressField> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(AddressField::Name);
        }
        if self.street.is_empty() {
            missing.push(AddressField::Street);
        }
        if self.city.is_empty() {
            missing.push(AddressField::City);
        }
        if self.state.is_none() {
            missing.push(AddressField::State);
        }
        if self.zip_code.is_empty() {
            missing.push(AddressField::ZipCode);
        }
        missing
    }

    /// Submit the form.
    ///
    /// Returns `None` without any message when a required field is empty.
    /// The form keeps its values either way; resetting is up to the owner.
    #[must_use]
    pub fn submit(&self) -> Option<AddressFormEvent> {
        let state = self.state?;
        if !self.missing_fields().is_empty() {
            return None;
        }

        Some(AddressFormEvent::Submitted(AddressDraft {
            name: self.name.clone(),
            street: self.street.clone(),
            city: self.city.clone(),
            state,
            zip_code: self.zip_code.clone(),
            is_default: self.is_default,
        }))
    }

    /// Cancel the form.
    #[must_use]
    pub const fn cancel(&self) -> AddressFormEvent {
        AddressFormEvent::Cancelled
    }
}
