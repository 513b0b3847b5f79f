//! Mock data every new checkout starts from.

use midnight_bloom_core::{
    Address, AddressId, Cart, CartItem, CartItemId, CurrencyCode, Price, RegionCode,
};

/// The saved addresses shown on first visit. "Home" is the default.
#[must_use]
pub fn addresses() -> Vec<Address> {
    vec![
        Address {
            id: AddressId::new(1),
            name: "Home".to_string(),
            street: "123 Coffee Street".to_string(),
            city: "Bean City".to_string(),
            state: RegionCode::CA,
            zip_code: "90210".to_string(),
            is_default: true,
        },
        Address {
            id: AddressId::new(2),
            name: "Office".to_string(),
            street: "456 Work Avenue".to_string(),
            city: "Business District".to_string(),
            state: RegionCode::CA,
            zip_code: "90211".to_string(),
            is_default: false,
        },
    ]
}

/// The cart being checked out.
#[must_use]
pub fn cart() -> Cart {
    let item = |id, name: &str, cents, quantity| CartItem {
        id: CartItemId::new(id),
        name: name.to_string(),
        unit_price: Price::from_cents(cents, CurrencyCode::USD),
        quantity,
    };

    Cart::new(vec![
        item(1, "Midnight Espresso", 450, 2),
        item(2, "Bloom Latte", 525, 1),
        item(3, "Dark Roast Coffee", 375, 1),
    ])
}
