//! Checkout route handlers.
//!
//! Every action is a plain form POST that redirects back to `/checkout`
//! (POST/redirect/GET). The only exception is an incomplete address form,
//! which re-renders the page with the form still open and its values kept.
//!
//! Checkout state lives in [`AppState`]; the session cookie only carries the
//! checkout ID.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use midnight_bloom_core::{
    AddressForm, AddressId, Notification, PaymentDetails, PaymentMethod, RegionCode,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{Result, add_breadcrumb};
use crate::models::{CheckoutSession, SharedCheckout, session_keys};
use crate::state::AppState;

const CHECKOUT_PATH: &str = "/checkout";

const WALLET_NOTE: &str = "You will be redirected to your digital wallet to complete the payment.";

// =============================================================================
// Views
// =============================================================================

/// Saved address display data for templates.
#[derive(Clone)]
pub struct AddressView {
    pub id: u32,
    pub name: String,
    pub summary: String,
    pub is_default: bool,
    pub is_selected: bool,
}

/// One entry of the region dropdown.
#[derive(Clone)]
pub struct RegionOption {
    pub code: &'static str,
    pub is_selected: bool,
}

/// Address form display data for templates.
#[derive(Clone)]
pub struct AddressFormView {
    pub name: String,
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub is_default: bool,
    pub regions: Vec<RegionOption>,
}

impl From<&AddressForm> for AddressFormView {
    fn from(form: &AddressForm) -> Self {
        Self {
            name: form.name.clone(),
            street: form.street.clone(),
            city: form.city.clone(),
            zip_code: form.zip_code.clone(),
            is_default: form.is_default,
            regions: RegionCode::ALL
                .into_iter()
                .map(|code| RegionOption {
                    code: code.as_str(),
                    is_selected: form.state == Some(code),
                })
                .collect(),
        }
    }
}

/// Payment method choice display data for templates.
#[derive(Clone)]
pub struct PaymentMethodView {
    pub value: &'static str,
    pub label: &'static str,
    pub is_selected: bool,
}

/// Card field values echoed back into the payment form.
#[derive(Clone)]
pub struct CardView {
    pub card_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl From<&PaymentDetails> for CardView {
    fn from(details: &PaymentDetails) -> Self {
        Self {
            card_name: details.card_name.clone(),
            card_number: details.card_number.clone(),
            expiry_date: details.expiry_date.clone(),
            cvv: details.cvv.clone(),
        }
    }
}

/// Order summary line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub name: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Toast display data for templates.
#[derive(Clone)]
pub struct NotificationView {
    pub title: String,
    pub description: String,
    pub style: &'static str,
}

impl From<Notification> for NotificationView {
    fn from(notification: Notification) -> Self {
        Self {
            style: notification.style.as_str(),
            title: notification.title,
            description: notification.description,
        }
    }
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutShowTemplate {
    pub addresses: Vec<AddressView>,
    pub address_form: Option<AddressFormView>,
    pub payment_methods: Vec<PaymentMethodView>,
    pub show_card_fields: bool,
    pub card: CardView,
    pub payment_note: Option<String>,
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub total: String,
    pub is_submitting: bool,
    pub notifications: Vec<NotificationView>,
}

impl CheckoutShowTemplate {
    /// Render the checkout, consuming queued notifications.
    fn build(checkout: &mut CheckoutSession, address_form: Option<&AddressForm>) -> Self {
        let selected = checkout.addresses.selected_id();
        let addresses = checkout
            .addresses
            .list_addresses()
            .iter()
            .map(|address| AddressView {
                id: address.id.as_u32(),
                name: address.name.clone(),
                summary: address.summary_line(),
                is_default: address.is_default,
                is_selected: selected == Some(address.id),
            })
            .collect();

        let method = checkout.checkout.payment_method();
        let payment_methods = PaymentMethod::ALL
            .into_iter()
            .map(|m| PaymentMethodView {
                value: m.as_str(),
                label: m.label(),
                is_selected: m == method,
            })
            .collect();

        let total = checkout.checkout.total().display();
        let payment_note = match method {
            PaymentMethod::Card => None,
            PaymentMethod::Wallet => Some(WALLET_NOTE.to_string()),
            PaymentMethod::Cash => Some(format!(
                "Please keep exact change ready. Amount: {total}"
            )),
        };

        let items = checkout
            .checkout
            .cart()
            .items()
            .iter()
            .map(|item| CartItemView {
                name: item.name.clone(),
                quantity: item.quantity,
                line_total: item.line_total().display(),
            })
            .collect();

        Self {
            addresses,
            address_form: address_form.map(AddressFormView::from),
            payment_methods,
            show_card_fields: method.requires_card_details(),
            card: CardView::from(checkout.checkout.payment_details()),
            payment_note,
            items,
            item_count: checkout.checkout.cart().item_count(),
            total,
            is_submitting: checkout.checkout.is_submitting(),
            notifications: take_notifications(checkout),
        }
    }
}

/// Order status fragment template.
///
/// Embedded in the checkout page and also served on its own. Served alone it
/// leaves queued notifications for the page to show.
#[derive(Template, WebTemplate)]
#[template(path = "partials/order_status.html")]
pub struct OrderStatusTemplate {
    pub total: String,
    pub is_submitting: bool,
    pub notifications: Vec<NotificationView>,
}

fn take_notifications(checkout: &mut CheckoutSession) -> Vec<NotificationView> {
    checkout
        .take_notifications()
        .into_iter()
        .map(NotificationView::from)
        .collect()
}

// =============================================================================
// Forms
// =============================================================================

/// Address selection form data.
#[derive(Debug, Deserialize)]
pub struct SelectAddressForm {
    pub address_id: u32,
}

/// Which button submitted the address form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressFormAction {
    #[default]
    Save,
    Cancel,
}

/// New address form data.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddressFormInput {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Checkbox; present only when ticked.
    pub is_default: Option<String>,
    pub action: AddressFormAction,
}

impl From<&AddressFormInput> for AddressForm {
    fn from(input: &AddressFormInput) -> Self {
        let mut form = Self::new();
        form.set_name(input.name.trim());
        form.set_street(input.street.trim());
        form.set_city(input.city.trim());
        form.set_state_code(&input.state);
        form.set_zip_code(input.zip_code.trim());
        form.set_is_default(input.is_default.is_some());
        form
    }
}

/// Payment form data.
///
/// Card fields are absent when the card inputs were not rendered.
#[derive(Deserialize)]
pub struct PaymentForm {
    pub method: PaymentMethod,
    pub card_name: Option<String>,
    pub card_number: Option<String>,
    pub expiry_date: Option<String>,
    pub cvv: Option<String>,
}

impl std::fmt::Debug for PaymentForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentForm")
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

impl PaymentForm {
    /// Card details, if the card inputs were part of the submission.
    fn card_details(&self) -> Option<PaymentDetails> {
        let submitted = [
            &self.card_name,
            &self.card_number,
            &self.expiry_date,
            &self.cvv,
        ]
        .iter()
        .any(|field| field.is_some());
        if !submitted {
            return None;
        }

        let value = |field: &Option<String>| field.as_deref().unwrap_or_default().trim().to_string();
        Some(PaymentDetails {
            card_number: value(&self.card_number),
            expiry_date: value(&self.expiry_date),
            cvv: value(&self.cvv),
            card_name: value(&self.card_name),
        })
    }

    fn apply(&self, checkout: &mut CheckoutSession) {
        checkout.checkout.select_payment_method(self.method);
        if let Some(details) = self.card_details() {
            checkout.checkout.update_payment_details(details);
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the visitor's checkout, starting a new one if needed.
///
/// A checkout that expired from the store is replaced silently.
async fn current_checkout(state: &AppState, session: &Session) -> Result<SharedCheckout> {
    if let Some(id) = session.get::<Uuid>(session_keys::CHECKOUT_ID).await? {
        if let Some(checkout) = state.checkout(id).await {
            return Ok(checkout);
        }
        tracing::debug!(checkout_id = %id, "Checkout expired, starting a new one");
    }

    let (id, checkout) = state.start_checkout().await;
    session.insert(session_keys::CHECKOUT_ID, id).await?;
    Ok(checkout)
}

fn back_to_checkout() -> Redirect {
    Redirect::to(CHECKOUT_PATH)
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the checkout page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<CheckoutShowTemplate> {
    let shared = current_checkout(&state, &session).await?;
    let mut checkout = shared.lock().await;
    Ok(CheckoutShowTemplate::build(&mut checkout, None))
}

/// Display the checkout page with an empty address form open.
#[instrument(skip(state, session))]
pub async fn new_address(
    State(state): State<AppState>,
    session: Session,
) -> Result<CheckoutShowTemplate> {
    let shared = current_checkout(&state, &session).await?;
    let mut checkout = shared.lock().await;
    Ok(CheckoutShowTemplate::build(&mut checkout, Some(&AddressForm::new())))
}

/// Save or cancel the address form.
///
/// An incomplete form is re-rendered as submitted, with no error message.
#[instrument(skip(state, session, input), fields(action = ?input.action))]
pub async fn create_address(
    State(state): State<AppState>,
    session: Session,
    Form(input): Form<AddressFormInput>,
) -> Result<Response> {
    let shared = current_checkout(&state, &session).await?;
    let form = AddressForm::from(&input);
    let event = match input.action {
        AddressFormAction::Save => form.submit(),
        AddressFormAction::Cancel => Some(form.cancel()),
    };

    let mut checkout = shared.lock().await;
    let Some(event) = event else {
        tracing::debug!(missing = ?form.missing_fields(), "Address form incomplete");
        return Ok(CheckoutShowTemplate::build(&mut checkout, Some(&form)).into_response());
    };

    if let Some(address) = checkout.apply_address_form(event) {
        let address_id = address.id.to_string();
        tracing::info!(address_id = %address_id, "Address added");
        add_breadcrumb(
            "checkout",
            "Added address",
            Some(&[("address_id", address_id.as_str())]),
        );
    }

    Ok(back_to_checkout().into_response())
}

/// Select a saved address.
#[instrument(skip(state, session))]
pub async fn select_address(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SelectAddressForm>,
) -> Result<Redirect> {
    let shared = current_checkout(&state, &session).await?;
    shared
        .lock()
        .await
        .addresses
        .select_address(AddressId::new(form.address_id))?;

    Ok(back_to_checkout())
}

/// Change the payment method or card details.
#[instrument(skip(state, session, form), fields(method = %form.method))]
pub async fn update_payment(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PaymentForm>,
) -> Result<Redirect> {
    let shared = current_checkout(&state, &session).await?;
    form.apply(&mut *shared.lock().await);
    Ok(back_to_checkout())
}

/// Place the order with the submitted payment form.
///
/// Validation errors and the eventual confirmation are both shown as
/// notifications on the checkout page. While an order is processing the
/// submitted payment fields are ignored.
#[instrument(skip(state, session, form), fields(method = %form.method))]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PaymentForm>,
) -> Result<Redirect> {
    let shared = current_checkout(&state, &session).await?;
    {
        let mut checkout = shared.lock().await;
        if !checkout.checkout.is_submitting() {
            form.apply(&mut checkout);
        }
    }

    if state.orders().submit(shared).await.is_ok() {
        add_breadcrumb("checkout", "Placed order", None);
    }

    Ok(back_to_checkout())
}

/// Order status fragment.
#[instrument(skip(state, session))]
pub async fn status(
    State(state): State<AppState>,
    session: Session,
) -> Result<OrderStatusTemplate> {
    let shared = current_checkout(&state, &session).await?;
    let checkout = shared.lock().await;

    Ok(OrderStatusTemplate {
        total: checkout.checkout.total().display(),
        is_submitting: checkout.checkout.is_submitting(),
        notifications: checkout
            .notifications()
            .iter()
            .cloned()
            .map(NotificationView::from)
            .collect(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn payment_form(method: PaymentMethod, card_number: Option<&str>) -> PaymentForm {
        PaymentForm {
            method,
            card_name: card_number.map(|_| "Jane Doe".to_string()),
            card_number: card_number.map(str::to_string),
            expiry_date: card_number.map(|_| "12/30".to_string()),
            cvv: card_number.map(|_| "123".to_string()),
        }
    }

    #[test]
    fn test_address_input_trims_and_parses() {
        let input = AddressFormInput {
            name: "  Gym ".to_string(),
            street: "9 Lift Lane".to_string(),
            city: "Bean City".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            is_default: Some("on".to_string()),
            action: AddressFormAction::Save,
        };
        let form = AddressForm::from(&input);
        assert_eq!(form.name, "Gym");
        assert_eq!(form.state, Some(RegionCode::NY));
        assert!(form.is_default);
    }

    #[test]
    fn test_whitespace_only_field_counts_as_empty() {
        let input = AddressFormInput {
            name: "   ".to_string(),
            ..AddressFormInput::default()
        };
        assert!(AddressForm::from(&input).submit().is_none());
    }

    #[test]
    fn test_payment_form_without_card_fields_keeps_details() {
        let mut checkout = CheckoutSession::seeded();
        payment_form(PaymentMethod::Card, Some("4242")).apply(&mut checkout);
        payment_form(PaymentMethod::Wallet, None).apply(&mut checkout);

        assert_eq!(checkout.checkout.payment_method(), PaymentMethod::Wallet);
        assert_eq!(checkout.checkout.payment_details().card_number, "4242");
    }

    #[test]
    fn test_payment_form_debug_hides_card() {
        let debug = format!("{:?}", payment_form(PaymentMethod::Card, Some("4242")));
        assert!(!debug.contains("4242"));
    }

    #[test]
    fn test_page_view_marks_selection_and_drains_notifications() {
        let mut checkout = CheckoutSession::seeded();
        checkout.addresses.select_address(AddressId::new(2)).unwrap();
        checkout.checkout.select_payment_method(PaymentMethod::Cash);
        checkout.notify(Notification::destructive("Oops", "Try again"));

        let page = CheckoutShowTemplate::build(&mut checkout, None);
        let selected: Vec<_> = page
            .addresses
            .iter()
            .map(|address| address.is_selected)
            .collect();
        assert_eq!(selected, [false, true]);
        assert!(!page.show_card_fields);
        assert_eq!(
            page.payment_note.as_deref(),
            Some("Please keep exact change ready. Amount: $18.00")
        );
        assert_eq!(page.item_count, 4);
        assert_eq!(page.notifications.len(), 1);
        assert_eq!(page.notifications[0].style, "destructive");
        assert!(checkout.take_notifications().is_empty());
    }

    #[test]
    fn test_address_form_view_keeps_region() {
        let mut form = AddressForm::new();
        form.set_state_code("TX");
        let view = AddressFormView::from(&form);
        let selected: Vec<_> = view
            .regions
            .iter()
            .filter(|region| region.is_selected)
            .map(|region| region.code)
            .collect();
        assert_eq!(selected, ["TX"]);
        assert_eq!(view.regions.len(), RegionCode::ALL.len());
    }
}
