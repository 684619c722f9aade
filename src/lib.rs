//! Order landing page logic.
//!
//! Everything in this crate is DOM-free: validation, the submit workflow,
//! the overlay stack and scroll arithmetic. The Yew front end in `main.rs`
//! owns the page and applies what these modules decide.

use log::warn;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod locale;
pub mod notifications;
pub mod order;
pub mod utils;
pub mod validation;
pub mod workflow;

pub use locale::Messages;
pub use notifications::{Notification, NotificationKind, NotificationStack};
pub use order::{OrderSubmission, ProductModel};
pub use validation::{
    validate_field, validate_order, FieldCheck, FieldKind, FieldValidationError, ValidationReport,
};
pub use workflow::{Effect, SubmissionTicket, SubmissionWorkflow, SubmitState};

/// Validate an order object coming from JavaScript.
///
/// Accepts `{ name, phone, email, model, address, consent }` (missing keys
/// are treated as empty) and returns `{ valid, errors: [{ field, message }] }`
/// using the default locale. If the input cannot be read at all, returns the
/// error text as a string.
#[wasm_bindgen(js_name = validateOrder)]
pub fn validate_order_js(order_js: JsValue) -> JsValue {
    let order: OrderSubmission = match serde_wasm_bindgen::from_value(order_js) {
        Ok(order) => order,
        Err(e) => {
            warn!("validateOrder called with unreadable input: {}", e);
            return JsValue::from_str(&format!("Failed to deserialize order: {}", e));
        }
    };

    let report = validate_order(&order, &Messages::default());
    to_js(&report)
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}
