use order_landing::validation::{validate_field, FieldKind};
use order_landing::Messages;
use std::rc::Rc;
use yew::prelude::*;

/// State and callbacks for one order form field.
#[derive(Clone)]
pub struct OrderField {
    /// Current text of the input.
    pub value: String,
    /// Inline error, shown once the field has been left with a bad value.
    pub error: Option<String>,
    /// Callback for the input's `oninput`. Clears the error once the value is valid again.
    pub on_input: Callback<String>,
    /// Callback for the input's `onblur`. Validates and marks the field.
    pub on_blur: Callback<()>,
    /// For controls without a typing phase (checkboxes). Stores the value
    /// and marks or clears the error at once.
    pub on_change: Callback<String>,
    /// Set the value from code (model pre-select, reset after submit).
    /// Clears any inline error.
    pub set_value: Callback<String>,
}

impl OrderField {
    pub fn clear(&self) {
        self.set_value.emit(String::new());
    }
}

/// Custom hook holding the text and inline error of a form field.
#[hook]
pub fn use_order_field(kind: FieldKind, messages: Rc<Messages>) -> OrderField {
    let value_handle = use_state(String::new);
    let error_handle = use_state(|| None::<String>);

    let on_input = {
        let value_setter = value_handle.setter();
        let error_handle = error_handle.clone();
        let messages = messages.clone();
        Callback::from(move |text: String| {
            // only re-check fields that already show an error
            if error_handle.is_some() && validate_field(kind, &text, &messages).valid {
                error_handle.set(None);
            }
            value_setter.set(text);
        })
    };

    let on_blur = {
        let value_handle = value_handle.clone();
        let error_setter = error_handle.setter();
        let messages = messages.clone();
        Callback::from(move |_| {
            let check = validate_field(kind, &value_handle, &messages);
            error_setter.set(check.error().map(str::to_string));
        })
    };

    let on_change = {
        let value_setter = value_handle.setter();
        let error_setter = error_handle.setter();
        let messages = messages.clone();
        Callback::from(move |text: String| {
            let check = validate_field(kind, &text, &messages);
            error_setter.set(check.error().map(str::to_string));
            value_setter.set(text);
        })
    };

    let set_value = {
        let value_setter = value_handle.setter();
        let error_setter = error_handle.setter();
        Callback::from(move |text: String| {
            value_setter.set(text);
            error_setter.set(None);
        })
    };

    OrderField {
        value: (*value_handle).clone(),
        error: (*error_handle).clone(),
        on_input,
        on_blur,
        on_change,
        set_value,
    }
}
