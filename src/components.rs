//! Yew view components for the landing page.
//!
//! Apart from image load state in `ModelCard`, these render purely from
//! props; all form and workflow state lives in `main.rs`.

use order_landing::config::MODELS;
use order_landing::order::{format_price_rub, ProductModel};
use order_landing::{FieldKind, Notification, NotificationKind, NotificationStack};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Fixed bar at the top of the page showing scroll progress.
#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub percent: f64,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div class="scroll-progress" style={format!("width: {:.2}%;", props.percent)}></div>
    }
}

/// Product card with a lazily loaded image and an order button.
#[derive(Properties, PartialEq)]
pub struct ModelCardProps {
    pub model: &'static ProductModel,
    pub order_label: AttrValue,
    pub on_order: Callback<&'static str>,
}

#[function_component(ModelCard)]
pub fn model_card(props: &ModelCardProps) -> Html {
    let loaded = use_state(|| false);
    let onload = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };
    let onclick = {
        let on_order = props.on_order.clone();
        let id = props.model.id;
        Callback::from(move |_: MouseEvent| on_order.emit(id))
    };
    let img_class = classes!("model-image", loaded.then_some("loaded"));

    html! {
        <div class="model-card fade-in" id={format!("model-{}", props.model.id.to_lowercase())}>
            <img class={img_class} src={props.model.image} alt={props.model.title} loading="lazy" {onload} />
            <h3>{ props.model.title }</h3>
            <p class="model-tagline">{ props.model.tagline }</p>
            <div class="model-price">{ format_price_rub(props.model.price_rub) }</div>
            <button type="button" class="btn btn-primary" {onclick}>{ props.order_label.to_string() }</button>
        </div>
    }
}

/// Inline error under a field, if any.
fn render_field_error(error: &Option<String>) -> Html {
    match error {
        Some(message) => html! { <div class="field-error">{ message }</div> },
        None => html! {},
    }
}

fn field_class(error: &Option<String>) -> Classes {
    classes!("form-control", error.is_some().then_some("error"))
}

/// Single-line or multi-line text input bound to an order field.
#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub kind: FieldKind,
    pub label: AttrValue,
    #[prop_or(AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub multiline: bool,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
    #[prop_or_default]
    pub hint_pulse: bool,
    pub value: AttrValue,
    pub error: Option<String>,
    pub on_input: Callback<String>,
    pub on_blur: Callback<()>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let id = props.kind.as_str();
    let onblur = props.on_blur.reform(|_: FocusEvent| ());

    let control = if props.multiline {
        let oninput = props.on_input.reform(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            input.value()
        });
        html! {
            <textarea {id} name={id} class={field_class(&props.error)} rows="3"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput} {onblur} />
        }
    } else {
        let oninput = props.on_input.reform(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input.value()
        });
        html! {
            <input {id} name={id} class={field_class(&props.error)}
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput} {onblur} />
        }
    };

    html! {
        <div class="form-group">
            <label for={id}>{ props.label.to_string() }</label>
            { control }
            if let Some(hint) = &props.hint {
                <small class={classes!("field-hint", props.hint_pulse.then_some("hint-pulse"))}>
                    { hint.to_string() }
                </small>
            }
            { render_field_error(&props.error) }
        </div>
    }
}

/// Model selector listing the catalog.
#[derive(Properties, PartialEq)]
pub struct ModelSelectProps {
    pub label: AttrValue,
    pub placeholder: AttrValue,
    pub value: AttrValue,
    pub error: Option<String>,
    pub on_input: Callback<String>,
    pub on_blur: Callback<()>,
}

#[function_component(ModelSelect)]
pub fn model_select(props: &ModelSelectProps) -> Html {
    let id = FieldKind::Model.as_str();
    let select_ref = use_node_ref();

    // option `selected` attributes stop applying once the user has picked
    // something, so programmatic changes go through the element's value
    {
        let select_ref = select_ref.clone();
        use_effect_with(props.value.clone(), move |value| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                if select.value() != value.as_str() {
                    select.set_value(value);
                }
            }
        });
    }

    let onchange = props.on_input.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value()
    });
    let onblur = props.on_blur.reform(|_: FocusEvent| ());

    html! {
        <div class="form-group">
            <label for={id}>{ props.label.to_string() }</label>
            <select ref={select_ref} {id} name={id} class={field_class(&props.error)} {onchange} {onblur}>
                <option value="" selected={props.value.is_empty()}>{ props.placeholder.to_string() }</option>
                { MODELS.iter().map(|m| html! {
                    <option value={m.id} selected={props.value.as_str() == m.id}>
                        { format!("{} — {}", m.title, format_price_rub(m.price_rub)) }
                    </option>
                }).collect::<Html>() }
            </select>
            { render_field_error(&props.error) }
        </div>
    }
}

/// Personal data consent checkbox.
#[derive(Properties, PartialEq)]
pub struct ConsentCheckboxProps {
    pub label: AttrValue,
    pub checked: bool,
    pub error: Option<String>,
    pub on_change: Callback<String>,
    pub on_blur: Callback<()>,
}

#[function_component(ConsentCheckbox)]
pub fn consent_checkbox(props: &ConsentCheckboxProps) -> Html {
    let id = FieldKind::Consent.as_str();
    let onchange = props.on_change.reform(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.checked().to_string()
    });
    let onblur = props.on_blur.reform(|_: FocusEvent| ());

    html! {
        <div class="form-group form-check">
            <input type="checkbox" {id} name={id} checked={props.checked} {onchange} {onblur} />
            <label for={id}>{ props.label.to_string() }</label>
            { render_field_error(&props.error) }
        </div>
    }
}

/// A dismissible overlay.
#[derive(Properties, PartialEq)]
pub struct NotificationOverlayProps {
    pub notification: Notification,
    pub close_label: AttrValue,
    pub on_close: Callback<NotificationKind>,
}

#[function_component(NotificationOverlay)]
pub fn notification_overlay(props: &NotificationOverlayProps) -> Html {
    let kind = props.notification.kind;
    let onclick = props.on_close.reform(move |_: MouseEvent| kind);

    html! {
        <div class={classes!("notification-overlay", kind.css_class())} role="alertdialog">
            <div class="notification-content">
                <h3>{ props.notification.title.clone() }</h3>
                { props.notification.lines.iter().map(|line| html! { <p>{ line }</p> }).collect::<Html>() }
                <button type="button" class="btn notification-close" {onclick}>
                    { props.close_label.to_string() }
                </button>
            </div>
        </div>
    }
}

/// Renders every open overlay.
pub fn render_notifications(
    stack: &NotificationStack,
    close_label: &str,
    on_close: &Callback<NotificationKind>,
) -> Html {
    if stack.is_empty() {
        return html! {};
    }

    html! {
        <div class="notifications">
            { stack.iter().map(|n| html! {
                <NotificationOverlay
                    key={n.kind.css_class()}
                    notification={n.clone()}
                    close_label={AttrValue::from(close_label.to_string())}
                    on_close={on_close.clone()} />
            }).collect::<Html>() }
        </div>
    }
}
