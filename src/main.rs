//! Main module for the order landing page using Yew.
//! Wires the form field hooks, the submit workflow and the page-wide effects.

use gloo_timers::callback::Timeout;
use log::{info, warn, Level};
use order_landing::config::{
    HINT_RESET_MS, LOCALE_ELEMENT_ID, MODELS, ORDER_SECTION_ID, PRESELECT_DELAY_MS,
};
use order_landing::utils::phone_needs_hint;
use order_landing::{
    Effect, FieldKind, Messages, Notification, NotificationKind, NotificationStack,
    OrderSubmission, SubmissionTicket, SubmissionWorkflow,
};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod hooks;
mod page;

use components::{
    render_notifications, ConsentCheckbox, ModelCard, ModelSelect, ProgressBar, TextField,
};
use hooks::{use_order_field, OrderField};

// ──────────────────────────────────────────────────────────────────────────────
// Overlay state

/// Open overlays. Kept in a reducer so delayed callbacks act on the latest stack.
#[derive(Default, PartialEq)]
struct Overlays(NotificationStack);

enum OverlayAction {
    Show(Notification),
    Dismiss(NotificationKind),
    DismissAll,
}

impl Reducible for Overlays {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut stack = self.0.clone();
        let changed = match action {
            OverlayAction::Show(notification) => stack.show(notification),
            OverlayAction::Dismiss(kind) => stack.dismiss(kind),
            OverlayAction::DismissAll => stack.dismiss_all() > 0,
        };
        if changed {
            Rc::new(Overlays(stack))
        } else {
            self
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Submit controller

/// The submit workflow and the timer of its pending completion.
struct Controller {
    workflow: SubmissionWorkflow,
    pending: Option<Timeout>,
}

/// Everything the controller touches when applying effects.
#[derive(Clone)]
struct FormUi {
    fields: Rc<Vec<OrderField>>,
    overlays: UseReducerDispatcher<Overlays>,
    submit_locked: UseStateSetter<bool>,
    submit_label: UseStateSetter<String>,
    messages: Rc<Messages>,
}

/// Apply workflow effects to the page, in order.
fn apply_effects(
    effects: Vec<Effect>,
    controller: &Rc<RefCell<Controller>>,
    ui: &FormUi,
    on_complete: &Callback<SubmissionTicket>,
) {
    for effect in effects {
        match effect {
            Effect::CancelPending(ticket) => {
                // dropping the Timeout clears it
                if controller.borrow_mut().pending.take().is_some() {
                    info!("Cancelled pending completion {:?}", ticket);
                }
            }
            Effect::ShowErrors(errors) => {
                ui.overlays
                    .dispatch(OverlayAction::Show(Notification::errors(&ui.messages, errors)));
            }
            Effect::LockSubmit { label } => {
                ui.submit_locked.set(true);
                ui.submit_label.set(label);
            }
            Effect::ScheduleCompletion { ticket, delay_ms } => {
                let on_complete = on_complete.clone();
                let timeout = Timeout::new(delay_ms, move || on_complete.emit(ticket));
                controller.borrow_mut().pending = Some(timeout);
            }
            Effect::ShowSuccess => {
                ui.overlays
                    .dispatch(OverlayAction::Show(Notification::success(&ui.messages)));
            }
            Effect::ClearFields => ui.fields.iter().for_each(OrderField::clear),
            Effect::UnlockSubmit { label } => {
                ui.submit_locked.set(false);
                ui.submit_label.set(label);
            }
        }
    }
}

/// Read the locale override embedded in the page, falling back to the default.
fn load_messages() -> Messages {
    let Some(json) = gloo_utils::document()
        .get_element_by_id(LOCALE_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return Messages::default();
    };

    Messages::from_json(&json).unwrap_or_else(|e| {
        warn!("{}; using default locale", e);
        Messages::default()
    })
}

/// Replace the timer in `slot`, cancelling whatever was scheduled before.
fn reschedule(slot: &Rc<RefCell<Option<Timeout>>>, delay_ms: u32, f: impl FnOnce() + 'static) {
    *slot.borrow_mut() = Some(Timeout::new(delay_ms, f));
}

// ──────────────────────────────────────────────────────────────────────────────

/// Landing page: hero, model cards, order form and overlays.
#[function_component(App)]
pub fn app() -> Html {
    let messages = use_memo((), |_| load_messages());

    let name = use_order_field(FieldKind::Name, messages.clone());
    let phone = use_order_field(FieldKind::Phone, messages.clone());
    let email = use_order_field(FieldKind::Email, messages.clone());
    let model = use_order_field(FieldKind::Model, messages.clone());
    let address = use_order_field(FieldKind::Address, messages.clone());
    let consent = use_order_field(FieldKind::Consent, messages.clone());

    let overlays = use_reducer(Overlays::default);
    let submit_locked = use_state(|| false);
    let submit_label = use_state(|| messages.submit_label.clone());
    let progress = use_state(|| 0.0_f64);
    let hint_pulse = use_state(|| false);

    let controller = {
        let messages = messages.clone();
        use_mut_ref(move || Controller {
            workflow: SubmissionWorkflow::new((*messages).clone()),
            pending: None,
        })
    };
    let preselect_timer = use_mut_ref(|| None::<Timeout>);
    let hint_timer = use_mut_ref(|| None::<Timeout>);

    // Page-wide listeners, attached once and removed on unmount
    {
        let progress = progress.setter();
        let overlays = overlays.dispatcher();
        use_effect_with((), move |_| {
            let listeners = page::install_listeners(
                move |percent| progress.set(percent),
                move || overlays.dispatch(OverlayAction::DismissAll),
            );
            page::reveal_visible();
            page::sync_animations_with_visibility();
            info!("Page listeners attached: {}", listeners.len());
            move || drop(listeners)
        });
    }

    let ui = FormUi {
        fields: Rc::new(vec![
            name.clone(),
            phone.clone(),
            email.clone(),
            model.clone(),
            address.clone(),
            consent.clone(),
        ]),
        overlays: overlays.dispatcher(),
        submit_locked: submit_locked.setter(),
        submit_label: submit_label.setter(),
        messages: messages.clone(),
    };

    let on_complete = {
        let controller = controller.clone();
        let ui = ui.clone();
        Callback::from(move |ticket: SubmissionTicket| {
            let effects = controller.borrow_mut().workflow.complete(ticket);
            apply_effects(effects, &controller, &ui, &Callback::noop());
        })
    };

    let onsubmit = {
        let controller = controller.clone();
        let snapshot = OrderSubmission {
            name: name.value.clone(),
            phone: phone.value.clone(),
            email: email.value.clone(),
            model: model.value.clone(),
            address: address.value.clone(),
            consent: consent.value == "true",
        };
        let ui = ui.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let effects = controller.borrow_mut().workflow.submit(&snapshot);
            apply_effects(effects, &controller, &ui, &on_complete);
        })
    };

    // Order button on a model card: scroll to the form, then pick the model
    let on_order = {
        let set_model = model.set_value.clone();
        let preselect_timer = preselect_timer.clone();
        Callback::from(move |id: &'static str| {
            page::smooth_scroll_to(ORDER_SECTION_ID);
            let set_model = set_model.clone();
            reschedule(&preselect_timer, PRESELECT_DELAY_MS, move || {
                set_model.emit(id.to_string())
            });
        })
    };

    let on_phone_input = {
        let on_input = phone.on_input.clone();
        let hint_pulse = hint_pulse.clone();
        let hint_timer = hint_timer.clone();
        Callback::from(move |text: String| {
            if phone_needs_hint(&text) && !*hint_pulse {
                hint_pulse.set(true);
                let hint_pulse = hint_pulse.setter();
                reschedule(&hint_timer, HINT_RESET_MS, move || hint_pulse.set(false));
            }
            on_input.emit(text);
        })
    };

    let on_close = {
        let overlays = overlays.dispatcher();
        Callback::from(move |kind: NotificationKind| {
            overlays.dispatch(OverlayAction::Dismiss(kind))
        })
    };

    html! {
        <>
            <ProgressBar percent={*progress} />

            <header class="site-header">
                <nav>
                    <a href="#models">{ &messages.models_title }</a>
                    <a href={format!("#{}", ORDER_SECTION_ID)}>{ &messages.order_title }</a>
                </nav>
            </header>

            <section class="hero">
                <h1 class="fade-in">{ &messages.hero_title }</h1>
                <p class="fade-in">{ &messages.hero_subtitle }</p>
                <a href="#models" class="btn btn-primary">{ &messages.hero_cta }</a>
            </section>

            <section id="models" class="models">
                <h2 class="fade-in">{ &messages.models_title }</h2>
                <div class="model-grid">
                    { MODELS.iter().map(|m| html! {
                        <ModelCard
                            key={m.id}
                            model={m}
                            order_label={AttrValue::from(messages.order_button.clone())}
                            on_order={on_order.clone()} />
                    }).collect::<Html>() }
                </div>
            </section>

            <section id={ORDER_SECTION_ID} class="order">
                <h2 class="fade-in">{ &messages.order_title }</h2>
                <form class="order-form" novalidate=true {onsubmit}>
                    <TextField
                        kind={FieldKind::Name}
                        label={messages.name_label.clone()}
                        value={name.value.clone()}
                        error={name.error.clone()}
                        on_input={name.on_input.clone()}
                        on_blur={name.on_blur.clone()} />
                    <TextField
                        kind={FieldKind::Phone}
                        label={messages.phone_label.clone()}
                        input_type="tel"
                        placeholder="+7 (999) 123-45-67"
                        hint={AttrValue::from(messages.phone_hint.clone())}
                        hint_pulse={*hint_pulse}
                        value={phone.value.clone()}
                        error={phone.error.clone()}
                        on_input={on_phone_input}
                        on_blur={phone.on_blur.clone()} />
                    <TextField
                        kind={FieldKind::Email}
                        label={messages.email_label.clone()}
                        input_type="email"
                        placeholder="name@example.com"
                        value={email.value.clone()}
                        error={email.error.clone()}
                        on_input={email.on_input.clone()}
                        on_blur={email.on_blur.clone()} />
                    <ModelSelect
                        label={messages.model_label.clone()}
                        placeholder={messages.model_placeholder.clone()}
                        value={model.value.clone()}
                        error={model.error.clone()}
                        on_input={model.on_input.clone()}
                        on_blur={model.on_blur.clone()} />
                    <TextField
                        kind={FieldKind::Address}
                        label={messages.address_label.clone()}
                        multiline=true
                        value={address.value.clone()}
                        error={address.error.clone()}
                        on_input={address.on_input.clone()}
                        on_blur={address.on_blur.clone()} />
                    <ConsentCheckbox
                        label={messages.consent_label.clone()}
                        checked={consent.value == "true"}
                        error={consent.error.clone()}
                        on_change={consent.on_change.clone()}
                        on_blur={consent.on_blur.clone()} />

                    <button type="submit" class="btn btn-primary submit-btn" disabled={*submit_locked}>
                        { (*submit_label).clone() }
                    </button>
                </form>
            </section>

            { render_notifications(&overlays.0, &messages.close_label, &on_close) }
        </>
    }
}

/// Entry point: sets up logging and renders the App.
fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(Level::Info) {
        // a logger is already installed; keep using it
        warn!("Logger init failed: {}", e);
    }
    yew::Renderer::<App>::new().render();
}
