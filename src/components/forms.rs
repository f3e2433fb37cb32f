//! Form validation and simulated submission.
//!
//! - Every control validates on blur, and again on input while invalid.
//! - `#contactForm` runs the full [`Submission`] cycle with a loading state
//!   and an auto-hiding success indicator.
//! - `#newsletterForm` checks its single email input and reports through
//!   toasts.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::app::AppContext;
use crate::config::{classes, messages, selectors};
use crate::core::{
    DomError, Submission, SubmissionError, TaskKey, is_valid_email, validate_field, validate_form,
};
use crate::models::{FieldKind, FormField, NotificationKind, Validity};
use crate::utils::{dom, log};

pub fn init(ctx: &AppContext) -> Result<usize, DomError> {
    let mut bound = bind_live_validation()?;

    if let Some(form) = dom::element_by_id(selectors::CONTACT_FORM_ID) {
        bind_contact_form(ctx, form)?;
        bound += 1;
    }
    if let Some(form) = dom::element_by_id(selectors::NEWSLETTER_FORM_ID) {
        bind_newsletter_form(ctx, form)?;
        bound += 1;
    }
    Ok(bound)
}

// =============================================================================
// Field Validation
// =============================================================================

/// Snapshot a form control's value, required flag and kind.
fn read_field(element: &Element) -> FormField {
    let (value, kind) = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        (input.value(), FieldKind::from_input_type(&input.type_()))
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        (area.value(), FieldKind::Text)
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        (select.value(), FieldKind::Text)
    } else {
        (String::new(), FieldKind::Text)
    };

    FormField {
        value,
        required: element.has_attribute("required"),
        kind,
    }
}

fn apply_marker(element: &Element, validity: Validity) {
    match validity {
        Validity::Valid => {
            dom::remove_class(element, classes::INVALID);
            dom::add_class(element, classes::VALID);
        }
        Validity::Invalid => {
            dom::remove_class(element, classes::VALID);
            dom::add_class(element, classes::INVALID);
        }
        Validity::Unvalidated => {
            dom::remove_class(element, classes::VALID);
            dom::remove_class(element, classes::INVALID);
        }
    }
}

/// Validate one control and update its marker.
pub fn validate_control(element: &Element) -> Validity {
    let validity = validate_field(&read_field(element));
    apply_marker(element, validity);
    validity
}

fn bind_live_validation() -> Result<usize, DomError> {
    let controls = dom::query_all(selectors::FORM_CONTROLS)?;
    for control in &controls {
        let field = control.clone();
        dom::listen(control, "blur", move |_| {
            validate_control(&field);
        })?;

        let field = control.clone();
        dom::listen(control, "input", move |_| {
            if dom::has_class(&field, classes::INVALID) {
                validate_control(&field);
            }
        })?;
    }
    Ok(controls.len())
}

// =============================================================================
// Submit Button
// =============================================================================

/// The submit button of a form and its optional label/spinner parts.
#[derive(Clone)]
struct SubmitButton {
    button: Option<Element>,
    text: Option<Element>,
    loading: Option<Element>,
}

impl SubmitButton {
    fn find(form: &Element) -> Self {
        let button = dom::query_in(form, selectors::SUBMIT_BUTTON);
        let part = |selector: &str| button.as_ref().and_then(|b| dom::query_in(b, selector));
        Self {
            text: part(selectors::BUTTON_TEXT),
            loading: part(selectors::BUTTON_LOADING),
            button,
        }
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = &self.button {
            dom::set_disabled(button, disabled);
        }
    }

    /// Swap the label for the spinner (or back).
    fn show_loading(&self, loading: bool) {
        let (show, hide) = if loading {
            (&self.loading, &self.text)
        } else {
            (&self.text, &self.loading)
        };
        if let Some(el) = show {
            dom::remove_class(el, classes::HIDDEN);
        }
        if let Some(el) = hide {
            dom::add_class(el, classes::HIDDEN);
        }
    }

    /// Replace the button's markup, returning what was there.
    fn replace_label(&self, label: &str) -> Option<String> {
        let button = self.button.as_ref()?;
        let original = button.inner_html();
        button.set_text_content(Some(label));
        Some(original)
    }

    fn restore_label(&self, original: Option<String>) {
        if let (Some(button), Some(html)) = (&self.button, original) {
            button.set_inner_html(&html);
        }
    }
}

// =============================================================================
// Contact Form
// =============================================================================

fn bind_contact_form(ctx: &AppContext, form: Element) -> Result<(), DomError> {
    let state = Rc::new(RefCell::new(Submission::new()));
    let button = SubmitButton::find(&form);
    let ctx = ctx.clone();
    let target = form.clone();

    dom::listen(&target, "submit", move |ev| {
        ev.prevent_default();
        if let Err(e) = submit_contact(&ctx, &form, &button, &state) {
            log::debug(&format!("contact form: {}", e));
        }
    })
}

/// `Idle → Validating → {Idle, Submitting → Success → Idle}`.
fn submit_contact(
    ctx: &AppContext,
    form: &Element,
    button: &SubmitButton,
    state: &Rc<RefCell<Submission>>,
) -> Result<(), SubmissionError> {
    state.borrow_mut().begin()?;

    let controls = dom::query_all_in(form, selectors::REQUIRED_CONTROLS);
    let fields: Vec<FormField> = controls.iter().map(read_field).collect();
    let report = validate_form(&fields);
    for (control, validity) in controls.iter().zip(&report.fields) {
        apply_marker(control, *validity);
    }
    if !report.valid {
        return state.borrow_mut().reject();
    }

    state.borrow_mut().accept()?;
    button.show_loading(true);
    button.set_disabled(true);

    let form = form.clone();
    let button = button.clone();
    let state = Rc::clone(state);
    let hide_ctx = ctx.clone();

    ctx.schedule(TaskKey::ContactSubmit, ctx.config.submit_delay_ms, move || {
        if let Err(e) = state.borrow_mut().complete() {
            log::warn(&format!("contact form: {}", e));
            return;
        }

        let success = dom::element_by_id(selectors::FORM_SUCCESS_ID);
        if let Some(indicator) = &success {
            dom::remove_class(indicator, classes::HIDDEN);
            dom::smooth_scroll_to(indicator);
        }

        dom::reset_form(&form);
        for control in dom::query_all_in(&form, &format!(".{}", classes::VALID)) {
            apply_marker(&control, Validity::Unvalidated);
        }
        button.show_loading(false);

        hide_ctx.schedule(
            TaskKey::ContactSuccessHide,
            hide_ctx.config.success_hide_ms,
            move || {
                if let Some(indicator) = &success {
                    dom::add_class(indicator, classes::HIDDEN);
                }
                if let Err(e) = state.borrow_mut().finish() {
                    log::warn(&format!("contact form: {}", e));
                }
                button.set_disabled(state.borrow().controls_disabled());
            },
        );
    });
    Ok(())
}

// =============================================================================
// Newsletter Form
// =============================================================================

fn bind_newsletter_form(ctx: &AppContext, form: Element) -> Result<(), DomError> {
    let state = Rc::new(RefCell::new(Submission::new()));
    let button = SubmitButton::find(&form);
    let ctx = ctx.clone();
    let target = form.clone();

    dom::listen(&target, "submit", move |ev| {
        ev.prevent_default();
        if let Err(e) = submit_newsletter(&ctx, &form, &button, &state) {
            log::debug(&format!("newsletter form: {}", e));
        }
    })
}

fn submit_newsletter(
    ctx: &AppContext,
    form: &Element,
    button: &SubmitButton,
    state: &Rc<RefCell<Submission>>,
) -> Result<(), SubmissionError> {
    state.borrow_mut().begin()?;

    let email = dom::query_in(form, selectors::EMAIL_INPUT)
        .map(|input| read_field(&input).value)
        .unwrap_or_default();
    let email = email.trim();
    if email.is_empty() || !is_valid_email(email) {
        ctx.notify(NotificationKind::Error, messages::INVALID_EMAIL);
        return state.borrow_mut().reject();
    }

    state.borrow_mut().accept()?;
    let original = button.replace_label(messages::SUBSCRIBING);
    button.set_disabled(true);

    let form = form.clone();
    let button = button.clone();
    let state = Rc::clone(state);
    let done_ctx = ctx.clone();

    ctx.schedule(
        TaskKey::NewsletterSubmit,
        ctx.config.newsletter_delay_ms,
        move || {
            done_ctx.notify(NotificationKind::Success, messages::SUBSCRIBED);
            dom::reset_form(&form);
            button.restore_label(original);

            let mut state = state.borrow_mut();
            if let Err(e) = state.complete().and_then(|_| state.finish()) {
                log::warn(&format!("newsletter form: {}", e));
            }
            button.set_disabled(state.controls_disabled());
        },
    );
    Ok(())
}
