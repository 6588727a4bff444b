//! Contact Section
//!
//! "Get In Touch": email/phone, the contact form and profile buttons.

use leptos::prelude::*;

use crate::components::page_section::PageSection;
use crate::components::social_links::SocialButtons;
use crate::contact::{mailto_link, ContactField, ContactForm, FieldError};
use crate::context::use_site;
use crate::section::Section;

/// Page section this component renders
pub const SECTION: Section = Section::Contact;

#[component]
pub fn ContactSection() -> impl IntoView {
    let site = use_site();
    let owner = site.content().owner.clone();
    let links = site.content().links.clone();
    let (form, set_form) = signal(ContactForm::default());
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let recipient = owner.email.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        match current.validate() {
            Ok(()) => {
                set_errors.set(Vec::new());
                web_sys::console::log_1(&"[CONTACT] Opening mail draft".into());
                if let Err(err) = window().location().set_href(&current.mailto_href(&recipient)) {
                    web_sys::console::error_2(&"[CONTACT] Could not open mail client:".into(), &err);
                }
            }
            Err(field_errors) => {
                web_sys::console::log_1(&format!("[CONTACT] {} invalid field(s)", field_errors.len()).into());
                set_errors.set(field_errors);
            }
        }
    };

    view! {
        <PageSection section=SECTION class="contact muted">
            <div class="container narrow centered">
                <h2 class="section-title large">"Get In Touch"</h2>
                <p class="contact-intro">
                    "Interested in collaborating or exploring my data science projects? Feel free to connect with me!"
                </p>

                <div class="contact-grid">
                    <div class="contact-info">
                        <p>
                            "Email: "
                            <a href=mailto_link(&owner.email) class="underline">{owner.email.clone()}</a>
                        </p>
                        <p>"Phone: " {owner.phone.clone()}</p>
                    </div>

                    <form class="contact-form" on:submit=on_submit>
                        {ContactField::ALL
                            .iter()
                            .map(|&field| view! { <FormField field=field form=form set_form=set_form errors=errors set_errors=set_errors /> })
                            .collect_view()}
                        <button type="submit" class="btn-primary">"Send Message"</button>
                    </form>
                </div>

                <SocialButtons links=links />
            </div>
        </PageSection>
    }
}

/// Labelled required input bound to one form field
#[component]
fn FormField(
    field: ContactField,
    form: ReadSignal<ContactForm>,
    set_form: WriteSignal<ContactForm>,
    errors: ReadSignal<Vec<FieldError>>,
    set_errors: WriteSignal<Vec<FieldError>>,
) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        set_form.update(|f| f.set(field, text));
        set_errors.update(|errs| errs.retain(|e| e.field != field));
    };
    let error = move || {
        errors
            .get()
            .into_iter()
            .find(|e| e.field == field)
            .map(|e| view! { <p class="field-error">{e.to_string()}</p> })
    };

    let input = match field {
        ContactField::Message => view! {
            <textarea
                id=field.name()
                name=field.name()
                rows="4"
                class="form-input"
                required=true
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        _ => {
            let input_type = if field == ContactField::Email { "email" } else { "text" };
            view! {
                <input
                    type=input_type
                    id=field.name()
                    name=field.name()
                    class="form-input"
                    required=true
                    prop:value=value
                    on:input=on_input
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-field">
            <label for=field.name() class="form-label">{field.label()}</label>
            {input}
            {error}
        </div>
    }
}
