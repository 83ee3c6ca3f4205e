use dioxus::prelude::*;
use folio_domain::ContactField;
use folio_kernel::contact::ContactForm;
use tracing::warn;

/// Local-only contact form. Submitting acknowledges the message and clears it;
/// nothing is sent anywhere.
#[component]
pub fn Contact() -> Element {
    let mut contact = use_signal(ContactForm::new);
    let submitted = contact.read().is_submitted();
    let draft = contact.read().draft().clone();

    let edit = move |field: ContactField| {
        move |event: FormEvent| {
            contact.write().set_field(field, event.value());
        }
    };

    rsx! {
        main { class: "contact-container",
            h1 { "Contact Me" }
            if submitted {
                p { class: "success-message",
                    "Thank you for your message! I will get back to you soon."
                }
            } else {
                form {
                    class: "contact-form",
                    onsubmit: move |event: FormEvent| {
                        event.prevent_default();
                        if let Err(err) = contact.write().submit() {
                            warn!(error = %err, "Contact form not submitted");
                        }
                    },
                    input {
                        name: "name",
                        placeholder: "Your Name",
                        value: "{draft.name}",
                        required: true,
                        class: "input-field",
                        oninput: edit(ContactField::Name),
                    }
                    input {
                        name: "email",
                        r#type: "email",
                        placeholder: "Your Email",
                        value: "{draft.email}",
                        required: true,
                        class: "input-field",
                        oninput: edit(ContactField::Email),
                    }
                    textarea {
                        name: "message",
                        placeholder: "Your Message",
                        value: "{draft.message}",
                        required: true,
                        class: "textarea-field",
                        oninput: edit(ContactField::Message),
                    }
                    button { r#type: "submit", class: "submit-button", "Send Message" }
                }
            }
        }
    }
}
