use std::rc::Rc;

use log::{debug, error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Event;

use crate::config::FormConfig;
use crate::contact::fields::FormFields;
use crate::contact::form::ContactForm;
use crate::contact::submission::FetchTransport;
use crate::dom::web::WebDocument;
use crate::dom::{Document, Element};
use crate::notifier::Notifier;
use crate::scheduler::BrowserScheduler;

type BrowserContactForm = ContactForm<WebDocument, BrowserScheduler, FetchTransport>;

/// Wires the contact form on the current page, if there is one.
pub fn mount() {
    let Some(document) = WebDocument::current() else {
        warn!("No document available, contact form not mounted");
        return;
    };
    let config = FormConfig::default();
    let Some(form) = document.find(&config.selectors.form) else {
        debug!("No contact form on this page");
        return;
    };
    let fields = match FormFields::resolve(form, &config.selectors) {
        Ok(fields) => fields,
        Err(e) => {
            error!("Contact form not mounted: {}", e);
            return;
        }
    };

    let notifier = Notifier::new(document, BrowserScheduler, config.toast);
    let contact = Rc::new(ContactForm::new(fields, config, FetchTransport, notifier));

    listen(contact.fields().service.raw(), "change", {
        let contact = Rc::clone(&contact);
        move |_| contact.on_service_change()
    });

    let editable = contact.fields().form.find_all(&contact.config().selectors.editable);
    for field in editable {
        for event in ["input", "change"] {
            let contact = Rc::clone(&contact);
            let target = field.clone();
            listen(field.raw(), event, move |_| contact.on_field_edited(&target));
        }
    }

    listen(contact.fields().form.raw(), "submit", {
        let contact = Rc::clone(&contact);
        move |event: Event| {
            event.prevent_default();
            submit(Rc::clone(&contact));
        }
    });

    info!("Contact form mounted");
}

fn submit(contact: Rc<BrowserContactForm>) {
    spawn_local(async move {
        match contact.handle_submit().await {
            Ok(report) => debug!("Contact form submit finished: {:?}", report),
            Err(e) => warn!("Contact form submit ignored: {}", e),
        }
    });
}

fn listen(target: &web_sys::Element, event: &str, handler: impl FnMut(Event) + 'static) {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        warn!("Failed to attach {} listener: {:?}", event, e);
    }
    // Listeners live as long as the page.
    callback.forget();
}
