//! Page wiring: find the toggle, infer the viewer, pick a store, listen.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`install`] runs once per page load. A page without the toggle control is
//! left alone: nothing is read, written or subscribed.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::controller::ThemeToggleController;
use crate::identity::{PageSignals, ViewerIdentity};
use crate::store::{KeyValueStorage, LocalStore, Transport, select_store};
use crate::surface::ThemeSurface;

/// Click callback registered on the toggle control.
pub type ClickHandler = Box<dyn Fn()>;

/// The DOM contract the controller depends on.
pub trait Page {
    type Surface: ThemeSurface + 'static;

    fn has_element(&self, id: &str) -> bool;

    fn signals(&self, config: &ThemeConfig) -> PageSignals;

    /// Body plus optional icon. `None` if the page has no body.
    fn surface(&self, config: &ThemeConfig) -> Option<Self::Surface>;

    fn storage(&self) -> Rc<dyn KeyValueStorage>;

    /// Attach `handler` to clicks on element `id` for the page lifetime.
    fn on_click(&self, id: &str, handler: ClickHandler);
}

/// Set up the toggle on `page`.
///
/// Returns `None` without touching the page when the toggle control is
/// missing.
pub fn install<P: Page>(
    page: &P,
    transport: Rc<dyn Transport>,
    config: &ThemeConfig,
) -> Option<Rc<ThemeToggleController<P::Surface>>> {
    if !page.has_element(&config.toggle_id) {
        return None;
    }
    let surface = page.surface(config)?;

    let identity = ViewerIdentity::infer(&page.signals(config));
    let storage = page.storage();
    let saved = LocalStore::new(storage.clone(), config.storage_key.clone()).load();
    let store = select_store(identity, storage, transport, config);
    log::debug!(
        "theme toggle installed: identity={identity:?} channel={:?} saved={saved:?}",
        store.channel()
    );

    let controller = Rc::new(ThemeToggleController::new(surface, identity, store));
    controller.initialize(saved);

    let on_click = Rc::clone(&controller);
    page.on_click(
        &config.toggle_id,
        Box::new(move || {
            on_click.toggle();
        }),
    );
    Some(controller)
}

/// The live `document`.
#[cfg(feature = "hydrate")]
pub struct DomPage {
    document: web_sys::Document,
}

#[cfg(feature = "hydrate")]
impl DomPage {
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }

    fn matches(&self, root: &web_sys::Element, selector: &str) -> bool {
        match root.query_selector(selector) {
            Ok(found) => found.is_some(),
            Err(e) => {
                log::warn!("invalid selector {selector:?}: {e:?}");
                false
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl Page for DomPage {
    type Surface = crate::surface::DomSurface;

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn signals(&self, config: &ThemeConfig) -> PageSignals {
        let Some(body) = self.document.body() else {
            return PageSignals::default();
        };
        let logout_link_present = self
            .document
            .document_element()
            .is_some_and(|root| self.matches(&root, &config.logout_link_selector));
        PageSignals {
            body_has_theme_class: body.class_list().contains(&config.theme_class),
            navigation_present: self.matches(&body, &config.navigation_selector),
            logout_link_present,
        }
    }

    fn surface(&self, config: &ThemeConfig) -> Option<Self::Surface> {
        let body = self.document.body()?;
        let icon = self.document.get_element_by_id(&config.icon_id);
        Some(crate::surface::DomSurface::new(body, icon, config))
    }

    fn storage(&self) -> Rc<dyn KeyValueStorage> {
        Rc::new(crate::store::local::BrowserStorage::new())
    }

    fn on_click(&self, id: &str, handler: ClickHandler) {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(target) = self.document.get_element_by_id(id) else {
            return;
        };
        let cb = Closure::wrap(
            Box::new(move |_event: web_sys::Event| handler()) as Box<dyn FnMut(web_sys::Event)>
        );
        if let Err(e) =
            target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        {
            log::error!("failed to attach click listener to #{id}: {e:?}");
            return;
        }
        // Listener lives as long as the page.
        cb.forget();
    }
}
