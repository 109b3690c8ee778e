//! In-memory stand-ins for the browser seams, shared by unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::identity::PageSignals;
use crate::page::{ClickHandler, Page};
use crate::store::remote::Completion;
use crate::store::{KeyValueStorage, MemoryStorage, PersistError, Transport};
use crate::surface::ThemeSurface;
use crate::theme::IconGlyph;

/// Body class flag plus optional icon, shared between clones.
#[derive(Clone, Debug, Default)]
pub struct FakeSurface {
    pub dark_class: Rc<Cell<bool>>,
    pub icon: Option<Rc<Cell<Option<IconGlyph>>>>,
}

impl FakeSurface {
    pub fn with_icon() -> Self {
        Self {
            dark_class: Rc::new(Cell::new(false)),
            icon: Some(Rc::new(Cell::new(None))),
        }
    }

    pub fn without_icon() -> Self {
        Self::default()
    }

    pub fn icon_glyph(&self) -> Option<IconGlyph> {
        self.icon.as_ref().and_then(|icon| icon.get())
    }
}

impl ThemeSurface for FakeSurface {
    fn has_theme_class(&self) -> bool {
        self.dark_class.get()
    }

    fn toggle_theme_class(&self) -> bool {
        let next = !self.dark_class.get();
        self.dark_class.set(next);
        next
    }

    fn add_theme_class(&self) {
        self.dark_class.set(true);
    }

    fn set_icon(&self, glyph: IconGlyph) {
        if let Some(icon) = &self.icon {
            icon.set(Some(glyph));
        }
    }
}

/// Storage that counts writes and can be told to reject them.
#[derive(Debug, Default)]
pub struct CountingStorage {
    pub inner: MemoryStorage,
    pub writes: Cell<usize>,
    pub fail_writes: Cell<bool>,
}

impl KeyValueStorage for CountingStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError> {
        self.writes.set(self.writes.get() + 1);
        if self.fail_writes.get() {
            return Err(PersistError::Storage("quota exceeded".to_owned()));
        }
        self.inner.set_item(key, value)
    }
}

/// How a [`RecordingTransport`] completes each request.
#[derive(Clone, Debug)]
pub enum Reply {
    Json(serde_json::Value),
    Fail(u16),
    Pending,
}

/// Transport that records endpoints and answers with a canned [`Reply`].
#[derive(Default)]
pub struct RecordingTransport {
    pub requests: RefCell<Vec<String>>,
    pub reply: RefCell<Option<Reply>>,
    pub pending: RefCell<Vec<Completion>>,
}

impl RecordingTransport {
    pub fn replying(reply: Reply) -> Self {
        Self {
            reply: RefCell::new(Some(reply)),
            ..Self::default()
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for RecordingTransport {
    fn post_json(&self, endpoint: &str, done: Completion) {
        self.requests.borrow_mut().push(endpoint.to_owned());
        match self.reply.borrow().clone().unwrap_or(Reply::Pending) {
            Reply::Json(body) => done(Ok(body)),
            Reply::Fail(status) => done(Err(PersistError::Status(status))),
            Reply::Pending => self.pending.borrow_mut().push(done),
        }
    }
}

/// Page double: element presence, signals and captured click handlers.
#[derive(Default)]
pub struct FakePage {
    pub has_toggle: bool,
    pub toggle_id: String,
    pub signals: PageSignals,
    pub surface: FakeSurface,
    pub storage: Rc<CountingStorage>,
    pub handlers: RefCell<Vec<ClickHandler>>,
}

impl FakePage {
    pub fn anonymous() -> Self {
        Self {
            has_toggle: true,
            toggle_id: ThemeConfig::default().toggle_id,
            surface: FakeSurface::with_icon(),
            ..Self::default()
        }
    }

    pub fn authenticated() -> Self {
        Self {
            has_toggle: true,
            toggle_id: ThemeConfig::default().toggle_id,
            signals: PageSignals {
                navigation_present: true,
                logout_link_present: true,
                ..PageSignals::default()
            },
            surface: FakeSurface::with_icon(),
            ..Self::default()
        }
    }

    /// Same page, but the toggle control carries `toggle_id`.
    pub fn with_toggle_id(self, toggle_id: &str) -> Self {
        Self {
            toggle_id: toggle_id.to_owned(),
            ..self
        }
    }

    pub fn click(&self) {
        for handler in self.handlers.borrow().iter() {
            handler();
        }
    }
}

impl Page for FakePage {
    type Surface = FakeSurface;

    fn has_element(&self, id: &str) -> bool {
        self.has_toggle && id == self.toggle_id
    }

    fn signals(&self, _config: &ThemeConfig) -> PageSignals {
        PageSignals {
            body_has_theme_class: self.surface.has_theme_class(),
            ..self.signals
        }
    }

    fn surface(&self, _config: &ThemeConfig) -> Option<FakeSurface> {
        Some(self.surface.clone())
    }

    fn storage(&self) -> Rc<dyn KeyValueStorage> {
        self.storage.clone()
    }

    fn on_click(&self, id: &str, handler: ClickHandler) {
        assert_eq!(id, self.toggle_id);
        self.handlers.borrow_mut().push(handler);
    }
}
