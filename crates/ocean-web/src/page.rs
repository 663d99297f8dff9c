use crate::background::Mounted;
use crate::dom;
use crate::views;
use ocean_core::{AppMode, AppState, SCAN_DELAY_MS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page-level state: current mode plus the background it drives.
pub struct Page {
    document: web::Document,
    state: RefCell<AppState>,
    background: RefCell<Option<Mounted>>,
}

impl Page {
    pub fn new(document: web::Document, background: Option<Mounted>) -> Rc<Self> {
        let page = Rc::new(Self {
            document,
            state: RefCell::new(AppState::new()),
            background: RefCell::new(background),
        });
        views::show_mode(&page.document, AppMode::Input);
        page
    }

    pub fn mode(&self) -> AppMode {
        self.state.borrow().mode()
    }

    fn enter(&self, mode: AppMode) {
        if let Some(bg) = self.background.borrow().as_ref() {
            bg.set_intensity(mode.background_intensity());
        }
        views::show_mode(&self.document, mode);
    }

    pub fn begin_scan(self: &Rc<Self>) {
        let mode = match self.state.borrow_mut().begin_scan() {
            Ok(m) => m,
            Err(e) => {
                log::warn!("[page] {}", e);
                return;
            }
        };
        self.enter(mode);

        let page = self.clone();
        let done = Closure::once_into_js(move || page.finish_scan());
        let scheduled = web::window().map(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                done.unchecked_ref(),
                SCAN_DELAY_MS as i32,
            )
        });
        if !matches!(scheduled, Some(Ok(_))) {
            log::error!("[page] could not schedule scan completion");
        }
    }

    fn finish_scan(&self) {
        match self.state.borrow_mut().finish_scan() {
            Ok(mode) => self.enter(mode),
            Err(e) => log::warn!("[page] {}", e),
        }
    }

    pub fn analyze_another(&self) {
        match self.state.borrow_mut().analyze_another() {
            Ok(mode) => self.enter(mode),
            Err(e) => log::warn!("[page] {}", e),
        }
    }
}

/// Hook the analyze form and the "analyze another" button, when present.
pub fn wire_controls(page: &Rc<Page>) {
    let page_submit = page.clone();
    dom::add_listener_by_id(&page.document, "analyze-form", "submit", move |ev| {
        ev.prevent_default();
        page_submit.begin_scan();
    });

    let page_again = page.clone();
    dom::add_listener_by_id(&page.document, "analyze-another", "click", move |_ev| {
        page_again.analyze_another();
    });
}
