#![cfg(target_arch = "wasm32")]
use ocean_core::Intensity;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod background;
mod dom;
mod frame;
mod page;
mod render;
mod views;

const CANVAS_ID: &str = "ocean-canvas";

thread_local! {
    // Auto-mounted page; lives as long as the document.
    static PAGE: RefCell<Option<Rc<page::Page>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ocean-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mounted = match find_canvas(&document, CANVAS_ID) {
        Some(canvas) => {
            let intensity = intensity_attr(&canvas);
            background::mount(&canvas, intensity)
        }
        None => {
            log::debug!("no #{}; page runs without background", CANVAS_ID);
            None
        }
    };

    let page = page::Page::new(document, mounted);
    page::wire_controls(&page);
    log::info!("page ready in {} mode", page.mode());
    PAGE.with(|p| *p.borrow_mut() = Some(page));
    Ok(())
}

fn find_canvas(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

// `data-intensity` on the canvas; anything unparsable falls back to idle.
fn intensity_attr(canvas: &web::HtmlCanvasElement) -> Intensity {
    let Some(raw) = canvas.get_attribute("data-intensity") else {
        return Intensity::default();
    };
    match raw.trim().parse::<f32>().map(Intensity::new) {
        Ok(Ok(i)) => i,
        _ => {
            log::warn!("ignoring data-intensity={:?}", raw);
            Intensity::default()
        }
    }
}

/// Script-controlled background, for pages that manage their own canvas.
#[wasm_bindgen]
pub struct OceanBackground {
    mounted: Option<background::Mounted>,
}

#[wasm_bindgen]
impl OceanBackground {
    /// Mount on the canvas with `canvas_id`. A missing canvas or 2D context
    /// yields an inert handle rather than an error.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, intensity: Option<f32>) -> Result<OceanBackground, JsValue> {
        let intensity = match intensity {
            Some(v) => Intensity::new(v).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Intensity::default(),
        };
        let mounted = dom::window_document()
            .and_then(|d| find_canvas(&d, canvas_id))
            .and_then(|c| background::mount(&c, intensity));
        Ok(OceanBackground { mounted })
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mounted.is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn intensity(&self) -> f32 {
        self.mounted
            .as_ref()
            .map(|m| m.intensity().get())
            .unwrap_or_else(|| Intensity::default().get())
    }

    pub fn set_intensity(&mut self, value: f32) -> Result<(), JsValue> {
        let intensity = Intensity::new(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        if let Some(m) = &self.mounted {
            m.set_intensity(intensity);
        }
        Ok(())
    }

    /// Stop the animation and remove the listeners. Safe to call twice.
    pub fn unmount(&mut self) {
        self.mounted.take();
    }
}
