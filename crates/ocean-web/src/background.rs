use crate::dom::{self, Listener};
use crate::frame::{self, FrameLoop};
use crate::render::CanvasSurface;
use ocean_core::{Background, FieldParams, Intensity};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A background running on a canvas.
///
/// Holds the frame loop plus one `resize` and one `pointermove` listener on
/// the window. Dropping it tears the background down and releases all three.
pub struct Mounted {
    background: Rc<RefCell<Background>>,
    _frame: FrameLoop,
    _resize: Listener,
    _pointer: Listener,
}

/// Start the particle background on `canvas`.
///
/// Returns `None` without side effects when there is no window or the canvas
/// has no 2D context; the page simply renders without the animation.
pub fn mount(canvas: &web::HtmlCanvasElement, intensity: Intensity) -> Option<Mounted> {
    let window = web::window()?;
    let ctx = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
    {
        Some(ctx) => ctx,
        None => {
            log::debug!("[background] no 2d context; skipping");
            return None;
        }
    };

    let (w, h) = dom::sync_canvas_to_viewport(canvas, &window);
    let background = Rc::new(RefCell::new(Background::mount(
        FieldParams::default(),
        w,
        h,
        intensity,
        StdRng::from_entropy(),
    )));

    let bg_resize = background.clone();
    let canvas_resize = canvas.clone();
    let resize = Listener::new(&window, "resize", move |_ev| {
        if let Some(wnd) = web::window() {
            let (w, h) = dom::sync_canvas_to_viewport(&canvas_resize, &wnd);
            bg_resize.borrow_mut().on_resize(w, h);
        }
    })?;

    let bg_pointer = background.clone();
    let pointer = Listener::new(&window, "pointermove", move |ev| {
        if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
            bg_pointer
                .borrow_mut()
                .on_pointer_move(me.client_x() as f32, me.client_y() as f32);
        }
    })?;

    let bg_frame = background.clone();
    let mut surface = CanvasSurface::new(ctx);
    let frame = frame::start_loop(move || bg_frame.borrow_mut().on_frame(&mut surface))?;

    log::info!(
        "[background] mounted {} particles on {:.0}x{:.0}",
        background.borrow().field().len(),
        w,
        h
    );
    Some(Mounted {
        background,
        _frame: frame,
        _resize: resize,
        _pointer: pointer,
    })
}

impl Mounted {
    pub fn set_intensity(&self, intensity: Intensity) {
        self.background.borrow_mut().set_intensity(intensity);
    }

    pub fn intensity(&self) -> Intensity {
        self.background.borrow().intensity()
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.background.borrow_mut().teardown();
        log::info!("[background] unmounted");
    }
}
