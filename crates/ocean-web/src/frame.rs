use ocean_core::FrameOutcome;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop that runs until dropped or until the frame
/// callback reports [`FrameOutcome::Stopped`].
///
/// Dropping cancels the pending frame and releases the callback. It must not
/// be dropped from inside its own frame callback.
pub struct FrameLoop {
    active: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

pub fn start_loop(mut on_frame: impl FnMut() -> FrameOutcome + 'static) -> Option<FrameLoop> {
    let active = Rc::new(Cell::new(true));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Tick = Rc::new(RefCell::new(None));

    let active_tick = active.clone();
    let pending_tick = pending.clone();
    let tick_weak = Rc::downgrade(&tick);
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if !active_tick.get() {
            return;
        }
        if on_frame() == FrameOutcome::Stopped {
            active_tick.set(false);
            return;
        }
        if let Some(tick) = tick_weak.upgrade() {
            if let Some(cb) = tick.borrow().as_ref() {
                pending_tick.set(request_frame(cb));
            }
        }
    }) as Box<dyn FnMut()>));

    let first = tick.borrow().as_ref().and_then(request_frame)?;
    pending.set(Some(first));
    Some(FrameLoop {
        active,
        pending,
        tick,
    })
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.active.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window()?
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}
