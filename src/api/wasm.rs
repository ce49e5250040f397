use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, Event, HtmlCanvasElement, Window};

use crate::animation::LoopState;
use crate::controller::{ExplosionCore, PointerOutcome};
use crate::core::clock;
use crate::dom::canvas::{CanvasSize, Surface};
use crate::dom::debounce::{Debounce, Timers};
use crate::dom::filter::TargetNode;
use crate::dom::pointer::PointerSample;
use crate::domain::{ExplosionConfig, Point};

type Core = Rc<RefCell<ExplosionCore<CanvasSurface>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Top-left of the canvas in client coordinates
fn canvas_origin(canvas: &HtmlCanvasElement) -> Point {
    let rect = canvas.get_bounding_client_rect();
    Point::new(rect.left(), rect.top())
}

/// 2D-context drawing on the overlay canvas
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("2D canvas context unavailable")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    fn circle_path(&self, center: Point, radius: f64) -> Result<(), String> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, radius.max(0.0), 0.0, std::f64::consts::TAU)
            .map_err(js_err)
    }
}

impl Surface for CanvasSurface {
    fn apply_size(&mut self, size: &CanvasSize) -> Result<(), String> {
        self.canvas.set_width(size.backing_width);
        self.canvas.set_height(size.backing_height);
        let style = self.canvas.style();
        style
            .set_property("width", &format!("{}px", size.css_width))
            .map_err(js_err)?;
        style
            .set_property("height", &format!("{}px", size.css_height))
            .map_err(js_err)?;
        // Absolute, so repeated passes never stack.
        self.ctx
            .set_transform(size.scale, 0.0, 0.0, size.scale, 0.0, 0.0)
            .map_err(js_err)
    }

    fn clear(&mut self) -> Result<(), String> {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), String> {
        self.circle_path(center, radius)?;
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        line_width: f64,
        color: &str,
        alpha: f64,
    ) -> Result<(), String> {
        self.ctx.set_global_alpha(alpha);
        let drawn = self.circle_path(center, radius).map(|_| {
            self.ctx.set_line_width(line_width);
            self.ctx.set_stroke_style_str(color);
            self.ctx.stroke();
        });
        self.ctx.set_global_alpha(1.0);
        drawn
    }
}

impl TargetNode for Element {
    fn tag_name(&self) -> String {
        Element::tag_name(self)
    }

    fn id(&self) -> String {
        Element::id(self)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn has_class(&self, class: &str) -> bool {
        self.get_attribute("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }
}

/// `setTimeout` / `clearTimeout` bound to one callback
struct WindowTimers {
    window: Window,
    callback: Function,
}

impl Timers for WindowTimers {
    type Handle = i32;

    fn set_timeout(&mut self, delay_ms: u32) -> Result<i32, String> {
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&self.callback, delay_ms as i32)
            .map_err(js_err)
    }

    fn clear_timeout(&mut self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }
}

/// Read-only view of a running effect, shared with its listeners
#[derive(Clone)]
pub struct EffectHandle {
    core: Core,
}

impl EffectHandle {
    pub fn live_particles(&self) -> usize {
        self.core.borrow().live_particles()
    }

    pub fn loop_state(&self) -> LoopState {
        self.core.borrow().loop_state()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.core.borrow().frames_rendered()
    }

    pub fn sizing_passes(&self) -> u32 {
        self.core.borrow().sizing_passes()
    }

    pub fn size(&self) -> Option<CanvasSize> {
        self.core.borrow().size()
    }
}

/// Mouse/pointer coordinates first, then the first touch point.
pub fn pointer_sample(event: &Event) -> PointerSample {
    PointerSample {
        client: client_xy(event),
        first_touch: Reflect::get(event, &JsValue::from_str("touches"))
            .ok()
            .filter(|touches| touches.is_object())
            .and_then(|touches| Reflect::get_u32(&touches, 0).ok())
            .filter(|touch| touch.is_object())
            .and_then(|touch| client_xy(&touch)),
    }
}

fn client_xy(value: &JsValue) -> Option<(f64, f64)> {
    let x = Reflect::get(value, &JsValue::from_str("clientX")).ok()?.as_f64()?;
    let y = Reflect::get(value, &JsValue::from_str("clientY")).ok()?.as_f64()?;
    Some((x, y))
}

fn viewport(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window.inner_width()?.as_f64().ok_or("innerWidth is not a number")?;
    let height = window.inner_height()?.as_f64().ok_or("innerHeight is not a number")?;
    Ok((width, height))
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<i32, JsValue> {
    let slot = callback.borrow();
    let closure = slot.as_ref().ok_or("frame callback not installed")?;
    window.request_animation_frame(closure.as_ref().unchecked_ref())
}

/// Look up the canvas and wire listeners, the frame loop and the resize debounce.
///
/// Returns `Ok(None)` (after logging) when the page has no usable canvas; the effect
/// then stays disabled.
pub fn start_effect(config: ExplosionConfig) -> Result<Option<EffectHandle>, JsValue> {
    let window = web_sys::window().ok_or("no global window")?;
    let document = window.document().ok_or("window has no document")?;

    let Some(element) = document.query_selector(&config.canvas_selector)? else {
        console_error!("Canvas element not found.");
        return Ok(None);
    };
    let Ok(canvas) = element.dyn_into::<HtmlCanvasElement>() else {
        console_error!("Element matching {} is not a canvas.", config.canvas_selector);
        return Ok(None);
    };
    let surface = match CanvasSurface::new(canvas.clone()) {
        Ok(surface) => surface,
        Err(e) => {
            console_error!("Canvas context unavailable: {}", js_err(e));
            return Ok(None);
        }
    };

    let trigger_events = config.trigger_events.clone();
    let debounce_ms = config.resize_debounce_ms;
    let core: Core = Rc::new(RefCell::new(ExplosionCore::new(config, surface)?));

    let (width, height) = viewport(&window)?;
    core.borrow_mut().resize(width, height)?;

    let frame_cb = install_frame_loop(&window, &core);
    install_pointer_listeners(&document, &window, &canvas, &core, &frame_cb, &trigger_events)?;
    install_resize(&window, &core, debounce_ms)?;

    console_log!("explosion: ready on {} trigger event(s)", trigger_events.len());
    Ok(Some(EffectHandle { core }))
}

fn install_frame_loop(window: &Window, core: &Core) -> FrameCallback {
    let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
    let next = frame_cb.clone();
    let core = core.clone();
    let win = window.clone();

    *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let keep_going = core.borrow_mut().frame(timestamp);
        if keep_going {
            if let Err(e) = request_frame(&win, &next) {
                console_error!("explosion: requestAnimationFrame failed: {}", js_err(e));
                core.borrow_mut().pause();
            }
        }
    }) as Box<dyn FnMut(f64)>));

    frame_cb
}

fn install_pointer_listeners(
    document: &web_sys::Document,
    window: &Window,
    canvas: &HtmlCanvasElement,
    core: &Core,
    frame_cb: &FrameCallback,
    trigger_events: &[String],
) -> Result<(), JsValue> {
    for event_name in trigger_events {
        let core = core.clone();
        let frame_cb = frame_cb.clone();
        let window = window.clone();
        let canvas = canvas.clone();

        let listener = Closure::wrap(Box::new(move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Element>().ok());
            let outcome = core.borrow_mut().pointer_down(
                target.as_ref(),
                &pointer_sample(&event),
                canvas_origin(&canvas),
                clock::now_ms(),
            );
            if let PointerOutcome::Spawned { resumed: true, .. } = outcome {
                if let Err(e) = request_frame(&window, &frame_cb) {
                    console_error!("explosion: requestAnimationFrame failed: {}", js_err(e));
                    core.borrow_mut().pause();
                }
            }
        }) as Box<dyn FnMut(Event)>);

        document.add_event_listener_with_callback(event_name, listener.as_ref().unchecked_ref())?;
        listener.forget();
    }
    Ok(())
}

fn install_resize(window: &Window, core: &Core, debounce_ms: u32) -> Result<(), JsValue> {
    let debounce: Rc<RefCell<Debounce<i32>>> = Rc::new(RefCell::new(Debounce::new(debounce_ms)));

    let on_settled = {
        let debounce = debounce.clone();
        let core = core.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            if !debounce.borrow_mut().fire() {
                return;
            }
            let sized = viewport(&window)
                .map_err(js_err)
                .and_then(|(w, h)| core.borrow_mut().resize(w, h));
            if let Err(e) = sized {
                console_error!("explosion: resize failed: {e}");
            }
        }) as Box<dyn FnMut()>)
    };

    let mut timers = WindowTimers {
        window: window.clone(),
        callback: on_settled.as_ref().unchecked_ref::<Function>().clone(),
    };
    on_settled.forget();

    let on_resize = Closure::wrap(Box::new(move || {
        if let Err(e) = debounce.borrow_mut().trigger(&mut timers) {
            console_error!("explosion: could not schedule resize: {e}");
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}
