use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{Intersection, RevealController, RevealOptions, Revealable, ViewportWatcher};
use crate::error::{describe_js, LandingError};

/// Class that flips an `.animate-on-scroll` element into its final state.
pub const REVEALED_CLASS: &str = "loaded";

pub type DomRevealController = RevealController<RevealNode, DomViewportWatcher>;
pub type SharedReveal = Rc<RefCell<DomRevealController>>;

/// A DOM element taking part in the reveal. Equality is JS identity.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealNode(pub Element);

impl RevealNode {
    pub fn is_marked_revealed(&self) -> bool {
        self.0.class_list().contains(REVEALED_CLASS)
    }
}

impl Revealable for RevealNode {
    fn apply_revealed(&self) {
        if let Err(e) = self.0.class_list().add_1(REVEALED_CLASS) {
            warn!("reveal: could not add class: {}", describe_js(&e));
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct DomViewportWatcher {
    observer: IntersectionObserver,
    // Kept alive for as long as the observer may call it.
    _callback: ObserverCallback,
}

impl DomViewportWatcher {
    fn new(options: &RevealOptions, controller: Weak<RefCell<DomRevealController>>) -> Result<Self, LandingError> {
        let window = web_sys::window().ok_or_else(|| LandingError::Dom("no window".into()))?;
        let supported = Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if !supported {
            return Err(LandingError::ObserverUnavailable("not exposed on window".into()));
        }

        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let Some(controller) = controller.upgrade() else {
                return;
            };
            let intersections: Vec<Intersection<RevealNode>> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| Intersection {
                    element: RevealNode(entry.target()),
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                })
                .collect();
            match controller.try_borrow_mut() {
                Ok(mut controller) => {
                    controller.on_intersections(intersections);
                }
                Err(_) => debug!("reveal: controller busy, dropping {} entries", intersections.len()),
            };
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| LandingError::ObserverUnavailable(describe_js(&e)))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl ViewportWatcher<RevealNode> for DomViewportWatcher {
    fn observe(&self, element: &RevealNode) {
        self.observer.observe(&element.0);
    }

    fn unobserve(&self, element: &RevealNode) {
        self.observer.unobserve(&element.0);
    }

    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

/// Creates the page's reveal controller. Falls back to revealing on attach
/// when the browser has no `IntersectionObserver`.
pub fn start(options: &RevealOptions) -> SharedReveal {
    Rc::new_cyclic(|weak: &Weak<RefCell<DomRevealController>>| {
        let controller = match DomViewportWatcher::new(options, weak.clone()) {
            Ok(watcher) => RevealController::new(watcher, options),
            Err(e) => {
                warn!("reveal: {}, showing everything immediately", e);
                RevealController::fallback(options)
            }
        };
        RefCell::new(controller)
    })
}
