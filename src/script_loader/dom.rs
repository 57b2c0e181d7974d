use std::cell::RefCell;
use std::rc::Rc;

use web_sys::js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlScriptElement};

use super::{NamespaceStatus, ScriptHost, ScriptOutcome, SettleFn};
use crate::config::UNICORN_STUDIO_NAMESPACE;
use crate::error::{describe_js, LandingError};

const INITIALIZED_FLAG: &str = "isInitialized";

fn js_err(e: JsValue) -> LandingError {
    LandingError::Dom(describe_js(&e))
}

/// The browser document, with the runtime's namespace hanging off `window`.
pub struct UnicornStudioHost {
    namespace_key: &'static str,
}

impl Default for UnicornStudioHost {
    fn default() -> Self {
        Self {
            namespace_key: UNICORN_STUDIO_NAMESPACE,
        }
    }
}

impl UnicornStudioHost {
    fn namespace_object(&self) -> Option<JsValue> {
        let window = window()?;
        let namespace = Reflect::get(&window, &JsValue::from_str(self.namespace_key)).ok()?;
        if namespace.is_undefined() || namespace.is_null() {
            None
        } else {
            Some(namespace)
        }
    }

    /// Calls `init()` on the loaded runtime.
    pub fn init_runtime(&self) -> Result<(), LandingError> {
        let namespace = self.namespace_object().ok_or(LandingError::InitUnavailable)?;
        let init = Reflect::get(&namespace, &JsValue::from_str("init"))
            .map_err(js_err)?
            .dyn_into::<Function>()
            .map_err(|_| LandingError::InitUnavailable)?;
        init.call0(&namespace).map_err(js_err)?;
        Ok(())
    }
}

impl ScriptHost for UnicornStudioHost {
    fn namespace(&self) -> NamespaceStatus {
        match self.namespace_object() {
            None => NamespaceStatus::Absent,
            Some(namespace) => {
                let initialized = Reflect::get(&namespace, &JsValue::from_str(INITIALIZED_FLAG))
                    .ok()
                    .and_then(|flag| flag.as_bool())
                    .unwrap_or(false);
                if initialized {
                    NamespaceStatus::Initialized
                } else {
                    NamespaceStatus::Pending
                }
            }
        }
    }

    fn claim_namespace(&self) -> Result<(), LandingError> {
        let window = window().ok_or_else(|| LandingError::Dom("no window".into()))?;
        let namespace = Object::new();
        Reflect::set(&namespace, &JsValue::from_str(INITIALIZED_FLAG), &JsValue::FALSE).map_err(js_err)?;
        Reflect::set(&window, &JsValue::from_str(self.namespace_key), &namespace).map_err(js_err)?;
        Ok(())
    }

    fn mark_initialized(&self) -> Result<(), LandingError> {
        let namespace = self.namespace_object().ok_or(LandingError::InitUnavailable)?;
        Reflect::set(&namespace, &JsValue::from_str(INITIALIZED_FLAG), &JsValue::TRUE).map_err(js_err)?;
        Ok(())
    }

    fn inject(&self, url: &str, on_settled: SettleFn) -> Result<(), LandingError> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| LandingError::Dom("no document".into()))?;
        let head = document.head().ok_or_else(|| LandingError::Dom("no <head>".into()))?;

        let script = document
            .create_element("script")
            .map_err(js_err)?
            .dyn_into::<HtmlScriptElement>()
            .map_err(|_| LandingError::Dom("created element is not a script".into()))?;
        script.set_type("text/javascript");
        script.set_src(url);

        // Whichever of load/error fires first settles the request.
        let on_settled = Rc::new(RefCell::new(Some(on_settled)));
        let settle_with = |outcome: ScriptOutcome| {
            let on_settled = Rc::clone(&on_settled);
            Closure::wrap(Box::new(move || {
                let settle = on_settled.borrow_mut().take();
                if let Some(settle) = settle {
                    settle(outcome);
                }
            }) as Box<dyn FnMut()>)
        };
        let onload = settle_with(ScriptOutcome::Loaded);
        let onerror = settle_with(ScriptOutcome::Errored);
        script.set_onload(Some(onload.as_ref().unchecked_ref()));
        script.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        head.append_child(&script).map_err(js_err)?;

        // The script outlives whoever asked for it.
        onload.forget();
        onerror.forget();
        Ok(())
    }
}
