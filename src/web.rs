//! Browser binding: the same behaviors driven by the live document.

use std::cell::RefCell;

use super::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, Window};

fn js_error(value: JsValue) -> Error {
    Error::Host(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// `Host` over `web_sys`.
#[derive(Debug)]
pub struct WebHost {
    window: Window,
    document: Document,
    trace: bool,
}

impl WebHost {
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| Error::Host("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| Error::Host("window has no document".into()))?;
        Ok(Self {
            window,
            document,
            trace: false,
        })
    }

    /// Echo trace lines to `console.debug`.
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    fn html_element<'a>(&self, element: &'a Element) -> Result<&'a HtmlElement> {
        element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| Error::Host(format!("<{}> has no style", element.tag_name())))
    }
}

impl Host for WebHost {
    type Element = Element;

    fn select(&self, selector: &str) -> Result<Option<Element>> {
        self.document.query_selector(selector).map_err(js_error)
    }

    fn text(&self, element: &Element) -> Result<String> {
        Ok(element.text_content().unwrap_or_default())
    }

    fn set_text(&mut self, element: &Element, text: &str) -> Result<()> {
        element.set_text_content(Some(text));
        Ok(())
    }

    fn has_class(&self, element: &Element, class_name: &str) -> Result<bool> {
        Ok(element.class_list().contains(class_name))
    }

    fn add_class(&mut self, element: &Element, class_name: &str) -> Result<()> {
        element.class_list().add_1(class_name).map_err(js_error)
    }

    fn remove_class(&mut self, element: &Element, class_name: &str) -> Result<()> {
        element.class_list().remove_1(class_name).map_err(js_error)
    }

    fn display(&self, element: &Element) -> Result<String> {
        self.html_element(element)?
            .style()
            .get_property_value("display")
            .map_err(js_error)
    }

    fn set_display(&mut self, element: &Element, value: &str) -> Result<()> {
        self.html_element(element)?
            .style()
            .set_property("display", value)
            .map_err(js_error)
    }

    fn history_go(&mut self, delta: i64) -> Result<()> {
        let delta = i32::try_from(delta)
            .map_err(|_| Error::Host(format!("history delta out of range: {delta}")))?;
        self.window
            .history()
            .map_err(js_error)?
            .go_with_delta(delta)
            .map_err(js_error)
    }

    fn local_year(&self) -> i64 {
        js_sys::Date::new_0().get_full_year() as i64
    }

    fn trace(&mut self, line: String) {
        if self.trace {
            web_sys::console::debug_1(&JsValue::from_str(&line));
        }
    }
}

fn report(err: &Error) {
    web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
}

/// Listeners and the pending timer of an installed script. Dropping it
/// detaches nothing from the page but frees the closures, so keep it alive
/// for as long as the page should respond.
pub struct WebInstall {
    host: Rc<RefCell<WebHost>>,
    listeners: Vec<Closure<dyn FnMut(Event)>>,
    sequencer: Option<(i32, Closure<dyn FnMut()>)>,
}

impl WebInstall {
    pub fn new(host: WebHost) -> Self {
        Self {
            host: Rc::new(RefCell::new(host)),
            listeners: Vec::new(),
            sequencer: None,
        }
    }

    /// Cancels the loading-to-success transition if it has not fired yet.
    pub fn cancel_sequencer(&mut self) {
        if let Some((handle, _callback)) = self.sequencer.take() {
            self.host.borrow().window.clear_timeout_with_handle(handle);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn on_click(
        &mut self,
        target: &Element,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<()> {
        let closure = Closure::<dyn FnMut(Event)>::new(callback);
        target
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        self.listeners.push(closure);
        Ok(())
    }
}

impl Host for WebInstall {
    type Element = Element;

    fn select(&self, selector: &str) -> Result<Option<Element>> {
        self.host.borrow().select(selector)
    }

    fn text(&self, element: &Element) -> Result<String> {
        self.host.borrow().text(element)
    }

    fn set_text(&mut self, element: &Element, text: &str) -> Result<()> {
        self.host.borrow_mut().set_text(element, text)
    }

    fn has_class(&self, element: &Element, class_name: &str) -> Result<bool> {
        self.host.borrow().has_class(element, class_name)
    }

    fn add_class(&mut self, element: &Element, class_name: &str) -> Result<()> {
        self.host.borrow_mut().add_class(element, class_name)
    }

    fn remove_class(&mut self, element: &Element, class_name: &str) -> Result<()> {
        self.host.borrow_mut().remove_class(element, class_name)
    }

    fn display(&self, element: &Element) -> Result<String> {
        self.host.borrow().display(element)
    }

    fn set_display(&mut self, element: &Element, value: &str) -> Result<()> {
        self.host.borrow_mut().set_display(element, value)
    }

    fn history_go(&mut self, delta: i64) -> Result<()> {
        self.host.borrow_mut().history_go(delta)
    }

    fn local_year(&self) -> i64 {
        self.host.borrow().local_year()
    }

    fn trace(&mut self, line: String) {
        self.host.borrow_mut().trace(line);
    }
}

impl ScriptRuntime for WebInstall {
    type Timer = i32;

    fn listen_go_back(&mut self, target: &Element) -> Result<()> {
        let host = Rc::clone(&self.host);
        self.on_click(target, move |_event| {
            if let Err(err) = go_back(&mut *host.borrow_mut()) {
                report(&err);
            }
        })
    }

    fn listen_details(&mut self, button: &Element, details_selector: &str) -> Result<()> {
        let host = Rc::clone(&self.host);
        let details_selector = details_selector.to_string();
        let label_target = button.clone();
        self.on_click(button, move |_event| {
            let mut host = host.borrow_mut();
            let result = host.require(&details_selector).and_then(|details| {
                DetailsToggle::new(details, label_target.clone()).toggle(&mut *host)
            });
            if let Err(err) = result {
                report(&err);
            }
        })
    }

    fn schedule_success(
        &mut self,
        mut sequencer: LoadingSequencer<Element>,
        delay_ms: i64,
    ) -> Result<i32> {
        let delay = i32::try_from(delay_ms)
            .map_err(|_| Error::Host(format!("delay out of range: {delay_ms}")))?;
        let host = Rc::clone(&self.host);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = sequencer.complete(&mut *host.borrow_mut()) {
                report(&err);
            }
        });
        let handle = self
            .host
            .borrow()
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay,
            )
            .map_err(js_error)?;
        self.cancel_sequencer();
        self.sequencer = Some((handle, callback));
        Ok(handle)
    }
}

/// Runs `script` against the current document, as the page-load handler.
pub fn install(script: &PageScript) -> Result<WebInstall> {
    let mut installed = WebInstall::new(WebHost::from_window()?);
    run_page_script(&mut installed, script)?;
    Ok(installed)
}

/// Entry point for the page: installs the script for the lifetime of the page.
#[wasm_bindgen]
pub fn install_page_behavior(with_loading_sequence: bool) -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let script = if with_loading_sequence {
        PageScript::with_loading_sequence()
    } else {
        PageScript::basic()
    };
    let installed = install(&script).map_err(|err| JsValue::from_str(&err.to_string()))?;
    std::mem::forget(installed);
    Ok(())
}
