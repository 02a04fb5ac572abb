use super::*;

/// The page/document a behavior runs against.
///
/// Behaviors never reach for a global document or window: the event loop that
/// owns the page hands itself to them through this trait. `Page` implements
/// it over an in-memory DOM; `web::WebHost` over the live browser document.
pub trait Host {
    type Element: Clone + fmt::Debug;

    /// First element matching `selector`, `None` when nothing matches.
    fn select(&self, selector: &str) -> Result<Option<Self::Element>>;

    /// Like `select`, but a missing element is a fault.
    fn require(&self, selector: &str) -> Result<Self::Element> {
        self.select(selector)?
            .ok_or_else(|| Error::SelectorNotFound(selector.to_string()))
    }

    fn text(&self, element: &Self::Element) -> Result<String>;

    /// Replaces all children of `element` with a single text node.
    fn set_text(&mut self, element: &Self::Element, text: &str) -> Result<()>;

    fn has_class(&self, element: &Self::Element, class_name: &str) -> Result<bool>;

    fn add_class(&mut self, element: &Self::Element, class_name: &str) -> Result<()>;

    fn remove_class(&mut self, element: &Self::Element, class_name: &str) -> Result<()>;

    /// Inline `display` style, empty when unset.
    fn display(&self, element: &Self::Element) -> Result<String>;

    fn set_display(&mut self, element: &Self::Element, value: &str) -> Result<()>;

    /// `history.go(delta)`.
    fn history_go(&mut self, delta: i64) -> Result<()>;

    /// Current calendar year in the host's local time zone.
    fn local_year(&self) -> i64;

    fn trace(&mut self, _line: String) {}
}
