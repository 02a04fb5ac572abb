use super::*;

mod assertions;
mod events;
mod history;
mod timers;
mod trace;

const DEFAULT_URL: &str = "about:blank";

/// A deterministic in-memory page: DOM tree, click listeners, a virtual
/// clock driving timers, session history and a trace log.
///
/// Nothing here waits on the real clock. Time moves only through
/// `advance_time`, `advance_time_to`, `run_next_timer` and `flush`, and the
/// wall clock seen by the page is `set_date_time_ms` plus `now_ms()`.
#[derive(Debug)]
pub struct Page {
    pub(crate) dom: Dom,
    pub(crate) listeners: ListenerStore,
    pub(crate) scheduler: SchedulerState,
    pub(crate) history: HistoryState,
    pub(crate) wall_clock_origin_ms: i64,
    pub(crate) timezone_offset_minutes: i32,
    pub(crate) trace_state: TraceState,
}

impl Page {
    pub fn from_html(html: &str) -> Result<Self> {
        Self::from_html_with_url(DEFAULT_URL, html)
    }

    pub fn from_html_with_url(url: &str, html: &str) -> Result<Self> {
        let dom = parse_html(html)?;
        Ok(Self {
            dom,
            listeners: ListenerStore::default(),
            scheduler: SchedulerState::default(),
            history: HistoryState::new(url),
            wall_clock_origin_ms: 0,
            timezone_offset_minutes: 0,
            trace_state: TraceState::default(),
        })
    }

    /// Runs `script` as the page-load handler.
    ///
    /// A missing year element is skipped; any other missing element aborts
    /// with `Error::SelectorNotFound`, leaving whatever already ran in place.
    pub fn run_script(&mut self, script: &PageScript) -> Result<ScriptHandles> {
        self.trace_line(format!(
            "[script] load url={} now_ms={}",
            self.history.current_url(),
            self.scheduler.now_ms
        ));
        let sequencer = run_page_script(self, script)?;
        Ok(ScriptHandles { sequencer })
    }

    /// Wall-clock time (epoch ms, UTC) at virtual time zero.
    pub fn set_date_time_ms(&mut self, epoch_ms: i64) {
        self.wall_clock_origin_ms = epoch_ms;
    }

    /// Local time zone as minutes east of UTC (e.g. `540` for UTC+9).
    pub fn set_timezone_offset_minutes(&mut self, minutes: i32) {
        self.timezone_offset_minutes = minutes;
    }

    pub fn wall_clock_ms(&self) -> i64 {
        self.wall_clock_origin_ms
            .saturating_add(self.scheduler.now_ms)
    }

    pub(crate) fn ensure_element(&self, node_id: NodeId) -> Result<()> {
        if self.dom.element(node_id).is_none() {
            return Err(Error::Runtime(format!(
                "node {} is not an element of this page",
                node_id.0
            )));
        }
        if !self.dom.is_connected(node_id) {
            return Err(Error::Runtime(format!(
                "node {} is no longer in the document",
                node_id.0
            )));
        }
        Ok(())
    }
}

impl Host for Page {
    type Element = NodeId;

    fn select(&self, selector: &str) -> Result<Option<NodeId>> {
        self.dom.query_selector(selector)
    }

    fn text(&self, element: &NodeId) -> Result<String> {
        self.ensure_element(*element)?;
        Ok(self.dom.text_content(*element))
    }

    fn set_text(&mut self, element: &NodeId, text: &str) -> Result<()> {
        self.ensure_element(*element)?;
        self.dom.set_text_content(*element, text)
    }

    fn has_class(&self, element: &NodeId, class_name: &str) -> Result<bool> {
        self.ensure_element(*element)?;
        self.dom.has_class(*element, class_name)
    }

    fn add_class(&mut self, element: &NodeId, class_name: &str) -> Result<()> {
        self.ensure_element(*element)?;
        self.dom.add_class(*element, class_name)
    }

    fn remove_class(&mut self, element: &NodeId, class_name: &str) -> Result<()> {
        self.ensure_element(*element)?;
        self.dom.remove_class(*element, class_name)
    }

    fn display(&self, element: &NodeId) -> Result<String> {
        self.ensure_element(*element)?;
        self.dom.style_property(*element, "display")
    }

    fn set_display(&mut self, element: &NodeId, value: &str) -> Result<()> {
        self.ensure_element(*element)?;
        self.dom.set_style_property(*element, "display", value)
    }

    fn history_go(&mut self, delta: i64) -> Result<()> {
        self.history_go_with_trace(delta);
        Ok(())
    }

    fn local_year(&self) -> i64 {
        clock::local_year(self.wall_clock_ms(), self.timezone_offset_minutes)
    }

    fn trace(&mut self, line: String) {
        self.trace_line(line);
    }
}

impl ScriptRuntime for Page {
    type Timer = TimerHandle;

    fn listen_go_back(&mut self, target: &NodeId) -> Result<()> {
        self.ensure_element(*target)?;
        self.listeners.add(*target, "click", Listener::HistoryBack);
        Ok(())
    }

    fn listen_details(&mut self, button: &NodeId, details_selector: &str) -> Result<()> {
        self.ensure_element(*button)?;
        self.listeners.add(
            *button,
            "click",
            Listener::ToggleDetails {
                details_selector: details_selector.to_string(),
            },
        );
        Ok(())
    }

    fn schedule_success(
        &mut self,
        sequencer: LoadingSequencer<NodeId>,
        delay_ms: i64,
    ) -> Result<TimerHandle> {
        self.schedule_timer(delay_ms, TimerAction::CompleteSequence(sequencer))
    }
}
