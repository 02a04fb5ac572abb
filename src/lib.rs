use std::cell::Cell;
use std::collections::{HashMap, VecDeque};
use std::error::Error as StdError;
use std::fmt;
use std::rc::Rc;

mod behavior;
pub mod clock;
mod core_dom_utils;
mod dom;
mod host;
mod html;
mod page;
mod runtime_state;
mod script;
mod selector;
#[cfg(feature = "web")]
pub mod web;

pub use behavior::{
    DetailsState, DetailsToggle, HIDDEN_CLASS, HIDE_DETAILS_LABEL, LoadingSequencer,
    SHOW_DETAILS_LABEL, ScriptRuntime, SequencerState, go_back, run_page_script, stamp_year,
    write_year,
};
pub use dom::NodeId;
pub use host::Host;
pub use page::Page;
pub use runtime_state::{CancelToken, HistoryNavigation, PendingTimer, TimerHandle, TimerId};
pub use script::{LoadingSequence, PageScript, SUCCESS_DELAY_MS, ScriptHandles, Selectors};

use dom::Dom;
use html::parse_html;
use runtime_state::{
    HistoryState, Listener, ListenerStore, ScheduledTask, SchedulerState, TimerAction, TraceState,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    HtmlParse(String),
    SelectorNotFound(String),
    UnsupportedSelector(String),
    Runtime(String),
    AssertionFailed {
        selector: String,
        expected: String,
        actual: String,
        dom_snippet: String,
    },
    Host(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "html parse error: {msg}"),
            Self::SelectorNotFound(selector) => write!(f, "selector not found: {selector}"),
            Self::UnsupportedSelector(selector) => write!(f, "unsupported selector: {selector}"),
            Self::Runtime(msg) => write!(f, "page runtime error: {msg}"),
            Self::AssertionFailed {
                selector,
                expected,
                actual,
                dom_snippet,
            } => write!(
                f,
                "assertion failed for {selector}: expected {expected}, actual {actual}, snippet {dom_snippet}"
            ),
            Self::Host(msg) => write!(f, "host error: {msg}"),
        }
    }
}

impl StdError for Error {}

#[cfg(test)]
mod tests;
