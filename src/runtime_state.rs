use super::*;
use crate::behavior::LoadingSequencer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Listener {
    HistoryBack,
    ToggleDetails { details_selector: String },
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ListenerStore {
    pub(crate) map: HashMap<NodeId, HashMap<String, Vec<Listener>>>,
}

impl ListenerStore {
    pub(crate) fn add(&mut self, node_id: NodeId, event: &str, listener: Listener) {
        self.map
            .entry(node_id)
            .or_default()
            .entry(event.to_string())
            .or_default()
            .push(listener);
    }

    pub(crate) fn get(&self, node_id: NodeId, event: &str) -> Vec<Listener> {
        self.map
            .get(&node_id)
            .and_then(|events| events.get(event))
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn count(&self, node_id: NodeId, event: &str) -> usize {
        self.map
            .get(&node_id)
            .and_then(|events| events.get(event))
            .map_or(0, Vec::len)
    }
}

pub type TimerId = i64;

/// Shared cancellation flag captured by a scheduled task.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[derive(Debug, Clone)]
pub struct TimerHandle {
    pub id: TimerId,
    pub token: CancelToken,
}

impl TimerHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[derive(Debug, Clone)]
pub(crate) enum TimerAction {
    CompleteSequence(LoadingSequencer<NodeId>),
}

#[derive(Debug, Clone)]
pub(crate) struct ScheduledTask {
    pub(crate) id: TimerId,
    pub(crate) due_at: i64,
    pub(crate) order: i64,
    pub(crate) token: CancelToken,
    pub(crate) action: TimerAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTimer {
    pub id: TimerId,
    pub due_at: i64,
    pub order: i64,
}

#[derive(Debug)]
pub(crate) struct SchedulerState {
    pub(crate) task_queue: Vec<ScheduledTask>,
    pub(crate) now_ms: i64,
    pub(crate) timer_step_limit: usize,
    pub(crate) next_timer_id: TimerId,
    pub(crate) next_task_order: i64,
}

impl Default for SchedulerState {
    fn default() -> Self {
        Self {
            task_queue: Vec::new(),
            now_ms: 0,
            timer_step_limit: 10_000,
            next_timer_id: 1,
            next_task_order: 0,
        }
    }
}

impl SchedulerState {
    pub(crate) fn allocate_timer_id(&mut self) -> TimerId {
        let id = self.next_timer_id;
        self.next_timer_id += 1;
        id
    }

    pub(crate) fn allocate_task_order(&mut self) -> i64 {
        let order = self.next_task_order;
        self.next_task_order += 1;
        order
    }

    /// Drops tasks whose token was cancelled; returns how many were dropped.
    pub(crate) fn prune_cancelled(&mut self) -> usize {
        let before = self.task_queue.len();
        self.task_queue.retain(|task| !task.token.is_cancelled());
        before - self.task_queue.len()
    }

    pub(crate) fn next_task_index(&self, due_limit: Option<i64>) -> Option<usize> {
        self.task_queue
            .iter()
            .enumerate()
            .filter(|(_, task)| due_limit.is_none_or(|limit| task.due_at <= limit))
            .min_by_key(|(_, task)| (task.due_at, task.order))
            .map(|(idx, _)| idx)
    }
}

/// One traversal of the session history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryNavigation {
    pub delta: i64,
    pub from: String,
    pub to: String,
}

#[derive(Debug)]
pub(crate) struct HistoryState {
    pub(crate) entries: Vec<String>,
    pub(crate) index: usize,
    pub(crate) requests: Vec<i64>,
    pub(crate) navigations: Vec<HistoryNavigation>,
    pub(crate) reload_count: usize,
}

impl HistoryState {
    pub(crate) fn new(initial_url: &str) -> Self {
        Self {
            entries: vec![initial_url.to_string()],
            index: 0,
            requests: Vec::new(),
            navigations: Vec::new(),
            reload_count: 0,
        }
    }

    pub(crate) fn current_url(&self) -> &str {
        self.entries
            .get(self.index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub(crate) fn push(&mut self, url: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url.to_string());
        self.index = self.entries.len() - 1;
    }

    /// Moves `delta` entries; out-of-range targets leave the session where it is.
    pub(crate) fn go(&mut self, delta: i64) -> Option<HistoryNavigation> {
        self.requests.push(delta);
        if delta == 0 {
            self.reload_count += 1;
            return None;
        }

        let target = (self.index as i64).saturating_add(delta);
        if target < 0 || target >= self.entries.len() as i64 {
            return None;
        }

        let from = self.current_url().to_string();
        self.index = target as usize;
        let navigation = HistoryNavigation {
            delta,
            from,
            to: self.current_url().to_string(),
        };
        self.navigations.push(navigation.clone());
        Some(navigation)
    }
}

#[derive(Debug)]
pub(crate) struct TraceState {
    pub(crate) enabled: bool,
    pub(crate) events: bool,
    pub(crate) timers: bool,
    pub(crate) logs: VecDeque<String>,
    pub(crate) log_limit: usize,
    pub(crate) to_stderr: bool,
}

impl Default for TraceState {
    fn default() -> Self {
        Self {
            enabled: false,
            events: true,
            timers: true,
            logs: VecDeque::new(),
            log_limit: 10_000,
            to_stderr: true,
        }
    }
}

impl TraceState {
    pub(crate) fn push(&mut self, line: String) {
        if !self.enabled {
            return;
        }
        if self.to_stderr {
            eprintln!("{line}");
        }
        if self.logs.len() >= self.log_limit {
            self.logs.pop_front();
        }
        self.logs.push_back(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_go_stays_in_bounds() {
        let mut history = HistoryState::new("https://example.test/a");
        history.push("https://example.test/b");
        assert_eq!(history.go(-2), None);
        assert_eq!(history.current_url(), "https://example.test/b");

        let navigation = history.go(-1);
        assert_eq!(
            navigation,
            Some(HistoryNavigation {
                delta: -1,
                from: "https://example.test/b".into(),
                to: "https://example.test/a".into(),
            })
        );
        assert_eq!(history.requests, vec![-2, -1]);
    }

    #[test]
    fn history_push_drops_forward_entries() {
        let mut history = HistoryState::new("https://example.test/a");
        history.push("https://example.test/b");
        history.go(-1);
        history.push("https://example.test/c");
        assert_eq!(
            history.entries,
            vec![
                "https://example.test/a".to_string(),
                "https://example.test/c".to_string(),
            ]
        );
        assert_eq!(history.index, 1);
    }

    #[test]
    fn cancel_token_is_shared_between_clones() {
        let token = CancelToken::new();
        let captured = token.clone();
        token.cancel();
        assert!(captured.is_cancelled());
    }
}
