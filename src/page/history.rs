use super::*;

impl Page {
    pub fn current_url(&self) -> &str {
        self.history.current_url()
    }

    /// Navigates to `url` as a new history entry, dropping forward entries.
    pub fn push_history(&mut self, url: &str) {
        let from = self.history.current_url().to_string();
        self.history.push(url);
        self.trace_line(format!("[history] push from={from} to={url}"));
    }

    pub fn history_length(&self) -> usize {
        self.history.entries.len()
    }

    pub fn history_index(&self) -> usize {
        self.history.index
    }

    /// Every `history.go` delta requested, including ones that went nowhere.
    pub fn history_requests(&self) -> &[i64] {
        &self.history.requests
    }

    pub fn navigations(&self) -> &[HistoryNavigation] {
        &self.history.navigations
    }

    pub fn reload_count(&self) -> usize {
        self.history.reload_count
    }

    pub(crate) fn history_go_with_trace(&mut self, delta: i64) {
        match self.history.go(delta) {
            Some(navigation) => self.trace_line(format!(
                "[history] go delta={} from={} to={}",
                navigation.delta, navigation.from, navigation.to
            )),
            None if delta == 0 => self.trace_line(format!(
                "[history] reload url={}",
                self.history.current_url()
            )),
            None => self.trace_line(format!(
                "[history] go delta={delta} ignored index={} length={}",
                self.history.index,
                self.history.entries.len()
            )),
        }
    }
}
