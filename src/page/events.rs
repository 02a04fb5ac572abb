use super::*;

impl Page {
    pub fn click(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.click_node(target)
    }

    /// Dispatches a bubbling click from `target` up to the document root.
    pub fn click_node(&mut self, target: NodeId) -> Result<()> {
        self.ensure_element(target)?;
        if self.dom.attr(target, "disabled").is_some() {
            self.trace_event_line(format!(
                "[event] click target={} skipped=disabled",
                self.dom.node_label(target)
            ));
            return Ok(());
        }

        let mut path = vec![target];
        let mut cursor = self.dom.parent(target);
        while let Some(node) = cursor {
            path.push(node);
            cursor = self.dom.parent(node);
        }

        let mut handled = 0usize;
        for current in path {
            for listener in self.listeners.get(current, "click") {
                self.trace_event_line(format!(
                    "[event] click target={} current={} listener={listener:?}",
                    self.dom.node_label(target),
                    self.dom.node_label(current)
                ));
                self.run_listener(current, &listener)?;
                handled += 1;
            }
        }

        self.trace_event_line(format!(
            "[event] done click target={} listeners={handled}",
            self.dom.node_label(target)
        ));
        Ok(())
    }

    fn run_listener(&mut self, current_target: NodeId, listener: &Listener) -> Result<()> {
        match listener {
            Listener::HistoryBack => go_back(self),
            Listener::ToggleDetails { details_selector } => {
                let details = self.require(details_selector)?;
                DetailsToggle::new(details, current_target).toggle(self)?;
                Ok(())
            }
        }
    }

    /// Number of `event` listeners registered directly on the matched element.
    pub fn listener_count(&self, selector: &str, event: &str) -> Result<usize> {
        let target = self.select_one(selector)?;
        Ok(self.listeners.count(target, event))
    }
}
