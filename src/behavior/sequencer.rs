use super::*;

const SHOWN: &str = "block";
const HIDDEN: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    Loading,
    Success,
}

/// Loading indicator that gives way to a success message.
///
/// `begin` puts the page in `Loading`; the owner schedules `complete` after
/// the delay. `Success` is terminal.
#[derive(Debug, Clone)]
pub struct LoadingSequencer<E> {
    loading: E,
    success: E,
    state: SequencerState,
}

impl<E: Clone + fmt::Debug> LoadingSequencer<E> {
    pub fn begin<H: Host<Element = E>>(host: &mut H, loading: E, success: E) -> Result<Self> {
        host.set_display(&loading, SHOWN)?;
        host.set_display(&success, HIDDEN)?;
        host.trace("[script] sequencer state=Loading".to_string());
        Ok(Self {
            loading,
            success,
            state: SequencerState::Loading,
        })
    }

    pub fn complete<H: Host<Element = E>>(&mut self, host: &mut H) -> Result<SequencerState> {
        if self.state == SequencerState::Success {
            return Ok(self.state);
        }
        host.set_display(&self.loading, HIDDEN)?;
        host.set_display(&self.success, SHOWN)?;
        self.state = SequencerState::Success;
        host.trace("[script] sequencer state=Success".to_string());
        Ok(self.state)
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn loading(&self) -> &E {
        &self.loading
    }

    pub fn success(&self) -> &E {
        &self.success
    }
}
