use super::*;

/// A host that also owns an event loop: it can attach click listeners and
/// schedule the success transition.
pub trait ScriptRuntime: Host {
    /// Handle to the scheduled success transition.
    type Timer;

    /// Wires `target` so a click goes back one history entry.
    fn listen_go_back(&mut self, target: &Self::Element) -> Result<()>;

    /// Wires `button` to toggle the panel matched by `details_selector`. The
    /// panel is looked up on each click.
    fn listen_details(&mut self, button: &Self::Element, details_selector: &str) -> Result<()>;

    /// Runs `sequencer.complete` once `delay_ms` has passed.
    fn schedule_success(
        &mut self,
        sequencer: LoadingSequencer<Self::Element>,
        delay_ms: i64,
    ) -> Result<Self::Timer>;
}

/// Page-load handler for `script`: stamp the year, wire the back and details
/// buttons, then start the loading sequence if the script has one.
///
/// Steps run in that order. A fault leaves earlier steps applied.
pub fn run_page_script<R: ScriptRuntime>(
    runtime: &mut R,
    script: &PageScript,
) -> Result<Option<R::Timer>> {
    let selectors = &script.selectors;
    stamp_year(runtime, &selectors.current_year)?;

    let back = runtime.require(&selectors.go_back)?;
    runtime.listen_go_back(&back)?;

    let button = runtime.require(&selectors.details_button)?;
    runtime.listen_details(&button, &selectors.error_details)?;

    let Some(sequence) = script.loading_sequence else {
        return Ok(None);
    };
    let loading = runtime.require(&selectors.loading)?;
    let success = runtime.require(&selectors.success)?;
    let sequencer = LoadingSequencer::begin(runtime, loading, success)?;
    runtime
        .schedule_success(sequencer, sequence.delay_ms)
        .map(Some)
}
