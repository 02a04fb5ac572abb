use super::*;

mod details;
mod history_back;
mod load;
mod sequencer;
mod year;

pub use details::{DetailsState, DetailsToggle, HIDDEN_CLASS, HIDE_DETAILS_LABEL, SHOW_DETAILS_LABEL};
pub use history_back::go_back;
pub use load::{ScriptRuntime, run_page_script};
pub use sequencer::{LoadingSequencer, SequencerState};
pub use year::{stamp_year, write_year};
