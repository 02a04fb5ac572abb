use super::*;

/// Delay between page load and the success message.
pub const SUCCESS_DELAY_MS: i64 = 15_000;

/// Element selectors the page script expects the markup to provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    pub current_year: String,
    pub go_back: String,
    pub details_button: String,
    pub error_details: String,
    pub loading: String,
    pub success: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            current_year: "#current-year".to_string(),
            go_back: ".goBack".to_string(),
            details_button: "#details-btn".to_string(),
            error_details: "#error-details".to_string(),
            loading: "#loading".to_string(),
            success: "#success".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingSequence {
    pub delay_ms: i64,
}

impl Default for LoadingSequence {
    fn default() -> Self {
        Self {
            delay_ms: SUCCESS_DELAY_MS,
        }
    }
}

/// What runs on page load. `basic()` stamps the year and wires the back and
/// details buttons; `with_loading_sequence()` adds the loading/success swap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageScript {
    pub selectors: Selectors,
    pub loading_sequence: Option<LoadingSequence>,
}

impl PageScript {
    pub fn basic() -> Self {
        Self::default()
    }

    pub fn with_loading_sequence() -> Self {
        Self {
            selectors: Selectors::default(),
            loading_sequence: Some(LoadingSequence::default()),
        }
    }

    pub fn with_selectors(mut self, selectors: Selectors) -> Self {
        self.selectors = selectors;
        self
    }

    /// Enables the loading sequence if needed and sets its delay.
    pub fn with_success_delay_ms(mut self, delay_ms: i64) -> Result<Self> {
        if delay_ms < 0 {
            return Err(Error::Runtime(format!(
                "success delay must be non-negative (delay_ms={delay_ms})"
            )));
        }
        self.loading_sequence = Some(LoadingSequence { delay_ms });
        Ok(self)
    }
}

/// Handles produced while running a script.
#[derive(Debug, Clone, Default)]
pub struct ScriptHandles {
    /// Pending loading-to-success transition, if the script has one.
    pub sequencer: Option<TimerHandle>,
}
