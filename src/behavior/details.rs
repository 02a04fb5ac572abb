use super::*;

pub const HIDDEN_CLASS: &str = "hidden";
pub const SHOW_DETAILS_LABEL: &str = "Details";
pub const HIDE_DETAILS_LABEL: &str = "Hide Details";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailsState {
    #[default]
    Hidden,
    Visible,
}

impl DetailsState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        }
    }

    /// Button label while the panel is in this state.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hidden => SHOW_DETAILS_LABEL,
            Self::Visible => HIDE_DETAILS_LABEL,
        }
    }

    pub fn from_hidden_class(has_hidden_class: bool) -> Self {
        if has_hidden_class {
            Self::Hidden
        } else {
            Self::Visible
        }
    }
}

/// Error-details panel plus the button that shows and hides it.
///
/// The panel's `hidden` class is the state. It is read on every toggle.
#[derive(Debug, Clone)]
pub struct DetailsToggle<E> {
    pub details: E,
    pub button: E,
}

impl<E: Clone + fmt::Debug> DetailsToggle<E> {
    pub fn new(details: E, button: E) -> Self {
        Self { details, button }
    }

    pub fn state<H: Host<Element = E>>(&self, host: &H) -> Result<DetailsState> {
        Ok(DetailsState::from_hidden_class(
            host.has_class(&self.details, HIDDEN_CLASS)?,
        ))
    }

    pub fn toggle<H: Host<Element = E>>(&self, host: &mut H) -> Result<DetailsState> {
        let next = self.state(host)?.toggled();
        match next {
            DetailsState::Visible => host.remove_class(&self.details, HIDDEN_CLASS)?,
            DetailsState::Hidden => host.add_class(&self.details, HIDDEN_CLASS)?,
        }
        host.set_text(&self.button, next.label())?;
        host.trace(format!("[script] details toggled state={next:?}"));
        Ok(next)
    }
}
