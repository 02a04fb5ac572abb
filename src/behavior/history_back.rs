use super::*;

/// One step back in the session history. With no earlier entry the host
/// leaves the session where it is.
pub fn go_back<H: Host>(host: &mut H) -> Result<()> {
    host.history_go(-1)
}
