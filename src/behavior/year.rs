use super::*;

/// Writes the host's current local year into the element matched by
/// `selector`. A missing element is not an error: nothing is written and
/// `Ok(None)` comes back.
pub fn stamp_year<H: Host>(host: &mut H, selector: &str) -> Result<Option<i64>> {
    let Some(element) = host.select(selector)? else {
        host.trace(format!("[script] year target missing selector={selector}"));
        return Ok(None);
    };
    let year = host.local_year();
    write_year(host, &element, year)?;
    host.trace(format!("[script] year stamped selector={selector} year={year}"));
    Ok(Some(year))
}

pub fn write_year<H: Host>(host: &mut H, element: &H::Element, year: i64) -> Result<()> {
    host.set_text(element, &year.to_string())
}
