use super::*;

#[test]
fn stamp_year_replaces_footer_year_with_current_local_year() -> Result<()> {
    let mut page = error_page()?;
    page.set_date_time_ms(clock::epoch_ms_from_civil(2026, 10, 17, 9 * 3_600_000));

    let year = stamp_year(&mut page, "#current-year")?;

    assert_eq!(year, Some(2026));
    page.assert_text("#current-year", "2026")?;
    assert_eq!(page.text("footer")?, "© 2026 Example Co.");
    Ok(())
}

#[test]
fn stamp_year_uses_local_time_zone_at_new_year() -> Result<()> {
    let mut page = error_page()?;
    page.set_date_time_ms(clock::epoch_ms_from_civil(2026, 12, 31, 23 * 3_600_000));

    page.set_timezone_offset_minutes(0);
    stamp_year(&mut page, "#current-year")?;
    page.assert_text("#current-year", "2026")?;

    page.set_timezone_offset_minutes(120);
    stamp_year(&mut page, "#current-year")?;
    page.assert_text("#current-year", "2027")?;
    Ok(())
}

#[test]
fn stamp_year_follows_virtual_clock() -> Result<()> {
    let mut page = error_page()?;
    page.set_date_time_ms(clock::epoch_ms_from_civil(2026, 12, 31, 86_399_000));
    page.advance_time(1_000)?;

    stamp_year(&mut page, "#current-year")?;
    page.assert_text("#current-year", "2027")?;
    Ok(())
}

#[test]
fn stamp_year_without_target_is_a_no_op() -> Result<()> {
    let mut page = Page::from_html("<p id='other'>x</p>")?;
    page.enable_trace(true);
    page.set_trace_stderr(false);

    assert_eq!(stamp_year(&mut page, "#current-year")?, None);
    page.assert_text("#other", "x")?;
    assert_eq!(
        page.take_trace_logs(),
        vec!["[script] year target missing selector=#current-year".to_string()]
    );
    Ok(())
}

#[test]
fn write_year_replaces_nested_markup() -> Result<()> {
    let mut page = Page::from_html("<span id='current-year'><b>old</b> text</span>")?;
    let target = page.require("#current-year")?;

    write_year(&mut page, &target, 1999)?;

    assert_eq!(page.dump_dom("#current-year")?, "<span id=\"current-year\">1999</span>");
    Ok(())
}
