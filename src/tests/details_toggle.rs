use super::*;

#[test]
fn details_button_click_toggles_hidden_class_and_label() -> Result<()> {
    let mut page = error_page()?;
    page.run_script(&PageScript::basic())?;

    page.assert_has_class("#error-details", HIDDEN_CLASS, true)?;
    page.assert_text("#details-btn", "Details")?;

    page.click("#details-btn")?;
    page.assert_has_class("#error-details", HIDDEN_CLASS, false)?;
    page.assert_text("#details-btn", "Hide Details")?;

    page.click("#details-btn")?;
    page.assert_has_class("#error-details", HIDDEN_CLASS, true)?;
    page.assert_text("#details-btn", "Details")?;
    Ok(())
}

#[test]
fn details_toggle_parity_over_many_clicks() -> Result<()> {
    let mut page = error_page()?;
    page.run_script(&PageScript::basic())?;

    for clicks in 1..=7 {
        page.click("#details-btn")?;
        let visible = clicks % 2 == 1;
        page.assert_has_class("#error-details", HIDDEN_CLASS, !visible)?;
        page.assert_text(
            "#details-btn",
            if visible { HIDE_DETAILS_LABEL } else { SHOW_DETAILS_LABEL },
        )?;
    }
    Ok(())
}

#[test]
fn details_toggle_keeps_other_classes() -> Result<()> {
    let html = r#"
        <button id="details-btn">Details</button>
        <div id="error-details" class="panel hidden mono">stack</div>
        <a class="goBack">back</a>
        "#;
    let mut page = Page::from_html(html)?;
    page.run_script(&PageScript::basic())?;

    page.click("#details-btn")?;
    assert_eq!(
        page.dump_dom("#error-details")?,
        "<div class=\"panel mono\" id=\"error-details\">stack</div>"
    );

    page.click("#details-btn")?;
    page.assert_has_class("#error-details", "panel", true)?;
    page.assert_has_class("#error-details", "mono", true)?;
    page.assert_has_class("#error-details", HIDDEN_CLASS, true)?;
    Ok(())
}

#[test]
fn details_state_is_read_from_the_panel_not_cached() -> Result<()> {
    let html = r#"
        <button id="details-btn">Details</button>
        <div id="error-details">already open</div>
        <a class="goBack">back</a>
        "#;
    let mut page = Page::from_html(html)?;
    page.run_script(&PageScript::basic())?;

    page.click("#details-btn")?;
    page.assert_has_class("#error-details", HIDDEN_CLASS, true)?;
    page.assert_text("#details-btn", "Details")?;
    Ok(())
}

#[test]
fn click_on_button_child_bubbles_and_relabels_the_button() -> Result<()> {
    let html = r#"
        <button id="details-btn"><span id="label-icon">i</span> Details</button>
        <div id="error-details" class="hidden">trace</div>
        <a class="goBack">back</a>
        "#;
    let mut page = Page::from_html(html)?;
    page.run_script(&PageScript::basic())?;

    page.click("#label-icon")?;

    page.assert_text("#details-btn", "Hide Details")?;
    page.assert_has_class("#error-details", HIDDEN_CLASS, false)?;
    Ok(())
}

#[test]
fn relabel_detaches_button_children_from_the_document() -> Result<()> {
    let html = r#"
        <button id="details-btn"><span id="label-icon">i</span> Details</button>
        <div id="error-details" class="hidden">trace</div>
        <a class="goBack">back</a>
        "#;
    let mut page = Page::from_html(html)?;
    page.run_script(&PageScript::basic())?;
    let icon = page.require("#label-icon")?;

    page.click("#label-icon")?;

    assert_eq!(page.select("#label-icon")?, None);
    assert_eq!(page.select("span#label-icon")?, None);
    assert_eq!(
        page.click("#label-icon"),
        Err(Error::SelectorNotFound("#label-icon".into()))
    );
    assert!(matches!(page.click_node(icon), Err(Error::Runtime(_))));
    page.assert_text("#details-btn", "Hide Details")?;
    page.assert_has_class("#error-details", HIDDEN_CLASS, false)?;
    Ok(())
}

#[test]
fn missing_details_panel_fails_at_click_time() -> Result<()> {
    let html = r#"
        <button id="details-btn">Details</button>
        <a class="goBack">back</a>
        "#;
    let mut page = Page::from_html(html)?;
    page.run_script(&PageScript::basic())?;

    let err = page
        .click("#details-btn")
        .expect_err("panel is missing");
    assert_eq!(err, Error::SelectorNotFound("#error-details".into()));
    page.assert_text("#details-btn", "Details")?;
    Ok(())
}

#[test]
fn details_toggle_runs_directly_against_a_host() -> Result<()> {
    let mut page = error_page()?;
    let details = page.require("#error-details")?;
    let button = page.require("#details-btn")?;
    let toggle = DetailsToggle::new(details, button);

    assert_eq!(toggle.state(&page)?, DetailsState::Hidden);
    assert_eq!(toggle.toggle(&mut page)?, DetailsState::Visible);
    assert_eq!(toggle.state(&page)?, DetailsState::Visible);
    assert_eq!(toggle.toggle(&mut page)?, DetailsState::Hidden);
    Ok(())
}

#[test]
fn details_state_transitions_and_labels() {
    assert_eq!(DetailsState::default(), DetailsState::Hidden);
    assert_eq!(DetailsState::Hidden.toggled(), DetailsState::Visible);
    assert_eq!(DetailsState::Visible.toggled(), DetailsState::Hidden);
    assert_eq!(DetailsState::Hidden.label(), "Details");
    assert_eq!(DetailsState::Visible.label(), "Hide Details");
    assert_eq!(DetailsState::from_hidden_class(true), DetailsState::Hidden);
}
