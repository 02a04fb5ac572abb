use super::*;

#[test]
fn go_back_click_returns_to_previous_entry() -> Result<()> {
    let mut page = Page::from_html_with_url("https://example.test/form", ERROR_PAGE_HTML)?;
    page.push_history("https://example.test/error");
    page.run_script(&PageScript::basic())?;

    page.click(".goBack")?;

    assert_eq!(page.current_url(), "https://example.test/form");
    assert_eq!(page.history_requests(), &[-1]);
    assert_eq!(
        page.navigations(),
        &[HistoryNavigation {
            delta: -1,
            from: "https://example.test/error".into(),
            to: "https://example.test/form".into(),
        }]
    );
    Ok(())
}

#[test]
fn each_click_issues_exactly_one_back_request() -> Result<()> {
    let mut page = error_page()?;
    for step in 1..=3 {
        page.push_history(&format!("https://example.test/step/{step}"));
    }
    page.run_script(&PageScript::basic())?;

    for _ in 0..6 {
        page.click(".goBack")?;
    }

    assert_eq!(page.history_requests(), &[-1; 6]);
    assert_eq!(page.navigations().len(), 3);
    assert_eq!(page.history_index(), 0);
    assert_eq!(page.current_url(), "https://example.test/error");
    Ok(())
}

#[test]
fn go_back_without_prior_entry_stays_put() -> Result<()> {
    let mut page = error_page()?;
    page.run_script(&PageScript::basic())?;

    page.click(".goBack")?;

    assert_eq!(page.current_url(), "https://example.test/error");
    assert_eq!(page.history_requests(), &[-1]);
    assert!(page.navigations().is_empty());
    Ok(())
}

#[test]
fn click_on_link_content_bubbles_to_go_back_listener() -> Result<()> {
    let mut page = error_page()?;
    page.push_history("https://example.test/next");
    page.run_script(&PageScript::basic())?;

    page.click("#back-label")?;

    assert_eq!(page.current_url(), "https://example.test/error");
    Ok(())
}

#[test]
fn only_first_go_back_element_is_wired() -> Result<()> {
    let html = r#"
        <a id="first" class="goBack">back</a>
        <a id="second" class="goBack">back again</a>
        <button id="details-btn">Details</button>
        <div id="error-details" class="hidden"></div>
        "#;
    let mut page = Page::from_html(html)?;
    page.run_script(&PageScript::basic())?;

    assert_eq!(page.listener_count("#first", "click")?, 1);
    assert_eq!(page.listener_count("#second", "click")?, 0);

    page.click("#second")?;
    assert!(page.history_requests().is_empty());
    Ok(())
}

#[test]
fn history_go_zero_counts_as_reload() -> Result<()> {
    let mut page = error_page()?;
    page.history_go(0)?;
    assert_eq!(page.reload_count(), 1);
    assert_eq!(page.history_requests(), &[0]);
    Ok(())
}
