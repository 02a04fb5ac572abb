use super::*;

#[test]
fn parses_attributes_comments_and_raw_text() -> Result<()> {
    let html = r#"
        <!-- footer partial -->
        <div id=plain data-x='1' hidden>
          <img src="logo.png">
          <br/>
          <script>if (a < b) { document.querySelector('#x'); }</script>
          <p>a &lt; b &amp; c &#169; &unknown; &#x41;</p>
        </div>
        "#;
    let page = Page::from_html(html)?;

    assert_eq!(page.text("p")?, "a < b & c © &unknown; A");
    assert_eq!(
        page.text("script")?,
        "if (a < b) { document.querySelector('#x'); }"
    );
    page.assert_exists("div#plain[hidden][data-x='1']")?;
    page.assert_exists("div > img[src='logo.png']")?;
    Ok(())
}

#[test]
fn unclosed_markup_is_a_parse_error() {
    for html in ["<div id='x", "<!-- open", "<script>let x = 1;", "<p"] {
        assert!(
            matches!(Page::from_html(html), Err(Error::HtmlParse(_))),
            "{html} should fail to parse"
        );
    }
}

#[test]
fn stray_end_tags_and_bare_less_than_are_tolerated() -> Result<()> {
    let page = Page::from_html("<div id='a'>1 < 2</span></div><p id='b'>ok</p>")?;
    page.assert_text("#a", "1 < 2")?;
    page.assert_text("#b", "ok")?;
    Ok(())
}

#[test]
fn selectors_cover_descendant_child_and_groups() -> Result<()> {
    let html = r#"
        <footer>
          <p class="legal"><span id="current-year">x</span></p>
        </footer>
        <main><span class="year">y</span></main>
        "#;
    let page = Page::from_html(html)?;

    page.assert_text("footer span", "x")?;
    page.assert_text("footer > p.legal > span", "x")?;
    assert!(matches!(
        page.text("footer > span"),
        Err(Error::SelectorNotFound(_))
    ));
    assert_eq!(page.query_all("main .year, #current-year")?.len(), 2);
    assert_eq!(page.query_all("*")?.len(), 5);
    Ok(())
}

#[test]
fn unsupported_selector_is_reported() -> Result<()> {
    let mut page = error_page()?;
    assert_eq!(
        page.click("a:first-child"),
        Err(Error::UnsupportedSelector("a:first-child".into()))
    );
    Ok(())
}

#[test]
fn first_element_wins_for_duplicate_ids() -> Result<()> {
    let page = Page::from_html("<b id='dup'>one</b><i id='dup'>two</i>")?;
    page.assert_text("#dup", "one")?;
    Ok(())
}

#[test]
fn replaced_text_releases_ids_to_later_duplicates() -> Result<()> {
    let mut page = Page::from_html("<p id='msg'><b id='dup'>one</b></p><i id='dup'>two</i>")?;
    let msg = page.require("#msg")?;

    page.set_text(&msg, "cleared")?;

    page.assert_text("#dup", "two")?;
    assert_eq!(page.query_all("#dup")?.len(), 1);
    assert_eq!(page.dump_dom("#msg")?, "<p id=\"msg\">cleared</p>");
    Ok(())
}
