use super::*;

mod details_toggle;
mod history_back;
mod html_and_selectors;
mod year_stamper;

const ERROR_PAGE_HTML: &str = r##"
    <!DOCTYPE html>
    <html>
      <body>
        <main>
          <h1>Something went wrong</h1>
          <a href="#" class="goBack btn"><span id="back-label">Go back</span></a>
          <button id="details-btn" type="button">Details</button>
          <pre id="error-details" class="hidden">Error: connect ECONNREFUSED 127.0.0.1:5432</pre>
        </main>
        <footer>&copy; <span id="current-year">2020</span> Example Co.</footer>
      </body>
    </html>
    "##;

const LOADING_PAGE_HTML: &str = r#"
    <html>
      <body>
        <div id="loading" style="display: none; color: gray;">Processing your request...</div>
        <div id="success" style="display: block;">All done!</div>
        <a class="goBack">Back</a>
        <button id="details-btn">Details</button>
        <div id="error-details" class="hidden">none</div>
        <footer><span id="current-year"></span></footer>
      </body>
    </html>
    "#;

fn error_page() -> Result<Page> {
    Page::from_html_with_url("https://example.test/error", ERROR_PAGE_HTML)
}

fn loading_page() -> Result<Page> {
    Page::from_html_with_url("https://example.test/submit", LOADING_PAGE_HTML)
}
