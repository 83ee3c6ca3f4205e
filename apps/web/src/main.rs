use folio::ui::App;
use folio_web::WebApp;

fn main() -> anyhow::Result<()> {
    let app = WebApp::from_embedded();
    let _logger = app.init_logging()?;

    app.launch(App);

    Ok(())
}
