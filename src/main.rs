use anyhow::Context as _;
use gpui::*;
use gpui_component::Root;
use touchbrowser::settings::Settings;
use touchbrowser::shell::BrowserShell;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("touchbrowser=info")),
        )
        .init();

    let settings = Settings::load();
    tracing::info!("Starting with home address {}", settings.home_address);

    let app = Application::new();
    let (tx, rx) = std::sync::mpsc::channel();

    app.run(move |cx| {
        gpui_component::init(cx);
        cx.activate(true);

        let (width, height) = touchbrowser::constants::DEFAULT_SURFACE_SIZE;
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
        let result = cx
            .open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    ..Default::default()
                },
                |window, cx| {
                    let view = cx.new(|cx| BrowserShell::new(settings, window, cx));
                    cx.new(|cx| Root::new(view, window, cx))
                },
            )
            .map(|_| ());

        if let Err(e) = result {
            let _ = tx.send(e);
            cx.quit();
        }
    });

    match rx.try_recv() {
        Ok(e) => Err(e).context("Failed to open browser window"),
        Err(_) => Ok(()),
    }
}
