use mongo_hub::HubApp;
use mongo_hub::app::resets::install_panic_logger;
#[cfg(not(target_arch = "wasm32"))]
use mongo_hub::config::HubConfig;
#[cfg(not(target_arch = "wasm32"))]
use mongo_hub::data::ContentStore;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    install_panic_logger();

    let config = match HubConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("Could not read config: {e}; using defaults");
            HubConfig::default()
        }
    };
    let title = config.window_title.clone();

    let app = match ContentStore::embedded().and_then(|content| HubApp::new(config, content)) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Could not load content: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    install_panic_logger();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("Canvas 'the_canvas_id' not found");
            return;
        };

        let app = match HubApp::embedded() {
            Ok(app) => app,
            Err(e) => {
                log::error!("Could not load content: {e}");
                return;
            }
        };

        let start_result = eframe::WebRunner::new()
            .start(canvas, web_options, Box::new(move |_cc| Ok(Box::new(app))))
            .await;

        if let Err(e) = start_result {
            log::error!("Failed to start the app: {e:?}");
        }
    });
}
