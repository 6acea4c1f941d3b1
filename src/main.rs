//! Gallery: a tag-driven image gallery browser.
//!
//! Entry point: opens the WebView gallery window.
//! When built without the `gui` feature, walks through the drill-down flow on
//! the console instead (tags, then the first tag's thumbnails, then the first
//! image's detail).

#[cfg(feature = "gui")]
fn main() {
    if let Err(e) = gallerybrowser::ui::webview_app::run() {
        eprintln!("gallery failed to start: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use gallerybrowser::app::App;
    use gallerybrowser::managers::gallery_browser::GalleryBrowserTrait;

    let mut app = match App::new(std::env::args().nth(1)) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("gallery failed to start: {}", e);
            std::process::exit(1);
        }
    };

    println!();
    println!("Gallery v{} — console mode", env!("CARGO_PKG_VERSION"));
    println!("Source: {}", describe_source(&app));
    println!();

    section("Tags");
    let navigation = app.browser.load_tags();
    print_patches(&app.navigate(navigation));
    let first_tag = app
        .browser
        .tag_list()
        .state()
        .loaded()
        .and_then(|tags| tags.first().cloned());

    let Some(tag) = first_tag else {
        println!("  No tags available.");
        return;
    };

    section(&format!("Thumbnails for '{}'", tag));
    let navigation = app.browser.select_tag(&tag);
    print_patches(&app.navigate(navigation));
    let first_image = app
        .browser
        .thumbnails()
        .state()
        .loaded()
        .and_then(|images| images.first().cloned());

    let Some(image) = first_image else {
        println!("  No images tagged '{}'.", tag);
        return;
    };

    section(&format!("Detail for '{}'", image));
    let navigation = app.browser.select_image(&image);
    print_patches(&app.navigate(navigation));
}

#[cfg(not(feature = "gui"))]
fn describe_source(app: &gallerybrowser::app::App) -> String {
    use gallerybrowser::services::settings_engine::SettingsEngineTrait;
    let source = &app.settings_engine.get_settings().source;
    match &source.catalog_path {
        Some(path) => format!("catalog {}", path),
        None => source.base_url.clone(),
    }
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn print_patches(patches: &[gallerybrowser::types::view::RenderPatch]) {
    for patch in patches {
        if patch.html.is_empty() {
            println!("  #{} cleared", patch.container.element_id());
        } else {
            println!("  #{}:", patch.container.element_id());
            for row in patch.html.split(gallerybrowser::services::markup::ROW_BREAK) {
                println!("    {}", row);
            }
        }
    }
    println!();
}
