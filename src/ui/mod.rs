pub mod clipboard;
pub mod dialogs;
pub mod drawing;
pub mod handlers;
pub mod header;
pub mod keyboard;
pub mod platform;
pub mod shortcuts;
pub mod toolbar;

use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use gtk::Orientation;
use log::info;

use crate::app::MemeConfig;
use crate::ui::platform::{Screen, UiComponents};

fn load_css(window: &adw::ApplicationWindow, config: &MemeConfig) {
    let provider = gtk::CssProvider::new();
    provider.load_from_string(&drawing::caption_css(&config.caption_style));
    gtk::style_context_add_provider_for_display(
        &WidgetExt::display(window),
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

pub fn build_ui(app: &adw::Application) {
    let config = MemeConfig::from_env();
    info!("Keyboard inset: {}px", config.keyboard_inset);

    let header = header::create_header_bar();
    let toolbar = toolbar::create_toolbar();
    let canvas = drawing::create_canvas(&config);

    let content = gtk::Box::builder()
        .orientation(Orientation::Vertical)
        .build();
    content.append(&header.header_bar);
    content.append(&canvas.canvas);
    content.append(&toolbar.tools_box);

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Meme Maker")
        .content(&content)
        .default_width(900)
        .default_height(600)
        .build();

    load_css(&window, &config);

    let components = UiComponents {
        window: window.clone(),
        header,
        toolbar,
        canvas,
    };
    let screen = Screen::new(config, components);

    handlers::connect_all_handlers(&screen);

    window.present();
}
