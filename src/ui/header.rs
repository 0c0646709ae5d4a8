use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use gtk::Orientation;

pub struct HeaderComponents {
    pub header_bar: adw::HeaderBar,
    pub share_btn: gtk::Button,
    pub cancel_btn: gtk::Button,
    pub shortcuts_btn: gtk::Button,
}

pub fn create_header_bar() -> HeaderComponents {
    let share_btn = gtk::Button::builder()
        .icon_name("send-to-symbolic")
        .tooltip_text("Share Meme")
        .sensitive(false)
        .build();
    share_btn.add_css_class("suggested-action");

    let cancel_btn = gtk::Button::builder()
        .label("Cancel")
        .tooltip_text("Start Over")
        .build();

    let shortcuts_btn = gtk::Button::builder()
        .icon_name("preferences-desktop-keyboard-shortcuts-symbolic")
        .tooltip_text("Keyboard Shortcuts")
        .build();

    let end_box = gtk::Box::builder()
        .orientation(Orientation::Horizontal)
        .spacing(6)
        .build();
    end_box.append(&cancel_btn);
    end_box.append(&shortcuts_btn);

    let title = adw::WindowTitle::new("Meme Maker", "");

    let header_bar = adw::HeaderBar::builder().title_widget(&title).build();
    header_bar.pack_start(&share_btn);
    header_bar.pack_end(&end_box);

    HeaderComponents {
        header_bar,
        share_btn,
        cancel_btn,
        shortcuts_btn,
    }
}
