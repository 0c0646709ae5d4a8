use gtk4 as gtk;

use gtk::{Align, Orientation};
use gtk4::prelude::*;

use crate::meme::ImageSource;

pub struct ToolbarComponents {
    pub tools_box: gtk::Box,
    pub camera_btn: gtk::Button,
    pub album_btn: gtk::Button,
}

impl ToolbarComponents {
    pub fn source_button(&self, source: ImageSource) -> &gtk::Button {
        match source {
            ImageSource::Camera => &self.camera_btn,
            ImageSource::Library => &self.album_btn,
        }
    }
}

fn create_source_button(source: ImageSource) -> gtk::Button {
    let button = gtk::Button::builder()
        .icon_name(source.icon_name())
        .tooltip_text(source.tooltip())
        .build();
    button.add_css_class("flat");
    button
}

pub fn create_toolbar() -> ToolbarComponents {
    let camera_btn = create_source_button(ImageSource::Camera);
    let album_btn = create_source_button(ImageSource::Library);

    let tools_box = gtk::Box::builder()
        .orientation(Orientation::Horizontal)
        .spacing(24)
        .halign(Align::Center)
        .margin_top(6)
        .margin_bottom(6)
        .build();
    tools_box.add_css_class("toolbar");

    tools_box.append(&camera_btn);
    tools_box.append(&album_btn);

    ToolbarComponents {
        tools_box,
        camera_btn,
        album_btn,
    }
}
