use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;

pub const SHARE_CANCEL: &str = "cancel";
pub const SHARE_COPY: &str = "copy";
pub const SHARE_EXPORT: &str = "export";

/// What the user picked in the share dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareChoice {
    Copy,
    Export,
    Cancel,
}

impl ShareChoice {
    pub fn from_response(response: &str) -> Self {
        match response {
            SHARE_COPY => ShareChoice::Copy,
            SHARE_EXPORT => ShareChoice::Export,
            _ => ShareChoice::Cancel,
        }
    }
}

pub fn create_share_dialog() -> adw::AlertDialog {
    let dialog = adw::AlertDialog::builder()
        .heading("Share Meme")
        .body("Copy the meme to the clipboard or save it as a file. Shared memes are also kept in your pictures.")
        .close_response(SHARE_CANCEL)
        .default_response(SHARE_COPY)
        .build();

    dialog.add_responses(&[
        (SHARE_CANCEL, "_Cancel"),
        (SHARE_EXPORT, "_Save As…"),
        (SHARE_COPY, "_Copy to Clipboard"),
    ]);
    dialog.set_response_appearance(SHARE_COPY, adw::ResponseAppearance::Suggested);
    dialog
}

/// A simple message with an OK button
pub fn show_message(parent: &impl IsA<gtk::Widget>, title: &str, message: &str) {
    let dialog = adw::AlertDialog::builder()
        .heading(title)
        .body(message)
        .close_response("ok")
        .default_response("ok")
        .build();
    dialog.add_response("ok", "_OK");
    dialog.present(Some(parent));
}

pub fn create_export_dialog() -> gtk::FileDialog {
    gtk::FileDialog::builder()
        .title("Save Meme")
        .initial_name("meme.png")
        .modal(true)
        .build()
}

pub fn create_open_dialog() -> gtk::FileDialog {
    let filter = gtk::FileFilter::new();
    filter.set_name(Some("Images"));
    filter.add_mime_type("image/*");

    let filters = gtk::gio::ListStore::new::<gtk::FileFilter>();
    filters.append(&filter);

    gtk::FileDialog::builder()
        .title("Pick an Image")
        .modal(true)
        .filters(&filters)
        .default_filter(&filter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_choice_from_response() {
        assert_eq!(ShareChoice::from_response(SHARE_COPY), ShareChoice::Copy);
        assert_eq!(ShareChoice::from_response(SHARE_EXPORT), ShareChoice::Export);
        assert_eq!(ShareChoice::from_response(SHARE_CANCEL), ShareChoice::Cancel);
        assert_eq!(ShareChoice::from_response("close"), ShareChoice::Cancel);
    }
}
