use adw::prelude::*;
use gtk4 as gtk;
use libadwaita as adw;

use crate::app::{Action, ShortcutConfig};

pub fn show_shortcuts_dialog(shortcuts: &ShortcutConfig, parent: &impl IsA<gtk::Window>) {
    let window = adw::PreferencesWindow::builder()
        .transient_for(parent)
        .modal(true)
        .title("Keyboard Shortcuts")
        .default_width(420)
        .default_height(360)
        .build();

    let page = adw::PreferencesPage::new();
    window.add(&page);

    let group = adw::PreferencesGroup::builder().title("General").build();
    for &action in Action::all() {
        add_action_row(shortcuts, &group, action);
    }
    page.add(&group);

    window.present();
}

fn add_action_row(shortcuts: &ShortcutConfig, group: &adw::PreferencesGroup, action: Action) {
    let row = adw::ActionRow::builder().title(action.label()).build();

    let label = gtk::Label::builder()
        .label(shortcuts.get_shortcut_label(action))
        .valign(gtk::Align::Center)
        .build();
    label.add_css_class("dim-label");

    row.add_suffix(&label);
    group.add(&row);
}
