use gtk::glib;
use gtk4 as gtk;
use libadwaita as adw;
use log::{debug, warn};

use gtk::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::{Action, RENDER_ERROR_TITLE};
use crate::meme::{CaptionField, ImageSource};
use crate::ui::platform::Screen;
use crate::ui::shortcuts::show_shortcuts_dialog;

fn pick_image(screen: &Screen, source: ImageSource) {
    let result = screen.with_controller(|controller, platform| {
        controller.select_image_source(source, platform)
    });
    if let Err(e) = result {
        warn!("Cannot pick image: {}", e);
        screen.with_controller(|_, platform| {
            platform.show_alert(&format!("{} unavailable", source), &e.to_string())
        });
    }
}

/// Drop caption focus, then run `f` after the caption has been committed
fn after_editing(screen: &Screen, f: impl FnOnce(&Screen) + 'static) {
    screen.components.window.set_focus(None::<&gtk::Widget>);
    screen.later(f);
}

fn share(screen: &Screen) {
    after_editing(screen, |screen| {
        let result =
            screen.with_controller(|controller, platform| controller.share_composite(platform));
        if let Err(e) = result {
            warn!("Cannot share meme: {}", e);
            screen.with_controller(|_, platform| {
                platform.show_alert(RENDER_ERROR_TITLE, &e.to_string())
            });
        }
    });
}

fn reset(screen: &Screen) {
    after_editing(screen, |screen| {
        screen.with_controller(|controller, platform| controller.reset_to_defaults(platform));
    });
}

fn show_shortcuts(screen: &Screen) {
    let shortcuts = screen.controller.borrow().config().shortcuts.clone();
    show_shortcuts_dialog(&shortcuts, &screen.components.window);
}

fn run_action(screen: &Screen, action: Action) -> glib::Propagation {
    let components = &screen.components;
    let button = match action {
        Action::PickFromAlbum => Some(&components.toolbar.album_btn),
        Action::PickFromCamera => Some(&components.toolbar.camera_btn),
        Action::Share => Some(&components.header.share_btn),
        Action::Reset | Action::ShowShortcuts => None,
    };
    if button.is_some_and(|button| !button.is_sensitive()) {
        debug!("Ignoring {:?}, its button is disabled", action);
        return glib::Propagation::Stop;
    }

    match action {
        Action::PickFromAlbum => pick_image(screen, ImageSource::Library),
        Action::PickFromCamera => pick_image(screen, ImageSource::Camera),
        Action::Share => share(screen),
        Action::Reset => reset(screen),
        Action::ShowShortcuts => show_shortcuts(screen),
    }
    glib::Propagation::Stop
}

pub fn connect_caption_handlers(screen: &Rc<Screen>) {
    for &field in CaptionField::all() {
        let entry = screen.components.canvas.entry(field);
        let focus = gtk::EventControllerFocus::new();

        focus.connect_enter({
            let screen = Rc::downgrade(screen);
            move |_| {
                let Some(screen) = screen.upgrade() else { return };
                screen.later(move |screen| {
                    let text = screen.components.canvas.entry(field).text();
                    screen.with_controller(|controller, platform| {
                        controller.on_field_begin_edit(field, &text, platform)
                    });
                });
            }
        });

        focus.connect_leave({
            let screen = Rc::downgrade(screen);
            move |_| {
                let Some(screen) = screen.upgrade() else { return };
                screen.later(move |screen| {
                    let text = screen.components.canvas.entry(field).text();
                    screen.with_controller(|controller, platform| {
                        controller.on_field_end_edit(field, &text, platform)
                    });
                });
            }
        });

        entry.add_controller(focus);

        // Return finishes editing
        entry.connect_activate({
            let window = screen.components.window.clone();
            move |_| window.set_focus(None::<&gtk::Widget>)
        });
    }
}

pub fn connect_button_handlers(screen: &Rc<Screen>) {
    let components = &screen.components;

    for &source in &[ImageSource::Camera, ImageSource::Library] {
        components.toolbar.source_button(source).connect_clicked({
            let screen = Rc::downgrade(screen);
            move |_| {
                if let Some(screen) = screen.upgrade() {
                    pick_image(&screen, source);
                }
            }
        });
    }

    components.header.share_btn.connect_clicked({
        let screen = Rc::downgrade(screen);
        move |_| {
            if let Some(screen) = screen.upgrade() {
                share(&screen);
            }
        }
    });

    components.header.cancel_btn.connect_clicked({
        let screen = Rc::downgrade(screen);
        move |_| {
            if let Some(screen) = screen.upgrade() {
                reset(&screen);
            }
        }
    });

    components.header.shortcuts_btn.connect_clicked({
        let screen = Rc::downgrade(screen);
        move |_| {
            if let Some(screen) = screen.upgrade() {
                show_shortcuts(&screen);
            }
        }
    });
}

pub fn connect_keyboard_shortcuts(screen: &Rc<Screen>) {
    let key_controller = gtk::EventControllerKey::new();
    // Capture phase so shortcuts work while a caption has focus
    key_controller.set_propagation_phase(gtk::PropagationPhase::Capture);

    key_controller.connect_key_pressed({
        let screen = Rc::downgrade(screen);
        move |_, key, _, modifiers| {
            let Some(screen) = screen.upgrade() else {
                return glib::Propagation::Proceed;
            };
            let action = screen
                .controller
                .borrow()
                .config()
                .shortcuts
                .get_action(key, modifiers);
            match action {
                Some(action) => {
                    debug!("Shortcut {:?}", action);
                    run_action(&screen, action)
                }
                None => glib::Propagation::Proceed,
            }
        }
    });

    screen.components.window.add_controller(key_controller);
}

/// Keeps a value alive until `release` is called
struct Keepalive<T>(RefCell<Option<Rc<T>>>);

impl<T> Keepalive<T> {
    fn new(value: Rc<T>) -> Self {
        Self(RefCell::new(Some(value)))
    }

    fn release(&self) {
        if self.0.borrow_mut().take().is_some() {
            debug!("Releasing meme screen");
        }
    }
}

pub fn connect_window_handlers(screen: &Rc<Screen>) {
    let window = &screen.components.window;

    // The only strong reference outside `build_ui`, dropped when the window
    // closes so the screen and its widgets can go away
    let keepalive = Keepalive::new(screen.clone());
    window.connect_close_request(move |_| {
        keepalive.release();
        glib::Propagation::Proceed
    });

    window.connect_map({
        let screen = Rc::downgrade(screen);
        move |window| {
            let Some(screen) = screen.upgrade() else { return };
            let (width, height) = window.default_size();
            screen.with_controller(|controller, platform| {
                controller.on_size_changed(width, height, platform);
                controller.activate(platform);
            });
            screen.subscribe_keyboard();
        }
    });

    window.connect_unmap({
        let screen = Rc::downgrade(screen);
        move |_| {
            if let Some(screen) = screen.upgrade() {
                screen.unsubscribe_keyboard();
            }
        }
    });

    let on_size = {
        let screen = Rc::downgrade(screen);
        move |window: &adw::ApplicationWindow| {
            if let Some(screen) = screen.upgrade() {
                let (width, height) = window.default_size();
                screen.with_controller(|controller, platform| {
                    controller.on_size_changed(width, height, platform)
                });
            }
        }
    };
    window.connect_default_width_notify(on_size.clone());
    window.connect_default_height_notify(on_size);

    screen.components.canvas.drawing_area.connect_resize({
        let screen = Rc::downgrade(screen);
        move |_, width, height| {
            if let Some(screen) = screen.upgrade() {
                screen.controller.borrow_mut().on_canvas_resized(width, height);
            }
        }
    });
}

pub fn connect_all_handlers(screen: &Rc<Screen>) {
    connect_caption_handlers(screen);
    connect_button_handlers(screen);
    connect_keyboard_shortcuts(screen);
    connect_window_handlers(screen);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keepalive_holds_until_released() {
        let value = Rc::new(42);
        let weak = Rc::downgrade(&value);
        let keepalive = Keepalive::new(value);

        assert_eq!(weak.upgrade().as_deref(), Some(&42));
        keepalive.release();
        assert!(weak.upgrade().is_none());
        keepalive.release();
    }
}
