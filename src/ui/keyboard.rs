use gtk4 as gtk;

use gtk::prelude::*;
use log::debug;
use std::rc::Rc;

use crate::meme::CaptionField;
use crate::ui::platform::Screen;

/// Keyboard show/hide notifications while the screen is on display.
///
/// Desktop GTK has no on-screen keyboard events, so a caption gaining focus
/// counts as the keyboard appearing with the configured inset and losing
/// focus as it going away. Dropping the subscription detaches the listeners.
pub struct KeyboardSubscription {
    listeners: Vec<(gtk::Entry, gtk::EventControllerFocus)>,
}

impl KeyboardSubscription {
    pub fn subscribe(screen: &Rc<Screen>) -> Self {
        debug!("Subscribing to keyboard notifications");
        let listeners = CaptionField::all()
            .iter()
            .map(|&field| {
                let entry = screen.components.canvas.entry(field).clone();
                let focus = gtk::EventControllerFocus::new();

                let weak = Rc::downgrade(screen);
                focus.connect_enter(move |_| {
                    let Some(screen) = weak.upgrade() else { return };
                    screen.later(|screen| {
                        let inset = screen.keyboard_inset();
                        screen.with_controller(|controller, platform| {
                            controller.on_keyboard_will_show(inset, platform)
                        });
                    });
                });

                let weak = Rc::downgrade(screen);
                focus.connect_leave(move |_| {
                    let Some(screen) = weak.upgrade() else { return };
                    screen.later(|screen| {
                        screen.with_controller(|controller, platform| {
                            controller.on_keyboard_will_hide(platform)
                        });
                    });
                });

                entry.add_controller(focus.clone());
                (entry, focus)
            })
            .collect();

        Self { listeners }
    }
}

impl Drop for KeyboardSubscription {
    fn drop(&mut self) {
        debug!("Releasing keyboard notifications");
        for (entry, focus) in self.listeners.drain(..) {
            entry.remove_controller(&focus);
        }
    }
}
