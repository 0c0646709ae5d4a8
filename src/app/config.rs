use gtk::gdk;
use gtk4 as gtk;
use log::warn;
use std::collections::HashMap;

use crate::meme::{CaptionOffsets, CaptionStyle, ScreenOrientation};

const KEYBOARD_INSET_ENV: &str = "MEME_MAKER_KEYBOARD_INSET";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PickFromAlbum,
    PickFromCamera,
    Share,
    Reset,
    ShowShortcuts,
}

impl Action {
    pub fn label(&self) -> &str {
        match self {
            Action::PickFromAlbum => "Pick an Image",
            Action::PickFromCamera => "Capture the Screen",
            Action::Share => "Share Meme",
            Action::Reset => "Start Over",
            Action::ShowShortcuts => "Keyboard Shortcuts",
        }
    }

    pub fn all() -> &'static [Action] {
        &[
            Action::PickFromAlbum,
            Action::PickFromCamera,
            Action::Share,
            Action::Reset,
            Action::ShowShortcuts,
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: gdk::Key,
    pub modifiers: gdk::ModifierType,
}

#[derive(Debug, Clone)]
pub struct ShortcutConfig {
    bindings: HashMap<Action, Shortcut>,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(
            Action::PickFromAlbum,
            Shortcut {
                key: gdk::Key::o,
                modifiers: gdk::ModifierType::CONTROL_MASK,
            },
        );
        bindings.insert(
            Action::PickFromCamera,
            Shortcut {
                key: gdk::Key::c,
                modifiers: gdk::ModifierType::CONTROL_MASK | gdk::ModifierType::SHIFT_MASK,
            },
        );
        bindings.insert(
            Action::Share,
            Shortcut {
                key: gdk::Key::s,
                modifiers: gdk::ModifierType::CONTROL_MASK,
            },
        );
        bindings.insert(
            Action::Reset,
            Shortcut {
                key: gdk::Key::n,
                modifiers: gdk::ModifierType::CONTROL_MASK,
            },
        );
        bindings.insert(
            Action::ShowShortcuts,
            Shortcut {
                key: gdk::Key::F1,
                modifiers: gdk::ModifierType::empty(),
            },
        );

        Self { bindings }
    }
}

impl ShortcutConfig {
    pub fn get_action(&self, key: gdk::Key, modifiers: gdk::ModifierType) -> Option<Action> {
        // Filter out irrelevant modifiers like NumLock/CapsLock/ScrollLock
        let mask = gdk::ModifierType::CONTROL_MASK
            | gdk::ModifierType::SHIFT_MASK
            | gdk::ModifierType::ALT_MASK
            | gdk::ModifierType::SUPER_MASK
            | gdk::ModifierType::META_MASK;

        let clean_mods = modifiers & mask;
        // Shift turns `c` into `C`
        let key = key.to_lower();

        self.bindings
            .iter()
            .find(|(_, shortcut)| shortcut.key == key && shortcut.modifiers == clean_mods)
            .map(|(action, _)| *action)
    }

    pub fn get_shortcut_label(&self, action: Action) -> String {
        if let Some(sc) = self.bindings.get(&action) {
            return gtk::accelerator_get_label(sc.key, sc.modifiers).to_string();
        }
        String::new()
    }
}

#[derive(Debug, Clone)]
pub struct MemeConfig {
    pub caption_style: CaptionStyle,
    /// Distance of the top caption from the top of the canvas
    pub top_offset: f64,
    /// Added to the bottom caption's offset in portrait orientation
    pub portrait_extra: f64,
    /// Height reported for the on-screen keyboard while a caption has focus
    pub keyboard_inset: f64,
    /// Colour behind the letterboxed image
    pub background: gdk::RGBA,
    /// Folder inside the user's Pictures directory that receives saved memes
    pub library_folder: String,
    pub shortcuts: ShortcutConfig,
}

impl Default for MemeConfig {
    fn default() -> Self {
        Self {
            caption_style: CaptionStyle::default(),
            top_offset: 16.0,
            portrait_extra: 20.0,
            keyboard_inset: 0.0,
            background: gdk::RGBA::new(0.0, 0.0, 0.0, 1.0),
            library_folder: "Memes".to_string(),
            shortcuts: ShortcutConfig::default(),
        }
    }
}

impl MemeConfig {
    /// Defaults, with the keyboard inset taken from the environment if set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(KEYBOARD_INSET_ENV) {
            match parse_inset(&value) {
                Some(inset) => config.keyboard_inset = inset,
                None => warn!("Ignoring invalid {}={:?}", KEYBOARD_INSET_ENV, value),
            }
        }
        config
    }

    pub fn caption_offsets(&self, orientation: ScreenOrientation) -> CaptionOffsets {
        CaptionOffsets::for_orientation(self.top_offset, self.portrait_extra, orientation)
    }
}

fn parse_inset(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|inset| inset.is_finite() && *inset >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shortcuts_resolve() {
        let shortcuts = ShortcutConfig::default();
        assert_eq!(
            shortcuts.get_action(gdk::Key::o, gdk::ModifierType::CONTROL_MASK),
            Some(Action::PickFromAlbum)
        );
        assert_eq!(
            shortcuts.get_action(gdk::Key::s, gdk::ModifierType::CONTROL_MASK),
            Some(Action::Share)
        );
        assert_eq!(
            shortcuts.get_action(gdk::Key::F1, gdk::ModifierType::empty()),
            Some(Action::ShowShortcuts)
        );
        assert_eq!(
            shortcuts.get_action(gdk::Key::s, gdk::ModifierType::empty()),
            None
        );
    }

    #[test]
    fn test_shifted_shortcut_matches_uppercase_key() {
        let shortcuts = ShortcutConfig::default();
        let mods = gdk::ModifierType::CONTROL_MASK | gdk::ModifierType::SHIFT_MASK;
        assert_eq!(
            shortcuts.get_action(gdk::Key::C, mods),
            Some(Action::PickFromCamera)
        );
    }

    #[test]
    fn test_lock_modifiers_ignored() {
        let shortcuts = ShortcutConfig::default();
        let mods = gdk::ModifierType::CONTROL_MASK | gdk::ModifierType::LOCK_MASK;
        assert_eq!(
            shortcuts.get_action(gdk::Key::n, mods),
            Some(Action::Reset)
        );
    }

    #[test]
    fn test_parse_inset() {
        assert_eq!(parse_inset("216"), Some(216.0));
        assert_eq!(parse_inset(" 0.5 "), Some(0.5));
        assert_eq!(parse_inset("-3"), None);
        assert_eq!(parse_inset("tall"), None);
        assert_eq!(parse_inset("NaN"), None);
    }

    #[test]
    fn test_caption_offsets_follow_orientation() {
        let config = MemeConfig::default();
        let portrait = config.caption_offsets(ScreenOrientation::Portrait);
        assert_eq!(portrait.bottom, config.top_offset + config.portrait_extra);
        let landscape = config.caption_offsets(ScreenOrientation::Landscape);
        assert_eq!(landscape.bottom, landscape.top);
    }
}
