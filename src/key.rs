//! Key bindings over `crossterm` key codes.
//!
//! A [`Binding`] groups the key presses that trigger one action together with
//! the short label shown in help. Components expose their bindings through
//! the [`KeyMap`] trait so a help line can be generated from them.
//!
//! ```rust
//! use commander_list::key::Binding;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let reload = Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reload");
//! let msg = KeyMsg { key: KeyCode::Char('r'), modifiers: KeyModifiers::NONE };
//! assert!(reload.matches(&msg));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Required modifiers. `NONE` accepts plain and shifted presses.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    fn accepts(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        if self.modifiers.is_empty() {
            !msg
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        } else {
            msg.modifiers.contains(self.modifiers)
        }
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

/// Help label for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `"↑/k"`.
    pub key: String,
    /// Action label, e.g. `"up"`.
    pub desc: String,
}

/// The key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Binds plain presses of the given key codes.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys: keys.into_iter().map(KeyPress::from).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Binds a key code that must be pressed with `modifiers`.
    pub fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            keys: vec![KeyPress { code, modifiers }],
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help labels.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Enables or disables the binding. Disabled bindings never match and
    /// are left out of help.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is active.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// The help labels.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// The bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Whether `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.accepts(msg))
    }
}

/// Components that can describe their key bindings for help rendering.
pub trait KeyMap {
    /// The few bindings shown in the one-line help.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Formats bindings as `"key desc • key desc"`, skipping disabled ones.
pub fn help_line(bindings: &[&Binding], separator: &str) -> String {
    bindings
        .iter()
        .filter(|b| b.enabled())
        .map(|b| format!("{} {}", b.help.key, b.help.desc))
        .collect::<Vec<_>>()
        .join(separator)
}
