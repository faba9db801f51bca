use crate::domain::errors::KeybindingError;
use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Key bindings: default keys plus configured overrides.
pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, code: KeyCode, modifiers: KeyModifiers, primary: bool| {
            let key = KeyEvent::new(code, modifiers);
            if primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(Action::Quit, KeyCode::Char('c'), KeyModifiers::CONTROL, true);
        register(Action::Quit, KeyCode::Char('q'), KeyModifiers::NONE, false);
        register(Action::Back, KeyCode::Esc, KeyModifiers::NONE, true);

        register(Action::FocusNext, KeyCode::Tab, KeyModifiers::NONE, true);
        register(Action::FocusNext, KeyCode::Down, KeyModifiers::NONE, false);
        register(Action::FocusPrevious, KeyCode::BackTab, KeyModifiers::SHIFT, true);
        register(Action::FocusPrevious, KeyCode::BackTab, KeyModifiers::NONE, false);
        register(Action::FocusPrevious, KeyCode::Up, KeyModifiers::NONE, false);
        register(Action::Activate, KeyCode::Enter, KeyModifiers::NONE, true);
        register(Action::Activate, KeyCode::Char(' '), KeyModifiers::NONE, false);

        register(Action::ScrollLeft, KeyCode::Left, KeyModifiers::NONE, true);
        register(Action::ScrollLeft, KeyCode::Char('h'), KeyModifiers::NONE, false);
        register(Action::ScrollRight, KeyCode::Right, KeyModifiers::NONE, true);
        register(Action::ScrollRight, KeyCode::Char('l'), KeyModifiers::NONE, false);

        register(Action::NextTab, KeyCode::Char(']'), KeyModifiers::NONE, true);
        register(Action::NextTab, KeyCode::Right, KeyModifiers::CONTROL, false);
        register(Action::PreviousTab, KeyCode::Char('['), KeyModifiers::NONE, true);
        register(Action::PreviousTab, KeyCode::Left, KeyModifiers::CONTROL, false);
        register(Action::ShowExplorer, KeyCode::Char('1'), KeyModifiers::NONE, true);
        register(Action::ShowAccount, KeyCode::Char('2'), KeyModifiers::NONE, true);

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    /// Registry with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default bindings plus user overrides such as `"Ctrl+q" = "Quit"`.
    /// Overrides take precedence and become the displayed key.
    ///
    /// # Errors
    /// Returns `KeybindingError` for the first key string that does not parse.
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Result<Self, KeybindingError> {
        let mut registry = Self::default();
        let mut entries: Vec<_> = overrides.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (spec, action) in entries {
            let key = parse_key(spec)?;
            registry.input_bindings.insert(0, (key, *action));
            registry.display_bindings.insert(*action, key);
        }
        Ok(registry)
    }

    /// Key shown in hints for `action`.
    #[must_use]
    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    /// Action bound to `key`, if any.
    #[must_use]
    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, a)| *a)
    }

    /// Footer entry for `action` using its displayed key.
    #[must_use]
    pub fn keybind(&self, action: Action, label: &'static str) -> Option<Keybind> {
        self.get(action).map(|key| Keybind::new(key, action, label))
    }
}

/// Parses key strings like `Ctrl+q`, `Alt+Enter`, `Shift+Tab`, `F1`, `]`.
///
/// # Errors
/// Returns `KeybindingError` when a modifier or key name is unknown.
pub fn parse_key(spec: &str) -> Result<KeyEvent, KeybindingError> {
    let trimmed = spec.trim();
    if trimmed.is_empty() {
        return Err(KeybindingError::invalid(spec, "empty key"));
    }

    // A lone "+" is the plus key, and "Ctrl++" binds Ctrl and plus.
    let (prefix, key_name) = match trimmed.strip_suffix("++") {
        Some(prefix) => (Some(prefix), "+"),
        None if trimmed == "+" => (None, "+"),
        None => match trimmed.rsplit_once('+') {
            Some((prefix, key)) => (Some(prefix), key),
            None => (None, trimmed),
        },
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in prefix.into_iter().flat_map(|p| p.split('+')) {
        modifiers |= match part.trim().to_lowercase().as_str() {
            "ctrl" | "control" | "c" => KeyModifiers::CONTROL,
            "alt" | "meta" | "a" => KeyModifiers::ALT,
            "shift" | "s" => KeyModifiers::SHIFT,
            other => {
                return Err(KeybindingError::invalid(
                    spec,
                    format!("unknown modifier {other:?}"),
                ));
            }
        };
    }

    let code = parse_key_code(key_name.trim())
        .ok_or_else(|| KeybindingError::invalid(spec, format!("unknown key {key_name:?}")))?;

    let (code, modifiers) = match code {
        KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => (KeyCode::BackTab, modifiers),
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::SHIFT) && c.is_ascii_lowercase() => {
            (KeyCode::Char(c.to_ascii_uppercase()), modifiers)
        }
        other => (other, modifiers),
    };

    Ok(KeyEvent::new(code, modifiers))
}

fn parse_key_code(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let lower = name.to_lowercase();
    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bksp" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        f if f.starts_with('f') => {
            let n: u8 = f[1..].parse().ok()?;
            if (1..=12).contains(&n) {
                KeyCode::F(n)
            } else {
                return None;
            }
        }
        _ => return None,
    };
    Some(code)
}

/// Screens that list their commands in the footer.
pub trait HasCommands {
    /// Bindings relevant to the current focus, in display order.
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind>;
}
