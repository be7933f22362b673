//! Public options of the date-range picker component
//!
//! These mirror the component's documented option names (camelCase on the
//! wire) and carry its built-in defaults. Partial option sets merge over the
//! defaults field by field.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Picker color scheme
///
/// `selected_text` has no fallback: a colors table that is present must name it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    #[serde(default = "Colors::default_selected")]
    pub selected: String,
    #[serde(default = "Colors::default_in_range")]
    pub in_range: String,
    pub selected_text: String,
    #[serde(default = "Colors::default_text")]
    pub text: String,
    #[serde(default = "Colors::default_in_range_border")]
    pub in_range_border: String,
    #[serde(default = "Colors::default_disabled")]
    pub disabled: String,
    #[serde(default = "Colors::default_hovered_in_range")]
    pub hovered_in_range: String,
}

impl Colors {
    fn default_selected() -> String {
        "#00a699".into()
    }
    fn default_in_range() -> String {
        "#66e2da".into()
    }
    fn default_text() -> String {
        "#565a5c".into()
    }
    fn default_in_range_border() -> String {
        "#33dacd".into()
    }
    fn default_disabled() -> String {
        "#fff".into()
    }
    fn default_hovered_in_range() -> String {
        "#67f6ee".into()
    }

    fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("colors.selected", self.selected.as_str()),
            ("colors.inRange", self.in_range.as_str()),
            ("colors.selectedText", self.selected_text.as_str()),
            ("colors.text", self.text.as_str()),
            ("colors.inRangeBorder", self.in_range_border.as_str()),
            ("colors.disabled", self.disabled.as_str()),
            ("colors.hoveredInRange", self.hovered_in_range.as_str()),
        ]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.fields() {
            validate_color(field, value)?;
        }
        Ok(())
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            selected: Self::default_selected(),
            in_range: Self::default_in_range(),
            selected_text: "#fff".into(),
            text: Self::default_text(),
            in_range_border: Self::default_in_range_border(),
            disabled: Self::default_disabled(),
            hovered_in_range: Self::default_hovered_in_range(),
        }
    }
}

/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` or any non-empty CSS
/// color keyword/function.
fn validate_color(field: &str, value: &str) -> Result<(), ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::invalid_option(field, "color must not be empty"));
    }

    if let Some(hex) = value.strip_prefix('#') {
        if !matches!(hex.len(), 3 | 4 | 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::invalid_option(
                field,
                format!("'{}' is not a valid hex color", value),
            ));
        }
    }

    Ok(())
}

/// Button and heading labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Texts {
    pub apply: String,
    pub cancel: String,
    pub keyboard_shortcuts: String,
}

impl Default for Texts {
    fn default() -> Self {
        Self {
            apply: "Apply".into(),
            cancel: "Cancel".into(),
            keyboard_shortcuts: "Keyboard Shortcuts".into(),
        }
    }
}

/// Key codes the picker reacts to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Keys {
    pub arrow_down: u32,
    pub arrow_up: u32,
    pub arrow_right: u32,
    pub arrow_left: u32,
    pub enter: u32,
    pub pg_up: u32,
    pub pg_dn: u32,
    pub end: u32,
    pub home: u32,
    pub question_mark: u32,
    pub esc: u32,
}

impl Default for Keys {
    fn default() -> Self {
        Self {
            arrow_down: 40,
            arrow_up: 38,
            arrow_right: 39,
            arrow_left: 37,
            enter: 13,
            pg_up: 33,
            pg_dn: 34,
            end: 35,
            home: 36,
            question_mark: 191,
            esc: 27,
        }
    }
}

impl Keys {
    fn fields(&self) -> [(&'static str, u32); 11] {
        [
            ("keys.arrowDown", self.arrow_down),
            ("keys.arrowUp", self.arrow_up),
            ("keys.arrowRight", self.arrow_right),
            ("keys.arrowLeft", self.arrow_left),
            ("keys.enter", self.enter),
            ("keys.pgUp", self.pg_up),
            ("keys.pgDn", self.pg_dn),
            ("keys.end", self.end),
            ("keys.home", self.home),
            ("keys.questionMark", self.question_mark),
            ("keys.esc", self.esc),
        ]
    }

    /// Every key code must be non-zero and bound to exactly one action
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: HashMap<u32, &'static str> = HashMap::new();
        for (field, code) in self.fields() {
            if code == 0 {
                return Err(ConfigError::invalid_option(field, "key code must be non-zero"));
            }
            if let Some(other) = seen.insert(code, field) {
                return Err(ConfigError::invalid_option(
                    field,
                    format!("key code {} is already bound to `{}`", code, other),
                ));
            }
        }
        Ok(())
    }
}

/// One row of the keyboard shortcuts panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardShortcut {
    pub symbol: String,
    pub label: String,
    #[serde(default)]
    pub symbol_description: String,
}

impl KeyboardShortcut {
    fn new(symbol: &str, label: &str, symbol_description: &str) -> Self {
        Self {
            symbol: symbol.into(),
            label: label.into(),
            symbol_description: symbol_description.into(),
        }
    }
}

/// Full option set of the picker component
///
/// Scalar and list fields come before the nested tables so the struct
/// serializes to valid TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatepickerOptions {
    pub date_label_format: String,
    pub sunday_first: bool,
    pub month_names: Vec<String>,
    pub days: Vec<String>,
    pub days_short: Vec<String>,
    pub aria_labels: BTreeMap<String, String>,
    pub colors: Colors,
    pub texts: Texts,
    pub keys: Keys,
    pub keyboard_shortcuts: Vec<KeyboardShortcut>,
}

impl Default for DatepickerOptions {
    fn default() -> Self {
        Self {
            date_label_format: "dddd, MMMM D, YYYY".into(),
            sunday_first: false,
            month_names: to_strings(&[
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ]),
            days: to_strings(&[
                "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
            ]),
            days_short: to_strings(&["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]),
            aria_labels: default_aria_labels(),
            colors: Colors::default(),
            texts: Texts::default(),
            keys: Keys::default(),
            keyboard_shortcuts: default_keyboard_shortcuts(),
        }
    }
}

impl DatepickerOptions {
    /// Check list lengths, labels, colors and key codes
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_labels("monthNames", &self.month_names, 12)?;
        validate_labels("days", &self.days, 7)?;
        validate_labels("daysShort", &self.days_short, 7)?;

        if self.date_label_format.trim().is_empty() {
            return Err(ConfigError::invalid_option("dateLabelFormat", "must not be empty"));
        }

        for (field, value) in [
            ("texts.apply", &self.texts.apply),
            ("texts.cancel", &self.texts.cancel),
            ("texts.keyboardShortcuts", &self.texts.keyboard_shortcuts),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid_option(field, "must not be empty"));
            }
        }

        for (i, shortcut) in self.keyboard_shortcuts.iter().enumerate() {
            if shortcut.symbol.trim().is_empty() || shortcut.label.trim().is_empty() {
                return Err(ConfigError::invalid_option(
                    format!("keyboardShortcuts[{}]", i),
                    "symbol and label must not be empty",
                ));
            }
        }

        self.colors.validate()?;
        self.keys.validate()
    }
}

fn validate_labels(field: &str, labels: &[String], expected: usize) -> Result<(), ConfigError> {
    if labels.len() != expected {
        return Err(ConfigError::invalid_option(
            field,
            format!("expected {} entries, got {}", expected, labels.len()),
        ));
    }
    if let Some(i) = labels.iter().position(|l| l.trim().is_empty()) {
        return Err(ConfigError::invalid_option(
            format!("{}[{}]", field, i),
            "must not be empty",
        ));
    }
    Ok(())
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_aria_labels() -> BTreeMap<String, String> {
    [
        ("previousMonth", "Move backward to switch to the previous month."),
        ("nextMonth", "Move forward to switch to the next month."),
        ("closeDatepicker", "Close calendar"),
        ("openKeyboardShortcutsMenu", "Open keyboard shortcuts menu."),
        ("closeKeyboardShortcutsMenu", "Close keyboard shortcuts menu"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn default_keyboard_shortcuts() -> Vec<KeyboardShortcut> {
    vec![
        KeyboardShortcut::new("↵", "Select the date in focus", "Enter key"),
        KeyboardShortcut::new(
            "←/→",
            "Move backward (left) and forward (right) by one day.",
            "Left or right arrow keys",
        ),
        KeyboardShortcut::new(
            "↑/↓",
            "Move backward (up) and forward (down) by one week.",
            "Up or down arrow keys",
        ),
        KeyboardShortcut::new("PgUp/PgDn", "Switch months.", "PageUp and PageDown keys"),
        KeyboardShortcut::new(
            "Home/End",
            "Go to the first or last day of a week.",
            "Home or End keys",
        ),
        KeyboardShortcut::new("Esc", "Close this panel", "Escape key"),
        KeyboardShortcut::new("?", "Open this panel", "Question mark"),
    ]
}
