//! Control registry for typed control management with URL sync

use super::preset::Preset;
use crate::mocks::url_state::{parse_state, StateBuilder};
use crate::Route;
use dioxus::prelude::*;
use std::collections::HashMap;

/// Value stored in the control registry
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    String(String),
}

/// How a control is edited in the panel
#[derive(Clone, Debug, PartialEq)]
pub enum ControlKind {
    Bool,
    /// (value, label) pairs rendered as a button group
    Enum(Vec<(&'static str, &'static str)>),
    Text,
}

/// Definition of a control with metadata
#[derive(Clone, Debug, PartialEq)]
pub struct ControlDef {
    pub key: &'static str,
    pub label: &'static str,
    pub default: ControlValue,
    pub kind: ControlKind,
    pub doc: Option<&'static str>,
}

impl ControlDef {
    /// Value from decoded URL pairs, falling back to the default
    fn initial_value(&self, pairs: &[(String, String)]) -> ControlValue {
        let raw = pairs.iter().find(|(k, _)| k == self.key).map(|(_, v)| v);
        match (&self.default, raw) {
            (ControlValue::Bool(_), Some(v)) => ControlValue::Bool(v == "1" || v == "true"),
            (ControlValue::String(_), Some(v)) => match &self.kind {
                ControlKind::Enum(options) if !options.iter().any(|(o, _)| o == v) => {
                    self.default.clone()
                }
                _ => ControlValue::String(v.clone()),
            },
            (default, None) => default.clone(),
        }
    }
}

/// Builder for creating a ControlRegistry
#[derive(Default)]
pub struct ControlRegistryBuilder {
    controls: Vec<ControlDef>,
    presets: Vec<Preset>,
}

impl ControlRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bool_control(mut self, key: &'static str, label: &'static str, default: bool) -> Self {
        self.controls.push(ControlDef {
            key,
            label,
            default: ControlValue::Bool(default),
            kind: ControlKind::Bool,
            doc: None,
        });
        self
    }

    /// Add an enum control (represented as string internally)
    pub fn enum_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: &'static str,
        options: Vec<(&'static str, &'static str)>,
    ) -> Self {
        self.controls.push(ControlDef {
            key,
            label,
            default: ControlValue::String(default.to_string()),
            kind: ControlKind::Enum(options),
            doc: None,
        });
        self
    }

    /// Add a free-form string control
    pub fn string_control(mut self, key: &'static str, label: &'static str, default: &str) -> Self {
        self.controls.push(ControlDef {
            key,
            label,
            default: ControlValue::String(default.to_string()),
            kind: ControlKind::Text,
            doc: None,
        });
        self
    }

    /// Add documentation to the last control
    pub fn doc(mut self, doc: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.doc = Some(doc);
        }
        self
    }

    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    #[cfg(test)]
    pub(crate) fn into_controls(self) -> Vec<ControlDef> {
        self.controls
    }

    /// Build the registry - must be called inside a component (uses hooks)
    pub fn build(self, initial_state: Option<String>) -> ControlRegistry {
        let state_pairs = initial_state
            .as_deref()
            .map(parse_state)
            .unwrap_or_default();

        let mut values: HashMap<&'static str, Signal<ControlValue>> = HashMap::new();
        for def in &self.controls {
            let initial = def.initial_value(&state_pairs);
            // One hook per control; the control list is fixed per page
            let signal = use_signal(|| initial);
            values.insert(def.key, signal);
        }

        ControlRegistry {
            controls: self.controls,
            values,
            presets: self.presets,
        }
    }
}

/// Registry holding all controls and their current values
#[derive(Clone, PartialEq)]
pub struct ControlRegistry {
    pub controls: Vec<ControlDef>,
    pub values: HashMap<&'static str, Signal<ControlValue>>,
    pub presets: Vec<Preset>,
}

impl ControlRegistry {
    /// Current value (reads signal, creating subscription)
    pub fn value(&self, key: &'static str) -> Option<ControlValue> {
        self.values.get(key).map(|s| s.read().clone())
    }

    pub fn get_bool(&self, key: &'static str) -> bool {
        matches!(self.value(key), Some(ControlValue::Bool(true)))
    }

    pub fn get_string(&self, key: &'static str) -> String {
        match self.value(key) {
            Some(ControlValue::String(s)) => s,
            _ => String::new(),
        }
    }

    pub fn set_bool(&self, key: &'static str, value: bool) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::Bool(value));
        }
    }

    pub fn set_string(&self, key: &'static str, value: String) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::String(value));
        }
    }

    /// Reset every control to its default, then apply the preset's values
    pub fn apply_preset(&self, preset: &Preset) {
        for control in &self.controls {
            if let Some(mut signal) = self.values.get(control.key).copied() {
                let value = preset
                    .values
                    .get(control.key)
                    .unwrap_or(&control.default)
                    .clone();
                signal.set(value);
            }
        }
    }

    /// URL state string for the current values
    pub fn build_state(&self) -> Option<String> {
        let mut builder = StateBuilder::new();

        for def in &self.controls {
            let Some(signal) = self.values.get(def.key) else {
                continue;
            };
            match (&*signal.read(), &def.default) {
                (ControlValue::Bool(v), ControlValue::Bool(default)) => {
                    builder.set_bool(def.key, *v, *default);
                }
                (ControlValue::String(v), ControlValue::String(default)) => {
                    builder.set_string(def.key, v, default);
                }
                _ => {}
            }
        }

        builder.build()
    }

    /// Mirror control changes into the URL via `to_route`
    pub fn use_url_sync(&self, to_route: fn(Option<String>) -> Route) {
        let registry = self.clone();
        let mut is_mounted = use_signal(|| false);

        use_effect(move || {
            // Read all values to subscribe to changes
            for signal in registry.values.values() {
                let _ = signal.read();
            }

            // The first run reflects the URL we were loaded from
            if !*is_mounted.peek() {
                is_mounted.set(true);
                return;
            }

            navigator().replace(to_route(registry.build_state()));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_control() -> ControlDef {
        ControlRegistryBuilder::new()
            .enum_control("size", "Size", "md", vec![("sm", "Small"), ("md", "Medium")])
            .into_controls()
            .remove(0)
    }

    #[test]
    fn test_initial_value_defaults_without_url_state() {
        assert_eq!(
            size_control().initial_value(&[]),
            ControlValue::String("md".into())
        );
    }

    #[test]
    fn test_initial_value_reads_url_state() {
        let pairs = vec![("size".to_string(), "sm".to_string())];
        assert_eq!(
            size_control().initial_value(&pairs),
            ControlValue::String("sm".into())
        );
    }

    #[test]
    fn test_unknown_enum_value_falls_back_to_default() {
        let pairs = vec![("size".to_string(), "gigantic".to_string())];
        assert_eq!(
            size_control().initial_value(&pairs),
            ControlValue::String("md".into())
        );
    }

    #[test]
    fn test_bool_parsing() {
        let def = ControlRegistryBuilder::new()
            .bool_control("stacked", "Stacked", false)
            .into_controls()
            .remove(0);
        let on = vec![("stacked".to_string(), "1".to_string())];
        let off = vec![("stacked".to_string(), "0".to_string())];
        assert_eq!(def.initial_value(&on), ControlValue::Bool(true));
        assert_eq!(def.initial_value(&off), ControlValue::Bool(false));
    }

    #[test]
    fn test_free_text_accepts_anything() {
        let def = ControlRegistryBuilder::new()
            .string_control("title", "Title", "Confirm")
            .into_controls()
            .remove(0);
        let pairs = vec![("title".to_string(), "Delete album?".to_string())];
        assert_eq!(
            def.initial_value(&pairs),
            ControlValue::String("Delete album?".into())
        );
    }
}
