//! State presets for quick configuration switching

use super::registry::{ControlDef, ControlRegistry, ControlValue};
use std::collections::HashMap;

/// A named preset with predefined control values
#[derive(Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub values: HashMap<&'static str, ControlValue>,
}

impl Preset {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: HashMap::new(),
        }
    }

    pub fn set_bool(mut self, key: &'static str, value: bool) -> Self {
        self.values.insert(key, ControlValue::Bool(value));
        self
    }

    pub fn set_string(mut self, key: &'static str, value: &'static str) -> Self {
        self.values
            .insert(key, ControlValue::String(value.to_string()));
        self
    }

    /// Whether the registry currently shows exactly this preset
    pub fn matches(&self, registry: &ControlRegistry) -> bool {
        self.matches_values(&registry.controls, |key| registry.value(key))
    }

    /// Controls named by the preset must hold the preset's value; every other
    /// control must sit at its default.
    pub(super) fn matches_values(
        &self,
        controls: &[ControlDef],
        current: impl Fn(&'static str) -> Option<ControlValue>,
    ) -> bool {
        controls.iter().all(|control| {
            let expected = self.values.get(control.key).unwrap_or(&control.default);
            current(control.key).as_ref() == Some(expected)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::framework::ControlRegistryBuilder;

    fn controls() -> Vec<ControlDef> {
        ControlRegistryBuilder::new()
            .enum_control("size", "Size", "md", vec![("sm", "Small"), ("md", "Medium")])
            .bool_control("stacked", "Stacked", false)
            .into_controls()
    }

    fn lookup<'a>(
        pairs: &'a [(&'static str, ControlValue)],
    ) -> impl Fn(&'static str) -> Option<ControlValue> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn test_default_preset_matches_defaults() {
        let current = [
            ("size", ControlValue::String("md".into())),
            ("stacked", ControlValue::Bool(false)),
        ];
        assert!(Preset::new("Default").matches_values(&controls(), lookup(&current)));
    }

    #[test]
    fn test_preset_requires_other_controls_at_default() {
        let preset = Preset::new("Small").set_string("size", "sm");
        let exact = [
            ("size", ControlValue::String("sm".into())),
            ("stacked", ControlValue::Bool(false)),
        ];
        let drifted = [
            ("size", ControlValue::String("sm".into())),
            ("stacked", ControlValue::Bool(true)),
        ];
        assert!(preset.matches_values(&controls(), lookup(&exact)));
        assert!(!preset.matches_values(&controls(), lookup(&drifted)));
    }
}
