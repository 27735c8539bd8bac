//! Leptos Theme Utilities
//!
//! Scoped inline-style overrides tied to component lifetime.
//! Every override is a layer on a per-property stack: the topmost layer is
//! what the page shows, and removing the last layer puts back the value that
//! was there before the first one, whatever order the layers are removed in.

use std::cell::RefCell;
use std::collections::HashMap;

use leptos::prelude::*;

/// Inline declaration: value plus priority (`"important"` or empty)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleValue {
    pub value: String,
    pub priority: String,
}

impl StyleValue {
    pub fn plain(value: &str) -> Self {
        Self {
            value: value.to_string(),
            priority: String::new(),
        }
    }
}

/// Something with inline style properties (CSS names, e.g. `background-color`)
pub trait StyleTarget {
    fn get(&self, property: &str) -> StyleValue;
    fn set(&self, property: &str, value: &StyleValue);
}

/// Inline style of `document.body`
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyStyle;

impl BodyStyle {
    fn declaration() -> Option<web_sys::CssStyleDeclaration> {
        let body = web_sys::window()?.document()?.body()?;
        Some(body.style())
    }
}

impl StyleTarget for BodyStyle {
    fn get(&self, property: &str) -> StyleValue {
        let Some(style) = Self::declaration() else {
            return StyleValue::default();
        };
        match style.get_property_value(property) {
            Ok(value) => StyleValue {
                value,
                priority: style.get_property_priority(property),
            },
            Err(e) => {
                web_sys::console::warn_1(&format!("[Theme] Cannot read {}: {:?}", property, e).into());
                StyleValue::default()
            }
        }
    }

    fn set(&self, property: &str, value: &StyleValue) {
        // An empty value removes the declaration.
        let Some(style) = Self::declaration() else {
            return;
        };
        if let Err(e) = style.set_property_with_priority(property, &value.value, &value.priority) {
            web_sys::console::warn_1(&format!("[Theme] Cannot set {}: {:?}", property, e).into());
        }
    }
}

/// Handle for one pushed layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OverrideId(u64);

#[derive(Debug)]
struct Layers {
    /// Declaration before the first layer was pushed
    base: StyleValue,
    active: Vec<(OverrideId, StyleValue)>,
}

/// Per-property override layers over a style target
#[derive(Debug)]
pub struct OverrideStack<T: StyleTarget> {
    target: T,
    properties: HashMap<String, Layers>,
    next_id: u64,
}

impl<T: StyleTarget> OverrideStack<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            properties: HashMap::new(),
            next_id: 0,
        }
    }

    /// Apply `value` on top of whatever `property` currently shows
    pub fn push(&mut self, property: &str, value: &str) -> OverrideId {
        let id = OverrideId(self.next_id);
        self.next_id += 1;

        let target = &self.target;
        let layers = self
            .properties
            .entry(property.to_string())
            .or_insert_with(|| Layers {
                base: target.get(property),
                active: Vec::new(),
            });
        let value = StyleValue::plain(value);
        self.target.set(property, &value);
        layers.active.push((id, value));
        id
    }

    /// Remove a layer. Returns false if it was already removed.
    pub fn remove(&mut self, id: OverrideId) -> bool {
        let Some(property) = self
            .properties
            .iter()
            .find(|(_, layers)| layers.active.iter().any(|(layer, _)| *layer == id))
            .map(|(property, _)| property.clone())
        else {
            return false;
        };

        let Some(layers) = self.properties.get_mut(&property) else {
            return false;
        };
        layers.active.retain(|(layer, _)| *layer != id);

        match layers.active.last() {
            Some((_, value)) => self.target.set(&property, value),
            None => {
                self.target.set(&property, &layers.base);
                self.properties.remove(&property);
            }
        }
        true
    }

    /// Number of live layers on `property`
    pub fn depth(&self, property: &str) -> usize {
        self.properties.get(property).map_or(0, |layers| layers.active.len())
    }
}

thread_local! {
    static BODY_OVERRIDES: RefCell<OverrideStack<BodyStyle>> = RefCell::new(OverrideStack::new(BodyStyle));
}

/// Override a body style property for the lifetime of the current owner.
/// The previous value comes back when the owner is cleaned up.
pub fn use_body_style(property: &'static str, value: &'static str) -> OverrideId {
    let id = BODY_OVERRIDES.with(|stack| stack.borrow_mut().push(property, value));
    on_cleanup(move || {
        BODY_OVERRIDES.with(|stack| {
            stack.borrow_mut().remove(id);
        });
    });
    id
}
