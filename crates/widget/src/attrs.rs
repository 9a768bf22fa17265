//! The widget's attribute surface.
//!
//! Attributes are stored as name/value pairs with ASCII-case-insensitive
//! name matching, the way markup attributes behave. Presence-only attributes
//! (`required`, `readonly`, `disabled`) carry `None` as their value.

/// Ordered list of attributes on the widget element.
#[derive(Clone, Debug, Default)]
pub struct AttributeList {
    attributes: Vec<(String, Option<String>)>,
}

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the attribute's value, if the attribute is present.
    ///
    /// A present attribute without a value (e.g. `required`) yields
    /// `Some(None)`.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_deref())
    }

    /// Returns `true` if the attribute is present, with or without a value.
    pub fn has(&self, name: &str) -> bool {
        self.attributes
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    /// Set an attribute, returning its previous state (`None` if absent).
    pub fn set(&mut self, name: &str, value: Option<&str>) -> Option<Option<String>> {
        let value = value.map(str::to_string);
        if let Some(slot) = self
            .attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            return Some(std::mem::replace(&mut slot.1, value));
        }

        self.attributes.push((name.to_string(), value));
        None
    }

    /// Remove an attribute, returning its previous state (`None` if absent).
    pub fn remove(&mut self, name: &str) -> Option<Option<String>> {
        let idx = self
            .attributes
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(name))?;
        Some(self.attributes.remove(idx).1)
    }

    /// Add or remove a presence-only attribute.
    ///
    /// Returns `true` if presence actually changed.
    pub fn toggle(&mut self, name: &str, on: bool) -> bool {
        if on {
            if self.has(name) {
                return false;
            }
            self.set(name, None);
            true
        } else {
            self.remove(name).is_some()
        }
    }

    /// Parse an attribute as a non-negative integer, with `-1` meaning
    /// absent, unparsable, or negative (the unbounded sentinel).
    pub fn int(&self, name: &str) -> i32 {
        match self.get(name) {
            Some(Some(raw)) => match raw.trim().parse::<i32>() {
                Ok(n) if n >= 0 => n,
                _ => -1,
            },
            _ => -1,
        }
    }
}
