use std::{cell::RefCell, rc::Rc};

/// The display-name slot of a UI component.
///
/// The record belongs to the host component. Naming only reads it and fills it once
/// when it is still empty.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ComponentIdentity {
    display_name: Option<String>,
}

/// Shared handle through which the host and the naming accessors see the same identity.
pub type SharedIdentity = Rc<RefCell<ComponentIdentity>>;

impl ComponentIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display_name(display_name: &str) -> Self {
        Self {
            display_name: Some(display_name.to_string()),
        }
    }

    /// Wraps the identity in the shared handle used by `Nomenclator`.
    pub fn shared(self) -> SharedIdentity {
        Rc::new(RefCell::new(self))
    }

    pub fn get_display_name(&self) -> Option<String> {
        self.display_name.clone()
    }

    pub fn set_display_name(&mut self, display_name: &str) {
        self.display_name = Some(display_name.to_string());
    }

    pub fn clear_display_name(&mut self) {
        self.display_name = None;
    }

    /// Fills the slot with `fallback` when no name is set (an empty string counts as unset).
    ///
    /// # Returns
    /// `true` if the slot was written.
    pub fn ensure_display_name(&mut self, fallback: &str) -> bool {
        let is_unset = match &self.display_name {
            Some(name) => name.is_empty(),
            None => true,
        };

        if is_unset {
            tracing::info!("Assigning display name '{}' to component", fallback);

            self.display_name = Some(fallback.to_string());
        }

        is_unset
    }
}
