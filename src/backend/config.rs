//! Synthesis options.

use enumerator_core::lang::conventions::default_receiver_name;

/// Command name written into the generated header when none is given.
pub const DEFAULT_COMMAND: &str = "enumerator";

/// Options for one generated unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Name bound to the wrapped value inside generated methods (`let k = self.0;`).
    pub receiver: Option<String>,
    /// Command line recorded in the header.
    pub command: String,
    /// Emit `serde::Serialize` and `serde::Deserialize` impls.
    pub serde: bool,
    /// Emit `use super::*;` so the unit can be declared as a child module.
    pub child_module: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            receiver: None,
            command: DEFAULT_COMMAND.to_string(),
            serde: false,
            child_module: false,
        }
    }
}

impl GenerateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the receiver binding
    pub fn with_receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    /// Set the command line recorded in the header
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_serde(mut self, serde: bool) -> Self {
        self.serde = serde;
        self
    }

    pub fn with_child_module(mut self, child_module: bool) -> Self {
        self.child_module = child_module;
        self
    }

    /// Receiver base name for `type_name`: the configured one, or the type's first letter lowercased.
    pub fn receiver_for(&self, type_name: &str) -> String {
        match &self.receiver {
            Some(r) if !r.is_empty() => r.clone(),
            _ => default_receiver_name(type_name),
        }
    }
}
