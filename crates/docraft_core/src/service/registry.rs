//! In-process storage provider registry and selection.
//!
//! The hosting application registers each available provider under its
//! display name and selects the one the current document should use.

use crate::service::provider::StorageProvider;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Provider registration/selection errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderRegistryError {
    InvalidProviderId(String),
    DuplicateProviderId(String),
    ProviderNotFound(String),
}

impl Display for ProviderRegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidProviderId(value) => write!(f, "provider id is invalid: {value}"),
            Self::DuplicateProviderId(value) => {
                write!(f, "provider id already registered: {value}")
            }
            Self::ProviderNotFound(value) => write!(f, "provider not found: {value}"),
        }
    }
}

impl Error for ProviderRegistryError {}

/// Runtime registry of named storage providers.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, Arc<dyn StorageProvider>>,
    active_provider_id: Option<String>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one provider under its display name.
    pub fn register(
        &mut self,
        provider: Arc<dyn StorageProvider>,
    ) -> Result<(), ProviderRegistryError> {
        let provider_id = provider.name().trim().to_string();
        if !is_valid_provider_id(&provider_id) {
            return Err(ProviderRegistryError::InvalidProviderId(provider_id));
        }
        if self.providers.contains_key(provider_id.as_str()) {
            return Err(ProviderRegistryError::DuplicateProviderId(provider_id));
        }

        self.providers.insert(provider_id, provider);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Returns sorted provider ids.
    pub fn provider_ids(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }

    /// Selects one active provider.
    pub fn select_active(&mut self, provider_id: &str) -> Result<(), ProviderRegistryError> {
        let normalized = provider_id.trim();
        if !self.providers.contains_key(normalized) {
            return Err(ProviderRegistryError::ProviderNotFound(
                normalized.to_string(),
            ));
        }
        self.active_provider_id = Some(normalized.to_string());
        Ok(())
    }

    /// Clears the active selection.
    pub fn clear_active(&mut self) {
        self.active_provider_id = None;
    }

    pub fn active_provider_id(&self) -> Option<&str> {
        self.active_provider_id.as_deref()
    }

    /// Returns one provider by id.
    pub fn get(&self, provider_id: &str) -> Option<Arc<dyn StorageProvider>> {
        self.providers.get(provider_id.trim()).cloned()
    }

    /// Returns the active provider handle.
    pub fn active_provider(&self) -> Option<Arc<dyn StorageProvider>> {
        let id = self.active_provider_id()?;
        self.get(id)
    }
}

fn is_valid_provider_id(provider_id: &str) -> bool {
    !provider_id.is_empty()
        && provider_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::is_valid_provider_id;

    #[test]
    fn provider_ids_are_single_ascii_tokens() {
        assert!(is_valid_provider_id("LocalStorage"));
        assert!(is_valid_provider_id("remote-v2"));
        assert!(!is_valid_provider_id(""));
        assert!(!is_valid_provider_id("has space"));
    }
}
