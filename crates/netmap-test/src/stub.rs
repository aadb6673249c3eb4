//! Stub attachment definition provider with canned responses

use std::cell::RefCell;

use vmimport_netmap::{LookupResult, NetAttachDefProvider, ProviderError};
use vmimport_types::NetworkAttachmentDefinition;

type Responder = Box<dyn Fn(&str, &str) -> LookupResult>;

/// Provider whose answers come from a closure, recording every lookup.
pub struct StubProvider {
    responder: Responder,
    calls: RefCell<Vec<(String, String)>>,
}

impl StubProvider {
    /// Answers every lookup with `responder`
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&str, &str) -> LookupResult + 'static,
    {
        Self {
            responder: Box::new(responder),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Returns a clone of `nad` for every lookup
    pub fn always(nad: NetworkAttachmentDefinition) -> Self {
        Self::new(move |_, _| Ok(Some(nad.clone())))
    }

    /// Fails every lookup with a backend error
    pub fn failing(message: &str) -> Self {
        let message = message.to_string();
        Self::new(move |_, _| Err(ProviderError::backend(message.clone())))
    }

    /// Finds nothing
    pub fn empty() -> Self {
        Self::new(|_, _| Ok(None))
    }

    /// Answers only for `known` names, failing all others as not found
    pub fn only(known: Vec<NetworkAttachmentDefinition>) -> Self {
        Self::new(move |name, namespace| {
            known
                .iter()
                .find(|nad| nad.name == name)
                .cloned()
                .map(Some)
                .ok_or_else(|| ProviderError::not_found(name, namespace))
        })
    }

    /// Number of lookups made so far
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Lookups made so far as `(name, namespace)`
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }
}

impl NetAttachDefProvider for StubProvider {
    fn find(&self, name: &str, namespace: &str) -> LookupResult {
        self.calls
            .borrow_mut()
            .push((name.to_string(), namespace.to_string()));
        (self.responder)(name, namespace)
    }
}
