//! Generic list/mutation controller backing every resource screen.
//!
//! One `ResourceStore` per page owns the in-memory list, the single operation
//! in flight, a surfaced error, and the records selected for edit/delete.
//! The screens themselves stay declarative: form markup plus calls into here.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

/// Boxed single-threaded future returned by the API layer.
pub type ApiFuture<T> = Pin<Box<dyn Future<Output = Result<T, String>>>>;

/// The one operation a screen can have in flight. A screen is either idle or
/// doing exactly one of these; every busy indicator is gated by one variant,
/// and a finished operation always returns the screen to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Idle,
    LoadingList,
    Submitting,
    Deleting,
}

pub struct ResourceStore<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub operation: RwSignal<Operation>,
    pub error: RwSignal<Option<String>>,
    /// Record currently open in the edit modal.
    pub edit_item: RwSignal<Option<T>>,
    /// Record currently awaiting delete confirmation.
    pub delete_item: RwSignal<Option<T>>,
    /// Request generation: a finished load only lands while no newer load has
    /// started since it did.
    generation: StoredValue<u64>,
    load_fn: StoredValue<Rc<dyn Fn() -> ApiFuture<Vec<T>>>, LocalStorage>,
}

impl<T: Send + Sync + 'static> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ResourceStore<T> {}

impl<T: Clone + Send + Sync + 'static> ResourceStore<T> {
    pub fn new(load_fn: impl Fn() -> ApiFuture<Vec<T>> + 'static) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            operation: RwSignal::new(Operation::Idle),
            error: RwSignal::new(None),
            edit_item: RwSignal::new(None),
            delete_item: RwSignal::new(None),
            generation: StoredValue::new(0),
            load_fn: StoredValue::new_local(Rc::new(load_fn)),
        }
    }

    /// True while a mutation is in flight; row actions are disabled then so
    /// two mutations cannot overlap on the same list.
    pub fn busy(&self) -> bool {
        matches!(
            self.operation.get(),
            Operation::Submitting | Operation::Deleting
        )
    }

    pub fn is_loading_list(&self) -> bool {
        self.operation.get() == Operation::LoadingList
    }

    /// Fetch the list. A stale response (a newer load started after this one)
    /// is discarded without touching any state.
    pub fn load(&self) {
        let store = *self;
        let my_generation = self.next_generation();
        self.operation.set(Operation::LoadingList);
        spawn_local(async move {
            let result = (store.load_fn.get_value())().await;
            if store.generation.get_value() != my_generation {
                return;
            }
            match result {
                Ok(items) => {
                    store.items.set(items);
                    store.error.set(None);
                }
                Err(e) => store.error.set(Some(e)),
            }
            store.operation.set(Operation::Idle);
        });
    }

    /// Run a mutation. On success `on_success` fires (close the surface,
    /// clear the form), then the list is reloaded from the server while the
    /// operation's busy indicator is still showing. On failure the error is
    /// surfaced and the surface stays as it was, so the submission can be
    /// retried. Either way the screen ends up `Idle`.
    pub fn mutate(
        &self,
        operation: Operation,
        fut: ApiFuture<()>,
        on_success: impl FnOnce() + 'static,
    ) {
        let store = *self;
        self.operation.set(operation);
        self.error.set(None);
        spawn_local(async move {
            match fut.await {
                Ok(()) => {
                    on_success();
                    let my_generation = store.next_generation();
                    match (store.load_fn.get_value())().await {
                        Ok(items) => {
                            if store.generation.get_value() == my_generation {
                                store.items.set(items);
                            }
                        }
                        Err(e) => store.error.set(Some(e)),
                    }
                }
                Err(e) => store.error.set(Some(e)),
            }
            store.operation.set(Operation::Idle);
        });
    }

    fn next_generation(&self) -> u64 {
        let next = self.generation.with_value(|g| g + 1);
        self.generation.set_value(next);
        next
    }
}
