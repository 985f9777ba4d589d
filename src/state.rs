use std::{ops::Deref, sync::Arc};

use crate::{
    error::{ErrorVerbosity, ErrorVerbosityProvider},
    store::ContactStore,
};

#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(error_verbosity: ErrorVerbosity, store: Arc<dyn ContactStore>) -> Self {
        Self {
            inner: Arc::new(ApiStateInner {
                error_verbosity,
                store,
            }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    error_verbosity: ErrorVerbosity,
    store: Arc<dyn ContactStore>,
}

impl ApiStateInner {
    /// Returns the contact store shared by all requests.
    pub fn store(&self) -> &dyn ContactStore {
        self.store.as_ref()
    }
}

impl ErrorVerbosityProvider for ApiState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }
}
