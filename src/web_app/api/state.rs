// web_app/api/state.rs - Process-wide MovieService slot
//
// The server binary installs the service once at startup; integration
// tests swap in a service built on in-memory doubles.

use std::sync::{Mutex, OnceLock, PoisonError};

use super::service::MovieService;

static SERVICE: OnceLock<MovieService> = OnceLock::new();
static TEST_SERVICE_OVERRIDE: Mutex<Option<MovieService>> = Mutex::new(None);

/// Install the global service
pub fn init_service(service: MovieService) {
    tracing::info!("Initializing global movie service");
    if SERVICE.set(service).is_err() {
        tracing::warn!("Movie service already initialized");
    }
}

/// Set a service override for testing
pub fn set_test_service(service: MovieService) {
    let mut guard = TEST_SERVICE_OVERRIDE.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = Some(service);
}

/// Get the active service, preferring a test override
pub fn get_service() -> Option<MovieService> {
    {
        let guard = TEST_SERVICE_OVERRIDE.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(ref service) = *guard {
            return Some(service.clone());
        }
    }

    let service = SERVICE.get().cloned();
    if service.is_none() {
        tracing::warn!("Global movie service is empty!");
    }
    service
}
