use std::future::Future;

use crate::api::ApiError;

/// Per-form submit state: an in-flight flag and the last error message.
///
/// Each failure is reported once through `error()`; nothing else needs to
/// surface it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    in_flight: bool,
    error: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a submit as started. Returns false if one is already pending.
    pub fn begin_submit(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.error = None;
        true
    }

    /// Record the outcome of the pending submit
    pub fn finish<T>(&mut self, result: Result<T, ApiError>) -> Option<T> {
        self.in_flight = false;
        match result {
            Ok(value) => {
                self.error = None;
                Some(value)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Run `request` as one submit. Returns None if a submit was already
    /// pending or the request failed.
    pub async fn submit<T, F>(&mut self, request: F) -> Option<T>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        if !self.begin_submit() {
            tracing::debug!("Ignoring submit while another is in flight");
            return None;
        }
        let result = request.await;
        self.finish(result)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
