//! Scripted [`Transport`] for tests.
//!
//! Responses are queued per `(method, path)`; every sent request is recorded so
//! tests can assert which calls were (or were not) issued.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::error::TransportError;

type Scripted = Result<ApiResponse, TransportError>;

#[derive(Clone, Default)]
pub struct MockTransport {
    scripts: Rc<RefCell<HashMap<(Method, String), VecDeque<Scripted>>>>,
    sent: Rc<RefCell<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and JSON `body` for the next matching request.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) -> &Self {
        self.push(method, path, Ok(ApiResponse::new(status, body.to_string())))
    }

    /// Queue a transport failure for the next matching request.
    pub fn fail(&self, method: Method, path: &str, message: &str) -> &Self {
        self.push(method, path, Err(TransportError::new(message)))
    }

    fn push(&self, method: Method, path: &str, scripted: Scripted) -> &Self {
        self.scripts
            .borrow_mut()
            .entry((method, path.to_owned()))
            .or_default()
            .push_back(scripted);
        self
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    pub fn sent_paths(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|r| r.path.clone()).collect()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.sent.borrow_mut().push(request.clone());
        self.scripts
            .borrow_mut()
            .get_mut(&(request.method, request.path.clone()))
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| panic!("unscripted request: {:?} {}", request.method, request.path))
    }
}
