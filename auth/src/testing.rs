//! Test doubles shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::session::Navigator;

/// Transport that replays queued results and records every request.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
    on_send: Rc<RefCell<Option<Box<dyn FnOnce()>>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_owned(),
        }));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Err(TransportError::Network(message.to_owned())));
        self
    }

    /// Run `hook` once, while the next request is in flight.
    pub fn on_send(&self, hook: impl FnOnce() + 'static) -> &Self {
        *self.on_send.borrow_mut() = Some(Box::new(hook));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        let hook = self.on_send.borrow_mut().take();
        if let Some(hook) = hook {
            hook();
        }
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_owned())))
    }
}

/// Navigator that remembers every destination.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visits: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_owned());
    }
}
