//! In-memory adapters shared by the behaviour tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use client::domain::ports::{
    ApiRequest, ApiResponse, ApiTransport, TokenStore, TokenStoreError, TransportError,
};

const EMPTY_ENVELOPE: &str = r#"{"results":[],"count":0,"next":null,"previous":null}"#;

/// Transport that serves scripted responses and records every request.
#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<(u16, String)>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl StubTransport {
    /// A transport with no scripted responses; unexpected requests get an
    /// empty list envelope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next response.
    pub fn push(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .expect("response queue poisoned")
            .push_back((status, body.to_owned()));
    }

    /// Every request seen so far, in dispatch order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .clone()
    }
}

#[async_trait]
impl ApiTransport for StubTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(request);
        let (status, body) = self
            .responses
            .lock()
            .expect("response queue poisoned")
            .pop_front()
            .unwrap_or((200, EMPTY_ENVELOPE.to_owned()));
        Ok(ApiResponse {
            status,
            body: body.into_bytes(),
        })
    }
}

/// Token store holding its value in memory.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// A store already holding a persisted token.
    pub fn holding(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_owned())),
        }
    }

    /// The currently persisted token, if any.
    pub fn persisted(&self) -> Option<String> {
        self.token.lock().expect("token slot poisoned").clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.persisted())
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        *self.token.lock().expect("token slot poisoned") = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        *self.token.lock().expect("token slot poisoned") = None;
        Ok(())
    }
}
