//! Scripted collection source.

#![allow(dead_code)]

use std::collections::VecDeque;

use async_trait::async_trait;
use listsync::source::{CollectionSource, FetchError, PageRequest};
use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::oneshot;

/// One scripted answer.
pub enum Step {
    Respond(Value),
    Fail(String),
    /// Respond once the paired sender fires (or is dropped).
    Gated(Value, oneshot::Receiver<()>),
}

/// Source answering requests from a queue, recording every request.
#[derive(Default)]
pub struct ScriptedSource {
    script: Mutex<VecDeque<Step>>,
    requests: Mutex<Vec<PageRequest>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, step: Step) {
        self.script.lock().push_back(step);
    }

    pub fn respond(&self, body: Value) {
        self.push(Step::Respond(body));
    }

    pub fn fail(&self, message: &str) {
        self.push(Step::Fail(message.to_string()));
    }

    /// Queue a response held back until the returned sender fires.
    pub fn gated(&self, body: Value) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.push(Step::Gated(body, gate));
        release
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl CollectionSource for ScriptedSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Value, FetchError> {
        self.requests.lock().push(request.clone());
        let step = self.script.lock().pop_front();
        match step {
            Some(Step::Respond(body)) => Ok(body),
            Some(Step::Fail(message)) => Err(FetchError::Other(message)),
            Some(Step::Gated(body, gate)) => {
                let _ = gate.await;
                Ok(body)
            }
            None => Err(FetchError::Other("script exhausted".to_string())),
        }
    }
}
