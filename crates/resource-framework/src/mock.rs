//! # Mock Clients
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of expectations instead of a live store. Use it to test
//! code that sits *around* a client (login flows, registration, error mapping)
//! without spawning actors.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | None, scripted replies | Real records |
//! | **Determinism** | Fully scripted | Sequential per store |
//! | **Error injection** | `return_err(..)` | Needs crafted state |
//!
//! ```rust
//! use resource_framework::mock::MockClient;
//! use resource_framework::ActorEntity;
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Account { id: u32, email: String }
//! #[derive(Debug)] struct AccountCreate { email: String }
//! #[derive(Debug, thiserror::Error)] #[error("account error")] struct AccountError;
//!
//! #[async_trait]
//! impl ActorEntity for Account {
//!     type Id = u32; type Create = AccountCreate; type Update = std::convert::Infallible;
//!     type Action = std::convert::Infallible; type ActionResult = ();
//!     type Context = (); type Error = AccountError;
//!     fn from_create_params(id: u32, p: AccountCreate) -> Result<Self, AccountError> {
//!         Ok(Self { id, email: p.email })
//!     }
//!     async fn on_update(&mut self, u: Self::Update, _: &()) -> Result<(), AccountError> { match u {} }
//!     async fn handle_action(&mut self, a: Self::Action, _: &()) -> Result<(), AccountError> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Account>::new();
//!     mock.expect_list().return_ok(vec![Account { id: 1, email: "a@example.com".into() }]);
//!
//!     let accounts = mock.client().list().await.unwrap();
//!     assert_eq!(accounts.len(), 1);
//!     mock.verify();
//! }
//! ```
//!
//! For finer control, [`create_mock_client`] returns the raw receiver so a test
//! can inspect each request and reply by hand.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// One scripted reply, tagged with the request kind (and id) it answers.
enum Expectation<T: ActorEntity> {
    Create(Result<T, FrameworkError>),
    Get(T::Id, Result<Option<T>, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Update(T::Id, Result<T, FrameworkError>),
    Delete(T::Id, Result<(), FrameworkError>),
    Action(T::Id, Result<T::ActionResult, FrameworkError>),
    Put(T::Id, Result<T, FrameworkError>),
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A client backed by an ordered queue of expectations.
///
/// Requests must arrive in the order the expectations were registered. A request
/// that does not match the next expectation (wrong kind or wrong id) panics the
/// background task, which the caller then sees as
/// [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue
                    .lock()
                    .expect("mock expectation queue poisoned")
                    .pop_front();
                answer(request, next);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Create)
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |r| Expectation::Get(id, r))
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::List)
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |r| Expectation::Update(id, r))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |r| Expectation::Delete(id, r))
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |r| Expectation::Action(id, r))
    }

    pub fn expect_put(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |r| Expectation::Put(id, r))
    }

    /// Panics if any registered expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectation queue poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }
}

/// Completes one expectation with either a value or an error.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations
            .lock()
            .expect("mock expectation queue poisoned")
            .push_back(expectation);
    }
}

fn reply<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

fn answer<T: ActorEntity>(request: ResourceRequest<T>, expectation: Option<Expectation<T>>) {
    match (request, expectation) {
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
            reply(respond_to, r)
        }
        (ResourceRequest::List { respond_to }, Some(Expectation::List(r))) => reply(respond_to, r),
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get(expected, r))) => {
            assert_eq!(id, expected, "get called with unexpected id");
            reply(respond_to, r)
        }
        (ResourceRequest::Update { id, respond_to, .. }, Some(Expectation::Update(expected, r))) => {
            assert_eq!(id, expected, "update called with unexpected id");
            reply(respond_to, r)
        }
        (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete(expected, r))) => {
            assert_eq!(id, expected, "delete called with unexpected id");
            reply(respond_to, r)
        }
        (ResourceRequest::Action { id, respond_to, .. }, Some(Expectation::Action(expected, r))) => {
            assert_eq!(id, expected, "action called with unexpected id");
            reply(respond_to, r)
        }
        (ResourceRequest::Put { id, respond_to, .. }, Some(Expectation::Put(expected, r))) => {
            assert_eq!(id, expected, "put called with unexpected id");
            reply(respond_to, r)
        }
        (request, _) => panic!("Unexpected request or expectation mismatch: {:?}", kind(&request)),
    }
}

fn kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Create { .. } => "Create",
        ResourceRequest::Put { .. } => "Put",
        ResourceRequest::Get { .. } => "Get",
        ResourceRequest::List { .. } => "List",
        ResourceRequest::Update { .. } => "Update",
        ResourceRequest::Delete { .. } => "Delete",
        ResourceRequest::Action { .. } => "Action",
        ResourceRequest::Snapshot { .. } => "Snapshot",
        ResourceRequest::Restore { .. } => "Restore",
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client together with the receiver its requests land on.
///
/// The test plays the actor: pull a request with one of the `expect_*` helpers,
/// assert on its payload, and answer through the returned sender.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request, if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Put.
pub async fn expect_put<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Put {
            id,
            params,
            respond_to,
        }) => Some((id, params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
