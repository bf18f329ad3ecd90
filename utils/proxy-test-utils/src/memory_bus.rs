//! In-memory pub/sub transport with literal subject matching.

use ari_proxy::bus::{BusConnection, BusConnector, BusError, BusMessage, BusSubscriber};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

struct SubscriptionEntry {
    subject: String,
    queue_group: Option<String>,
    sender: mpsc::UnboundedSender<BusMessage>,
}

#[derive(Default)]
struct BusState {
    next_id: u64,
    next_inbox: u64,
    subscriptions: HashMap<u64, SubscriptionEntry>,
    queue_rotation: HashMap<String, usize>,
    published: Vec<(String, Vec<u8>)>,
    unsubscribed: u64,
    failing_subjects: HashSet<String>,
}

/// A process-local bus. Subjects match literally (the proxy subscribes to
/// concrete subjects only), queue groups deliver to exactly one member, and
/// every publish is recorded in order for assertions.
#[derive(Clone, Default)]
pub struct MemoryBus {
    state: Arc<Mutex<BusState>>,
}

impl MemoryBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later subscribe attempt on `subject` fail, for boot
    /// failure-path tests.
    pub fn fail_subscribes_on(&self, subject: &str) {
        self.state.lock().failing_subjects.insert(subject.to_string());
    }

    /// Subjects with a live subscription, sorted.
    pub fn active_subjects(&self) -> Vec<String> {
        let state = self.state.lock();
        let mut subjects: Vec<_> = state
            .subscriptions
            .values()
            .map(|entry| entry.subject.clone())
            .collect();
        subjects.sort();
        subjects
    }

    pub fn subscription_count(&self) -> usize {
        self.state.lock().subscriptions.len()
    }

    /// How many subscriptions were explicitly deregistered.
    pub fn unsubscribe_count(&self) -> u64 {
        self.state.lock().unsubscribed
    }

    /// Every published subject, in publish order.
    pub fn published_subjects(&self) -> Vec<String> {
        self.state
            .lock()
            .published
            .iter()
            .map(|(subject, _)| subject.clone())
            .collect()
    }

    fn new_inbox(&self) -> String {
        let mut state = self.state.lock();
        state.next_inbox += 1;
        format!("_inbox.{}", state.next_inbox)
    }

    fn deliver(&self, subject: &str, reply: Option<&str>, payload: &[u8]) {
        let message = BusMessage {
            subject: subject.to_string(),
            reply: reply.map(str::to_string),
            payload: payload.to_vec(),
        };

        let targets: Vec<mpsc::UnboundedSender<BusMessage>> = {
            let mut state = self.state.lock();
            state.published.push((subject.to_string(), payload.to_vec()));

            let mut broadcast = Vec::new();
            let mut groups: HashMap<String, Vec<(u64, mpsc::UnboundedSender<BusMessage>)>> =
                HashMap::new();
            for (id, entry) in &state.subscriptions {
                if entry.subject != subject {
                    continue;
                }
                match &entry.queue_group {
                    None => broadcast.push(entry.sender.clone()),
                    Some(group) => groups
                        .entry(format!("{subject}\u{0}{group}"))
                        .or_default()
                        .push((*id, entry.sender.clone())),
                }
            }

            // Deterministic rotation keeps exactly-one delivery easy to
            // reason about across repeated publishes.
            for (group_key, mut members) in groups {
                members.sort_by_key(|(id, _)| *id);
                let rotation = state.queue_rotation.entry(group_key).or_insert(0);
                let chosen = *rotation % members.len();
                *rotation += 1;
                broadcast.push(members[chosen].1.clone());
            }

            broadcast
        };

        for sender in targets {
            let _ = sender.send(message.clone());
        }
    }

    /// Publishes with a reply subject, as a requesting client would.
    pub async fn publish_request(
        &self,
        subject: &str,
        reply: &str,
        payload: Vec<u8>,
    ) -> Result<(), BusError> {
        self.deliver(subject, Some(reply), &payload);
        Ok(())
    }

    /// Request/reply round trip: publishes the JSON-encoded body with a
    /// fresh inbox reply subject and awaits the first decoded reply.
    pub async fn request_json<T: Serialize, R: DeserializeOwned>(
        &self,
        subject: &str,
        body: &T,
    ) -> Option<R> {
        let payload = serde_json::to_vec(body).ok()?;
        let inbox = self.new_inbox();
        let mut replies = BusConnection::subscribe(self, &inbox).await.ok()?;
        self.publish_request(subject, &inbox, payload).await.ok()?;

        let reply = tokio::time::timeout(REQUEST_TIMEOUT, replies.next())
            .await
            .ok()
            .flatten();
        let _ = replies.unsubscribe().await;
        serde_json::from_slice(&reply?.payload).ok()
    }

    fn register(
        &self,
        subject: &str,
        queue_group: Option<&str>,
    ) -> Result<Box<dyn BusSubscriber>, BusError> {
        let mut state = self.state.lock();
        if state.failing_subjects.contains(subject) {
            return Err(BusError::Subscribe(format!(
                "injected failure for {subject}"
            )));
        }

        let (sender, receiver) = mpsc::unbounded_channel();
        state.next_id += 1;
        let id = state.next_id;
        state.subscriptions.insert(
            id,
            SubscriptionEntry {
                subject: subject.to_string(),
                queue_group: queue_group.map(str::to_string),
                sender,
            },
        );

        Ok(Box::new(MemorySubscription {
            id,
            subject: subject.to_string(),
            receiver,
            state: self.state.clone(),
        }))
    }
}

#[async_trait]
impl BusConnection for MemoryBus {
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> Result<(), BusError> {
        self.deliver(subject, None, &payload);
        Ok(())
    }

    async fn subscribe(&self, subject: &str) -> Result<Box<dyn BusSubscriber>, BusError> {
        self.register(subject, None)
    }

    async fn queue_subscribe(
        &self,
        subject: &str,
        queue_group: &str,
    ) -> Result<Box<dyn BusSubscriber>, BusError> {
        self.register(subject, Some(queue_group))
    }
}

struct MemorySubscription {
    id: u64,
    subject: String,
    receiver: mpsc::UnboundedReceiver<BusMessage>,
    state: Arc<Mutex<BusState>>,
}

#[async_trait]
impl BusSubscriber for MemorySubscription {
    fn subject(&self) -> &str {
        &self.subject
    }

    async fn next(&mut self) -> Option<BusMessage> {
        self.receiver.recv().await
    }

    async fn unsubscribe(self: Box<Self>) -> Result<(), BusError> {
        let mut state = self.state.lock();
        state.subscriptions.remove(&self.id);
        state.unsubscribed += 1;
        Ok(())
    }
}

/// Connector handing out an existing bus, for `Server::listen` tests.
pub struct ConnectableBus(pub Arc<MemoryBus>);

#[async_trait]
impl BusConnector for ConnectableBus {
    async fn connect(&self) -> Result<Arc<dyn BusConnection>, BusError> {
        Ok(self.0.clone())
    }
}

/// Connector that always refuses, for connect failure-path tests.
pub struct FailingBusConnector;

#[async_trait]
impl BusConnector for FailingBusConnector {
    async fn connect(&self) -> Result<Arc<dyn BusConnection>, BusError> {
        Err(BusError::Connect("injected connect failure".to_string()))
    }
}
