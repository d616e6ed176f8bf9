//! Shared fixtures for unit tests.

use std::future::Future;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing_subscriber::fmt::MakeWriter;

use crate::gateway::{BrokerErrorBody, BrokerReply, BrokerTransport, GatewayError, PublishCommand};

/// How the mock broker answers every call.
#[derive(Debug, Clone, Copy)]
pub enum Scripted {
    /// Acknowledge without error.
    Ack,
    /// Acknowledge with `{"error": "<message>"}`.
    BrokerError(&'static str),
    /// Fail at the transport level.
    Fail(fn() -> GatewayError),
}

/// Transport that records calls instead of talking to a broker.
#[derive(Debug)]
pub struct MockTransport {
    script: Scripted,
    calls: AtomicUsize,
    last: Mutex<Option<PublishCommand>>,
}

impl MockTransport {
    pub fn new(script: Scripted) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_command(&self) -> Option<PublishCommand> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl BrokerTransport for MockTransport {
    async fn publish(&self, command: &PublishCommand) -> Result<BrokerReply, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(command.clone());
        match self.script {
            Scripted::Ack => Ok(BrokerReply {
                error: None,
                result: Some(serde_json::json!({})),
            }),
            Scripted::BrokerError(message) => Ok(BrokerReply {
                error: Some(BrokerErrorBody::Message(message.to_string())),
                result: None,
            }),
            Scripted::Fail(make) => Err(make()),
        }
    }
}

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuf {
    type Writer = SharedBuf;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `fut` with a thread-local subscriber and returns its output plus
/// everything it logged. Use from a `current_thread` runtime.
pub async fn capture_logs<F: Future>(fut: F) -> (F::Output, String) {
    let buf = SharedBuf::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buf.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    let output = {
        let _guard = tracing::subscriber::set_default(subscriber);
        fut.await
    };

    let logs = String::from_utf8_lossy(&buf.0.lock().unwrap()).into_owned();
    (output, logs)
}
