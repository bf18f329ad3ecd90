use ari_proxy::bus::BusConnection;
use ari_proxy::engine::EngineClient;
use ari_proxy::{Config, Server, ServerError};
use proxy_test_utils::{init_logging, MemoryBus, MockEngine};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

// Not every test binary touches every field.
#[allow(dead_code)]
pub(crate) struct RunningProxy {
    pub server: Arc<Server>,
    pub engine: Arc<MockEngine>,
    pub bus: Arc<MemoryBus>,
    pub cancel: CancellationToken,
    pub handle: JoinHandle<Result<(), ServerError>>,
}

impl RunningProxy {
    #[allow(dead_code)]
    pub(crate) async fn shutdown(self) -> Result<(), ServerError> {
        self.cancel.cancel();
        self.handle.await.expect("server task should not panic")
    }
}

#[allow(dead_code)]
pub(crate) async fn start_proxy(application: &str, node: &str) -> RunningProxy {
    let bus = Arc::new(MemoryBus::new());
    start_proxy_on(Server::new(Config::default()), bus, application, node).await
}

/// Boots a server over the given bus and waits for readiness.
pub(crate) async fn start_proxy_on(
    server: Server,
    bus: Arc<MemoryBus>,
    application: &str,
    node: &str,
) -> RunningProxy {
    init_logging();

    let server = Arc::new(server);
    let engine = Arc::new(MockEngine::new(application, node));
    let cancel = CancellationToken::new();

    let handle = {
        let server = server.clone();
        let cancel = cancel.clone();
        let engine: Arc<dyn EngineClient> = engine.clone();
        let bus: Arc<dyn BusConnection> = bus.clone();
        tokio::spawn(async move { server.listen_on(cancel, engine, bus).await })
    };
    server.ready().await;

    RunningProxy {
        server,
        engine,
        bus,
        cancel,
        handle,
    }
}
