//! Discovery announcer.

use crate::bus::publish_json;
use crate::context::ProxyContext;
use crate::observability::events;
use crate::wire::subject;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

const COMPONENT: &str = "announcer";

/// Publishes one announcement per tick until the run is cancelled. The
/// interval's initial immediate tick is consumed so the first periodic
/// announcement lands one full period after boot; out-of-band refreshes are
/// the ping handler's job.
pub(crate) async fn run_announcer(
    cx: Arc<ProxyContext>,
    cancel: CancellationToken,
    period: Duration,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => return,
            _ = ticker.tick() => announce(&cx).await,
        }
    }
}

/// Out-of-band refresh: one immediate announcement per received ping,
/// independent of the ticker.
pub(crate) async fn announce_on_ping(cx: &ProxyContext) {
    debug!(
        event = events::PING_REFRESH,
        component = COMPONENT,
        "announcing in response to ping"
    );
    announce(cx).await;
}

/// Publishes this proxy's presence to the cluster. Failures are logged and
/// otherwise ignored; discovery is best-effort.
pub(crate) async fn announce(cx: &ProxyContext) {
    let target = subject::announcement(&cx.subject_prefix);
    if let Err(err) = publish_json(cx.bus.as_ref(), &target, &cx.announcement()).await {
        warn!(
            event = events::ANNOUNCE_PUBLISH_FAILED,
            component = COMPONENT,
            subject = target.as_str(),
            err = %err,
            "failed to publish discovery announcement"
        );
    }
}
