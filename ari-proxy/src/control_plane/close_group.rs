//! Shutdown accounting for deferred cleanups.

use tokio::sync::mpsc;

/// Tracks outstanding teardown work as a set of [`ClosePermit`] guards.
///
/// Each subscription listener holds one permit for its lifetime and releases
/// it only after its bus deregistration has run. [`CloseGroup::done`]
/// resolves once every permit is gone; the supervisor bounds that wait and
/// treats expiry as a stuck shutdown.
pub(crate) struct CloseGroup {
    tx: mpsc::Sender<()>,
    rx: mpsc::Receiver<()>,
}

/// Guard marking one cleanup as still outstanding.
pub(crate) struct ClosePermit {
    _tx: mpsc::Sender<()>,
}

impl CloseGroup {
    pub fn new() -> Self {
        // The channel is never sent on; only sender-drop is observed.
        let (tx, rx) = mpsc::channel(1);
        Self { tx, rx }
    }

    pub fn permit(&self) -> ClosePermit {
        ClosePermit {
            _tx: self.tx.clone(),
        }
    }

    /// Resolves once every issued permit has been dropped.
    pub async fn done(mut self) {
        drop(self.tx);
        while self.rx.recv().await.is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use super::CloseGroup;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn done_resolves_immediately_without_permits() {
        let group = CloseGroup::new();

        timeout(Duration::from_millis(100), group.done())
            .await
            .expect("empty group should be done at once");
    }

    #[tokio::test]
    async fn done_waits_for_every_permit() {
        let group = CloseGroup::new();
        let first = group.permit();
        let second = group.permit();

        drop(first);
        let mut done = Box::pin(group.done());
        assert!(
            timeout(Duration::from_millis(50), done.as_mut())
                .await
                .is_err(),
            "done must not resolve while a permit is held"
        );

        drop(second);
        timeout(Duration::from_millis(100), done)
            .await
            .expect("done should resolve after the last permit drops");
    }

    #[tokio::test]
    async fn permits_released_from_tasks_are_observed() {
        let group = CloseGroup::new();
        for _ in 0..4 {
            let permit = group.permit();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                drop(permit);
            });
        }

        timeout(Duration::from_millis(500), group.done())
            .await
            .expect("done should observe permits dropped from tasks");
    }
}
