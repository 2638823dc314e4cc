use std::time::Duration;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{self, Instant},
};
use tracing::trace;

/// Delay before a typed query is submitted
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Forwards only the latest input once it has been quiet for `period`.
///
/// Input still pending when the debouncer is dropped is discarded.
pub struct Debouncer {
    input: mpsc::UnboundedSender<String>,
    task: JoinHandle<()>,
}

impl Debouncer {
    #[must_use]
    pub fn spawn<F>(period: Duration, sink: F) -> Self
    where
        F: Fn(String) + Send + 'static,
    {
        let (input, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(period, rx, sink));
        Self { input, task }
    }

    /// Record a keystroke; restarts the quiet period
    pub fn push(&self, text: impl Into<String>) {
        let _ = self.input.send(text.into());
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run<F>(period: Duration, mut rx: mpsc::UnboundedReceiver<String>, sink: F)
where
    F: Fn(String) + Send + 'static,
{
    let mut pending: Option<String> = None;
    let deadline = time::sleep(period);
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            text = rx.recv() => {
                let Some(text) = text else { break };
                pending = Some(text);
                deadline.as_mut().reset(Instant::now() + period);
            }
            () = &mut deadline, if pending.is_some() => {
                if let Some(text) = pending.take() {
                    trace!("Debounced query {:?}", text);
                    sink(text);
                }
            }
        }
    }
}
