use lantern_inventory::context::Deferred;
use tokio::{sync::mpsc::WeakSender, task::JoinHandle};

use super::Event;

/// Deferred work waiting on a timer, by the window it belongs to.
#[derive(Default)]
pub struct DeferredTasks {
    tasks: Vec<(u8, JoinHandle<()>)>,
}

impl DeferredTasks {
    /// Posts `deferred` back to the session once its delay has passed.
    ///
    /// The task does not keep the session alive.
    pub fn schedule(&mut self, deferred: Deferred, events: WeakSender<Event>) {
        self.tasks.retain(|(_, task)| !task.is_finished());
        let Deferred {
            window_id,
            delay,
            action,
        } = deferred;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(events) = events.upgrade() else {
                return;
            };
            if events.send(Event::Deferred { window_id, action }).await.is_err() {
                log::debug!("Session ended before deferred work for window {window_id} ran");
            }
        });
        self.tasks.push((window_id, task));
    }

    /// Aborts everything still waiting for window `window_id`.
    pub fn cancel(&mut self, window_id: u8) {
        self.tasks.retain(|(window, task)| {
            if *window == window_id {
                task.abort();
                false
            } else {
                true
            }
        });
    }

    pub fn cancel_all(&mut self) {
        for (_, task) in self.tasks.drain(..) {
            task.abort();
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.iter().filter(|(_, task)| !task.is_finished()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for DeferredTasks {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use lantern_inventory::context::DeferredAction;
    use tokio::sync::mpsc;

    use super::*;

    fn open_after(window_id: u8, millis: u64) -> Deferred {
        Deferred {
            window_id,
            delay: Duration::from_millis(millis),
            action: DeferredAction::OpenWindow,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn due_work_comes_back_as_an_event() {
        let (sender, mut receiver) = mpsc::channel(4);
        let mut tasks = DeferredTasks::default();
        tasks.schedule(open_after(3, 200), sender.downgrade());
        assert_eq!(tasks.len(), 1);

        let event = receiver.recv().await.unwrap();
        assert!(matches!(
            event,
            Event::Deferred {
                window_id: 3,
                action: DeferredAction::OpenWindow
            }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_work_never_arrives() {
        let (sender, mut receiver) = mpsc::channel(4);
        let mut tasks = DeferredTasks::default();
        tasks.schedule(open_after(3, 200), sender.downgrade());
        tasks.schedule(open_after(4, 300), sender.downgrade());
        tasks.cancel(3);

        let event = receiver.recv().await.unwrap();
        assert!(matches!(event, Event::Deferred { window_id: 4, .. }));
        drop(sender);
        assert!(receiver.recv().await.is_none());
    }
}
