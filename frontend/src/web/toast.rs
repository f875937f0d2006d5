//! 通知提示
//!
//! 通知队列放在 signal 里；每条通知插入时挂一个定时器，到期后淘汰。

use bus_admin::notify::{Clock, NoticeKind, NotificationQueue, Notifier, SystemClock};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<NotificationQueue>,
    clock: SystemClock,
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new(ttl)),
            clock: SystemClock,
        }
    }

    pub fn queue(&self) -> RwSignal<NotificationQueue> {
        self.queue
    }

    pub fn dismiss(&self, id: i64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Notifier for Toasts {
    fn notify(&self, message: &str, kind: NoticeKind) {
        let queue = self.queue;
        let clock = self.clock;
        let ttl = queue.with_untracked(|q| q.ttl());
        queue.update(|q| {
            q.add_at(clock.now(), message, kind);
        });

        Timeout::new(ttl.as_millis() as u32, move || {
            // 页面已卸载时 signal 已释放，忽略即可
            queue.try_update(|q| q.prune_at(clock.now()));
        })
        .forget();
    }
}

pub fn provide_toasts(ttl: Duration) -> Toasts {
    let toasts = Toasts::new(ttl);
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("Toasts should be provided")
}
