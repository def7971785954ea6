use crate::app::Dispatcher;
use crate::message::Message;
use crate::models::alert::ALERT_DISMISS_AFTER;
use crate::models::AlertKind;

/// Shows an alert and, unless it is a danger alert, schedules its dismissal.
/// Returns the alert id.
pub fn set(dispatcher: &Dispatcher, kind: AlertKind, message: impl Into<String>) -> u64 {
    let id = dispatcher.next_id();
    dispatcher.dispatch(Message::SetAlert {
        id,
        kind,
        message: message.into(),
    });
    if kind.auto_dismiss() {
        let dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ALERT_DISMISS_AFTER).await;
            dispatcher.dispatch(Message::ClearAlert { id: Some(id) });
        });
    }
    id
}

pub fn danger(dispatcher: &Dispatcher, message: impl Into<String>) -> u64 {
    set(dispatcher, AlertKind::Danger, message)
}

pub fn success(dispatcher: &Dispatcher, message: impl Into<String>) -> u64 {
    set(dispatcher, AlertKind::Success, message)
}

pub fn clear(dispatcher: &Dispatcher) {
    dispatcher.dispatch(Message::ClearAlert { id: None });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Store;
    use crate::web::mock::MockClient;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn success_alert_dismisses_itself() {
        let mut store = Store::new(Arc::new(MockClient::new()));
        success(&store.dispatcher(), "done");
        store.process_pending();
        assert!(store.state().alert.show);

        tokio::time::sleep(ALERT_DISMISS_AFTER + Duration::from_millis(1)).await;
        store.process_pending();
        assert!(!store.state().alert.show);
    }

    #[tokio::test(start_paused = true)]
    async fn danger_alert_stays() {
        let mut store = Store::new(Arc::new(MockClient::new()));
        danger(&store.dispatcher(), "boom");
        tokio::time::sleep(ALERT_DISMISS_AFTER * 2).await;
        store.process_pending();
        assert!(store.state().alert.show);
        assert_eq!(store.state().alert.message, "boom");
    }

    #[tokio::test(start_paused = true)]
    async fn newer_alert_survives_older_timer() {
        let mut store = Store::new(Arc::new(MockClient::new()));
        let dispatcher = store.dispatcher();
        success(&dispatcher, "first");
        tokio::time::sleep(Duration::from_secs(3)).await;
        success(&dispatcher, "second");
        tokio::time::sleep(Duration::from_secs(3)).await;
        store.process_pending();
        assert!(store.state().alert.show);
        assert_eq!(store.state().alert.message, "second");
    }
}
