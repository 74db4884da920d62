/// Collaborator traits for Encore
///
/// The playback core performs no I/O of its own. Everything that talks to the
/// outside world (fetching a user's library, showing toasts) is reached
/// through these traits.
use crate::error::Result;
use crate::types::{Notification, Track, UserId};
use async_trait::async_trait;

/// Supplies a user's library
///
/// Called on login, on view entry and on explicit refresh. The returned
/// sequence is the library's natural order.
#[async_trait]
pub trait LibrarySync: Send + Sync {
    /// Fetch the full, ordered library for a user
    ///
    /// # Errors
    /// Returns an error if the library could not be retrieved. Callers keep
    /// their existing library in that case.
    async fn fetch(&self, user: &UserId) -> Result<Vec<Track>>;
}

/// Receives user-facing notifications
///
/// Fire-and-forget: no acknowledgment is expected, and the sink is
/// responsible for dismissing messages after its own interval.
pub trait NotificationSink {
    /// Deliver a notification
    fn notify(&self, notification: Notification);
}

impl<S: NotificationSink + ?Sized> NotificationSink for &S {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for std::rc::Rc<S> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Sink that drops every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _notification: Notification) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<Notification>>);

    impl NotificationSink for Recorder {
        fn notify(&self, notification: Notification) {
            self.0.borrow_mut().push(notification);
        }
    }

    struct StaticLibrary(Vec<Track>);

    #[async_trait]
    impl LibrarySync for StaticLibrary {
        async fn fetch(&self, _user: &UserId) -> Result<Vec<Track>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn sink_through_reference_and_rc() {
        let recorder = std::rc::Rc::new(Recorder::default());
        let shared = std::rc::Rc::clone(&recorder);

        (&*recorder).notify(Notification::info("a"));
        shared.notify(Notification::success("b"));

        let seen = recorder.0.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].severity, Severity::Success);
    }

    #[tokio::test]
    async fn library_sync_is_object_safe() {
        let owner = UserId::new("u");
        let sync: Box<dyn LibrarySync> = Box::new(StaticLibrary(vec![Track::new(
            "t1",
            "n",
            "a",
            "s",
            owner.clone(),
        )]));

        let tracks = sync.fetch(&owner).await.unwrap();
        assert_eq!(tracks.len(), 1);
    }
}
