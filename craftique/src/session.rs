use tokio::sync::watch;
use tracing::info;

use crate::account::Identity;

/// The single session of the client. Being authenticated is having an identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// Holds the current session and notifies subscribers of every change.
#[derive(Debug)]
pub struct SessionStore {
    sender: watch::Sender<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Session::default());
        Self { sender }
    }

    pub fn begin_session(&self, identity: Identity) {
        info!("session opened for {}", identity.handle);
        self.sender.send_replace(Session {
            identity: Some(identity),
        });
    }

    pub fn end_session(&self) {
        if let Some(identity) = self.sender.borrow().identity() {
            info!("session closed for {}", identity.handle);
        }
        self.sender.send_replace(Session::default());
    }

    pub fn session(&self) -> Session {
        self.sender.borrow().clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.sender.borrow().identity.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.sender.borrow().is_authenticated()
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.sender.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Role;

    fn identity() -> Identity {
        Identity {
            handle: "buyer".to_string(),
            display_name: "Hassan Khan".to_string(),
            role: Role::Buyer,
        }
    }

    #[test]
    fn begin_and_end_session() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());
        assert_eq!(store.identity(), None);

        store.begin_session(identity());
        assert!(store.is_authenticated());
        assert_eq!(store.identity(), Some(identity()));

        store.end_session();
        assert!(!store.is_authenticated());
        assert_eq!(store.session(), Session::default());
    }

    #[tokio::test]
    async fn subscribers_are_notified() {
        let store = SessionStore::new();
        let mut receiver = store.subscribe();
        assert!(!receiver.borrow_and_update().is_authenticated());

        store.begin_session(identity());
        receiver.changed().await.unwrap();
        assert_eq!(
            receiver.borrow_and_update().identity().map(|i| i.handle.as_str()),
            Some("buyer")
        );

        store.end_session();
        receiver.changed().await.unwrap();
        assert!(!receiver.borrow_and_update().is_authenticated());
    }
}
