use tokio::sync::watch;

use crate::keypair::Keypair;

/// Observable single-value container for the active bundler keypair. The
/// bootstrap is the only writer and sets it at most once per process;
/// consumers read the current value or subscribe for the change.
#[derive(Debug)]
pub struct KeyHolder {
    tx: watch::Sender<Option<Keypair>>,
}

impl Default for KeyHolder {
    fn default() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }
}

impl KeyHolder {
    pub fn set(&self, keypair: Keypair) {
        self.tx.send_replace(Some(keypair));
    }

    pub fn get(&self) -> Option<Keypair> {
        self.tx.borrow().clone()
    }

    pub fn is_set(&self) -> bool {
        self.tx.borrow().is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Keypair>> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset() {
        let holder = KeyHolder::default();
        assert!(holder.get().is_none());
        assert!(!holder.is_set());
    }

    #[tokio::test]
    async fn set_is_visible_to_subscribers() {
        let holder = KeyHolder::default();
        let mut rx = holder.subscribe();

        let keypair = Keypair::random();
        let public_key = keypair.public_key();
        holder.set(keypair);

        rx.changed().await.unwrap();
        assert_eq!(
            rx.borrow().as_ref().map(|kp| kp.public_key()),
            Some(public_key)
        );
        assert!(holder.is_set());
    }
}
