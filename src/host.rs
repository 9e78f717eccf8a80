//! Services the embedding environment provides to page handlers.

/// Blocking dialogs and navigation, as a browser window would offer them.
pub trait Host: Send + Sync {
    /// Show a blocking message to the user.
    fn alert(&self, message: &str);

    /// Reload the current page, picking up whatever session the server set.
    fn reload(&self);

    /// Navigate to another URL.
    fn navigate(&self, url: &str);
}

/// Host for terminal sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleHost;

impl Host for ConsoleHost {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn reload(&self) {
        tracing::info!("Session established, reloading");
    }

    fn navigate(&self, url: &str) {
        tracing::info!(url = %url, "Redirected");
        println!("Continue at {}", url);
    }
}

/// Host that records what handlers asked of it, for tests and embedders
/// that inspect the outcome instead of showing it.
pub mod testing {
    use super::Host;
    use parking_lot::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum HostEvent {
        Alert(String),
        Reload,
        Navigate(String),
    }

    #[derive(Debug, Default)]
    pub struct RecordingHost {
        events: Mutex<Vec<HostEvent>>,
    }

    impl RecordingHost {
        pub fn events(&self) -> Vec<HostEvent> {
            self.events.lock().clone()
        }

        pub fn alerts(&self) -> Vec<String> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    HostEvent::Alert(msg) => Some(msg),
                    _ => None,
                })
                .collect()
        }
    }

    impl Host for RecordingHost {
        fn alert(&self, message: &str) {
            self.events.lock().push(HostEvent::Alert(message.to_string()));
        }

        fn reload(&self) {
            self.events.lock().push(HostEvent::Reload);
        }

        fn navigate(&self, url: &str) {
            self.events.lock().push(HostEvent::Navigate(url.to_string()));
        }
    }

}
