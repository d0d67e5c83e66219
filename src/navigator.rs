use tokio::sync::mpsc;

/// Where the user is sent once a reset has gone through.
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: &str);
}

/// Reports every navigation on a channel.
///
/// The terminal driver reads the channel to know when the redirect sequence
/// is over; tests read it to assert on what was opened and in which order.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelNavigator {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, target: &str) {
        tracing::info!(url = target, "Navigating");
        if self.sender.send(target.to_string()).is_err() {
            tracing::warn!(url = target, "Nobody is listening for navigations");
        }
    }
}
