use crossbeam_channel::Sender;
use tracing::{error, info};

/// Where informational diagnostic records end up.
pub trait InfoSink {
    fn info(&self, message: &str);
}

impl<T: InfoSink + ?Sized> InfoSink for &T {
    fn info(&self, message: &str) {
        (**self).info(message)
    }
}

/// Emits each record as a `tracing` event on the `pidwait::process` target.
///
/// Whatever subscriber the host process installed decides where the event
/// goes; this type never installs one.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl InfoSink for TracingSink {
    fn info(&self, message: &str) {
        info!(target: "pidwait::process", "{}", message);
    }
}

/// Forwards each record over a channel, e.g. to a test or a UI thread.
#[derive(Clone, Debug)]
pub struct ChannelSink {
    tx: Sender<String>,
}

impl ChannelSink {
    pub fn new(tx: Sender<String>) -> Self {
        ChannelSink { tx }
    }
}

impl InfoSink for ChannelSink {
    fn info(&self, message: &str) {
        if let Err(e) = self.tx.send(message.to_string()) {
            error!("Error when sending to diagnostic channel: {:?}", e)
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::unbounded;

    use super::*;

    #[test]
    fn channel_sink_forwards_in_order() {
        let (tx, rx) = unbounded();
        let sink = ChannelSink::new(tx);
        sink.info("first");
        sink.info("second");

        let got: Vec<String> = rx.try_iter().collect();
        assert_eq!(got, vec!["first", "second"]);
    }

    #[test]
    fn channel_sink_survives_dropped_receiver() {
        let (tx, rx) = unbounded();
        drop(rx);
        // only logs the send failure
        ChannelSink::new(tx).info("nobody listening");
    }
}
