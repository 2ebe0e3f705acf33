use futures::Stream;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::error::KeystreamError;
use crate::keyboard::KeyEvent;
use crate::modifiers::ModifierState;
use crate::reader::{DeviceReader, ReaderExit};
use crate::sink::OutputSink;
use crate::KeystreamResult;

/// A device that produces key events.
pub trait KeyEventSource: Stream<Item = KeystreamResult<KeyEvent>> + Unpin + Send + 'static {
    /// A human-readable name for the device, used in logs.
    fn name(&self) -> &str;
}

/// Reconstructs the text typed on a set of devices.
///
/// All the devices share the same modifier state and the same output sink.
pub struct Monitor {
    modifiers: Arc<ModifierState>,
    sink: OutputSink,
}

impl Monitor {
    /// Create a new `Monitor` that writes to `sink`.
    pub fn new(sink: OutputSink) -> Self {
        Self {
            modifiers: Arc::new(ModifierState::new()),
            sink,
        }
    }

    /// Begin reading key events from `devices`, one task per device.
    ///
    /// This function returns an error if no devices are given.
    pub fn start<S: KeyEventSource>(
        self,
        devices: impl IntoIterator<Item = S>,
    ) -> KeystreamResult<MonitorHandle> {
        let (stop, stop_rx) = watch::channel(false);
        let active = Arc::new(AtomicUsize::new(0));
        let mut readers = JoinSet::new();

        for device in devices {
            let name = device.name().to_owned();
            let reader = DeviceReader::new(
                name.clone(),
                device,
                Arc::clone(&self.modifiers),
                self.sink.clone(),
            );
            let stop_rx = stop_rx.clone();
            let active = Arc::clone(&active);

            active.fetch_add(1, Ordering::SeqCst);
            info!(device = %name, "monitoring device");

            readers.spawn(async move {
                let exit = reader.run(stop_rx).await;

                match &exit {
                    ReaderExit::EndOfStream => info!(device = %name, "device closed"),
                    ReaderExit::DeviceError(err) => warn!(device = %name, %err, "device failed"),
                    ReaderExit::Stopped => debug!(device = %name, "reader stopped"),
                }

                if active.fetch_sub(1, Ordering::SeqCst) == 1 {
                    warn!("{}", KeystreamError::NoActiveDevices);
                }

                (name, exit)
            });
        }

        if readers.is_empty() {
            return Err(KeystreamError::NoDevicesFound);
        }

        Ok(MonitorHandle {
            readers,
            stop,
            active,
        })
    }
}

/// The running device readers of a [`Monitor`].
///
/// Dropping the handle aborts the readers.
pub struct MonitorHandle {
    readers: JoinSet<(String, ReaderExit)>,
    stop: watch::Sender<bool>,
    active: Arc<AtomicUsize>,
}

impl MonitorHandle {
    /// The number of readers that are still running.
    pub fn active_readers(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Wait for every reader to exit, returning the name of each device and why its reader
    /// stopped.
    pub async fn wait_idle(&mut self) -> Vec<(String, ReaderExit)> {
        let mut exits = Vec::with_capacity(self.readers.len());

        while let Some(res) = self.readers.join_next().await {
            match res {
                Ok(exit) => exits.push(exit),
                Err(err) => error!(%err, "reader task failed"),
            }
        }

        exits
    }

    /// Ask every reader to stop and wait for them to finish the event they are handling.
    pub async fn stop(mut self) -> Vec<(String, ReaderExit)> {
        self.stop.send_replace(true);

        self.wait_idle().await
    }
}
