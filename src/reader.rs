use std::sync::Arc;

use futures::{Stream, StreamExt};
use tokio::sync::watch;
use tracing::{debug, trace, warn};

use crate::error::KeystreamError;
use crate::keyboard::KeyEvent;
use crate::modifiers::ModifierState;
use crate::sink::OutputSink;
use crate::translate::translate;
use crate::KeystreamResult;

/// Why a [`DeviceReader`] stopped.
#[derive(Debug)]
pub enum ReaderExit {
    /// The device stopped producing events.
    EndOfStream,
    /// Reading from the device failed (e.g. it was unplugged).
    DeviceError(KeystreamError),
    /// The monitor asked the reader to stop.
    Stopped,
}

/// Reads the events of a single device, translating them into text.
pub struct DeviceReader<S> {
    name: String,
    events: S,
    modifiers: Arc<ModifierState>,
    sink: OutputSink,
}

impl<S> DeviceReader<S>
where
    S: Stream<Item = KeystreamResult<KeyEvent>> + Unpin,
{
    pub fn new(
        name: impl Into<String>,
        events: S,
        modifiers: Arc<ModifierState>,
        sink: OutputSink,
    ) -> Self {
        Self {
            name: name.into(),
            events,
            modifiers,
            sink,
        }
    }

    /// Read events until the device fails, runs out of events or `stop` is set.
    ///
    /// The stop signal is only observed between events: an event that has been read is always
    /// written out.
    pub async fn run(mut self, mut stop: watch::Receiver<bool>) -> ReaderExit {
        loop {
            if *stop.borrow() {
                return ReaderExit::Stopped;
            }

            let next = tokio::select! {
                next = self.events.next() => next,
                changed = stop.changed() => {
                    // The monitor went away without signalling, keep reading
                    if changed.is_err() {
                        return self.drain().await;
                    }

                    continue;
                }
            };

            match next {
                Some(Ok(event)) => self.handle_event(&event).await,
                Some(Err(err)) => return ReaderExit::DeviceError(err),
                None => return ReaderExit::EndOfStream,
            }
        }
    }

    /// Read events until the device fails or runs out of events.
    async fn drain(mut self) -> ReaderExit {
        while let Some(next) = self.events.next().await {
            match next {
                Ok(event) => self.handle_event(&event).await,
                Err(err) => return ReaderExit::DeviceError(err),
            }
        }

        ReaderExit::EndOfStream
    }

    async fn handle_event(&mut self, event: &KeyEvent) {
        trace!(device = %self.name, ts = %event.ts, code = %event.code, cause = ?event.cause, "key event");

        let translation = translate(event, &self.modifiers);

        if translation.is_empty() {
            return;
        }

        // Drop the text and carry on, the device is still readable
        if let Err(err) = self.sink.append_fragments(translation.fragments()).await {
            warn!(device = %self.name, %err, "dropping output");
        } else {
            debug!(device = %self.name, len = translation.fragments().len(), "wrote fragments");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_code::KeyCode;
    use futures::channel::mpsc;
    use futures::stream;
    use std::io::{self, Write};
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// A writer that fails the first `n` writes.
    struct Flaky(SharedBuf, usize);

    impl Write for Flaky {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.1 > 0 {
                self.1 -= 1;
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }

            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn reader<S>(events: S, sink: OutputSink) -> DeviceReader<S>
    where
        S: Stream<Item = KeystreamResult<KeyEvent>> + Unpin,
    {
        DeviceReader::new("test", events, Arc::new(ModifierState::new()), sink)
    }

    #[tokio::test]
    async fn reads_until_end_of_stream() {
        let buf = SharedBuf::default();
        let events = stream::iter(
            [
                KeyEvent::press(KeyCode::H),
                KeyEvent::release(KeyCode::H),
                KeyEvent::press(KeyCode::I),
                KeyEvent::press(KeyCode::Enter),
            ]
            .map(Ok),
        );
        let (_tx, rx) = watch::channel(false);

        let exit = reader(events, OutputSink::new(buf.clone())).run(rx).await;

        assert!(matches!(exit, ReaderExit::EndOfStream));
        assert_eq!(buf.contents(), "hi<ENTER>\n");
    }

    #[tokio::test]
    async fn device_errors_terminate_the_reader() {
        let buf = SharedBuf::default();
        let events = stream::iter(vec![
            Ok(KeyEvent::press(KeyCode::A)),
            Err(KeystreamError::DeviceRead {
                device: "/dev/input/event3".into(),
                source: io::Error::from_raw_os_error(libc::ENODEV),
            }),
            Ok(KeyEvent::press(KeyCode::B)),
        ]);
        let (_tx, rx) = watch::channel(false);

        let exit = reader(events, OutputSink::new(buf.clone())).run(rx).await;

        assert!(matches!(
            exit,
            ReaderExit::DeviceError(KeystreamError::DeviceRead { .. })
        ));
        assert_eq!(buf.contents(), "a");
    }

    #[tokio::test]
    async fn sink_failures_are_dropped() {
        let buf = SharedBuf::default();
        let events = stream::iter(
            [KeyEvent::press(KeyCode::A), KeyEvent::press(KeyCode::B)].map(Ok),
        );
        let (_tx, rx) = watch::channel(false);

        let exit = reader(events, OutputSink::new(Flaky(buf.clone(), 1)))
            .run(rx)
            .await;

        assert!(matches!(exit, ReaderExit::EndOfStream));
        assert_eq!(buf.contents(), "b");
    }

    #[tokio::test]
    async fn stops_when_signalled() {
        let buf = SharedBuf::default();
        let (events_tx, events_rx) = mpsc::unbounded();
        let (stop_tx, stop_rx) = watch::channel(false);

        let task = tokio::spawn(reader(events_rx, OutputSink::new(buf.clone())).run(stop_rx));

        events_tx
            .unbounded_send(Ok(KeyEvent::press(KeyCode::Z)))
            .unwrap();
        tokio::task::yield_now().await;
        stop_tx.send(true).unwrap();

        let exit = task.await.unwrap();

        assert!(matches!(exit, ReaderExit::Stopped));
        // Stopped either before taking the event or after writing all of it
        assert!(matches!(buf.contents().as_str(), "" | "z"));
        drop(events_tx);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn stopping_never_truncates_an_event() {
        for _ in 0..50 {
            let buf = SharedBuf::default();
            let (events_tx, events_rx) = mpsc::unbounded();
            let (stop_tx, stop_rx) = watch::channel(false);

            let task = tokio::spawn(reader(events_rx, OutputSink::new(buf.clone())).run(stop_rx));

            events_tx
                .unbounded_send(Ok(KeyEvent::press(KeyCode::Enter)))
                .unwrap();
            stop_tx.send(true).unwrap();

            let exit = task.await.unwrap();

            assert!(matches!(exit, ReaderExit::Stopped));
            assert!(matches!(buf.contents().as_str(), "" | "<ENTER>\n"));
        }
    }

    #[tokio::test]
    async fn keeps_reading_without_a_monitor() {
        let buf = SharedBuf::default();
        let events = stream::iter([KeyEvent::press(KeyCode::O), KeyEvent::press(KeyCode::K)].map(Ok));
        let (stop_tx, stop_rx) = watch::channel(false);
        drop(stop_tx);

        let exit = reader(events, OutputSink::new(buf.clone())).run(stop_rx).await;

        assert!(matches!(exit, ReaderExit::EndOfStream));
        assert_eq!(buf.contents(), "ok");
    }
}
