use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::KeystreamError;
use crate::translate::Fragment;
use crate::KeystreamResult;

/// The destination of the reconstructed text stream, shared by every device reader.
///
/// Each call writes its bytes contiguously and flushes them before it completes, so concurrent
/// appends never interleave within a call.
#[derive(Clone)]
pub struct OutputSink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl OutputSink {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Write to the standard output of the process.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Append to the file at `path`, creating it if necessary.
    ///
    /// Every flush also syncs the file data to disk.
    pub fn file(path: &Path) -> KeystreamResult<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self::new(SyncedFile(file)))
    }

    /// Append `bytes` and flush them.
    pub async fn append(&self, bytes: &[u8]) -> KeystreamResult<()> {
        self.write(vec![bytes.to_vec()]).await
    }

    /// Append the `fragments` of one key event, flushing after each of them.
    ///
    /// No other append can land between two of the fragments.
    pub async fn append_fragments(&self, fragments: &[Fragment]) -> KeystreamResult<()> {
        if fragments.is_empty() {
            return Ok(());
        }

        let chunks = fragments
            .iter()
            .map(|fragment| fragment.to_bytes().into_owned())
            .collect();

        self.write(chunks).await
    }

    /// Write and flush `chunks` in order while holding the writer.
    ///
    /// Writing may block on a full pipe or a disk sync, so it runs on the blocking thread pool
    /// rather than on a runtime worker.
    async fn write(&self, chunks: Vec<Vec<u8>>) -> KeystreamResult<()> {
        let writer = Arc::clone(&self.writer);

        tokio::task::spawn_blocking(move || {
            let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);

            chunks
                .iter()
                .try_for_each(|chunk| write_flushed(&mut **writer, chunk))
        })
        .await
        .map_err(|err| KeystreamError::SinkWrite(io::Error::new(io::ErrorKind::Other, err)))?
    }
}

fn write_flushed(writer: &mut dyn Write, bytes: &[u8]) -> KeystreamResult<()> {
    writer
        .write_all(bytes)
        .and_then(|_| writer.flush())
        .map_err(KeystreamError::SinkWrite)
}

/// A file that is synced to disk on every flush.
struct SyncedFile(File);

impl Write for SyncedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()?;
        self.0.sync_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::{Duration, Instant};

    /// An in-memory writer that can be inspected while the sink owns a clone of it.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            // Write a byte at a time to expose any interleaving
            self.0.lock().unwrap().push(buf[0]);
            thread::yield_now();
            Ok(1)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// A writer that blocks the calling thread before each write.
    struct Slow(SharedBuf, Duration);

    impl Write for Slow {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            thread::sleep(self.1);
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn appends_fragments_in_order() {
        let buf = SharedBuf::default();
        let sink = OutputSink::new(buf.clone());

        sink.append_fragments(&[Fragment::Symbol("ENTER"), Fragment::Newline])
            .await
            .unwrap();
        sink.append_fragments(&[]).await.unwrap();
        sink.append(b"ok").await.unwrap();

        assert_eq!(buf.contents(), "<ENTER>\nok");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_appends_do_not_interleave() {
        const APPENDS: usize = 200;

        let buf = SharedBuf::default();
        let sink = OutputSink::new(buf.clone());

        let tasks = [Fragment::Symbol("TAB"), Fragment::Symbol("SPACE")]
            .into_iter()
            .map(|fragment| {
                let sink = sink.clone();
                tokio::spawn(async move {
                    for _ in 0..APPENDS {
                        sink.append_fragments(&[fragment]).await.unwrap();
                    }
                })
            })
            .collect::<Vec<_>>();

        for task in tasks {
            task.await.unwrap();
        }

        let contents = buf.contents();
        let symbols = contents
            .split_inclusive('>')
            .collect::<Vec<_>>();

        assert_eq!(symbols.len(), 2 * APPENDS);
        assert!(symbols.iter().all(|s| *s == "<TAB>" || *s == "<SPACE>"));
        assert_eq!(symbols.iter().filter(|s| **s == "<TAB>").count(), APPENDS);
    }

    #[tokio::test]
    async fn slow_writes_do_not_stall_the_runtime() {
        let sink = OutputSink::new(Slow(SharedBuf::default(), Duration::from_millis(300)));
        let write = tokio::spawn(async move { sink.append(b"x").await });
        let start = Instant::now();

        // The runtime has a single thread: the sleep only ends on time if the write runs elsewhere
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(start.elapsed() < Duration::from_millis(200));
        write.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn write_failures_are_reported() {
        let sink = OutputSink::new(Broken);

        let res = sink.append_fragments(&[Fragment::Char('a')]).await;

        assert!(matches!(res, Err(KeystreamError::SinkWrite(e)) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[tokio::test]
    async fn file_sink_appends() {
        let path = std::env::temp_dir().join(format!("keystream-sink-{}", std::process::id()));
        std::fs::write(&path, b"before:").unwrap();

        let sink = OutputSink::file(&path).unwrap();
        sink.append_fragments(&[Fragment::Char('x'), Fragment::Newline])
            .await
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(contents, "before:x\n");
    }
}
