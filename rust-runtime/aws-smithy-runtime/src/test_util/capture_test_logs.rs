/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::env;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing::Level;
use tracing_subscriber::fmt::TestWriter;

const VERBOSE_TEST_LOGS: &str = "VERBOSE_TEST_LOGS";

/// Keeps log capturing active on the current thread until dropped.
#[derive(Debug)]
pub struct LogCaptureGuard(#[allow(dead_code)] Option<DefaultGuard>);

/// Prints logs from the current test when `VERBOSE_TEST_LOGS` is set.
///
/// The variable is used as a `tracing_subscriber` env filter, so it may be a level
/// (`debug`) or a full filter expression. `1` and `true` enable `trace`.
#[must_use]
pub fn show_test_logs() -> LogCaptureGuard {
    let filter = match env::var(VERBOSE_TEST_LOGS).ok().as_deref() {
        Some("true") | Some("1") => "trace".to_string(),
        Some(filter) => filter.to_string(),
        None => return LogCaptureGuard(None),
    };
    eprintln!("Enabled verbose test logging with env filter {filter:?}.");
    let (sink, _logs) = LogSink::new(true);
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(sink))
        .finish();
    LogCaptureGuard(Some(tracing::subscriber::set_default(subscriber)))
}

/// Captures every log event emitted on the current thread, at all levels.
///
/// Capturing stops when the returned guard is dropped. The logs are echoed to the test output
/// as well when `VERBOSE_TEST_LOGS` is set.
#[must_use]
pub fn capture_test_logs() -> (LogCaptureGuard, Rx) {
    let (sink, logs) = LogSink::new(env::var(VERBOSE_TEST_LOGS).is_ok());
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(Mutex::new(sink))
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (LogCaptureGuard(Some(guard)), logs)
}

/// Read side of the captured logs.
#[derive(Debug)]
pub struct Rx(Arc<Mutex<Vec<u8>>>);

impl Rx {
    /// Returns everything logged so far.
    ///
    /// # Panics
    /// If the logs are not valid UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

/// Buffers formatted log output, optionally echoing it to the test writer.
struct LogSink {
    captured: Arc<Mutex<Vec<u8>>>,
    echo: Option<TestWriter>,
}

impl LogSink {
    fn new(echo: bool) -> (Self, Rx) {
        let captured: Arc<Mutex<Vec<u8>>> = Default::default();
        let sink = LogSink {
            captured: captured.clone(),
            echo: echo.then(TestWriter::new),
        };
        (sink, Rx(captured))
    }
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.captured.lock().unwrap().extend_from_slice(buf);
        if let Some(echo) = &mut self.echo {
            echo.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match &mut self.echo {
            Some(echo) => echo.flush(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::capture_test_logs;

    #[test]
    fn captures_events_until_dropped() {
        let (guard, logs) = capture_test_logs();
        tracing::trace!(ledger = "my-ledger", "very detailed");
        drop(guard);
        tracing::info!("not captured");
        let contents = logs.contents();
        assert!(contents.contains("very detailed"), "{}", contents);
        assert!(contents.contains("ledger=\"my-ledger\""), "{}", contents);
        assert!(!contents.contains("not captured"), "{}", contents);
    }
}
