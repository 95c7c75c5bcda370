use chrono::{DateTime, Local, TimeZone};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

pub fn fixed_time() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 3, 9, 13, 4, 5)
        .single()
        .expect("Ambiguous test time")
}

/// In-memory sink that can still be read after a clone was handed to a
/// logger.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock().unwrap()).to_string()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Records its name in a shared event list on every write.
pub struct EventWriter {
    events: Arc<Mutex<Vec<String>>>,
    name: &'static str,
}

impl EventWriter {
    pub fn new(events: Arc<Mutex<Vec<String>>>, name: &'static str) -> Self {
        EventWriter { events, name }
    }
}

impl Write for EventWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.events.lock().unwrap().push(self.name.to_string());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
    }
}
