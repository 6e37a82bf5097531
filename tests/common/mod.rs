use std::cell::RefCell;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Keeps every record on the thread that emitted it, so parallel tests
/// only ever see their own output.
struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let entry = (record.level(), record.args().to_string());
        let _ = RECORDS.try_with(|records| records.borrow_mut().push(entry));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;

pub fn install_logger() {
    // Only the first call in a test binary installs it
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);
}

pub fn take_records() -> Vec<(Level, String)> {
    RECORDS.with(|records| records.take())
}
