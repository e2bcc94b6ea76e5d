//! Cosmetic terminal spinner shown while a generation call blocks. Runs on
//! its own thread and is stopped through an atomic flag; it holds no other
//! shared state and has no effect on correctness.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL: Duration = Duration::from_millis(120);

pub struct Progress {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Progress {
    /// Starts the spinner with an elapsed-seconds counter next to `label`.
    pub fn start(label: &str) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let label = label.to_string();
        let handle = thread::spawn(move || {
            let started = Instant::now();
            let mut frame = 0usize;
            while !flag.load(Ordering::Relaxed) {
                let spinner = FRAMES[frame % FRAMES.len()];
                let elapsed = started.elapsed().as_secs();
                eprint!("\r{spinner} {label} ({elapsed}s)");
                let _ = io::stderr().flush();
                frame += 1;
                thread::sleep(FRAME_INTERVAL);
            }
            // Clear the animation line before the caller prints results.
            eprint!("\r\x1b[2K");
            let _ = io::stderr().flush();
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Signals the spinner thread and joins it.
    pub fn finish(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.shutdown();
    }
}
