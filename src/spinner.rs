use std::io::{
    stdout,
    Stdout,
    Write,
};
use std::sync::atomic::{
    AtomicBool,
    Ordering,
};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

static FRAMES: [char; 4] = ['|', '/', '-', '\\'];
static TICK: Duration = Duration::from_millis(100);

/*
 * One background task redrawing a rotating character on the same terminal
 * line while the fetch is in flight. The primary flow owns the write to
 * the completion flag, the task only reads it.
 */
pub struct Spinner<W: Write + Send + 'static> {
    done: Arc<AtomicBool>,
    handle: JoinHandle<W>,
    label: &'static str,
}

impl Spinner<Stdout> {
    pub fn start(label: &'static str) -> Self {
        Self::start_with(label, stdout())
    }
}

impl<W: Write + Send + 'static> Spinner<W> {
    pub fn start_with(label: &'static str, mut term: W) -> Self {
        let done = Arc::new(AtomicBool::new(false));
        let flag = done.clone();

        let handle = tokio::spawn(async move {
            let mut tick = 0;

            while !flag.load(Ordering::Relaxed) {
                let _ = write!(term, "\r{} {}", label, FRAMES[tick % FRAMES.len()]);
                let _ = term.flush();

                tick += 1;

                tokio::time::sleep(TICK).await;
            }

            // Hand the terminal back so the done line can only be written
            // after the task has observed the flag
            term
        });

        Self {
            done,
            handle,
            label,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /*
     * Set the completion flag and join the redraw task before printing the
     * done line, keeping terminal output deterministic
     */
    pub async fn stop(self) {
        self.done.store(true, Ordering::Relaxed);

        if let Ok(mut term) = self.handle.await {
            // Blank the frame line first, the done line could be shorter
            let _ = write!(term, "\r{:blank$}", "", blank = self.label.len() + 2);
            let _ = writeln!(term, "\r{} ... done", self.label);
            let _ = term.flush();
        }
    }
}
