//! Background worker threads.
//!
//! A [`Worker`] owns one thread that takes jobs from a channel, runs them
//! through a handler and sends the outputs back. The UI thread submits jobs
//! and drains outputs without blocking, so all state stays on the UI thread.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Single background thread processing jobs in submission order.
pub struct Worker<J, O> {
    name: String,
    jobs: Option<Sender<J>>,
    outputs: Receiver<O>,
    handle: Option<JoinHandle<()>>,
}

impl<J, O> Worker<J, O>
where
    J: Send + 'static,
    O: Send + 'static,
{
    /// Start a worker thread named `name` running `handler` for each job.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the thread cannot be spawned.
    pub fn spawn<F>(name: &str, mut handler: F) -> io::Result<Self>
    where
        F: FnMut(J) -> O + Send + 'static,
    {
        let (job_tx, job_rx) = mpsc::channel::<J>();
        let (out_tx, out_rx) = mpsc::channel::<O>();

        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                for job in job_rx {
                    if out_tx.send(handler(job)).is_err() {
                        break;
                    }
                }
            })?;
        debug!(worker = name, "worker started");

        Ok(Self {
            name: name.to_string(),
            jobs: Some(job_tx),
            outputs: out_rx,
            handle: Some(handle),
        })
    }

    /// Queue a job. Returns false if the worker thread has exited.
    pub fn submit(&self, job: J) -> bool {
        let sent = self
            .jobs
            .as_ref()
            .is_some_and(|jobs| jobs.send(job).is_ok());
        if !sent {
            warn!(worker = %self.name, "worker gone, job dropped");
        }
        sent
    }

    /// Outputs finished since the last drain. Never blocks.
    pub fn drain(&self) -> Vec<O> {
        self.outputs.try_iter().collect()
    }
}

impl<J, O> Drop for Worker<J, O> {
    fn drop(&mut self) {
        // closing the job channel ends the thread's loop
        drop(self.jobs.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!(worker = %self.name, "worker thread panicked");
            }
        }
    }
}
