//! Session Module
//! Scoped handle on the worker pool the pipeline runs in.
//!
//! Count parsing runs on this pool; polars keeps its own global pool.
//!
//! The pool is torn down when the `Session` is dropped, so every exit path
//! of a run releases it.

use crate::error::CleanResult;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

pub struct Session {
    app_name: String,
    pool: ThreadPool,
}

pub struct SessionBuilder {
    app_name: String,
    threads: usize,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            app_name: "BirdDataCleaning".to_string(),
            threads: 0,
        }
    }
}

impl SessionBuilder {
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Number of worker threads; 0 uses rayon's default.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn build(self) -> CleanResult<Session> {
        let prefix = self.app_name.clone();
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(move |i| format!("{}-{}", prefix, i))
            .build()?;

        info!(
            app = %self.app_name,
            threads = pool.current_num_threads(),
            "session started"
        );
        Ok(Session {
            app_name: self.app_name,
            pool,
        })
    }
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    /// Run `op` inside the session's pool; rayon work it spawns stays there.
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        debug!(app = %self.app_name, "entering session pool");
        self.pool.install(op)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        info!(app = %self.app_name, "session released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn install_runs_on_session_threads() {
        let session = Session::builder().app_name("counts").threads(2).build().unwrap();
        let names: Vec<String> = session.install(|| {
            (0..8)
                .into_par_iter()
                .map(|_| {
                    std::thread::current()
                        .name()
                        .unwrap_or_default()
                        .to_string()
                })
                .collect()
        });
        assert!(names.iter().all(|n| n == "counts-0" || n == "counts-1"));
    }
}
