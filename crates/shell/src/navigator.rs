//! Navigation seam toward the surrounding presentational shell.

use std::sync::Mutex;

/// Outbound navigation capability.
///
/// Redirects replace the current history entry, so a rejected
/// back-navigation cannot land on a guarded page again. This is the only
/// history manipulation the subsystem performs.
pub trait Navigator {
    fn replace(&self, path: &str);
}

/// Test fake recording every requested path.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().map(|paths| paths.clone()).unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, path: &str) {
        if let Ok(mut paths) = self.paths.lock() {
            paths.push(path.to_string());
        }
    }
}
