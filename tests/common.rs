//! Common test utilities shared between integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_FIXTURE: AtomicUsize = AtomicUsize::new(0);

/// Temporary file holding test bytes, removed on drop
pub struct Fixture {
    pub path: PathBuf,
}

impl Fixture {
    pub fn new(bytes: &[u8]) -> Self {
        let n = NEXT_FIXTURE.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!("ibp-test-{}-{}.bin", std::process::id(), n));
        fs::write(&path, bytes).expect("Failed to write fixture");
        Fixture { path }
    }

    pub fn path_str(&self) -> &str {
        self.path.to_str().expect("Fixture path is not UTF-8")
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// The eight bytes `2A 00 00 00 00 00 60 40`: i32 42 followed by f32 3.5
pub const SCENARIO_BYTES: [u8; 8] = [0x2a, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x40];
