//! Temporary path allocation.
//!
//! Names are unique per process per draw with probability bounded by the 64
//! bits of randomness in the suffix; no filesystem check is performed and no
//! reservation is taken. Collision avoidance beyond that is the caller's
//! concern.

use std::path::PathBuf;
use std::process;
use time::OffsetDateTime;
use uuid::Uuid;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a temporary file name from an optional prefix, the UTC calendar
/// date, the process id, and a random base-36 suffix.
pub fn temp_file_name(prefix: Option<&str>) -> String {
    let now = OffsetDateTime::now_utc();
    let stamp = format!(
        "{:04}{:02}{:02}",
        now.year(),
        u8::from(now.month()),
        now.day()
    );
    let entropy = Uuid::new_v4().as_u128() as u64;
    format!(
        "{}{}-{}-{}",
        prefix.unwrap_or(""),
        stamp,
        process::id(),
        encode_base36(entropy)
    )
}

/// Allocate a path for a new temporary file inside the platform temp
/// directory. The directory is re-resolved on every call.
pub fn alloc_temp_path(prefix: Option<&str>) -> PathBuf {
    std::env::temp_dir().join(temp_file_name(prefix))
}

fn encode_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut out = String::with_capacity(13);
    while value > 0 {
        out.push(BASE36[(value % 36) as usize] as char);
        value /= 36;
    }
    out.chars().rev().collect()
}
