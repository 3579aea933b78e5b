// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element id generation.

use alloc::format;
use alloc::string::String;
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Produce a process-unique id of the form `understory-<n>`.
///
/// Builders call this for every element id the caller did not supply.
pub fn generate_id() -> String {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("understory-{n}")
}

/// Use `id` if supplied, otherwise generate one.
pub fn id_or_generate(id: Option<String>) -> String {
    id.unwrap_or_else(generate_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert!(a.starts_with("understory-"));
    }

    #[test]
    fn supplied_id_wins() {
        assert_eq!(id_or_generate(Some("mine".into())), "mine");
    }
}
