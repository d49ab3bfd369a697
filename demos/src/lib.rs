// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Lineage demos: a placeholder family and logging setup.

use lineage_layout::{Ahnentafel, Family, LayoutError, Person};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Four complete generations of the Harding family, numbered `1..=15`.
const HARDINGS: [&str; 15] = [
    "Tanner Harding",
    "Robert Harding",
    "Kathy Cottle",
    "George Harding",
    "Kathlene Smith",
    "Keneth Cottle",
    "Donna Butler",
    "Ralph Harding",
    "Kathryn Olsen",
    "Karl Smith",
    "Retha Dukes",
    "Kenneth Cottle",
    "Nina Leavitt",
    "Allan Butler",
    "Freda Hiatt",
];

/// Builds the placeholder demo family.
pub fn harding_family() -> Result<Family, LayoutError> {
    let people = HARDINGS.iter().zip(1_u32..).map(|(name, n)| {
        Ahnentafel::try_from(n).map(|n| Person::new(*name, n))
    });
    Family::new(people.collect::<Result<Vec<_>, _>>()?)
}

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG`, the Lineage crates log at `debug` and everything else at
/// `info`. Returns `false` if a global subscriber was already installed.
pub fn init_logging() -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,lineage_layout=debug,lineage_selection=debug,lineage_shell=debug")
    });
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init()
        .is_ok()
}
