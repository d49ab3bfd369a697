// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Family tree basics.
//!
//! This example shows how to:
//! - Hand a family to a `TreeShell` and read back the laid-out cards.
//! - Feed pointer input through the shell: a pinch, a drag, and a tap.
//! - Open and close the detail overlay, logging each transition through `tracing`.
//! - Save the pan/zoom state as JSON for the next launch.
//!
//! Run:
//! - `cargo run -p lineage_demos --example family_tree`
//! - `RUST_LOG=trace cargo run -p lineage_demos --example family_tree` to see gesture traces.

use kurbo::{Rect, Vec2};
use lineage_demos::{harding_family, init_logging};
use lineage_selection::OverlayTransition;
use lineage_shell::{ShellConfig, ShellEvent, TreeShell};
use lineage_viewport::TransformState;

/// Logs what a host would animate for an overlay change.
fn report(transition: OverlayTransition) {
    match transition {
        OverlayTransition::SlideIn => tracing::info!("detail overlay slides up from the bottom"),
        OverlayTransition::SlideOut => tracing::info!("detail overlay slides back down"),
        OverlayTransition::Swap => tracing::info!("detail overlay swaps its person in place"),
        OverlayTransition::Unchanged => tracing::debug!("detail overlay unchanged"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let family = harding_family()?;
    let view = Rect::new(0.0, 0.0, 720.0, 1280.0);
    let mut shell = TreeShell::new(family, view, ShellConfig::default())?;

    let layout = shell.layout();
    println!(
        "canvas {}x{} with {} generations",
        layout.size().width,
        layout.size().height,
        layout.levels()
    );
    for (person, card) in shell.cards() {
        println!(
            "  #{:<2} {:<16} at ({:>6.1}, {:>6.1})",
            person.ahnentafel(),
            person.name(),
            card.x0,
            card.y0
        );
    }

    // Pinch out around the view center, then drag the tree to the left.
    let center = view.center();
    shell.pointer_down(1, center - Vec2::new(60.0, 0.0));
    shell.pointer_down(2, center + Vec2::new(60.0, 0.0));
    shell.pointer_move(2, center + Vec2::new(120.0, 0.0));
    shell.pointer_up(2);
    shell.pointer_up(1);

    shell.pointer_down(1, center);
    shell.pointer_move(1, center - Vec2::new(80.0, 0.0));
    shell.pointer_up(1);
    println!("zoom {:.2}, pan {:?}", shell.viewport().zoom(), shell.viewport().pan());

    // Tap Robert Harding's card.
    let robert = shell
        .cards()
        .find(|(p, _)| p.name() == "Robert Harding")
        .map(|(_, card)| card.center())
        .ok_or("Robert Harding is not on screen")?;
    shell.pointer_down(3, robert);
    if let ShellEvent::Tapped { ahnentafel, transition } = shell.pointer_up(3) {
        report(transition);
        tracing::info!(?ahnentafel, title = ?shell.detail_title(), "tap");
    }

    report(shell.back());

    let saved = serde_json::to_string(&shell.transform_state())?;
    println!("saved transform: {saved}");
    let restored: TransformState = serde_json::from_str(&saved)?;
    shell.restore_transform(restored);

    Ok(())
}
