// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated game session that exercises layer composition and diagnostics.
//!
//! Builds three layers — a scrolling world, a transparent HUD, and a masking
//! pause menu — then drives the per-frame entry points while pushing and
//! popping the menu mid-run. Composition events go to both a
//! [`PrettyPrintSink`](strata_debug::pretty::PrettyPrintSink) on stderr and a
//! [`JournalSink`](strata_debug::journal::JournalSink) whose JSON export is
//! printed at the end. A second thread polls the change flag the way an
//! external monitoring tool would.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc;
use std::time::Duration;

use strata_core::framework::Framework;
use strata_core::layer::{Layer, LayerKinds};
use strata_core::trace::{
    LookupFailedEvent, PopEvent, PopRefusedEvent, PushEvent, PushRefusedEvent, TraceSink,
};

use strata_debug::journal::{JournalSink, export_json};
use strata_debug::pretty::PrettyPrintSink;

const FRAME_COUNT: u32 = 12;
const FRAME_SECONDS: f64 = 1.0 / 60.0;

/// Input payload: one pressed key.
#[derive(Clone, Copy, Debug)]
struct KeyPress(char);

/// Render context: the camera's scroll offset.
#[derive(Clone, Copy, Debug)]
struct Camera {
    scroll_x: f64,
}

// ---------------------------------------------------------------------------
// Layers
// ---------------------------------------------------------------------------

/// The game world: updates, draws, and handles input; transparent to none.
struct WorldLayer {
    position: Cell<f64>,
    keys_seen: Cell<u32>,
}

impl WorldLayer {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            position: Cell::new(0.0),
            keys_seen: Cell::new(0),
        })
    }
}

impl Layer<f64> for WorldLayer {
    fn name(&self) -> &str {
        "world"
    }

    fn handle(&self, delta_seconds: &f64) {
        self.position
            .set(self.position.get() + 40.0 * delta_seconds);
    }

    // The world is the bottom of every stack; nothing lives beneath it.
    fn masks_below(&self) -> bool {
        true
    }
}

impl Layer<Camera> for WorldLayer {
    fn name(&self) -> &str {
        "world"
    }

    fn handle(&self, camera: &Camera) {
        println!(
            "draw world at x={:.2} (camera {:.2})",
            self.position.get(),
            camera.scroll_x
        );
    }

    fn masks_below(&self) -> bool {
        true
    }
}

impl Layer<KeyPress> for WorldLayer {
    fn name(&self) -> &str {
        "world"
    }

    fn handle(&self, key: &KeyPress) {
        self.keys_seen.set(self.keys_seen.get() + 1);
        println!("world handles key {:?}", key.0);
    }

    fn masks_below(&self) -> bool {
        true
    }
}

/// A heads-up display: draws on top of the world but lets everything through.
struct HudLayer;

impl Layer<Camera> for HudLayer {
    fn name(&self) -> &str {
        "hud"
    }

    fn handle(&self, _camera: &Camera) {
        println!("draw hud overlay");
    }

    fn masks_below(&self) -> bool {
        false
    }
}

/// A pause menu: opaque for input, drawing, and updates.
struct PauseMenuLayer {
    blink_phase: Cell<f64>,
}

impl PauseMenuLayer {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            blink_phase: Cell::new(0.0),
        })
    }
}

impl Layer<f64> for PauseMenuLayer {
    fn name(&self) -> &str {
        "pause_menu"
    }

    fn handle(&self, delta_seconds: &f64) {
        self.blink_phase
            .set((self.blink_phase.get() + delta_seconds) % 1.0);
    }

    fn masks_below(&self) -> bool {
        true
    }

    fn on_push(&self) {
        println!("pause menu opened, world updates are frozen");
    }

    fn on_pop(&self) {
        println!("pause menu closed");
    }
}

impl Layer<Camera> for PauseMenuLayer {
    fn name(&self) -> &str {
        "pause_menu"
    }

    fn handle(&self, _camera: &Camera) {
        println!("draw pause menu (blink {:.2})", self.blink_phase.get());
    }

    fn masks_below(&self) -> bool {
        true
    }
}

impl Layer<KeyPress> for PauseMenuLayer {
    fn name(&self) -> &str {
        "pause_menu"
    }

    fn handle(&self, key: &KeyPress) {
        println!("pause menu swallows key {:?}", key.0);
    }

    fn masks_below(&self) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Trace fan-out
// ---------------------------------------------------------------------------

/// Forwards every event to stderr and to a shared journal.
struct FanOutSink {
    pretty: PrettyPrintSink,
    journal: Rc<std::cell::RefCell<JournalSink>>,
}

impl TraceSink for FanOutSink {
    fn on_layer_pushed(&mut self, e: &PushEvent<'_>) {
        self.pretty.on_layer_pushed(e);
        self.journal.borrow_mut().on_layer_pushed(e);
    }

    fn on_layer_popped(&mut self, e: &PopEvent<'_>) {
        self.pretty.on_layer_popped(e);
        self.journal.borrow_mut().on_layer_popped(e);
    }

    fn on_push_refused(&mut self, e: &PushRefusedEvent<'_>) {
        self.pretty.on_push_refused(e);
        self.journal.borrow_mut().on_push_refused(e);
    }

    fn on_pop_refused(&mut self, e: &PopRefusedEvent) {
        self.pretty.on_pop_refused(e);
        self.journal.borrow_mut().on_pop_refused(e);
    }

    fn on_lookup_failed(&mut self, e: &LookupFailedEvent<'_>) {
        self.pretty.on_lookup_failed(e);
        self.journal.borrow_mut().on_lookup_failed(e);
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    let mut framework: Framework<KeyPress, Camera> = Framework::new();

    let journal = Rc::new(std::cell::RefCell::new(JournalSink::new()));
    framework.set_trace_sink(Box::new(FanOutSink {
        pretty: PrettyPrintSink::stderr(),
        journal: journal.clone(),
    }));

    // -- observer thread ---------------------------------------------------
    // Polls the change flag the way a monitoring tool would; only the flag
    // handle crosses the thread boundary.
    let flag = framework.change_flag();
    let (stop_tx, stop_rx) = mpsc::channel::<()>();
    let observer = std::thread::spawn(move || {
        let mut changes_seen = 0u32;
        loop {
            if flag.new_data_to_report() {
                changes_seen += 1;
                flag.acknowledge();
            }
            match stop_rx.recv_timeout(Duration::from_millis(1)) {
                Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
                Err(mpsc::RecvTimeoutError::Timeout) => {}
            }
        }
        changes_seen
    });

    // -- registration ------------------------------------------------------
    let world = WorldLayer::new();
    let menu = PauseMenuLayer::new();

    framework.input_registry_mut().register(world.clone());
    framework.drawable_registry_mut().register(world.clone());
    framework.updateable_registry_mut().register(world.clone());

    framework.drawable_registry_mut().register(Rc::new(HudLayer));

    framework.input_registry_mut().register(menu.clone());
    framework.drawable_registry_mut().register(menu.clone());
    framework.updateable_registry_mut().register(menu.clone());

    // -- session -----------------------------------------------------------
    framework
        .push_layers("world", LayerKinds::ALL)
        .expect("world is registered for all capabilities");
    framework
        .push_layers("hud", LayerKinds::DRAW)
        .expect("hud is registered for drawing");

    // A name that resolves nowhere, to show the failure path.
    if framework.push_layers("settings", LayerKinds::DRAW).is_err() {
        println!("(no settings screen in this demo)");
    }

    let mut camera = Camera { scroll_x: 0.0 };
    for frame in 0..FRAME_COUNT {
        if frame == 4 {
            framework
                .push_layers("pause_menu", LayerKinds::ALL)
                .expect("pause menu is registered for all capabilities");
        }
        if frame == 8 {
            framework.pop_layers(LayerKinds::ALL);
        }

        framework.receive_input(&KeyPress('w'));
        framework.update(FRAME_SECONDS);
        camera.scroll_x += 1.0;
        framework.draw(&camera);
    }

    let _ = stop_tx.send(());
    let changes_seen = observer.join().expect("observer thread panicked");
    println!("observer saw {changes_seen} composition change batch(es)");
    println!(
        "world saw {} key(s); {} layer(s) left on the draw stack",
        world.keys_seen.get(),
        framework.drawable_layer_count()
    );

    let mut stdout = std::io::stdout();
    export_json(journal.borrow().events(), &mut stdout).expect("writing the journal to stdout");
}
