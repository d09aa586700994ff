use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_2048::core::engine::legal_moves;
use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::term::{FrameBuffer, GameView, Viewport};
use tui_2048::types::{Direction, GameAction};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn core_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut gs = GameState::new(1);
    let mut snap = GameSnapshot::default();

    // Warm-up.
    let _ = gs.apply_move(Direction::Left);
    gs.snapshot_into(&mut snap);

    let allocs = with_alloc_counting(|| {
        for _ in 0..250 {
            for dir in Direction::ALL {
                let _ = gs.apply_move(dir);
            }
            gs.snapshot_into(&mut snap);
            if gs.game_over() {
                let _ = gs.apply_action(GameAction::Restart);
            }
        }

        gs.restart();
        let _ = legal_moves(gs.board());
    });

    assert!(allocs == 0);
}

#[test]
fn render_into_and_frame_copy_reuse_buffers() {
    let gs = GameState::new(9);
    let snap = gs.snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);

    let mut shown = FrameBuffer::new(80, 24);

    // Warm-up.
    view.render_into(&snap, vp, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..20 {
            view.render_into(&snap, vp, &mut fb);
            // What the renderer does after emitting a diff.
            shown.clone_from(&fb);
        }
    });

    assert!(allocs == 0);
}
