//! `/api/game/*` routes — session lifecycle (start, restart), the
//! 1-second tick, the chrome fragments, and a JSON snapshot.

use crate::game::state::{self, with_session, with_session_mut};
use crate::game::{progress, timer};
use crate::routes::screen;

// ── POST /api/game/start ───────────────────────────────────────────

/// Handle POST /api/game/start
/// `welcome → room1` and the timer starts counting. Renders the new
/// screen; a start on any other screen just re-renders it.
pub fn handle_start_post(_body: &str) -> String {
    with_session_mut(|s| {
        s.start();
    });
    screen::render_current()
}

// ── POST /api/game/restart ─────────────────────────────────────────

/// Handle POST /api/game/restart
/// Replaces the session outright: welcome screen, timer at zero, every
/// room rebuilt fresh on its next entry.
pub fn handle_restart_post(_body: &str) -> String {
    state::reset_session();
    screen::render_current()
}

// ── POST /api/game/tick ────────────────────────────────────────────

/// Handle POST /api/game/tick
/// One elapsed second, posted by the shell's single `setInterval`.
/// Counts only while the timer runs; returns the timer display for the
/// `#speedrun-timer` swap.
pub fn handle_tick_post(_body: &str) -> String {
    with_session_mut(|s| {
        s.timer.tick();
        timer::render_display(s.timer.seconds)
    })
}

// ── GET /api/game/timer ────────────────────────────────────────────

/// Handle GET /api/game/timer — the timer display fragment.
pub fn handle_timer_get(_query: &str) -> String {
    with_session(|s| timer::render_display(s.timer.seconds))
}

// ── GET /api/game/progress ─────────────────────────────────────────

/// Handle GET /api/game/progress — the progress indicator fragment.
pub fn handle_progress_get(_query: &str) -> String {
    with_session(|s| progress::render(s.screen.room_number()))
}

// ── GET /api/game/state ────────────────────────────────────────────

/// Handle GET /api/game/state
/// JSON snapshot of the session for diagnostics and tests. Read-only;
/// there is no import counterpart.
pub fn handle_state_get(_query: &str) -> String {
    state::export_session_json()
}
