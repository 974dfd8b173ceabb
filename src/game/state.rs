//! Session container — the single game session living in WASM memory.
//!
//! Uses `thread_local!` + `RefCell` for safe mutable access in
//! single-threaded WASM. The Web Worker keeps the module alive, so one
//! session spans the whole browser visit; restart replaces it wholesale
//! rather than resetting fields one by one.

use serde::Serialize;
use std::cell::RefCell;

use crate::game::room1::Room1;
use crate::game::room2::Room2;
use crate::game::room3::Room3;
use crate::game::room4::Room4;
use crate::game::timer::Timer;

/// The active screen. Per-room state lives inside the variant, so
/// entering a room constructs it fresh and leaving destroys it — stale
/// selections cannot leak across rooms or survive a restart. Rendering
/// matches exhaustively; an undefined screen is unrepresentable.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Welcome,
    Room1(Room1),
    Room2(Room2),
    Room3(Room3),
    Room4(Room4),
    End { final_seconds: u32 },
}

impl Screen {
    /// 1-based room number, 0 outside the rooms.
    pub fn room_number(&self) -> u8 {
        match self {
            Screen::Welcome | Screen::End { .. } => 0,
            Screen::Room1(_) => 1,
            Screen::Room2(_) => 2,
            Screen::Room3(_) => 3,
            Screen::Room4(_) => 4,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub screen: Screen,
    pub timer: Timer,
}

impl Session {
    pub fn new() -> Self {
        Self { screen: Screen::Welcome, timer: Timer::new() }
    }

    /// `welcome → room1`, timer counting from zero. Any other screen is
    /// a no-op — there is no way to re-enter room 1 mid-run.
    pub fn start(&mut self) -> bool {
        match self.screen {
            Screen::Welcome => {
                self.timer.start();
                self.screen = Screen::Room1(Room1::new());
                true
            }
            _ => false,
        }
    }

    /// Advance past the active room, only if its validator has passed.
    /// `room4 → end` stops the timer and freezes the final seconds.
    /// Anything else (welcome, end, unvalidated room) refuses and
    /// changes nothing.
    pub fn advance(&mut self) -> bool {
        let next = match &self.screen {
            Screen::Room1(r) if r.validated => Screen::Room2(Room2::new()),
            Screen::Room2(r) if r.validated => Screen::Room3(Room3::new()),
            Screen::Room3(r) if r.validated => Screen::Room4(Room4::new()),
            Screen::Room4(r) if r.validated => {
                self.timer.stop();
                Screen::End { final_seconds: self.timer.seconds }
            }
            _ => return false,
        };
        self.screen = next;
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::new());
}

/// Execute a closure with read access to the session.
pub fn with_session<F, R>(f: F) -> R
where
    F: FnOnce(&Session) -> R,
{
    SESSION.with(|s| f(&s.borrow()))
}

/// Execute a closure with mutable access to the session.
pub fn with_session_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut Session) -> R,
{
    SESSION.with(|s| f(&mut s.borrow_mut()))
}

/// Replace the session with a fresh one (restart).
pub fn reset_session() {
    SESSION.with(|s| {
        *s.borrow_mut() = Session::new();
    });
}

/// Export the session as JSON for the diagnostics route.
pub fn export_session_json() -> String {
    with_session(|s| serde_json::to_string(s).unwrap_or_else(|_| "{}".to_string()))
}
