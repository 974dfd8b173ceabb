//! Elapsed-time counter for the speedrun.
//!
//! WASM has no clocks here — the JS shell owns a single 1-second
//! `setInterval` that POSTs `/api/game/tick`, and the session decides
//! whether the tick counts. One shell interval, one session: there is
//! never more than one live ticker.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Timer {
    /// Whole elapsed seconds since `start()`.
    pub seconds: u32,
    pub running: bool,
}

impl Timer {
    pub fn new() -> Self {
        Self { seconds: 0, running: false }
    }

    /// Begin counting from zero. No-op when already running — a second
    /// start must not reset a speedrun in progress.
    pub fn start(&mut self) {
        if !self.running {
            self.seconds = 0;
            self.running = true;
        }
    }

    /// Halt counting and keep the value. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// One elapsed second. Ignored while stopped.
    pub fn tick(&mut self) {
        if self.running {
            self.seconds = self.seconds.saturating_add(1);
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// `MM:SS`, zero-padded. Minutes run past 59 rather than rolling into
/// an hour field.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// The timer widget content — inner HTML of the fixed `#speedrun-timer`
/// container, re-swapped on every tick.
pub fn render_display(seconds: u32) -> String {
    format!(
        r#"<div class="flex items-center gap-3 bg-card/90 backdrop-blur-sm border border-border rounded-xl px-5 py-3 glow-primary"><svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" class="w-5 h-5 fill-none stroke-primary stroke-2"><circle cx="12" cy="12" r="9" /><path stroke-linecap="round" d="M12 7v5l3 2" /></svg><span class="font-bold text-2xl text-primary tabular-nums">{}</span></div>"#,
        format_time(seconds)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_minutes_and_seconds() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(9), "00:09");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(600), "10:00");
    }

    #[test]
    fn format_time_has_no_hour_rollover() {
        assert_eq!(format_time(3661), "61:01");
    }

    #[test]
    fn start_zeroes_and_runs() {
        let mut t = Timer::new();
        assert!(!t.running);
        t.start();
        assert!(t.running);
        assert_eq!(t.seconds, 0);
    }

    #[test]
    fn start_does_not_double_start() {
        let mut t = Timer::new();
        t.start();
        t.tick();
        t.tick();
        t.start(); // already running — must not reset
        assert_eq!(t.seconds, 2);
        assert!(t.running);
    }

    #[test]
    fn tick_only_counts_while_running() {
        let mut t = Timer::new();
        t.tick();
        assert_eq!(t.seconds, 0);
        t.start();
        t.tick();
        assert_eq!(t.seconds, 1);
        t.stop();
        t.tick();
        assert_eq!(t.seconds, 1);
    }

    #[test]
    fn stop_is_idempotent_and_retains_value() {
        let mut t = Timer::new();
        t.start();
        t.tick();
        t.tick();
        t.tick();
        t.stop();
        t.stop();
        assert_eq!(t.seconds, 3);
        assert!(!t.running);
    }

    #[test]
    fn render_display_shows_formatted_time() {
        let html = render_display(65);
        assert!(html.contains("01:05"));
        assert!(html.contains("tabular-nums"));
    }
}
