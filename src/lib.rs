//! MMI DAY speedrun — in-browser WASM game server.
//!
//! Exports `handle_request(method, path, query, body)` for the Service
//! Worker bridge to call. Uses `matchit` for URL routing — the same
//! router engine that powers Axum.
//!
//! The game is a linear run over six screens: welcome, four puzzle
//! rooms gated by their validators, and a results screen with the
//! frozen time. Every user interaction is one request here; every
//! response is an HTML fragment for HTMX to swap into `#game-root`.

use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod game;
pub mod routes;

/// Process an HTTP-like request and return an HTML fragment.
///
/// Called from JavaScript (Web Worker) via wasm-bindgen.
///
/// # Arguments
/// * `method` — HTTP method (e.g., "GET", "POST")
/// * `path`   — URL path (e.g., "/api/room1/validate")
/// * `query`  — Query string (empty for the game's POST routes)
/// * `body`   — Request body (e.g., POST form data). Empty for GET.
///
/// # Returns
/// An HTML string fragment suitable for HTMX to swap into the DOM
/// (JSON for the state snapshot route).
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    // Build the router. matchit compiles route patterns into a radix tree.
    let mut router = matchit::Router::new();

    // Register routes — the value is a &str tag we match on below
    router.insert("/api/screen", "screen").ok();

    // Controller routes
    router.insert("/api/game/start", "game_start").ok();
    router.insert("/api/game/restart", "game_restart").ok();
    router.insert("/api/game/tick", "game_tick").ok();
    router.insert("/api/game/timer", "game_timer").ok();
    router.insert("/api/game/progress", "game_progress").ok();
    router.insert("/api/game/state", "game_state").ok();

    // Room routes
    router.insert("/api/room1/pick", "room1_pick").ok();
    router.insert("/api/room1/place", "room1_place").ok();
    router.insert("/api/room1/return", "room1_return").ok();
    router.insert("/api/room1/validate", "room1_validate").ok();
    router.insert("/api/room2/toggle", "room2_toggle").ok();
    router.insert("/api/room2/validate", "room2_validate").ok();
    router.insert("/api/room3/answer", "room3_answer").ok();
    router.insert("/api/room3/validate", "room3_validate").ok();
    router.insert("/api/room4/choose", "room4_choose").ok();
    router.insert("/api/room/continue", "room_continue").ok();

    match router.at(path) {
        Ok(matched) => match (*matched.value, method) {
            ("screen", "GET") => routes::screen::handle(query),

            ("game_start", "POST") => routes::game::handle_start_post(body),
            ("game_restart", "POST") => routes::game::handle_restart_post(body),
            ("game_tick", "POST") => routes::game::handle_tick_post(body),
            ("game_timer", "GET") => routes::game::handle_timer_get(query),
            ("game_progress", "GET") => routes::game::handle_progress_get(query),
            ("game_state", "GET") => routes::game::handle_state_get(query),

            ("room1_pick", "POST") => routes::rooms::handle_room1_pick_post(body),
            ("room1_place", "POST") => routes::rooms::handle_room1_place_post(body),
            ("room1_return", "POST") => routes::rooms::handle_room1_return_post(body),
            ("room1_validate", "POST") => routes::rooms::handle_room1_validate_post(body),
            ("room2_toggle", "POST") => routes::rooms::handle_room2_toggle_post(body),
            ("room2_validate", "POST") => routes::rooms::handle_room2_validate_post(body),
            ("room3_answer", "POST") => routes::rooms::handle_room3_answer_post(body),
            ("room3_validate", "POST") => routes::rooms::handle_room3_validate_post(body),
            ("room4_choose", "POST") => routes::rooms::handle_room4_choose_post(body),
            ("room_continue", "POST") => routes::rooms::handle_continue_post(body),

            _ => method_not_allowed(),
        },
        Err(_) => not_found(),
    }
}

fn not_found() -> String {
    r#"<span class="text-destructive">404 — route not found</span>"#.to_string()
}

fn method_not_allowed() -> String {
    r#"<span class="text-destructive">405 — method not allowed</span>"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CAREERS, STATEMENTS, SUBJECT_CARDS};
    use crate::game::state::reset_session;

    #[test]
    fn routes_screen() {
        reset_session();
        let html = handle_request("GET", "/api/screen", "", "");
        assert!(html.contains("Speedrun"));
        reset_session();
    }

    #[test]
    fn returns_404_for_unknown_route() {
        let html = handle_request("GET", "/api/nonexistent", "", "");
        assert!(html.contains("404"));
    }

    #[test]
    fn returns_405_for_wrong_method() {
        let html = handle_request("POST", "/api/screen", "", "");
        assert!(html.contains("405"));
        let html = handle_request("GET", "/api/game/start", "", "");
        assert!(html.contains("405"));
    }

    #[test]
    fn routes_state_snapshot() {
        reset_session();
        let json = handle_request("GET", "/api/game/state", "", "");
        assert!(json.contains("welcome"));
        assert!(json.contains("timer"));
        reset_session();
    }

    // ── The full speedrun, end to end through the request surface ──

    #[test]
    fn full_speedrun_scenario() {
        reset_session();

        // Welcome → room 1; the clock starts.
        let html = handle_request("POST", "/api/game/start", "", "");
        assert!(html.contains("Salle 1"));
        assert!(html.contains("Salle 1/4"));

        // Three seconds pass while solving room 1.
        for _ in 0..3 {
            handle_request("POST", "/api/game/tick", "", "");
        }

        for card in SUBJECT_CARDS {
            handle_request("POST", "/api/room1/pick", "", &format!("card={}", card.id));
            handle_request(
                "POST",
                "/api/room1/place",
                "",
                &format!("skill={}", card.skill.slug()),
            );
        }
        let html = handle_request("POST", "/api/room1/validate", "", "");
        assert!(html.contains("Bien vu !"));
        let html = handle_request("POST", "/api/room/continue", "", "");
        assert!(html.contains("Salle 2"));

        // Room 2: exactly the MMI careers.
        for career in CAREERS.iter().filter(|c| c.is_mmi) {
            handle_request(
                "POST",
                "/api/room2/toggle",
                "",
                &format!("career={}", career.id),
            );
        }
        let html = handle_request("POST", "/api/room2/validate", "", "");
        assert!(html.contains("Exact !"));
        let html = handle_request("POST", "/api/room/continue", "", "");
        assert!(html.contains("Salle 3"));

        // Room 3: every statement judged correctly.
        for s in STATEMENTS {
            handle_request(
                "POST",
                "/api/room3/answer",
                "",
                &format!("statement={}&value={}", s.id, s.is_true),
            );
        }
        let html = handle_request("POST", "/api/room3/validate", "", "");
        assert!(html.contains("Parfait !"));
        let html = handle_request("POST", "/api/room/continue", "", "");
        assert!(html.contains("Salle 4"));

        // Room 4: one wrong pick, then the official logo.
        let html = handle_request("POST", "/api/room4/choose", "", "logo=logo2");
        assert!(html.contains("Ce n'est pas le logo officiel"));
        let html = handle_request("POST", "/api/room4/choose", "", "logo=logo4");
        assert!(html.contains("Bravo !"));

        // The run ends with the time frozen at three seconds.
        let html = handle_request("POST", "/api/room/continue", "", "");
        assert!(html.contains("terminé !"));
        assert!(html.contains("00:03"));
        assert!(html.contains("Incroyable !")); // under a minute

        // Stray shell ticks after the finish change nothing.
        handle_request("POST", "/api/game/tick", "", "");
        let json = handle_request("GET", "/api/game/state", "", "");
        assert!(json.contains(r#""final_seconds":3"#));
        assert!(json.contains(r#""seconds":3"#));

        // Restart: back to welcome, clock zeroed, rooms rebuilt.
        let html = handle_request("POST", "/api/game/restart", "", "");
        assert!(html.contains("Commencer le speedrun"));
        let json = handle_request("GET", "/api/game/state", "", "");
        assert!(json.contains("welcome"));
        assert!(json.contains(r#""seconds":0"#));

        reset_session();
    }
}
