//! `/api/room*` routes — the four puzzle rooms' interactions plus the
//! single advance gate.
//!
//! Every mutation re-renders the whole active screen, so stale
//! fragments cannot drift from the session. Requests aimed at a room
//! that is not active fall through to a plain re-render: the session
//! never changes in response to an out-of-phase click.

use crate::game::state::{Screen, with_session_mut};
use crate::game::{Flash, room1, room2, room3, room4};
use crate::routes::screen;
use crate::routes::util::Params;

fn missing_param(name: &str) -> String {
    format!(r#"<span class="text-destructive">Missing {} parameter</span>"#, name)
}

// ── Room 1 — category matching ─────────────────────────────────────

/// Handle POST /api/room1/pick   (card={id})
pub fn handle_room1_pick_post(body: &str) -> String {
    let params = Params::from_form(body);
    let Some(card) = params.get("card") else {
        return missing_param("card");
    };
    with_session_mut(|s| {
        if let Screen::Room1(r) = &mut s.screen {
            r.pick(card);
        }
    });
    screen::render_current()
}

/// Handle POST /api/room1/place  (skill={slug})
/// Drops the armed card into the zone; no-op when nothing is armed.
pub fn handle_room1_place_post(body: &str) -> String {
    let params = Params::from_form(body);
    let Some(skill) = params.get("skill").and_then(crate::catalog::Skill::from_slug) else {
        return missing_param("skill");
    };
    with_session_mut(|s| {
        if let Screen::Room1(r) = &mut s.screen {
            r.place(skill);
        }
    });
    screen::render_current()
}

/// Handle POST /api/room1/return (card={id})
pub fn handle_room1_return_post(body: &str) -> String {
    let params = Params::from_form(body);
    let Some(card) = params.get("card") else {
        return missing_param("card");
    };
    with_session_mut(|s| {
        if let Screen::Room1(r) = &mut s.screen {
            r.unplace(card);
        }
    });
    screen::render_current()
}

/// Handle POST /api/room1/validate
/// Incomplete placement and wrong placement read differently but flow
/// identically; only a pass changes the room.
pub fn handle_room1_validate_post(_body: &str) -> String {
    let outcome = with_session_mut(|s| match &mut s.screen {
        Screen::Room1(r) => Some(r.validate()),
        _ => None,
    });
    match outcome {
        Some(room1::Outcome::Passed) => {
            screen::render_with(Some(&Flash::Success(room1::MSG_PASSED)), false)
        }
        Some(room1::Outcome::Incomplete) => {
            screen::render_with(Some(&Flash::Error(room1::MSG_INCOMPLETE)), false)
        }
        Some(room1::Outcome::Wrong) => {
            screen::render_with(Some(&Flash::Error(room1::MSG_WRONG)), false)
        }
        None => screen::render_current(),
    }
}

// ── Room 2 — multi-select classification ───────────────────────────

/// Handle POST /api/room2/toggle (career={id})
pub fn handle_room2_toggle_post(body: &str) -> String {
    let params = Params::from_form(body);
    let Some(career) = params.get("career") else {
        return missing_param("career");
    };
    with_session_mut(|s| {
        if let Screen::Room2(r) = &mut s.screen {
            r.toggle(career);
        }
    });
    screen::render_current()
}

/// Handle POST /api/room2/validate
/// Strict set equality; a miss shakes the shell for 500 ms.
pub fn handle_room2_validate_post(_body: &str) -> String {
    let outcome = with_session_mut(|s| match &mut s.screen {
        Screen::Room2(r) => Some(r.validate()),
        _ => None,
    });
    match outcome {
        Some(true) => screen::render_with(Some(&Flash::Success(room2::MSG_PASSED)), false),
        Some(false) => screen::render_with(Some(&Flash::Error(room2::MSG_WRONG)), true),
        None => screen::render_current(),
    }
}

// ── Room 3 — true/false judgment ───────────────────────────────────

/// Handle POST /api/room3/answer (statement={id}&value=true|false)
pub fn handle_room3_answer_post(body: &str) -> String {
    let params = Params::from_form(body);
    let Some(statement) = params.get("statement") else {
        return missing_param("statement");
    };
    let Some(value) = params.get_bool("value") else {
        return missing_param("value");
    };
    with_session_mut(|s| {
        if let Screen::Room3(r) = &mut s.screen {
            r.answer(statement, value);
        }
    });
    screen::render_current()
}

/// Handle POST /api/room3/validate
/// "Answer them all" and "at least one incorrect" are distinct
/// messages; only the wrong case shakes.
pub fn handle_room3_validate_post(_body: &str) -> String {
    let outcome = with_session_mut(|s| match &mut s.screen {
        Screen::Room3(r) => Some(r.validate()),
        _ => None,
    });
    match outcome {
        Some(room3::Outcome::Passed) => {
            screen::render_with(Some(&Flash::Success(room3::MSG_PASSED)), false)
        }
        Some(room3::Outcome::Incomplete) => {
            screen::render_with(Some(&Flash::Error(room3::MSG_INCOMPLETE)), false)
        }
        Some(room3::Outcome::Wrong) => {
            screen::render_with(Some(&Flash::Error(room3::MSG_WRONG)), true)
        }
        None => screen::render_current(),
    }
}

// ── Room 4 — single choice with lockout ────────────────────────────

/// Handle POST /api/room4/choose (logo={id})
/// The correct logo is terminal for the room; a wrong one locks itself
/// out permanently. Clicks on locked options change nothing.
pub fn handle_room4_choose_post(body: &str) -> String {
    let params = Params::from_form(body);
    let Some(logo) = params.get("logo") else {
        return missing_param("logo");
    };
    let choice = with_session_mut(|s| match &mut s.screen {
        Screen::Room4(r) => r.choose(logo),
        _ => room4::Choice::Inert,
    });
    match choice {
        room4::Choice::Correct => {
            screen::render_with(Some(&Flash::Success(room4::MSG_PASSED)), false)
        }
        room4::Choice::Wrong => screen::render_with(Some(&Flash::Error(room4::MSG_WRONG)), false),
        room4::Choice::Inert => screen::render_current(),
    }
}

// ── Advance gate ───────────────────────────────────────────────────

/// Handle POST /api/room/continue
/// The only way forward. `advance()` refuses unvalidated rooms, so a
/// hand-crafted request before the room passes just re-renders it.
pub fn handle_continue_post(_body: &str) -> String {
    with_session_mut(|s| {
        s.advance();
    });
    screen::render_current()
}
