//! Room 4 — find the official JPO logo among four candidates.
//!
//! Single choice with lockout: a wrong pick permanently disables that
//! option (the wrong-attempts set only grows), the right pick is
//! terminal for the room. No retry limit — the room is always solvable
//! by elimination.

use serde::Serialize;
use std::collections::HashSet;

use crate::catalog::{self, LOGOS};

pub const MSG_WRONG: &str = "Ce n'est pas le logo officiel de la JPO.";
pub const MSG_PASSED: &str = "Bravo ! Tu as terminé le parcours.";

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Correct,
    Wrong,
    /// Click on a locked-out option, an unknown id, or a validated room.
    Inert,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Room4 {
    pub selected: Option<&'static str>,
    /// Permanently disabled options. Grows, never shrinks.
    pub wrong_attempts: HashSet<&'static str>,
    /// Terminal for the room; only a restart rebuilds it.
    pub validated: bool,
}

impl Room4 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Click an option. The correct logo validates regardless of prior
    /// wrong attempts; a wrong logo joins the lockout set and nothing
    /// else changes.
    pub fn choose(&mut self, id: &str) -> Choice {
        if self.validated {
            return Choice::Inert;
        }
        let Some(logo) = catalog::find_logo(id) else {
            return Choice::Inert;
        };
        if self.wrong_attempts.contains(logo.id) {
            return Choice::Inert;
        }
        self.selected = Some(logo.id);
        if logo.is_correct {
            self.validated = true;
            Choice::Correct
        } else {
            self.wrong_attempts.insert(logo.id);
            Choice::Wrong
        }
    }
}

// ── Rendering ──────────────────────────────────────────────────────

/// Render the Room 4 surface. Locked-out logos are dimmed with a ✗
/// overlay and lose their click wiring; once validated everything is
/// inert and the winning logo carries a ✓ overlay.
pub fn render(room: &Room4) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(r#"<div class="text-center space-y-4">"#);
    html.push_str(
        r#"<div class="inline-flex items-center gap-2 px-4 py-2 bg-secondary/20 border border-secondary/30 rounded-full text-secondary text-sm font-medium">&#x2728; Salle finale</div>"#,
    );
    html.push_str(
        r#"<h2 class="text-3xl md:text-4xl font-bold text-foreground">Salle 4 — <span class="text-gradient">Logo MMI</span></h2>"#,
    );
    html.push_str(
        r#"<p class="text-muted-foreground text-lg">Clique sur le logo officiel du BUT MMI.</p>"#,
    );
    html.push_str("</div>");

    html.push_str(r#"<div class="grid grid-cols-2 gap-6">"#);
    for logo in LOGOS {
        let locked = room.wrong_attempts.contains(logo.id);
        let winner = room.validated && logo.is_correct;

        let mut classes =
            String::from("aspect-square rounded-2xl border-2 transition-all duration-300 relative overflow-hidden");
        if locked {
            classes.push_str(" border-destructive/50 opacity-50 cursor-not-allowed");
        } else if winner {
            classes.push_str(" border-success glow-success");
        } else if room.validated {
            classes.push_str(" border-border");
        } else {
            classes.push_str(" border-border hover:border-primary hover:scale-[1.02]");
        }

        // A missing image file hides itself and leaves the label and
        // the click target intact.
        let body = format!(
            r#"<div class="absolute inset-0 bg-gradient-to-br opacity-10 {gradient}"></div><div class="absolute inset-0 flex flex-col items-center justify-center p-6"><img src="{image}" alt="{label}" class="w-32 h-32 object-contain rounded-lg" onerror="this.style.display='none'"><p class="mt-4 font-medium text-foreground text-center">{label}</p></div>"#,
            gradient = logo.gradient,
            image = logo.image,
            label = logo.label,
        );

        let overlay = if locked {
            r#"<div class="absolute inset-0 bg-background/80 flex items-center justify-center"><span class="text-destructive font-semibold">&#x2715;</span></div>"#
        } else if winner {
            r#"<div class="absolute inset-0 bg-success/20 flex items-center justify-center"><span class="text-success text-4xl">&#x2713;</span></div>"#
        } else {
            ""
        };

        if room.validated || locked {
            html.push_str(&format!(
                r#"<div class="{classes}">{body}{overlay}</div>"#,
                classes = classes,
                body = body,
                overlay = overlay,
            ));
        } else {
            html.push_str(&format!(
                r##"<button hx-post="/api/room4/choose" hx-vals='{{"logo":"{id}"}}' hx-target="#game-root" hx-swap="innerHTML" class="{classes}">{body}</button>"##,
                id = logo.id,
                classes = classes,
                body = body,
            ));
        }
    }
    html.push_str("</div>");

    if room.validated {
        html.push_str(r#"<div class="flex justify-center animate-scale-in">"#);
        html.push_str(
            r##"<button hx-post="/api/room/continue" hx-target="#game-root" hx-swap="innerHTML" class="btn-success btn-lg">Voir mon résultat &rarr;</button>"##,
        );
        html.push_str("</div>");
    }

    html
}
