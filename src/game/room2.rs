//! Room 2 — select exactly the careers reachable from the BUT MMI.
//!
//! Toggle-set selection over the career catalog; validation is strict
//! set equality against the `is_mmi` flags, so both a missed career and
//! an extra one fail the same way.

use serde::Serialize;
use std::collections::HashSet;

use crate::catalog::{self, CAREERS};

pub const MSG_WRONG: &str = "Un ou plusieurs métiers ne correspondent pas au BUT MMI.";
pub const MSG_PASSED: &str = "Exact ! Le BUT MMI mène à de nombreux métiers du numérique.";

#[derive(Debug, Clone, Default, Serialize)]
pub struct Room2 {
    pub selected: HashSet<&'static str>,
    /// Frozen once true; only a restart rebuilds the room.
    pub validated: bool,
}

impl Room2 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle membership: add if absent, remove if present. Unknown ids
    /// are ignored; inert once validated.
    pub fn toggle(&mut self, id: &str) {
        if self.validated {
            return;
        }
        if let Some(career) = catalog::find_career(id) {
            if !self.selected.remove(career.id) {
                self.selected.insert(career.id);
            }
        }
    }

    /// Pass iff the selection equals the set of MMI-flagged careers —
    /// every flagged career selected and nothing else. Freezes the room
    /// on success.
    pub fn validate(&mut self) -> bool {
        if self.validated {
            return true;
        }
        let exact = CAREERS
            .iter()
            .all(|c| self.selected.contains(c.id) == c.is_mmi);
        if exact {
            self.validated = true;
        }
        exact
    }
}

// ── Rendering ──────────────────────────────────────────────────────

/// Render the Room 2 surface. After validation the MMI careers light up
/// green and a wrongly kept selection shows red, mirroring the frozen
/// answer back to the visitor.
pub fn render(room: &Room2) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(r#"<div class="text-center space-y-4">"#);
    html.push_str(
        r#"<h2 class="text-3xl md:text-4xl font-bold text-foreground">Salle 2 — <span class="text-gradient">Débouchés</span></h2>"#,
    );
    html.push_str(
        r#"<p class="text-muted-foreground text-lg">Sélectionne uniquement les métiers accessibles après un BUT MMI.</p>"#,
    );
    html.push_str("</div>");

    html.push_str(r#"<div class="grid sm:grid-cols-2 gap-4">"#);
    for career in CAREERS {
        let is_selected = room.selected.contains(career.id);
        let mut classes = String::from("p-5 rounded-xl border-2 text-left transition-all duration-300");
        if room.validated {
            if career.is_mmi {
                classes.push_str(" border-success bg-success/10 glow-success");
            } else if is_selected {
                classes.push_str(" border-destructive bg-destructive/10 glow-error");
            } else {
                classes.push_str(" border-border bg-card");
            }
        } else if is_selected {
            classes.push_str(" border-primary bg-primary/10 glow-primary hover:scale-[1.02]");
        } else {
            classes.push_str(" border-border bg-card hover:border-muted-foreground hover:scale-[1.02]");
        }

        let check_box = if is_selected {
            r#"<div class="w-6 h-6 rounded-md border-2 border-primary bg-primary flex items-center justify-center">&#x2713;</div>"#
        } else {
            r#"<div class="w-6 h-6 rounded-md border-2 border-muted-foreground"></div>"#
        };

        if room.validated {
            html.push_str(&format!(
                r#"<div class="{classes}"><div class="flex items-center justify-between"><span class="font-semibold text-lg">{label}</span>{check}</div></div>"#,
                classes = classes,
                label = career.label,
                check = check_box,
            ));
        } else {
            html.push_str(&format!(
                r##"<button hx-post="/api/room2/toggle" hx-vals='{{"career":"{id}"}}' hx-target="#game-root" hx-swap="innerHTML" class="{classes}"><div class="flex items-center justify-between"><span class="font-semibold text-lg">{label}</span>{check}</div></button>"##,
                id = career.id,
                classes = classes,
                label = career.label,
                check = check_box,
            ));
        }
    }
    html.push_str("</div>");

    html.push_str(r#"<div class="flex justify-center">"#);
    if room.validated {
        html.push_str(
            r##"<button hx-post="/api/room/continue" hx-target="#game-root" hx-swap="innerHTML" class="btn-success btn-lg">Continuer &rarr;</button>"##,
        );
    } else {
        html.push_str(
            r##"<button hx-post="/api/room2/validate" hx-target="#game-root" hx-swap="innerHTML" class="btn-game btn-lg">&#x2713; Valider ma sélection</button>"##,
        );
    }
    html.push_str("</div>");

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mmi_ids() -> Vec<&'static str> {
        CAREERS.iter().filter(|c| c.is_mmi).map(|c| c.id).collect()
    }

    #[test]
    fn toggle_adds_and_removes() {
        let mut room = Room2::new();
        room.toggle("dev_web");
        assert!(room.selected.contains("dev_web"));
        room.toggle("dev_web");
        assert!(!room.selected.contains("dev_web"));
    }

    #[test]
    fn toggle_ignores_unknown_ids() {
        let mut room = Room2::new();
        room.toggle("astronaute");
        assert!(room.selected.is_empty());
    }

    #[test]
    fn exact_selection_passes() {
        let mut room = Room2::new();
        for id in mmi_ids() {
            room.toggle(id);
        }
        assert!(room.validate());
        assert!(room.validated);
    }

    #[test]
    fn strict_subset_fails() {
        let mut room = Room2::new();
        let ids = mmi_ids();
        for id in &ids[..ids.len() - 1] {
            room.toggle(id);
        }
        assert!(!room.validate());
        assert!(!room.validated);
    }

    #[test]
    fn strict_superset_fails() {
        let mut room = Room2::new();
        for id in mmi_ids() {
            room.toggle(id);
        }
        room.toggle("cybersecurite");
        assert!(!room.validate());
    }

    #[test]
    fn empty_selection_fails() {
        let mut room = Room2::new();
        assert!(!room.validate());
    }

    #[test]
    fn validated_room_is_frozen() {
        let mut room = Room2::new();
        for id in mmi_ids() {
            room.toggle(id);
        }
        room.validate();
        room.toggle("dev_web");
        assert!(room.selected.contains("dev_web"));
        assert!(room.validate());
    }

    #[test]
    fn render_lists_all_careers() {
        let room = Room2::new();
        let html = render(&room);
        assert!(html.contains("Salle 2"));
        assert!(html.contains("Développeur web"));
        assert!(html.contains("Cybersécurité"));
        assert!(html.contains("/api/room2/toggle"));
        assert!(html.contains("Valider ma sélection"));
    }

    #[test]
    fn render_marks_selection() {
        let mut room = Room2::new();
        room.toggle("webdesigner");
        let html = render(&room);
        assert!(html.contains("border-primary bg-primary/10"));
    }

    #[test]
    fn render_validated_shows_answer_and_continue() {
        let mut room = Room2::new();
        for id in mmi_ids() {
            room.toggle(id);
        }
        room.validate();
        let html = render(&room);
        assert!(!html.contains("/api/room2/toggle"));
        assert!(html.contains("border-success"));
        assert!(html.contains("/api/room/continue"));
        assert!(html.contains("Continuer"));
    }
}
