//! Room 3 — judge four statements about studies after the BUT MMI.
//!
//! Each statement takes a true/false answer; unanswered is a third,
//! distinct condition. Validation requires every statement answered and
//! every answer matching the catalog's truth value.

use serde::Serialize;
use std::collections::HashMap;

use crate::catalog::{self, STATEMENTS};

pub const MSG_INCOMPLETE: &str = "Réponds à toutes les affirmations !";
pub const MSG_WRONG: &str = "Au moins une réponse est incorrecte. Réessaie.";
pub const MSG_PASSED: &str = "Parfait ! Les poursuites d'études après MMI sont nombreuses.";

/// Validation result; the two failures differ only in message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Incomplete,
    Wrong,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Room3 {
    /// statement id → the visitor's judgment. Absent = unanswered.
    pub answers: HashMap<&'static str, bool>,
    /// Frozen once true; only a restart rebuilds the room.
    pub validated: bool,
}

impl Room3 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a judgment. Re-answering overwrites; unknown ids are
    /// ignored; inert once validated.
    pub fn answer(&mut self, id: &str, value: bool) {
        if self.validated {
            return;
        }
        if let Some(statement) = catalog::find_statement(id) {
            self.answers.insert(statement.id, value);
        }
    }

    /// Pass iff all statements are answered AND every answer matches
    /// its truth value. Freezes the room on success.
    pub fn validate(&mut self) -> Outcome {
        if self.validated {
            return Outcome::Passed;
        }
        if self.answers.len() != STATEMENTS.len() {
            return Outcome::Incomplete;
        }
        let all_correct = STATEMENTS
            .iter()
            .all(|s| self.answers.get(s.id) == Some(&s.is_true));
        if all_correct {
            self.validated = true;
            Outcome::Passed
        } else {
            Outcome::Wrong
        }
    }
}

// ── Rendering ──────────────────────────────────────────────────────

/// Render the Room 3 surface: one card per statement with Vrai/Faux
/// buttons. After validation each card shows green or red against the
/// catalog's truth value.
pub fn render(room: &Room3) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(r#"<div class="text-center space-y-4">"#);
    html.push_str(
        r#"<h2 class="text-3xl md:text-4xl font-bold text-foreground">Salle 3 — <span class="text-gradient">Poursuites d'études</span></h2>"#,
    );
    html.push_str(
        r#"<p class="text-muted-foreground text-lg">Indique si les affirmations sont vraies ou fausses.</p>"#,
    );
    html.push_str("</div>");

    html.push_str(r#"<div class="space-y-4">"#);
    for statement in STATEMENTS {
        let answer = room.answers.get(statement.id).copied();

        let mut card_classes = String::from("p-5 rounded-xl border-2 bg-card transition-all");
        if room.validated {
            if answer == Some(statement.is_true) {
                card_classes.push_str(" border-success bg-success/5");
            } else {
                card_classes.push_str(" border-destructive bg-destructive/5");
            }
        } else if answer.is_some() {
            card_classes.push_str(" border-primary/50");
        } else {
            card_classes.push_str(" border-border");
        }

        html.push_str(&format!(r#"<div class="{}">"#, card_classes));
        html.push_str(&format!(
            r#"<p class="font-medium text-lg mb-4">{}</p>"#,
            statement.text
        ));

        let true_classes = if answer == Some(true) {
            "flex-1 py-3 px-4 rounded-lg border-2 font-semibold border-success bg-success/20 text-success"
        } else {
            "flex-1 py-3 px-4 rounded-lg border-2 font-semibold border-border hover:border-success/50"
        };
        let false_classes = if answer == Some(false) {
            "flex-1 py-3 px-4 rounded-lg border-2 font-semibold border-destructive bg-destructive/20 text-destructive"
        } else {
            "flex-1 py-3 px-4 rounded-lg border-2 font-semibold border-border hover:border-destructive/50"
        };

        html.push_str(r#"<div class="flex gap-3">"#);
        if room.validated {
            html.push_str(&format!(
                r#"<div class="{} text-center">&#x2713; Vrai</div>"#,
                true_classes
            ));
            html.push_str(&format!(
                r#"<div class="{} text-center">&#x2715; Faux</div>"#,
                false_classes
            ));
        } else {
            html.push_str(&format!(
                r##"<button hx-post="/api/room3/answer" hx-vals='{{"statement":"{id}","value":"true"}}' hx-target="#game-root" hx-swap="innerHTML" class="{classes}">&#x2713; Vrai</button>"##,
                id = statement.id,
                classes = true_classes,
            ));
            html.push_str(&format!(
                r##"<button hx-post="/api/room3/answer" hx-vals='{{"statement":"{id}","value":"false"}}' hx-target="#game-root" hx-swap="innerHTML" class="{classes}">&#x2715; Faux</button>"##,
                id = statement.id,
                classes = false_classes,
            ));
        }
        html.push_str("</div></div>");
    }
    html.push_str("</div>");

    html.push_str(r#"<div class="flex justify-center">"#);
    if room.validated {
        html.push_str(
            r##"<button hx-post="/api/room/continue" hx-target="#game-root" hx-swap="innerHTML" class="btn-success btn-lg">Salle finale &rarr;</button>"##,
        );
    } else {
        html.push_str(
            r##"<button hx-post="/api/room3/validate" hx-target="#game-root" hx-swap="innerHTML" class="btn-game btn-lg">&#x2713; Valider mes réponses</button>"##,
        );
    }
    html.push_str("</div>");

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(room: &mut Room3) {
        for s in STATEMENTS {
            room.answer(s.id, s.is_true);
        }
    }

    #[test]
    fn answer_records_and_overwrites() {
        let mut room = Room3::new();
        room.answer("master", false);
        assert_eq!(room.answers.get("master"), Some(&false));
        room.answer("master", true);
        assert_eq!(room.answers.get("master"), Some(&true));
        assert_eq!(room.answers.len(), 1);
    }

    #[test]
    fn answer_ignores_unknown_ids() {
        let mut room = Room3::new();
        room.answer("inconnue", true);
        assert!(room.answers.is_empty());
    }

    #[test]
    fn validate_incomplete_until_all_answered() {
        let mut room = Room3::new();
        room.answer("licence_pro", true);
        room.answer("master", true);
        assert_eq!(room.validate(), Outcome::Incomplete);
        assert!(!room.validated);
    }

    #[test]
    fn validate_passes_on_exact_answers() {
        let mut room = Room3::new();
        solve(&mut room);
        assert_eq!(room.validate(), Outcome::Passed);
        assert!(room.validated);
    }

    #[test]
    fn single_flip_fails() {
        for flipped in STATEMENTS {
            let mut room = Room3::new();
            for s in STATEMENTS {
                let v = if s.id == flipped.id { !s.is_true } else { s.is_true };
                room.answer(s.id, v);
            }
            assert_eq!(room.validate(), Outcome::Wrong, "flip of {}", flipped.id);
        }
    }

    #[test]
    fn double_negative_statement_expects_false() {
        let mut room = Room3::new();
        solve(&mut room);
        assert_eq!(room.answers.get("diplome_2_ans"), Some(&false));
        assert_eq!(room.validate(), Outcome::Passed);
    }

    #[test]
    fn validated_room_is_frozen() {
        let mut room = Room3::new();
        solve(&mut room);
        room.validate();
        room.answer("master", false);
        assert_eq!(room.answers.get("master"), Some(&true));
        assert_eq!(room.validate(), Outcome::Passed);
    }

    #[test]
    fn render_lists_statements_with_buttons() {
        let room = Room3::new();
        let html = render(&room);
        assert!(html.contains("Salle 3"));
        assert!(html.contains("licence professionnelle"));
        assert!(html.contains("On obtiens pas de diplome au bout de 2 ans"));
        assert!(html.contains("/api/room3/answer"));
        assert!(html.contains("Vrai"));
        assert!(html.contains("Faux"));
    }

    #[test]
    fn render_marks_given_answers() {
        let mut room = Room3::new();
        room.answer("master", true);
        let html = render(&room);
        assert!(html.contains("border-success bg-success/20"));
        assert!(html.contains("border-primary/50"));
    }

    #[test]
    fn render_validated_freezes_and_offers_continue() {
        let mut room = Room3::new();
        solve(&mut room);
        room.validate();
        let html = render(&room);
        assert!(!html.contains("/api/room3/answer"));
        assert!(html.contains("/api/room/continue"));
        assert!(html.contains("Salle finale"));
    }
}
