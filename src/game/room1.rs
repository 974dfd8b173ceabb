//! Room 1 — associate each subject card with its skill family.
//!
//! Pick-up/drop as two clicks: clicking an unplaced card arms it,
//! clicking a skill zone drops it there. A placed card clicks back to
//! the unplaced pool. A card is always in exactly one of
//! {placed, unplaced}; the unplaced pool is derived from the catalog
//! rather than tracked separately.

use serde::Serialize;
use std::collections::HashMap;

use crate::catalog::{self, Skill, SKILLS, SUBJECT_CARDS, SubjectCard};

pub const MSG_INCOMPLETE: &str = "Place toutes les matières avant de valider !";
pub const MSG_WRONG: &str = "Certaines matières ne sont pas associées à la bonne compétence.";
pub const MSG_PASSED: &str = "Bien vu ! Le BUT MMI développe des compétences variées.";

/// Validation result. Incomplete and wrong submissions differ only in
/// the message shown to the visitor, never in control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Incomplete,
    Wrong,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Room1 {
    /// card id → assigned skill. Absent = unplaced.
    pub placements: HashMap<&'static str, Skill>,
    /// Card armed for the next zone click.
    pub picked: Option<&'static str>,
    /// Frozen once true; only a restart rebuilds the room.
    pub validated: bool,
}

impl Room1 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm an unplaced card for the next zone click. Unknown ids and
    /// already-placed cards are ignored; inert once validated.
    pub fn pick(&mut self, id: &str) {
        if self.validated {
            return;
        }
        if let Some(card) = catalog::find_subject(id) {
            if !self.placements.contains_key(card.id) {
                self.picked = Some(card.id);
            }
        }
    }

    /// Drop the armed card into a zone. No-op without an armed card.
    pub fn place(&mut self, skill: Skill) {
        if self.validated {
            return;
        }
        if let Some(id) = self.picked.take() {
            self.placements.insert(id, skill);
        }
    }

    /// Move a placed card back to the unplaced pool.
    pub fn unplace(&mut self, id: &str) {
        if self.validated {
            return;
        }
        self.placements.remove(id);
    }

    /// Unplaced cards, in catalog order.
    pub fn unplaced(&self) -> Vec<&'static SubjectCard> {
        SUBJECT_CARDS
            .iter()
            .filter(|c| !self.placements.contains_key(c.id))
            .collect()
    }

    /// Cards currently assigned to a zone, in catalog order.
    pub fn cards_in(&self, skill: Skill) -> Vec<&'static SubjectCard> {
        SUBJECT_CARDS
            .iter()
            .filter(|c| self.placements.get(c.id) == Some(&skill))
            .collect()
    }

    /// Pass iff every card is placed AND every placement matches the
    /// catalog. Freezes the room on success.
    pub fn validate(&mut self) -> Outcome {
        if self.validated {
            return Outcome::Passed;
        }
        if self.placements.len() != SUBJECT_CARDS.len() {
            return Outcome::Incomplete;
        }
        let all_correct = SUBJECT_CARDS
            .iter()
            .all(|c| self.placements.get(c.id) == Some(&c.skill));
        if all_correct {
            self.validated = true;
            Outcome::Passed
        } else {
            Outcome::Wrong
        }
    }
}

// ── Rendering ──────────────────────────────────────────────────────

fn zone_classes(skill: Skill) -> &'static str {
    match skill {
        Skill::Developpement => "border-primary bg-primary/10 hover:bg-primary/20",
        Skill::Creation => "border-secondary bg-secondary/10 hover:bg-secondary/20",
        Skill::Communication => "border-success bg-success/10 hover:bg-success/20",
    }
}

/// Render the Room 1 surface. Interactive wiring disappears once the
/// room is validated, leaving the placements frozen on screen.
pub fn render(room: &Room1) -> String {
    let mut html = String::with_capacity(4096);

    // Header
    html.push_str(r#"<div class="text-center space-y-4">"#);
    html.push_str(
        r#"<h2 class="text-3xl md:text-4xl font-bold text-foreground">Salle 1 — <span class="text-gradient">Compétences MMI</span></h2>"#,
    );
    html.push_str(
        r#"<p class="text-muted-foreground text-lg">Associe chaque matière à la bonne compétence.</p>"#,
    );
    html.push_str("</div>");

    // Unplaced pool
    html.push_str(r#"<div class="bg-card/50 backdrop-blur-sm border border-border rounded-2xl p-4">"#);
    html.push_str(r#"<p class="text-sm text-muted-foreground mb-3">Matières à placer :</p>"#);
    html.push_str(r#"<div class="flex flex-wrap gap-3 min-h-[60px]">"#);

    let unplaced = room.unplaced();
    for card in &unplaced {
        let picked = room.picked == Some(card.id);
        let ring = if picked { " ring-2 ring-primary" } else { "" };
        if room.validated {
            html.push_str(&format!(
                r#"<span class="px-4 py-2 bg-muted border border-border rounded-lg font-medium">{}</span>"#,
                card.label
            ));
        } else {
            html.push_str(&format!(
                r##"<button hx-post="/api/room1/pick" hx-vals='{{"card":"{id}"}}' hx-target="#game-root" hx-swap="innerHTML" class="px-4 py-2 bg-muted border border-border rounded-lg cursor-grab hover:border-primary transition-all{ring}"><span class="font-medium">{label}</span></button>"##,
                id = card.id,
                label = card.label,
                ring = ring,
            ));
        }
    }
    if unplaced.is_empty() {
        html.push_str(r#"<p class="text-muted-foreground italic">Toutes les matières sont placées !</p>"#);
    }
    html.push_str("</div></div>");

    // Skill zones
    html.push_str(r#"<div class="grid md:grid-cols-3 gap-4">"#);
    for skill in SKILLS {
        let armed_ring = if room.picked.is_some() && !room.validated {
            " ring-2 ring-primary/50"
        } else {
            ""
        };
        if room.validated {
            html.push_str(&format!(
                r#"<div class="border-2 border-dashed rounded-2xl p-4 min-h-[200px] transition-all {}">"#,
                zone_classes(skill)
            ));
        } else {
            // The whole zone is a drop target: clicking it places the
            // armed card (the handler no-ops when nothing is armed).
            html.push_str(&format!(
                r##"<div hx-post="/api/room1/place" hx-vals='{{"skill":"{slug}"}}' hx-target="#game-root" hx-swap="innerHTML" class="border-2 border-dashed rounded-2xl p-4 min-h-[200px] transition-all cursor-pointer {zone}{ring}">"##,
                slug = skill.slug(),
                zone = zone_classes(skill),
                ring = armed_ring,
            ));
        }
        html.push_str(&format!(
            r#"<h3 class="font-bold text-lg mb-3 text-center">{}</h3>"#,
            skill.label()
        ));
        html.push_str(r#"<div class="space-y-2">"#);
        for card in room.cards_in(skill) {
            if room.validated {
                html.push_str(&format!(
                    r#"<div class="px-3 py-2 bg-card border border-border rounded-lg text-sm font-medium">{}</div>"#,
                    card.label
                ));
            } else {
                // hx-post on a nested element would also trigger the
                // zone's place request; stop the click at the card.
                html.push_str(&format!(
                    r##"<div hx-post="/api/room1/return" hx-vals='{{"card":"{id}"}}' hx-target="#game-root" hx-swap="innerHTML" onclick="event.stopPropagation()" class="px-3 py-2 bg-card border border-border rounded-lg text-sm font-medium cursor-pointer hover:bg-muted transition-all">{label}</div>"##,
                    id = card.id,
                    label = card.label,
                ));
            }
        }
        html.push_str("</div></div>");
    }
    html.push_str("</div>");

    // Validate / advance
    html.push_str(r#"<div class="flex justify-center">"#);
    if room.validated {
        html.push_str(
            r##"<button hx-post="/api/room/continue" hx-target="#game-root" hx-swap="innerHTML" class="btn-success btn-lg">Entrer dans la salle suivante &rarr;</button>"##,
        );
    } else {
        html.push_str(
            r##"<button hx-post="/api/room1/validate" hx-target="#game-root" hx-swap="innerHTML" class="btn-game btn-lg">&#x2713; Valider mes réponses</button>"##,
        );
    }
    html.push_str("</div>");

    html
}
