//! `/api/screen` — render whatever screen the session is on.
//!
//! The `Screen` match is exhaustive, so an undefined screen cannot be
//! reached. Rooms get the fixed chrome (timer top-right, progress
//! top-left); welcome and end screens own the full viewport.

use crate::game::state::{self, Screen};
use crate::game::{Flash, end, progress, room1, room2, room3, room4, timer};

/// Handle GET /api/screen — the initial page-load render.
pub fn handle(_query: &str) -> String {
    render_current()
}

/// Render the active screen with no feedback attached.
pub fn render_current() -> String {
    render_with(None, false)
}

/// Render the active screen, optionally with a one-shot flash banner
/// and a cosmetic shake on the room shell. Flash and shake apply to
/// rooms only; welcome and end never carry feedback.
pub fn render_with(flash: Option<&Flash>, shake: bool) -> String {
    state::with_session(|s| {
        let body = match &s.screen {
            Screen::Welcome => return render_welcome(),
            Screen::Room1(r) => room1::render(r),
            Screen::Room2(r) => room2::render(r),
            Screen::Room3(r) => room3::render(r),
            Screen::Room4(r) => room4::render(r),
            Screen::End { final_seconds } => return end::render(*final_seconds),
        };

        let mut html = String::with_capacity(body.len() + 2048);

        // Fixed chrome while inside the rooms.
        html.push_str(r#"<div id="speedrun-timer" class="fixed top-6 right-6 z-50">"#);
        html.push_str(&timer::render_display(s.timer.seconds));
        html.push_str("</div>");
        html.push_str(r#"<div class="fixed top-6 left-6 z-50">"#);
        html.push_str(&progress::render(s.screen.room_number()));
        html.push_str("</div>");

        // Room shell. The shake class ships on the fragment and clears
        // itself 500 ms later; nothing about it is session state.
        html.push_str(r#"<div class="min-h-screen flex flex-col items-center justify-center p-6 pt-24">"#);
        let shell_class = if shake {
            "max-w-4xl w-full space-y-8 animate-fade-in animate-shake"
        } else {
            "max-w-4xl w-full space-y-8 animate-fade-in"
        };
        html.push_str(&format!(r#"<div id="room-shell" class="{}">"#, shell_class));
        if let Some(flash) = flash {
            html.push_str(&flash.render());
        }
        html.push_str(&body);
        html.push_str("</div></div>");
        if shake {
            html.push_str(
                r#"<script>setTimeout(function(){var el=document.getElementById('room-shell');if(el){el.classList.remove('animate-shake');}},500);</script>"#,
            );
        }
        html
    })
}

/// The welcome screen: title, instructions, start control.
fn render_welcome() -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(
        r#"<div class="min-h-screen flex flex-col items-center justify-center p-6 relative overflow-hidden">"#,
    );
    html.push_str(r#"<div class="relative z-10 max-w-2xl text-center space-y-8 animate-fade-in">"#);

    html.push_str(r#"<div class="space-y-4">"#);
    html.push_str(
        r#"<div class="inline-flex items-center gap-2 px-4 py-2 bg-primary/10 border border-primary/30 rounded-full text-primary text-sm font-medium">&#x26A1; Journée Portes Ouvertes</div>"#,
    );
    html.push_str(
        r#"<h1 class="text-5xl md:text-7xl font-extrabold"><span class="text-gradient">Speedrun</span><br><span class="text-foreground">JPO</span></h1>"#,
    );
    html.push_str(
        r#"<p class="text-xl text-muted-foreground">Découvre le BUT MMI en un temps record</p>"#,
    );
    html.push_str("</div>");

    html.push_str(r#"<div class="bg-card/50 backdrop-blur-sm border border-border rounded-2xl p-6 space-y-4">"#);
    html.push_str(
        r#"<h2 class="text-lg font-semibold text-foreground">&#x1F3AF; Comment ça marche ?</h2>"#,
    );
    html.push_str(r#"<div class="space-y-3 text-muted-foreground">"#);
    html.push_str(
        r#"<p>Tu vas traverser <span class="text-primary font-semibold">4 salles</span> thématiques.</p>"#,
    );
    html.push_str(r#"<p>Dans chaque salle, un défi t'attend.</p>"#);
    html.push_str(
        r#"<p class="text-destructive font-medium">&#x26A0;&#xFE0F; Tu ne peux pas avancer tant que ce n'est pas juste !</p>"#,
    );
    html.push_str("</div></div>");

    html.push_str(
        r##"<button hx-post="/api/game/start" hx-target="#game-root" hx-swap="innerHTML" class="btn-game btn-lg">&#x1F680; Commencer le speedrun</button>"##,
    );

    html.push_str("</div></div>");
    html
}
