//! Results screen — frozen final time, a performance message picked
//! from fixed thresholds, the JPO pitch, and a restart control.

use crate::game::timer;

pub struct Performance {
    pub text: &'static str,
    pub emoji: &'static str,
}

/// Select the congratulation for a final time. Thresholds are whole
/// minutes: under one, two, three, then the default.
pub fn performance_message(seconds: u32) -> Performance {
    if seconds < 60 {
        Performance { text: "Incroyable ! Tu es un vrai speedrunner !", emoji: "\u{1F525}" }
    } else if seconds < 120 {
        Performance { text: "Excellent temps ! Bien joué !", emoji: "\u{2B50}" }
    } else if seconds < 180 {
        Performance { text: "Très bien ! Tu connais le BUT MMI.", emoji: "\u{1F44F}" }
    } else {
        Performance { text: "Bien terminé ! Tu as découvert le BUT MMI.", emoji: "\u{2705}" }
    }
}

/// Render the end screen for a frozen final time.
pub fn render(final_seconds: u32) -> String {
    let performance = performance_message(final_seconds);
    let mut html = String::with_capacity(4096);

    html.push_str(
        r#"<div class="min-h-screen flex flex-col items-center justify-center p-6 relative overflow-hidden">"#,
    );
    html.push_str(r#"<div class="relative z-10 max-w-2xl w-full text-center space-y-8 animate-fade-in">"#);

    // Trophy
    html.push_str(
        r#"<div class="flex justify-center"><div class="w-24 h-24 rounded-full bg-gradient-to-br from-success/20 to-primary/20 border border-success/30 flex items-center justify-center animate-float"><span class="text-5xl">&#x1F3C6;</span></div></div>"#,
    );

    // Title + performance line
    html.push_str(r#"<div class="space-y-4">"#);
    html.push_str(
        r#"<h1 class="text-4xl md:text-5xl font-extrabold"><span class="text-gradient">Parcours MMI DAY</span><br><span class="text-foreground">terminé !</span></h1>"#,
    );
    html.push_str(&format!(
        r#"<p class="text-xl text-muted-foreground">{} {}</p>"#,
        performance.emoji, performance.text
    ));
    html.push_str("</div>");

    // Final time
    html.push_str(&format!(
        r#"<div class="bg-card/50 backdrop-blur-sm border border-border rounded-2xl p-8 space-y-4 inline-block"><div class="flex items-center justify-center gap-3"><span class="text-5xl font-bold text-primary tabular-nums">{}</span></div><p class="text-muted-foreground">Temps final</p></div>"#,
        timer::format_time(final_seconds)
    ));

    // JPO pitch
    html.push_str(
        r#"<div class="bg-card/30 backdrop-blur-sm border border-border rounded-2xl p-6 space-y-4"><div class="flex items-center justify-center gap-2 text-secondary"><span class="font-semibold">&#x2728; Et maintenant ?</span></div><p class="text-muted-foreground leading-relaxed">Tu as terminé le speedrun, mais la meilleure façon de comprendre le BUT MMI, c'est de <span class="text-foreground font-semibold">venir le découvrir en vrai</span> lors de la Journée Portes Ouvertes !</p></div>"#,
    );

    // Actions
    html.push_str(r#"<div class="flex flex-col sm:flex-row gap-4 justify-center">"#);
    html.push_str(
        r#"<a href="https://www.iut.univ-gustave-eiffel.fr/" target="_blank" rel="noopener noreferrer" class="btn-game btn-lg">Voir les infos de la JPO &#x2197;</a>"#,
    );
    html.push_str(
        r##"<button hx-post="/api/game/restart" hx-target="#game-root" hx-swap="innerHTML" class="btn-outline btn-lg">&#x21BA; Rejouer</button>"##,
    );
    html.push_str("</div>");

    html.push_str("</div></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_select_the_fixed_messages() {
        assert_eq!(performance_message(0).text, "Incroyable ! Tu es un vrai speedrunner !");
        assert_eq!(performance_message(59).text, "Incroyable ! Tu es un vrai speedrunner !");
        assert_eq!(performance_message(60).text, "Excellent temps ! Bien joué !");
        assert_eq!(performance_message(119).text, "Excellent temps ! Bien joué !");
        assert_eq!(performance_message(120).text, "Très bien ! Tu connais le BUT MMI.");
        assert_eq!(performance_message(179).text, "Très bien ! Tu connais le BUT MMI.");
        assert_eq!(performance_message(180).text, "Bien terminé ! Tu as découvert le BUT MMI.");
        assert_eq!(performance_message(3600).text, "Bien terminé ! Tu as découvert le BUT MMI.");
    }

    #[test]
    fn render_shows_frozen_time_and_message() {
        let html = render(95);
        assert!(html.contains("01:35"));
        assert!(html.contains("Excellent temps !"));
        assert!(html.contains("Temps final"));
    }

    #[test]
    fn render_offers_restart_and_jpo_link() {
        let html = render(200);
        assert!(html.contains("/api/game/restart"));
        assert!(html.contains("Rejouer"));
        assert!(html.contains("https://www.iut.univ-gustave-eiffel.fr/"));
    }
}
