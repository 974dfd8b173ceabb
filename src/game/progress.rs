//! Room progress indicator — a row of four dots plus a "Salle n/4"
//! label, pinned top-left while a room is active. Stateless: it renders
//! whatever room number the session reports.

pub const TOTAL_ROOMS: u8 = 4;

/// Render the progress row for a 1-based room number. Dots before the
/// current room show as cleared, the current one as active, the rest as
/// still locked.
pub fn render(current_room: u8) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(
        r#"<div class="flex items-center gap-2 bg-card/90 backdrop-blur-sm border border-border rounded-xl px-4 py-3">"#,
    );

    for n in 1..=TOTAL_ROOMS {
        let state_class = if n < current_room {
            "bg-success glow-success"
        } else if n == current_room {
            "bg-primary glow-primary"
        } else {
            "bg-muted"
        };
        html.push_str(&format!(
            r#"<div class="w-3 h-3 rounded-full transition-all duration-300 {}"></div>"#,
            state_class
        ));
    }

    html.push_str(&format!(
        r#"<span class="ml-2 text-sm font-medium text-muted-foreground">Salle {}/{}</span>"#,
        current_room, TOTAL_ROOMS
    ));
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_label_for_current_room() {
        let html = render(2);
        assert!(html.contains("Salle 2/4"));
    }

    #[test]
    fn marks_past_current_and_future_rooms() {
        let html = render(3);
        assert_eq!(html.matches("bg-success").count(), 2);
        assert_eq!(html.matches("bg-primary").count(), 1);
        assert_eq!(html.matches("bg-muted").count(), 1);
    }

    #[test]
    fn first_room_has_no_cleared_dots() {
        let html = render(1);
        assert_eq!(html.matches("bg-success").count(), 0);
        assert_eq!(html.matches("bg-muted").count(), 3);
    }
}
