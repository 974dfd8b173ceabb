//! Game module — screen state machine, speedrun timer, and the four
//! puzzle rooms. Everything lives in WASM memory (thread_local) for the
//! lifetime of the Web Worker; restart rebuilds the session wholesale.

pub mod end;
pub mod progress;
pub mod room1;
pub mod room2;
pub mod room3;
pub mod room4;
pub mod state;
pub mod timer;

/// One-shot feedback banner carried into the next rendered fragment —
/// a toast, rendered server-side. Never stored in session state;
/// validation outcomes map to a `Flash` at the route layer and it is
/// gone on the next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Success(&'static str),
    Error(&'static str),
}

impl Flash {
    pub fn render(&self) -> String {
        match self {
            Flash::Success(msg) => format!(
                r#"<div class="mx-auto max-w-xl px-4 py-3 rounded-xl border border-success bg-success/10 text-success text-center font-medium">{}</div>"#,
                msg
            ),
            Flash::Error(msg) => format!(
                r#"<div class="mx-auto max-w-xl px-4 py-3 rounded-xl border border-destructive bg-destructive/10 text-destructive text-center font-medium">{}</div>"#,
                msg
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_renders_both_kinds() {
        let ok = Flash::Success("Bien vu !").render();
        assert!(ok.contains("border-success"));
        assert!(ok.contains("Bien vu !"));

        let err = Flash::Error("Réessaie.").render();
        assert!(err.contains("border-destructive"));
        assert!(err.contains("Réessaie."));
    }
}
