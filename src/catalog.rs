//! Compiled-in game catalogs — the fixed reference data behind the four
//! rooms. Every item embeds its correct answer (skill family, MMI flag,
//! truth value, official-logo flag); room state only ever stores ids and
//! validates them against the flags here.

use serde::Serialize;

/// The three skill families of Room 1's sorting zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Developpement,
    Creation,
    Communication,
}

impl Skill {
    /// Zone slug used in route parameters.
    pub fn slug(self) -> &'static str {
        match self {
            Skill::Developpement => "developpement",
            Skill::Creation => "creation",
            Skill::Communication => "communication",
        }
    }

    /// French display label.
    pub fn label(self) -> &'static str {
        match self {
            Skill::Developpement => "Développement",
            Skill::Creation => "Création",
            Skill::Communication => "Communication",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Skill> {
        SKILLS.iter().copied().find(|s| s.slug() == slug)
    }
}

/// Zone order as displayed in Room 1.
pub const SKILLS: [Skill; 3] = [Skill::Developpement, Skill::Creation, Skill::Communication];

// ── Room 1: subject cards ──────────────────────────────────────────

pub struct SubjectCard {
    pub id: &'static str,
    pub label: &'static str,
    /// The skill family this subject belongs to.
    pub skill: Skill,
}

pub static SUBJECT_CARDS: &[SubjectCard] = &[
    SubjectCard { id: "html_css_js", label: "HTML / CSS / JavaScript", skill: Skill::Developpement },
    SubjectCard { id: "audiovisuel", label: "Audiovisuel", skill: Skill::Creation },
    SubjectCard { id: "ux_ui", label: "UX / UI", skill: Skill::Creation },
    SubjectCard { id: "marketing_digital", label: "Marketing digital", skill: Skill::Communication },
    SubjectCard { id: "strategie_com", label: "Stratégie de communication", skill: Skill::Communication },
    SubjectCard { id: "portfolio", label: "Portfolio", skill: Skill::Developpement },
];

pub fn find_subject(id: &str) -> Option<&'static SubjectCard> {
    SUBJECT_CARDS.iter().find(|c| c.id == id)
}

// ── Room 2: careers ────────────────────────────────────────────────

pub struct Career {
    pub id: &'static str,
    pub label: &'static str,
    /// Whether this career is reachable from the BUT MMI.
    pub is_mmi: bool,
}

pub static CAREERS: &[Career] = &[
    Career { id: "dev_web", label: "Développeur web", is_mmi: true },
    Career { id: "webdesigner", label: "Webdesigner", is_mmi: true },
    Career { id: "community_manager", label: "Community manager", is_mmi: true },
    Career { id: "comm_digitale", label: "Chargé de communication digitale", is_mmi: true },
    Career { id: "cybersecurite", label: "Cybersécurité", is_mmi: false },
    Career { id: "entrepreneur", label: "Entrepreneur", is_mmi: true },
];

pub fn find_career(id: &str) -> Option<&'static Career> {
    CAREERS.iter().find(|c| c.id == id)
}

// ── Room 3: statements ─────────────────────────────────────────────

pub struct Statement {
    pub id: &'static str,
    pub text: &'static str,
    pub is_true: bool,
}

// Statement copy is reproduced verbatim from the event material,
// including the phrasing of the second one. Its truth value is the
// contract, not its grammar.
pub static STATEMENTS: &[Statement] = &[
    Statement {
        id: "licence_pro",
        text: "Après un BUT MMI, on peut entrer en licence professionnelle",
        is_true: true,
    },
    Statement {
        id: "diplome_2_ans",
        text: "On obtiens pas de diplome au bout de 2 ans",
        is_true: false,
    },
    Statement {
        id: "ecole_specialisee",
        text: "On peut intégrer une école spécialisée (design, web, com)",
        is_true: true,
    },
    Statement {
        id: "master",
        text: "Le BUT MMI permet d'accéder à un master universitaire",
        is_true: true,
    },
];

pub fn find_statement(id: &str) -> Option<&'static Statement> {
    STATEMENTS.iter().find(|s| s.id == id)
}

// ── Room 4: logo options ───────────────────────────────────────────

pub struct LogoOption {
    pub id: &'static str,
    pub label: &'static str,
    /// Static asset path. A missing file degrades to label-only (the
    /// fragment hides the broken image, the click target stays live).
    pub image: &'static str,
    /// Tailwind gradient stops for the card backdrop.
    pub gradient: &'static str,
    pub is_correct: bool,
}

pub static LOGOS: &[LogoOption] = &[
    LogoOption { id: "logo1", label: "Logo 1", image: "/Images/Logo1.jpg", gradient: "from-blue-500 to-purple-500", is_correct: false },
    LogoOption { id: "logo2", label: "Logo 2", image: "/Images/Logo2.jpg", gradient: "from-orange-500 to-red-500", is_correct: false },
    LogoOption { id: "logo3", label: "Logo 3", image: "/Images/Logo3.png", gradient: "from-yellow-500 to-orange-500", is_correct: false },
    LogoOption { id: "logo4", label: "Logo 4", image: "/Images/Logo4.jpg", gradient: "from-green-500 to-teal-500", is_correct: true },
];

pub fn find_logo(id: &str) -> Option<&'static LogoOption> {
    LOGOS.iter().find(|l| l.id == id)
}
