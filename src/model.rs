use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: [String; 4],
    pub correct_index: usize,
    pub explanation: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Basic,
    Operators,
    Advanced,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Basic, Category::Operators, Category::Advanced];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Basic => "basic",
            Category::Operators => "operators",
            Category::Advanced => "advanced",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
    pub category: Category,
    #[serde(default)]
    pub example: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    Overview,
    Basics,
    Advanced,
    Tools,
    Quiz,
    Glossary,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::Overview,
        SectionId::Basics,
        SectionId::Advanced,
        SectionId::Tools,
        SectionId::Quiz,
        SectionId::Glossary,
    ];

    /// Secciones que cuentan para el progreso (el glosario no cuenta).
    pub const TRACKED: [SectionId; 5] = [
        SectionId::Overview,
        SectionId::Basics,
        SectionId::Advanced,
        SectionId::Tools,
        SectionId::Quiz,
    ];

    /// Orden de los atajos Alt+1..6
    pub const SHORTCUTS: [SectionId; 6] = [
        SectionId::Overview,
        SectionId::Basics,
        SectionId::Advanced,
        SectionId::Tools,
        SectionId::Quiz,
        SectionId::Glossary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Overview => "overview",
            SectionId::Basics => "basics",
            SectionId::Advanced => "advanced",
            SectionId::Tools => "tools",
            SectionId::Quiz => "quiz",
            SectionId::Glossary => "glossary",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Overview => "MongoDB Overview",
            SectionId::Basics => "Basic Operations",
            SectionId::Advanced => "Advanced Concepts",
            SectionId::Tools => "Tools & Development",
            SectionId::Quiz => "Practice Quiz",
            SectionId::Glossary => "Glossary",
        }
    }

    pub fn is_tracked(self) -> bool {
        Self::TRACKED.contains(&self)
    }

    /// Atajo de teclado: dígito 1..=6 -> sección
    pub fn for_shortcut_digit(digit: u8) -> Option<SectionId> {
        let idx = usize::from(digit).checked_sub(1)?;
        Self::SHORTCUTS.get(idx).copied()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .iter()
            .copied()
            .find(|sec| sec.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_owned()))
    }
}

/// Contenido de una lección (overview, basics, advanced, tools)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Lesson {
    pub section: SectionId,
    pub intro: String,
    #[serde(default)]
    pub cards: Vec<LessonCard>,
    #[serde(default)]
    pub snippets: Vec<CodeSnippet>,
    #[serde(default)]
    pub memory_hooks: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LessonCard {
    pub title: String,
    pub tabs: Vec<LessonTab>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LessonTab {
    pub label: String,
    pub body: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CodeSnippet {
    pub label: String,
    pub code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MemoryHook {
    pub concept: String,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcut_digits_follow_section_order() {
        assert_eq!(SectionId::for_shortcut_digit(1), Some(SectionId::Overview));
        assert_eq!(SectionId::for_shortcut_digit(5), Some(SectionId::Quiz));
        assert_eq!(SectionId::for_shortcut_digit(6), Some(SectionId::Glossary));
        assert_eq!(SectionId::for_shortcut_digit(0), None);
        assert_eq!(SectionId::for_shortcut_digit(7), None);
    }

    #[test]
    fn section_ids_parse_from_their_names() {
        for sec in SectionId::ALL {
            assert_eq!(sec.as_str().parse::<SectionId>(), Ok(sec));
        }
        assert!("pricing".parse::<SectionId>().is_err());
    }

    #[test]
    fn glossary_is_not_tracked() {
        assert!(!SectionId::Glossary.is_tracked());
        assert!(!SectionId::Home.is_tracked());
        assert!(SectionId::Quiz.is_tracked());
    }

    #[test]
    fn theme_toggle_flips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::default().toggled().toggled(), Theme::Dark);
    }
}
