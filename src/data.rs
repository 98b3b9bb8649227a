// src/data.rs

use crate::error::{HubError, Result};
use crate::model::{GlossaryTerm, Lesson, MemoryHook, Question, SectionId};
use serde::Deserialize;
use std::collections::HashSet;

/// Contenido estático del hub, cargado una vez al arrancar.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pub questions: Vec<Question>,
    pub glossary: Vec<GlossaryTerm>,
    pub lessons: Vec<Lesson>,
    pub memory_hooks: Vec<MemoryHook>,
}

#[derive(Deserialize)]
struct LessonFile {
    lessons: Vec<Lesson>,
    #[serde(default)]
    memory_hooks: Vec<MemoryHook>,
}

impl ContentStore {
    /// Carga el contenido desde los YAML embebidos
    pub fn embedded() -> Result<Self> {
        Self::from_yaml(
            include_str!("data/quiz_questions.yaml"),
            include_str!("data/glossary.yaml"),
            include_str!("data/lessons.yaml"),
        )
    }

    pub fn from_yaml(questions: &str, glossary: &str, lessons: &str) -> Result<Self> {
        let questions = parse_questions(questions)?;
        let glossary = parse_glossary(glossary)?;
        let LessonFile {
            lessons,
            memory_hooks,
        } = serde_yaml::from_str(lessons)?;

        log::debug!(
            "Content loaded: {} questions, {} terms, {} lessons",
            questions.len(),
            glossary.len(),
            lessons.len()
        );

        Ok(Self {
            questions,
            glossary,
            lessons,
            memory_hooks,
        })
    }

    pub fn lesson(&self, section: SectionId) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.section == section)
    }

    pub fn memory_hook(&self, concept: &str) -> Option<&str> {
        self.memory_hooks
            .iter()
            .find(|h| h.concept == concept)
            .map(|h| h.text.as_str())
    }
}

pub fn parse_questions(yaml: &str) -> Result<Vec<Question>> {
    let questions: Vec<Question> = serde_yaml::from_str(yaml)?;
    if questions.is_empty() {
        return Err(HubError::EmptyQuiz);
    }
    for (i, q) in questions.iter().enumerate() {
        if q.correct_index >= q.options.len() {
            return Err(HubError::InvalidContent(format!(
                "question {} has correct_index {} but only {} options",
                i + 1,
                q.correct_index,
                q.options.len()
            )));
        }
    }
    Ok(questions)
}

pub fn parse_glossary(yaml: &str) -> Result<Vec<GlossaryTerm>> {
    let terms: Vec<GlossaryTerm> = serde_yaml::from_str(yaml)?;
    let mut seen = HashSet::new();
    for t in &terms {
        if !seen.insert(t.term.to_lowercase()) {
            return Err(HubError::InvalidContent(format!(
                "duplicated glossary term '{}'",
                t.term
            )));
        }
    }
    Ok(terms)
}
