// src/glossary.rs

use crate::model::{Category, GlossaryTerm};

/// Filtro combinado del glosario (categoría + búsqueda).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlossaryQuery {
    /// `None` = todas
    pub category: Option<Category>,
    pub text: String,
}

impl GlossaryQuery {
    pub fn matches(&self, term: &GlossaryTerm) -> bool {
        let category_ok = self.category.is_none_or(|c| term.category == c);
        category_ok && matches_text(term, &self.text)
    }

    pub fn apply<'a>(&self, terms: &'a [GlossaryTerm]) -> Vec<&'a GlossaryTerm> {
        terms.iter().filter(|t| self.matches(t)).collect()
    }
}

pub fn filter_by_category(terms: &[GlossaryTerm], category: Option<Category>) -> Vec<&GlossaryTerm> {
    GlossaryQuery {
        category,
        text: String::new(),
    }
    .apply(terms)
}

pub fn search<'a>(terms: &'a [GlossaryTerm], query: &str) -> Vec<&'a GlossaryTerm> {
    GlossaryQuery {
        category: None,
        text: query.to_owned(),
    }
    .apply(terms)
}

/// Búsqueda exacta sin distinguir mayúsculas (modal de detalles)
pub fn find_term<'a>(terms: &'a [GlossaryTerm], name: &str) -> Option<&'a GlossaryTerm> {
    terms.iter().find(|t| t.term.eq_ignore_ascii_case(name))
}

// Busca en lo que se ve en la tarjeta: nombre, definición y categoría.
fn matches_text(term: &GlossaryTerm, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [
        term.term.as_str(),
        term.definition.as_str(),
        term.category.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(name: &str, definition: &str, category: Category) -> GlossaryTerm {
        GlossaryTerm {
            term: name.into(),
            definition: definition.into(),
            category,
            example: None,
        }
    }

    fn sample() -> Vec<GlossaryTerm> {
        vec![
            term("Collection", "A grouping of documents.", Category::Basic),
            term("$set", "Sets the value of a field.", Category::Operators),
            term("Sharding", "Distributes data across machines.", Category::Advanced),
            term("$push", "Adds an element to an array.", Category::Operators),
        ]
    }

    #[test]
    fn category_filter_keeps_order() {
        let terms = sample();
        let ops: Vec<_> = filter_by_category(&terms, Some(Category::Operators))
            .iter()
            .map(|t| t.term.as_str())
            .collect();
        assert_eq!(ops, ["$set", "$push"]);
        assert_eq!(filter_by_category(&terms, None).len(), 4);
    }

    #[test]
    fn search_is_case_insensitive() {
        let terms = sample();
        let found = search(&terms, "DOCUMENTS");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].term, "Collection");
    }

    #[test]
    fn search_matches_category_label() {
        let terms = sample();
        assert_eq!(search(&terms, "advanced").len(), 1);
    }

    #[test]
    fn blank_search_returns_everything() {
        let terms = sample();
        assert_eq!(search(&terms, "   ").len(), terms.len());
    }

    #[test]
    fn combined_query() {
        let terms = sample();
        let q = GlossaryQuery {
            category: Some(Category::Operators),
            text: "array".into(),
        };
        let found = q.apply(&terms);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].term, "$push");
    }

    #[test]
    fn find_term_ignores_case() {
        let terms = sample();
        assert_eq!(find_term(&terms, "sharding").unwrap().term, "Sharding");
        assert!(find_term(&terms, "shard").is_none());
    }
}
