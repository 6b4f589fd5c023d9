// Customer name selection from PERSON entities
use std::cmp::Reverse;
use std::collections::HashMap;

use crate::analyzer::{EntityLabel, ParsedDocument};

/// The most frequent PERSON entity text. Ties go to the name seen first.
pub fn most_frequent_person(doc: &ParsedDocument) -> Option<String> {
    // name -> (count, index of first occurrence)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

    let persons = doc
        .entities()
        .iter()
        .filter(|entity| entity.label == EntityLabel::Person && !is_numeric(&entity.text));
    for (idx, entity) in persons.enumerate() {
        counts.entry(entity.text.as_str()).or_insert((0, idx)).0 += 1;
    }

    counts
        .into_iter()
        .max_by_key(|(_, (count, first))| (*count, Reverse(*first)))
        .map(|(name, _)| name.to_string())
}

fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_numeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{Entity, LanguageAnalyzer, RuleBasedAnalyzer};

    fn person(text: &str) -> Entity {
        Entity {
            text: text.to_string(),
            label: EntityLabel::Person,
            start_char: 0,
            start: 0,
            end: 0,
        }
    }

    #[test]
    fn test_most_frequent_wins() {
        let doc = RuleBasedAnalyzer::new()
            .analyze("Jane Doe wrote to Acme. Mark Lee replied. Jane Doe confirmed.");
        assert_eq!(most_frequent_person(&doc), Some("Jane Doe".to_string()));
    }

    #[test]
    fn test_ties_go_to_first_seen() {
        let doc = ParsedDocument::new(
            "",
            vec![],
            vec![],
            vec![person("Mark Lee"), person("Jane Doe"), person("Jane Doe"), person("Mark Lee")],
        );
        assert_eq!(most_frequent_person(&doc), Some("Mark Lee".to_string()));
    }

    #[test]
    fn test_numeric_person_text_is_ignored() {
        let doc = ParsedDocument::new("", vec![], vec![], vec![person("2024"), person("Ann Roe")]);
        assert_eq!(most_frequent_person(&doc), Some("Ann Roe".to_string()));
    }

    #[test]
    fn test_many_distinct_names() {
        let mut entities: Vec<Entity> = (0..500).map(|i| person(&format!("Name {}", i))).collect();
        entities.push(person("Name 250"));
        let doc = ParsedDocument::new("", vec![], vec![], entities);
        assert_eq!(most_frequent_person(&doc), Some("Name 250".to_string()));
    }

    #[test]
    fn test_no_person_is_none() {
        let doc = RuleBasedAnalyzer::new().analyze("the package was delivered");
        assert_eq!(most_frequent_person(&doc), None);
    }
}
