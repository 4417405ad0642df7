//! Built-in Gherkin language tables.
//!
//! Every list is ordered for first-come-first-served keyword matching:
//! the bare `*` step keyword comes first, block keywords follow with
//! "Scenario Outline"-style keywords ahead of the plain "Scenario" forms
//! they share a prefix with, and step keywords close the list carrying
//! their trailing space.

use crate::dialect::GherkinDialect;

/// English is first; it doubles as the default dialect.
pub(crate) static DIALECTS: [GherkinDialect; 9] = [
    GherkinDialect::new("en", "English", "English", EN),
    GherkinDialect::new("de", "German", "Deutsch", DE),
    GherkinDialect::new("fr", "French", "français", FR),
    GherkinDialect::new("es", "Spanish", "español", ES),
    GherkinDialect::new("it", "Italian", "italiano", IT),
    GherkinDialect::new("nl", "Dutch", "Nederlands", NL),
    GherkinDialect::new("pt", "Portuguese", "português", PT),
    GherkinDialect::new("ru", "Russian", "русский", RU),
    GherkinDialect::new("sv", "Swedish", "Svenska", SV),
];

const EN: &[&str] = &[
    "*",
    "Feature",
    "Background",
    "Scenario Outline",
    "Scenario",
    "Examples",
    "Given ",
    "When ",
    "Then ",
    "And ",
    "But ",
];

// "Szenariogrundriss" must stay ahead of "Szenario".
const DE: &[&str] = &[
    "*",
    "Funktionalität",
    "Grundlage",
    "Szenariogrundriss",
    "Szenario",
    "Beispiele",
    "Angenommen ",
    "Gegeben sei ",
    "Wenn ",
    "Dann ",
    "Und ",
    "Aber ",
];

const FR: &[&str] = &[
    "*",
    "Fonctionnalité",
    "Contexte",
    "Plan du scénario",
    "Scénario",
    "Exemples",
    "Étant donné ",
    "Soit ",
    "Quand ",
    "Lorsque ",
    "Alors ",
    "Et ",
    "Mais ",
];

const ES: &[&str] = &[
    "*",
    "Característica",
    "Antecedentes",
    "Esquema del escenario",
    "Escenario",
    "Ejemplos",
    "Dado ",
    "Dada ",
    "Cuando ",
    "Entonces ",
    "Y ",
    "Pero ",
];

const IT: &[&str] = &[
    "*",
    "Funzionalità",
    "Contesto",
    "Schema dello scenario",
    "Scenario",
    "Esempi",
    "Dato ",
    "Data ",
    "Quando ",
    "Allora ",
    "E ",
    "Ma ",
];

const NL: &[&str] = &[
    "*",
    "Functionaliteit",
    "Achtergrond",
    "Abstract Scenario",
    "Scenario",
    "Voorbeelden",
    "Gegeven ",
    "Als ",
    "Dan ",
    "En ",
    "Maar ",
];

const PT: &[&str] = &[
    "*",
    "Funcionalidade",
    "Contexto",
    "Esquema do Cenário",
    "Cenário",
    "Exemplos",
    "Dado ",
    "Dada ",
    "Quando ",
    "Então ",
    "E ",
    "Mas ",
];

const RU: &[&str] = &[
    "*",
    "Функция",
    "Предыстория",
    "Структура сценария",
    "Сценарий",
    "Примеры",
    "Допустим ",
    "Дано ",
    "Когда ",
    "Тогда ",
    "То ",
    "И ",
    "Но ",
];

const SV: &[&str] = &[
    "*",
    "Egenskap",
    "Bakgrund",
    "Abstrakt Scenario",
    "Scenario",
    "Exempel",
    "Givet ",
    "När ",
    "Så ",
    "Och ",
    "Men ",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_dialect_has_star_keyword_first() {
        for dialect in &DIALECTS {
            assert_eq!(
                dialect.keywords().first(),
                Some(&"*"),
                "dialect {} must list the bare star first",
                dialect.culture()
            );
        }
    }

    #[test]
    fn test_no_dialect_has_empty_keywords() {
        for dialect in &DIALECTS {
            for keyword in dialect.keywords() {
                assert!(
                    !keyword.trim().is_empty(),
                    "dialect {} contains a blank keyword",
                    dialect.culture()
                );
            }
        }
    }

    #[test]
    fn test_prefix_overlaps_are_ordered_longest_first() {
        // A keyword must never be preceded by one of its own prefixes,
        // otherwise the shorter keyword would shadow the longer one.
        for dialect in &DIALECTS {
            let keywords = dialect.keywords();
            for (i, keyword) in keywords.iter().enumerate() {
                for earlier in &keywords[..i] {
                    assert!(
                        !keyword.starts_with(earlier),
                        "dialect {}: '{}' is shadowed by earlier '{}'",
                        dialect.culture(),
                        keyword,
                        earlier
                    );
                }
            }
        }
    }

    #[test]
    fn test_culture_tags_are_unique() {
        for (i, dialect) in DIALECTS.iter().enumerate() {
            for other in &DIALECTS[..i] {
                assert_ne!(dialect.culture(), other.culture());
            }
        }
    }
}
