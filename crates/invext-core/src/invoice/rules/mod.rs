//! Rule tables mapping normalized invoice text onto record fields.
//!
//! A [`RuleSet`] holds one [`FieldRule`] per extracted field. Most rules are an
//! ordered list of [`Candidate`] patterns: the first pattern that matches and
//! survives its refiner supplies the value. A pattern only ever contributes its
//! first match in the text. Rules never fail; an unmatched field keeps the
//! record default.

pub mod amounts;
pub mod dates;
pub mod patterns;
pub mod product;
pub mod refine;
pub mod text;

mod amazon;
mod flipkart;

pub use amounts::clean_currency;
pub use dates::standardize_date;
pub use text::{collapse_whitespace, normalize_text, truncate_chars};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::models::config::ExtractionConfig;
use crate::models::record::{Field, InvoiceRecord};

/// Turns a raw capture into a field value, or rejects it with `None`.
pub type Refine = fn(&str, &ExtractionConfig) -> Option<String>;

/// Whole-text extractor for fields that do not fit a single pattern.
pub type Scan = fn(&str, &ExtractionConfig) -> Option<String>;

/// One pattern-to-capture mapping.
#[derive(Clone, Copy)]
pub struct Candidate {
    pattern: &'static Regex,
    group: usize,
    refine: Refine,
}

impl Candidate {
    /// Capture group 1 of `pattern`, post-processed by `refine`.
    pub fn new(pattern: &'static Regex, refine: Refine) -> Self {
        Self {
            pattern,
            group: 1,
            refine,
        }
    }

    /// Read capture group `group` instead of group 1.
    pub fn with_group(mut self, group: usize) -> Self {
        self.group = group;
        self
    }

    fn apply(&self, text: &str, config: &ExtractionConfig) -> Option<String> {
        let caps = self.pattern.captures(text)?;
        let raw = caps.get(self.group)?.as_str();
        (self.refine)(raw, config)
    }
}

/// How a field's value is located.
#[derive(Clone)]
pub enum Strategy {
    /// Ordered candidates, first accepted capture wins.
    FirstMatch(Vec<Candidate>),
    /// A dedicated scanner over the whole text.
    Custom(Scan),
}

#[derive(Clone)]
pub struct FieldRule {
    field: Field,
    strategy: Strategy,
}

impl FieldRule {
    pub fn first_match(field: Field, candidates: Vec<Candidate>) -> Self {
        Self {
            field,
            strategy: Strategy::FirstMatch(candidates),
        }
    }

    /// Shorthand for a rule with a single candidate.
    pub fn single(field: Field, pattern: &'static Regex, refine: Refine) -> Self {
        Self::first_match(field, vec![Candidate::new(pattern, refine)])
    }

    pub fn custom(field: Field, scan: Scan) -> Self {
        Self {
            field,
            strategy: Strategy::Custom(scan),
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    /// Locate this rule's value in `text`. An empty value counts as no match.
    pub fn extract(&self, text: &str, config: &ExtractionConfig) -> Option<String> {
        let value = match &self.strategy {
            Strategy::FirstMatch(candidates) => candidates
                .iter()
                .find_map(|candidate| candidate.apply(text, config)),
            Strategy::Custom(scan) => scan(text, config),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// Ordered field rules for one vendor layout.
#[derive(Clone)]
pub struct RuleSet {
    name: &'static str,
    rules: Vec<FieldRule>,
}

impl RuleSet {
    pub fn new(name: &'static str, rules: Vec<FieldRule>) -> Self {
        Self { name, rules }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Run every rule against `text`, writing matches into `record`.
    ///
    /// Returns the fields that matched, in rule order.
    pub fn apply(
        &self,
        text: &str,
        config: &ExtractionConfig,
        record: &mut InvoiceRecord,
    ) -> Vec<Field> {
        let mut matched = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            match rule.extract(text, config) {
                Some(value) => {
                    trace!("{} rule matched {}: {:?}", self.name, rule.field.column(), value);
                    record.set(rule.field, value);
                    matched.push(rule.field);
                }
                None => trace!("{} rule found no {}", self.name, rule.field.column()),
            }
        }

        matched
    }
}

lazy_static! {
    pub static ref AMAZON_RULES: RuleSet = amazon::rule_set();
    pub static ref FLIPKART_RULES: RuleSet = flipkart::rule_set();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    lazy_static! {
        static ref FIRST: Regex = Regex::new(r"A=(\w+)").unwrap();
        static ref SECOND: Regex = Regex::new(r"B=(\w+)").unwrap();
    }

    fn reject_short(raw: &str, _config: &ExtractionConfig) -> Option<String> {
        (raw.len() > 3).then(|| raw.to_string())
    }

    #[test]
    fn test_first_accepted_candidate_wins() {
        let rule = FieldRule::first_match(
            Field::OrderNumber,
            vec![
                Candidate::new(&FIRST, reject_short),
                Candidate::new(&SECOND, refine::trimmed),
            ],
        );
        let config = ExtractionConfig::default();

        assert_eq!(rule.extract("A=abcdef B=xy", &config), Some("abcdef".to_string()));
        // A rejected capture falls through to the next pattern, not the next match.
        assert_eq!(rule.extract("A=ab A=abcdef B=xy", &config), Some("xy".to_string()));
        assert_eq!(rule.extract("nothing here", &config), None);
    }

    #[test]
    fn test_candidate_reads_selected_group() {
        lazy_static! {
            static ref PAIR: Regex = Regex::new(r"(\d+)/(\d+)").unwrap();
        }
        let config = ExtractionConfig::default();
        let first = FieldRule::single(Field::Quantity, &PAIR, refine::trimmed);
        let second = FieldRule::first_match(
            Field::NetAmount,
            vec![Candidate::new(&PAIR, refine::trimmed).with_group(2)],
        );

        assert_eq!(first.extract("qty 3/450", &config), Some("3".to_string()));
        assert_eq!(second.extract("qty 3/450", &config), Some("450".to_string()));

        // A group that does not exist is a miss.
        let missing = FieldRule::first_match(
            Field::NetAmount,
            vec![Candidate::new(&PAIR, refine::trimmed).with_group(3)],
        );
        assert_eq!(missing.extract("qty 3/450", &config), None);
    }

    #[test]
    fn test_empty_value_is_a_miss() {
        fn empty(_text: &str, _config: &ExtractionConfig) -> Option<String> {
            Some(String::new())
        }
        let rule = FieldRule::custom(Field::ProductName, empty);
        assert_eq!(rule.extract("anything", &ExtractionConfig::default()), None);
    }

    #[test]
    fn test_rule_set_keeps_defaults_for_misses() {
        let rules = RuleSet::new(
            "test",
            vec![
                FieldRule::single(Field::OrderNumber, &FIRST, refine::trimmed),
                FieldRule::single(Field::InvoiceNumber, &SECOND, refine::trimmed),
            ],
        );
        let mut record = InvoiceRecord::new("a.pdf", "Amazon");
        let matched = rules.apply("A=123", &ExtractionConfig::default(), &mut record);

        assert_eq!(matched, vec![Field::OrderNumber]);
        assert_eq!(record.get(Field::OrderNumber), "123");
        assert_eq!(record.get(Field::InvoiceNumber), "N/A");
    }

    #[test]
    fn test_vendor_tables_cover_distinct_fields() {
        for rules in [&*AMAZON_RULES, &*FLIPKART_RULES] {
            let mut seen: Vec<Field> = rules.rules().iter().map(|r| r.field()).collect();
            let total = seen.len();
            seen.sort_by_key(|f| f.column());
            seen.dedup();
            assert_eq!(seen.len(), total, "{} has duplicate field rules", rules.name());
            assert!(!seen.contains(&Field::FileName));
            assert!(!seen.contains(&Field::InvoiceSource));
        }
    }
}
