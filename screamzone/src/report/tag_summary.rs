use itertools::Itertools;
use screamzone_core::{
    algorithm::classifier::{ClassificationRule, RuleSet},
    model::{Classification, TagSet, ZoneRecord},
};

/// the `top` most frequent tag keys across all tag sets, most frequent first.
/// keys with equal counts are ordered alphabetically.
pub fn most_common_keys<'a, I>(tag_sets: I, top: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a TagSet>,
{
    tag_sets
        .into_iter()
        .flat_map(|t| t.keys())
        .counts()
        .into_iter()
        .sorted_by(|(ka, ca), (kb, cb)| cb.cmp(ca).then_with(|| ka.cmp(kb)))
        .take(top)
        .map(|(k, c)| (k.to_string(), c))
        .collect()
}

/// number of records per label, listing every label including empty ones.
pub fn label_counts(records: &[ZoneRecord]) -> Vec<(Classification, usize)> {
    let counts = records.iter().map(|r| r.label()).counts();
    Classification::ALL
        .into_iter()
        .map(|c| (c, counts.get(&c).copied().unwrap_or_default()))
        .collect()
}

/// number of records decided by each rule, in rule order. records that no
/// rule matched are not counted. rules sharing a name share a count.
pub fn rule_hits<'a>(
    records: &[ZoneRecord],
    rule_set: &'a RuleSet,
) -> Vec<(&'a ClassificationRule, usize)> {
    let fired = records
        .iter()
        .filter_map(|r| rule_set.first_match(r.tags()))
        .map(|rule| rule.name.as_str())
        .counts();
    rule_set
        .rules()
        .iter()
        .map(|rule| (rule, fired.get(rule.name.as_str()).copied().unwrap_or_default()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use screamzone_core::{algorithm::classifier::TagPredicate, model::GeoPoint};

    fn tags(pairs: &[(&str, &str)]) -> TagSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_most_common_keys() {
        let sets = [
            tags(&[("building", "yes"), ("addr:street", "Meir")]),
            tags(&[("building", "house")]),
            tags(&[("natural", "wood"), ("name", "Rivierenhof")]),
            tags(&[("amenity", "bench"), ("name", "Bank")]),
        ];
        let top = most_common_keys(&sets, 3);
        assert_eq!(
            top,
            vec![
                (String::from("building"), 2),
                (String::from("name"), 2),
                (String::from("addr:street"), 1),
            ]
        );
        assert!(most_common_keys(&sets, 0).is_empty());
        assert_eq!(most_common_keys(&sets, 100).len(), 5);
    }

    #[test]
    fn test_label_counts() {
        let rules = RuleSet::standard();
        let at = GeoPoint::new(51.2, 4.4).unwrap();
        let records = vec![
            ZoneRecord::new(at, tags(&[("natural", "wood")]), &rules),
            ZoneRecord::new(at, tags(&[("natural", "scrub")]), &rules),
            ZoneRecord::new(at, TagSet::new(), &rules),
        ];
        let counts = label_counts(&records);
        assert_eq!(counts.len(), Classification::ALL.len());
        assert!(counts.contains(&(Classification::Natural, 2)));
        assert!(counts.contains(&(Classification::Uncertain, 1)));
        assert!(counts.contains(&(Classification::Industrial, 0)));
    }

    #[test]
    fn test_rule_hits() {
        let rules = RuleSet::new(vec![
            ClassificationRule::new(
                "parks",
                TagPredicate::tag_value_in("leisure", &["park"]),
                Classification::Natural,
            ),
            ClassificationRule::new(
                "built",
                TagPredicate::any_key_present(&["building"]),
                Classification::UnsuitableBuilt,
            ),
        ]);
        let at = GeoPoint::new(51.2, 4.4).unwrap();
        let records = vec![
            ZoneRecord::new(at, tags(&[("leisure", "park"), ("building", "yes")]), &rules),
            ZoneRecord::new(at, tags(&[("building", "yes")]), &rules),
            ZoneRecord::new(at, tags(&[("building", "house")]), &rules),
            ZoneRecord::new(at, tags(&[("shop", "bakery")]), &rules),
        ];
        let hits: Vec<(String, usize)> = rule_hits(&records, &rules)
            .into_iter()
            .map(|(rule, n)| (rule.name.clone(), n))
            .collect();
        assert_eq!(
            hits,
            vec![(String::from("parks"), 1), (String::from("built"), 2)]
        );
    }
}
