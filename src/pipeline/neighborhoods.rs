use std::collections::HashSet;
use std::fmt;

use crate::record::Record;
use crate::utils::locale_cmp;

use super::enrich::Organization;

/// Style tag for the neighborhoods the festival map knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    ArtPurple,
    LifeBlue,
    FoodYellow,
    NatureGreen,
    TomorrowFuchsia,
    YouOrange,
    Unstyled,
}

impl ColorClass {
    pub fn for_neighborhood(name: &str) -> Self {
        match name {
            "Science in Art" => ColorClass::ArtPurple,
            "Science of Everyday Life" => ColorClass::LifeBlue,
            "Science of Food" => ColorClass::FoodYellow,
            "Science of Natural World" => ColorClass::NatureGreen,
            "Science of Tomorrow" => ColorClass::TomorrowFuchsia,
            "Science of You" => ColorClass::YouOrange,
            _ => ColorClass::Unstyled,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorClass::ArtPurple => "science_art_purple",
            ColorClass::LifeBlue => "science_life_blue",
            ColorClass::FoodYellow => "science_food_yellow",
            ColorClass::NatureGreen => "science_nature_green",
            ColorClass::TomorrowFuchsia => "science_tomorrow_fuchsia",
            ColorClass::YouOrange => "science_you_orange",
            ColorClass::Unstyled => "",
        }
    }
}

impl fmt::Display for ColorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A neighborhood bucket. `T` is the raw record while grouping and the
/// enriched organization once the pipeline is done.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighborhood<T = Organization> {
    pub name: String,
    pub color_class: ColorClass,
    pub organizations: Vec<T>,
}

impl<T> Neighborhood<T> {
    pub fn new(name: String) -> Self {
        let color_class = ColorClass::for_neighborhood(&name);
        Neighborhood {
            name,
            color_class,
            organizations: Vec::new(),
        }
    }

    pub fn map_organizations<U>(self, f: impl FnMut(T) -> U) -> Neighborhood<U> {
        Neighborhood {
            name: self.name,
            color_class: self.color_class,
            organizations: self.organizations.into_iter().map(f).collect(),
        }
    }
}

/// Distinct non-empty `neighborhood_pref_1` values of activity records,
/// sorted by name. Values are compared exactly, without trimming.
pub fn extract(records: &[Record]) -> Vec<Neighborhood<Record>> {
    let mut seen = HashSet::new();
    let mut neighborhoods = Vec::new();

    for record in records.iter().filter(|r| r.is_neighborhood_activity()) {
        let name = record.neighborhood_pref_1.as_str();
        if name.is_empty() || !seen.insert(name) {
            continue;
        }
        neighborhoods.push(Neighborhood::new(name.to_string()));
    }

    neighborhoods.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    neighborhoods
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NEIGHBORHOOD_ACTIVITY;

    fn activity(name: &str, neighborhood: &str) -> Record {
        Record {
            organization_name: name.to_string(),
            classification: NEIGHBORHOOD_ACTIVITY.to_string(),
            neighborhood_pref_1: neighborhood.to_string(),
            ..Default::default()
        }
    }

    fn names(n: &[Neighborhood<Record>]) -> Vec<&str> {
        n.iter().map(|x| x.name.as_str()).collect()
    }

    #[test]
    fn distinct_and_sorted() {
        let records = vec![
            activity("A", "Science of You"),
            activity("B", "Science in Art"),
            activity("C", "Science of You"),
            activity("D", "Science of Food"),
        ];
        let n = extract(&records);
        assert_eq!(
            names(&n),
            vec!["Science in Art", "Science of Food", "Science of You"]
        );
        assert!(n.iter().all(|x| x.organizations.is_empty()));
    }

    #[test]
    fn skips_empty_and_unclassified() {
        let mut sponsor = activity("S", "Sponsor Row");
        sponsor.classification = "Sponsor".to_string();
        let records = vec![activity("A", ""), sponsor, activity("B", "Science of You")];
        assert_eq!(names(&extract(&records)), vec!["Science of You"]);
    }

    #[test]
    fn exact_values_are_not_normalized() {
        let records = vec![
            activity("A", "Science of You"),
            activity("B", "Science of You "),
            activity("C", "science of you"),
        ];
        let n = extract(&records);
        assert_eq!(n.len(), 3);
        let styled: Vec<_> = n
            .iter()
            .filter(|x| x.color_class != ColorClass::Unstyled)
            .collect();
        assert_eq!(styled.len(), 1);
        assert_eq!(styled[0].name, "Science of You");
    }

    #[test]
    fn color_lookup() {
        let cases = [
            ("Science in Art", "science_art_purple"),
            ("Science of Everyday Life", "science_life_blue"),
            ("Science of Food", "science_food_yellow"),
            ("Science of Natural World", "science_nature_green"),
            ("Science of Tomorrow", "science_tomorrow_fuchsia"),
            ("Science of You", "science_you_orange"),
            ("Pop-Up Plaza", ""),
        ];
        for (name, class) in cases {
            assert_eq!(ColorClass::for_neighborhood(name).as_str(), class, "{name}");
        }
    }

    #[test]
    fn discovery_order_does_not_matter() {
        let forward = vec![activity("A", "Science of Tomorrow"), activity("B", "Science in Art")];
        let backward: Vec<_> = forward.iter().rev().cloned().collect();
        assert_eq!(extract(&forward), extract(&backward));
    }
}
