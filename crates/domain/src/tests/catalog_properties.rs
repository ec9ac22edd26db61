// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AgeBand, CATALOG, INTRODUCTORY_CATEGORY, all_topics_in_category, available_categories,
    available_topics, is_category_available, is_introductory, is_topic_available,
};
use proptest::prelude::*;

fn any_age_band() -> impl Strategy<Value = AgeBand> {
    prop::sample::select(AgeBand::ALL.to_vec())
}

fn any_category() -> impl Strategy<Value = &'static str> {
    let mut names: Vec<&'static str> = CATALOG.iter().map(|c| c.name).collect();
    names.push(INTRODUCTORY_CATEGORY);
    names.push("Unknown Category");
    prop::sample::select(names)
}

proptest! {
    #[test]
    fn prop_category_available_iff_it_has_topics(
        band in any_age_band(),
        category in any_category(),
    ) {
        let expected: bool =
            is_introductory(category) || !available_topics(category, band).is_empty();
        prop_assert_eq!(is_category_available(category, band), expected);
    }

    #[test]
    fn prop_available_topics_agree_with_topic_check(
        band in any_age_band(),
        category in any_category(),
    ) {
        let offered: Vec<&str> = available_topics(category, band);
        for topic in all_topics_in_category(category) {
            prop_assert_eq!(
                is_topic_available(category, topic, band),
                offered.contains(&topic)
            );
        }
        for topic in &offered {
            prop_assert!(is_topic_available(category, topic, band));
        }
    }

    #[test]
    fn prop_available_categories_agree_with_category_check(band in any_age_band()) {
        let offered: Vec<&str> = available_categories(band);
        for category in CATALOG {
            prop_assert_eq!(
                offered.contains(&category.name),
                is_category_available(category.name, band)
            );
        }
    }
}
