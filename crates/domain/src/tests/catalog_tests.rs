// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AgeBand, CATALOG, INTRODUCTORY_CATEGORY, INTRODUCTORY_TOPIC, OrganizedTopics, all_categories,
    all_topics_in_category, available_categories, available_topics, category_description,
    featured_supporting_text, is_category_available, is_topic_available, organize_topics,
    section_description,
};

// ============================================================================
// Eligibility lookups
// ============================================================================

#[test]
fn test_eleventh_grader_college_admissions_topics() {
    let topics: Vec<&str> = available_topics("College Admissions", AgeBand::Grade11);

    assert!(topics.contains(&"Preparing College Applications"));
    assert!(topics.contains(&"Selecting Best Fit Colleges"));
    assert!(!topics.contains(&"Mastering Middle School"));
    assert!(!topics.contains(&"The Elementary School Experience"));
    // Senior-only topic.
    assert!(!topics.contains(&"Senior Summer: Navigating the College Transition"));
}

#[test]
fn test_fifth_grader_categories() {
    let categories: Vec<&str> = available_categories(AgeBand::Grade5);

    assert!(categories.contains(&"Academic Foundations"));
    assert!(!categories.contains(&"College Admissions"));
    assert_eq!(
        available_topics("Academic Foundations", AgeBand::Grade5),
        vec!["Mastering Middle School", "The Elementary School Experience"]
    );
}

#[test]
fn test_introductory_category_is_listed_first_for_every_band() {
    for band in AgeBand::ALL {
        let categories: Vec<&str> = available_categories(band);
        assert_eq!(categories.first(), Some(&INTRODUCTORY_CATEGORY));
        assert!(is_category_available(INTRODUCTORY_CATEGORY, band));
        assert_eq!(
            available_topics(INTRODUCTORY_CATEGORY, band),
            vec![INTRODUCTORY_TOPIC]
        );
    }
}

#[test]
fn test_prenatal_only_sees_family_budgeting() {
    assert_eq!(
        available_categories(AgeBand::Prenatal),
        vec![INTRODUCTORY_CATEGORY, "Personal Finance"]
    );
    assert_eq!(
        available_topics("Personal Finance", AgeBand::Prenatal),
        vec!["Budgeting and Financial Planning for Families"]
    );
}

#[test]
fn test_available_topics_keep_catalog_order() {
    let topics: Vec<&str> = available_topics("College Finance", AgeBand::Grade12);
    let catalog_order: Vec<&str> = all_topics_in_category("College Finance")
        .into_iter()
        .filter(|t| topics.contains(t))
        .collect();
    assert_eq!(topics, catalog_order);
}

#[test]
fn test_unknown_names_fail_soft() {
    assert!(available_topics("Underwater Basket Weaving", AgeBand::Grade11).is_empty());
    assert!(!is_category_available("Underwater Basket Weaving", AgeBand::Grade11));
    assert!(!is_topic_available("College Admissions", "Nope", AgeBand::Grade11));
    assert!(all_topics_in_category("Underwater Basket Weaving").is_empty());
    assert_eq!(category_description("Underwater Basket Weaving"), None);
}

#[test]
fn test_topic_in_wrong_category_is_unavailable() {
    assert!(!is_topic_available(
        "College Admissions",
        "Saving for College",
        AgeBand::Grade8
    ));
    assert!(is_topic_available(
        "College Finance",
        "Saving for College",
        AgeBand::Grade8
    ));
}

#[test]
fn test_all_categories_excludes_introductory() {
    let categories: Vec<&str> = all_categories();
    assert_eq!(categories.len(), CATALOG.len());
    assert!(!categories.contains(&INTRODUCTORY_CATEGORY));
    assert_eq!(categories[0], "Academic Foundations");
}

#[test]
fn test_topic_names_unique_within_category() {
    for category in CATALOG {
        let mut names: Vec<&str> = category.topics.iter().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), category.topics.len(), "{}", category.name);
    }
}

#[test]
fn test_every_topic_has_a_non_empty_eligibility_set() {
    for category in CATALOG {
        for topic in category.topics {
            assert!(!topic.eligible_bands().is_empty(), "{}", topic.name);
        }
    }
}

// ============================================================================
// Presentation helpers
// ============================================================================

#[test]
fn test_organize_topics_puts_featured_first() {
    let topics: Vec<&str> = available_topics("College Admissions", AgeBand::Grade11);
    let organized: OrganizedTopics = organize_topics(&topics, "College Admissions");

    assert_eq!(
        organized.featured,
        vec![
            String::from("Preparing College Applications"),
            String::from("Selecting Best Fit Colleges"),
        ]
    );
    assert!(
        organized
            .regular
            .windows(2)
            .all(|pair| pair[0] <= pair[1])
    );
    assert_eq!(
        organized.featured.len() + organized.regular.len(),
        topics.len()
    );
}

#[test]
fn test_organize_topics_without_featured() {
    let organized: OrganizedTopics = organize_topics(
        &["The Elementary School Experience", "Mastering Middle School"],
        "Academic Foundations",
    );
    assert!(organized.featured.is_empty());
    assert_eq!(
        organized.regular,
        vec![
            String::from("Mastering Middle School"),
            String::from("The Elementary School Experience"),
        ]
    );
}

#[test]
fn test_descriptions() {
    assert!(category_description(INTRODUCTORY_CATEGORY).is_some());
    assert!(
        section_description("College Admissions").starts_with("College Admissions topics")
    );
    assert!(section_description("Financial").starts_with("Our expert coaches"));
    assert!(featured_supporting_text("College Admissions", "Admissions Basics").is_none());
}
