// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static eligibility catalog.
//!
//! Maps each category to an ordered list of topics, and each topic to the
//! contiguous run of age bands it is offered to. All lookups are pure and
//! fail soft: an unknown category or topic is reported as unavailable and
//! never produces an error.
//!
//! ## Invariants
//!
//! - A category is available for an age band iff at least one of its topics is
//! - The introductory category is available for every age band and owns
//!   exactly one topic, the introductory sentinel topic
//! - Topic order within a category is catalog order

use crate::age_band::{AgeBand, band_range};
use serde::{Deserialize, Serialize};

/// The introductory pseudo-category. Always available; bypasses topic selection.
pub const INTRODUCTORY_CATEGORY: &str = "Intro to College Coach";

/// The fixed topic assigned whenever the introductory category is selected.
pub const INTRODUCTORY_TOPIC: &str = "Introduction to Your College Coach";

const DEFAULT_SECTION_DESCRIPTION: &str =
    "Our expert coaches specialize in this area to provide you with the most relevant guidance.";

/// A topic and the age bands it is offered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicEntry {
    /// Topic name, unique within its category.
    pub name: &'static str,
    /// Youngest eligible age band.
    pub first_band: AgeBand,
    /// Oldest eligible age band.
    pub last_band: AgeBand,
    /// Supporting text for featured ("Most Popular") topics.
    pub featured: Option<&'static str>,
}

impl TopicEntry {
    const fn new(name: &'static str, first_band: AgeBand, last_band: AgeBand) -> Self {
        Self {
            name,
            first_band,
            last_band,
            featured: None,
        }
    }

    const fn featured(mut self, supporting_text: &'static str) -> Self {
        self.featured = Some(supporting_text);
        self
    }

    /// Returns whether this topic is offered to the given age band.
    #[must_use]
    pub fn is_eligible(&self, age_band: AgeBand) -> bool {
        age_band >= self.first_band && age_band <= self.last_band
    }

    /// Returns the full eligibility set, in life order.
    #[must_use]
    pub fn eligible_bands(&self) -> Vec<AgeBand> {
        band_range(self.first_band, self.last_band)
    }
}

/// A named grouping of topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry {
    /// Category name.
    pub name: &'static str,
    /// Card copy shown beneath the category name.
    pub description: &'static str,
    /// Copy shown above the topic list for this category.
    pub section_description: Option<&'static str>,
    /// Topics in catalog order.
    pub topics: &'static [TopicEntry],
}

use AgeBand::{
    Age3, Grade4, Grade5, Grade6, Grade8, Grade9, Grade10, Grade11, Grade12, Kindergarten,
    Newborn, Postgraduate, Prenatal,
};

const ACADEMIC_FOUNDATIONS: &[TopicEntry] = &[
    TopicEntry::new("Mastering Middle School", Grade4, Grade8),
    TopicEntry::new("The Elementary School Experience", Kindergarten, Grade5),
];

const COLLEGE_ADMISSIONS: &[TopicEntry] = &[
    TopicEntry::new(
        "Admission to the Ivies and Other Highly Selective Schools: Strategies for Success",
        Grade10,
        Grade12,
    ),
    TopicEntry::new("Admissions Basics", Grade6, Grade12),
    TopicEntry::new(
        "College Selection for Students with Learning and Other Disabilities",
        Grade9,
        Grade12,
    ),
    TopicEntry::new("Navigating the UC Application", Grade10, Grade12),
    TopicEntry::new("Preparing College Applications", Grade9, Grade12)
        .featured("Build a timeline and checklist for every application"),
    TopicEntry::new("Selecting Best Fit Colleges", Grade9, Grade12)
        .featured("Find schools that match your student academically, socially and financially"),
    TopicEntry::new("The College Transfer Process", Grade11, Postgraduate),
    TopicEntry::new(
        "The Common Application: What You Need to Know",
        Grade10,
        Grade12,
    ),
    TopicEntry::new("Writing Your Best College Essay", Grade10, Grade12),
    TopicEntry::new(
        "Senior Summer: Navigating the College Transition",
        Grade12,
        Grade12,
    ),
    TopicEntry::new("The High School Plan", Grade8, Grade11),
    TopicEntry::new("Alternatives to a 4-Year Degree", Grade10, Grade12),
];

const COLLEGE_TO_CAREER: &[TopicEntry] = &[
    TopicEntry::new(
        "Career Exploration and Planning for College Students",
        Grade9,
        Postgraduate,
    ),
    TopicEntry::new(
        "Internships and Job Search Strategies",
        Grade10,
        Postgraduate,
    ),
    TopicEntry::new(
        "Making the Most of College: Academic and Social Success",
        Grade11,
        Postgraduate,
    ),
    TopicEntry::new(
        "Networking and Professional Development",
        Grade10,
        Postgraduate,
    ),
    TopicEntry::new(
        "Transitioning from College to Career",
        Grade11,
        Postgraduate,
    ),
];

const PERSONAL_FINANCE: &[TopicEntry] = &[
    TopicEntry::new(
        "Budgeting and Financial Planning for Families",
        Prenatal,
        Postgraduate,
    )
    .featured("Set up a family budget that makes room for education goals"),
    TopicEntry::new("Teaching Financial Literacy to Children", Age3, Grade12),
];

const COLLEGE_FINANCE: &[TopicEntry] = &[
    TopicEntry::new("Saving for College", Newborn, Grade8),
    TopicEntry::new(
        "Paying the Tuition Bill: Use Cash Flow, Savings, and Loans Strategically",
        Grade11,
        Postgraduate,
    ),
    TopicEntry::new(
        "Education Loan Repayment Strategies",
        Postgraduate,
        Postgraduate,
    ),
    TopicEntry::new(
        "Financial Aid Advice that's Too Good to Be True",
        Newborn,
        Grade12,
    ),
    TopicEntry::new(
        "Maximizing Education Tax Breaks to Reduce College Costs",
        Grade12,
        Postgraduate,
    ),
    TopicEntry::new(
        "Navigating the FAFSA and Other Financial Aid Applications",
        Grade12,
        Postgraduate,
    ),
    TopicEntry::new("Paying for College", Grade9, Grade12),
    TopicEntry::new("Successful Scholarship Strategies", Grade9, Grade12),
    TopicEntry::new(
        "Understanding and Negotiating Your Financial Aid and Scholarship Offers",
        Grade11,
        Grade12,
    ),
];

/// The eligibility catalog, in display order.
///
/// The introductory category is not part of this table; it is handled by
/// [`is_introductory`] in every lookup.
pub const CATALOG: &[CategoryEntry] = &[
    CategoryEntry {
        name: "Academic Foundations",
        description: "Setting your student up for success in education and beyond",
        section_description: Some(
            "Academic Foundations topics are supported by our team of experienced educators and academic counselors.",
        ),
        topics: ACADEMIC_FOUNDATIONS,
    },
    CategoryEntry {
        name: "College Admissions",
        description: "Support for college planning, selection, applications and more",
        section_description: Some(
            "College Admissions topics are fielded by our team of former admissions advisors at universities around the world.",
        ),
        topics: COLLEGE_ADMISSIONS,
    },
    CategoryEntry {
        name: "College to Career",
        description: "Help for college students on preparing for the workforce",
        section_description: Some(
            "College to Career topics are guided by our network of career coaches and industry professionals.",
        ),
        topics: COLLEGE_TO_CAREER,
    },
    CategoryEntry {
        name: "Personal Finance",
        description: "Assistance with building smart money habits in your family",
        section_description: Some(
            "Personal Finance topics are led by our team of certified financial planners and money management experts.",
        ),
        topics: PERSONAL_FINANCE,
    },
    CategoryEntry {
        name: "College Finance",
        description: "Guidance on college savings, managing tuition and maximizing aid",
        section_description: Some(
            "College Finance topics are handled by our former college finance officers who specialize in education funding.",
        ),
        topics: COLLEGE_FINANCE,
    },
];

const INTRODUCTORY_DESCRIPTION: &str =
    "An introduction to your benefit and how we can help your family";

/// Returns whether `category` is the introductory pseudo-category.
#[must_use]
pub fn is_introductory(category: &str) -> bool {
    category == INTRODUCTORY_CATEGORY
}

fn find_category(category: &str) -> Option<&'static CategoryEntry> {
    CATALOG.iter().find(|entry| entry.name == category)
}

/// Returns every category available for `age_band`.
///
/// The introductory category is always listed first, followed by each
/// catalog category with at least one eligible topic, in catalog order.
#[must_use]
pub fn available_categories(age_band: AgeBand) -> Vec<&'static str> {
    std::iter::once(INTRODUCTORY_CATEGORY)
        .chain(
            CATALOG
                .iter()
                .filter(|entry| entry.topics.iter().any(|t| t.is_eligible(age_band)))
                .map(|entry| entry.name),
        )
        .collect()
}

/// Returns the topics of `category` eligible for `age_band`, in catalog order.
///
/// For the introductory category this is exactly the sentinel topic.
/// Unknown categories yield an empty list.
#[must_use]
pub fn available_topics(category: &str, age_band: AgeBand) -> Vec<&'static str> {
    if is_introductory(category) {
        return vec![INTRODUCTORY_TOPIC];
    }

    find_category(category)
        .map(|entry| {
            entry
                .topics
                .iter()
                .filter(|t| t.is_eligible(age_band))
                .map(|t| t.name)
                .collect()
        })
        .unwrap_or_default()
}

/// Checks if a category is available for an age band.
#[must_use]
pub fn is_category_available(category: &str, age_band: AgeBand) -> bool {
    if is_introductory(category) {
        return true;
    }

    find_category(category)
        .is_some_and(|entry| entry.topics.iter().any(|t| t.is_eligible(age_band)))
}

/// Checks if a topic within a category is available for an age band.
#[must_use]
pub fn is_topic_available(category: &str, topic: &str, age_band: AgeBand) -> bool {
    if is_introductory(category) {
        return topic == INTRODUCTORY_TOPIC;
    }

    find_category(category)
        .and_then(|entry| entry.topics.iter().find(|t| t.name == topic))
        .is_some_and(|t| t.is_eligible(age_band))
}

/// Returns every catalog category name regardless of age.
///
/// The introductory pseudo-category is not included.
#[must_use]
pub fn all_categories() -> Vec<&'static str> {
    CATALOG.iter().map(|entry| entry.name).collect()
}

/// Returns every topic in a category regardless of age.
#[must_use]
pub fn all_topics_in_category(category: &str) -> Vec<&'static str> {
    if is_introductory(category) {
        return vec![INTRODUCTORY_TOPIC];
    }

    find_category(category)
        .map(|entry| entry.topics.iter().map(|t| t.name).collect())
        .unwrap_or_default()
}

/// Card copy for a category, if the category is known.
#[must_use]
pub fn category_description(category: &str) -> Option<&'static str> {
    if is_introductory(category) {
        return Some(INTRODUCTORY_DESCRIPTION);
    }
    find_category(category).map(|entry| entry.description)
}

/// Copy shown above a category's topic list, with a generic fallback.
#[must_use]
pub fn section_description(category: &str) -> &'static str {
    find_category(category)
        .and_then(|entry| entry.section_description)
        .unwrap_or(DEFAULT_SECTION_DESCRIPTION)
}

/// Supporting text for a featured topic, or `None` if the topic is not featured.
#[must_use]
pub fn featured_supporting_text(category: &str, topic: &str) -> Option<&'static str> {
    find_category(category)
        .and_then(|entry| entry.topics.iter().find(|t| t.name == topic))
        .and_then(|t| t.featured)
}

/// Topics split into a featured group and an alphabetical remainder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrganizedTopics {
    /// Featured topics, in the order they were given.
    pub featured: Vec<String>,
    /// Every other topic, sorted alphabetically.
    pub regular: Vec<String>,
}

/// Splits `topics` into featured topics followed by the rest sorted alphabetically.
#[must_use]
pub fn organize_topics<S: AsRef<str>>(topics: &[S], category: &str) -> OrganizedTopics {
    let (featured, mut regular): (Vec<String>, Vec<String>) = topics
        .iter()
        .map(|t| t.as_ref().to_string())
        .partition(|t| featured_supporting_text(category, t).is_some());

    regular.sort();

    OrganizedTopics { featured, regular }
}
