// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, FOCUS_AREAS, Scenario, ScenarioCatalogKey, ScenarioDefinition,
    focus_area_subtopics, is_valid_scenario, resolve_scenario, scenario_catalog,
};

#[test]
fn test_default_catalog_lists_six_scenarios() {
    let catalog: &[ScenarioDefinition] = scenario_catalog(ScenarioCatalogKey::Default);
    let ids: Vec<&str> = catalog.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "default",
            "with-existing-students",
            "no-appointments",
            "no-topics-available",
            "no-dates-available",
            "hide-intro-after-call",
        ]
    );
}

#[test]
fn test_onebh_catalog() {
    let catalog: &[ScenarioDefinition] = scenario_catalog(ScenarioCatalogKey::OneBh);
    assert!(is_valid_scenario(catalog, "big-c-coaching"));
    assert!(is_valid_scenario(catalog, "default"));
    assert!(!is_valid_scenario(catalog, "no-appointments"));
}

#[test]
fn test_scenario_ids_round_trip() {
    for key in [ScenarioCatalogKey::Default, ScenarioCatalogKey::OneBh] {
        for definition in scenario_catalog(key) {
            let parsed: Scenario = definition.id.as_str().parse().unwrap();
            assert_eq!(parsed, definition.id);
        }
    }
}

#[test]
fn test_resolve_scenario_checks_catalog_membership() {
    assert_eq!(
        resolve_scenario(ScenarioCatalogKey::Default, "no-dates-available").unwrap(),
        Scenario::NoDatesAvailable
    );
    assert!(matches!(
        resolve_scenario(ScenarioCatalogKey::Default, "big-c-coaching"),
        Err(DomainError::ScenarioNotInCatalog { .. })
    ));
    assert!(matches!(
        resolve_scenario(ScenarioCatalogKey::OneBh, "bogus"),
        Err(DomainError::UnknownScenario(_))
    ));
}

#[test]
fn test_catalog_key_parsing() {
    assert_eq!(
        "onebh".parse::<ScenarioCatalogKey>().unwrap(),
        ScenarioCatalogKey::OneBh
    );
    assert!(matches!(
        "other".parse::<ScenarioCatalogKey>(),
        Err(DomainError::UnknownScenarioCatalog(_))
    ));
}

#[test]
fn test_every_focus_area_has_three_subtopics() {
    for area in FOCUS_AREAS {
        assert_eq!(focus_area_subtopics(area).len(), 3, "{area}");
    }
    assert!(focus_area_subtopics("College Admissions").is_empty());
}
