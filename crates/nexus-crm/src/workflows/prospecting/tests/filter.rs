use std::collections::BTreeSet;

use super::common::*;
use crate::workflows::lists::{ListId, ListMember, ListMembership};
use crate::workflows::prospecting::domain::CompanyId;
use crate::workflows::prospecting::filter::{
    EntityType, FilterState, IntentBucket, ManagementLevel, ViewMode,
};

#[test]
fn high_intent_net_new_leads_are_selected_in_order() {
    let filters = FilterState {
        intent: Some(IntentBucket::High),
        ..FilterState::default()
    };

    assert_eq!(
        matching_lead_ids(&filters, Vec::new()),
        ids(&["1", "2", "7", "8"])
    );
}

#[test]
fn intent_buckets_split_on_fifty_and_eighty() {
    assert_eq!(IntentBucket::classify(Some(80)), IntentBucket::High);
    assert_eq!(IntentBucket::classify(Some(79)), IntentBucket::Medium);
    assert_eq!(IntentBucket::classify(Some(50)), IntentBucket::Medium);
    assert_eq!(IntentBucket::classify(Some(49)), IntentBucket::Low);
    assert_eq!(IntentBucket::classify(None), IntentBucket::Low);
}

#[test]
fn intent_buckets_partition_the_demo_leads() {
    let count = |bucket| {
        let filters = FilterState {
            intent: Some(bucket),
            ..FilterState::default()
        };
        matching_lead_ids(&filters, Vec::new()).len()
    };

    assert_eq!(count(IntentBucket::High), 4);
    assert_eq!(count(IntentBucket::Medium), 5);
    assert_eq!(count(IntentBucket::Low), 3);
}

#[test]
fn saved_and_net_new_views_partition_records() {
    let memberships = vec![saved_lead("l1", "1"), saved_lead("l2", "3")];

    let net_new = matching_lead_ids(&FilterState::default(), memberships.clone());
    let saved = matching_lead_ids(
        &FilterState {
            view_mode: ViewMode::Saved,
            ..FilterState::default()
        },
        memberships,
    );

    assert_eq!(saved, ids(&["1", "3"]));
    assert_eq!(net_new.len(), 10);
    assert!(net_new.iter().all(|id| !saved.contains(id)));
}

#[test]
fn combined_filters_only_narrow_their_view() {
    let memberships = vec![
        saved_lead("l1", "1"),
        saved_lead("l1", "8"),
        saved_lead("l2", "2"),
        saved_lead("l2", "5"),
    ];
    let combinations = [
        FilterState {
            intent: Some(IntentBucket::High),
            job_titles: "VP".to_string(),
            ..FilterState::default()
        },
        FilterState {
            industry: "software".to_string(),
            employee_ranges: BTreeSet::from(["1000+".to_string(), "201-500".to_string()]),
            ..FilterState::default()
        },
        FilterState {
            keyword: "a".to_string(),
            signals: BTreeSet::from(["Hiring".to_string()]),
            ..FilterState::default()
        },
        FilterState {
            management_levels: BTreeSet::from([ManagementLevel::Vp, ManagementLevel::Director]),
            location: "ca".to_string(),
            ..FilterState::default()
        },
        FilterState {
            view_mode: ViewMode::Saved,
            intent: Some(IntentBucket::High),
            ..FilterState::default()
        },
        FilterState {
            view_mode: ViewMode::Saved,
            list_id: Some(ListId("l2".to_string())),
            keyword: "e".to_string(),
            ..FilterState::default()
        },
    ];

    for filters in combinations {
        let unfiltered = FilterState {
            view_mode: filters.view_mode,
            ..FilterState::default()
        };
        let view: BTreeSet<String> = matching_lead_ids(&unfiltered, memberships.clone())
            .into_iter()
            .collect();
        let narrowed = matching_lead_ids(&filters, memberships.clone());

        assert!(
            narrowed.iter().all(|id| view.contains(id)),
            "{narrowed:?} escaped {view:?} for {filters:?}"
        );
    }
}

#[test]
fn saved_view_can_narrow_to_one_list() {
    let memberships = vec![
        saved_lead("l1", "1"),
        saved_lead("l2", "3"),
        saved_lead("l2", "1"),
    ];
    let filters = FilterState {
        view_mode: ViewMode::Saved,
        list_id: Some(ListId("l2".to_string())),
        ..FilterState::default()
    };

    assert_eq!(matching_lead_ids(&filters, memberships), ids(&["1", "3"]));

    let only_first = FilterState {
        view_mode: ViewMode::Saved,
        list_id: Some(ListId("l1".to_string())),
        ..FilterState::default()
    };
    assert_eq!(
        matching_lead_ids(&only_first, vec![saved_lead("l1", "1"), saved_lead("l2", "3")]),
        ids(&["1"])
    );
}

#[test]
fn management_levels_match_whole_words_in_titles() {
    let filters = FilterState {
        management_levels: BTreeSet::from([ManagementLevel::Vp]),
        ..FilterState::default()
    };
    assert_eq!(
        matching_lead_ids(&filters, Vec::new()),
        ids(&["1", "8", "11"])
    );

    assert!(ManagementLevel::CLevel.matches_title("Chief Revenue Officer"));
    assert!(ManagementLevel::CLevel.matches_title("ceo"));
    assert!(!ManagementLevel::CLevel.matches_title("Director of CEOs Office"));
    assert!(!ManagementLevel::Manager.matches_title("Managing Partner"));
    assert!(ManagementLevel::Individual.matches_title("Anything at all"));
}

#[test]
fn management_levels_combine_with_any_semantics() {
    let filters = FilterState {
        management_levels: BTreeSet::from([ManagementLevel::Director, ManagementLevel::Manager]),
        ..FilterState::default()
    };

    assert_eq!(
        matching_lead_ids(&filters, Vec::new()),
        ids(&["2", "5", "10", "12"])
    );
}

#[test]
fn text_filters_are_case_insensitive_substrings() {
    let filters = FilterState {
        location: "san francisco".to_string(),
        company: "TECHFLOW".to_string(),
        ..FilterState::default()
    };
    assert_eq!(matching_lead_ids(&filters, Vec::new()), ids(&["1", "8"]));

    let by_name = FilterState {
        name: "smith".to_string(),
        ..FilterState::default()
    };
    assert_eq!(matching_lead_ids(&by_name, Vec::new()), ids(&["3"]));
}

#[test]
fn keyword_searches_tags_as_well_as_names() {
    let filters = FilterState {
        keyword: "VIP".to_string(),
        ..FilterState::default()
    };

    assert_eq!(matching_lead_ids(&filters, Vec::new()), ids(&["1"]));
}

#[test]
fn signals_require_an_exact_overlap() {
    let filters = FilterState {
        signals: BTreeSet::from(["Hiring".to_string()]),
        ..FilterState::default()
    };

    assert_eq!(
        matching_lead_ids(&filters, Vec::new()),
        ids(&["1", "8", "9"])
    );
}

#[test]
fn lead_company_attributes_resolve_through_the_directory() {
    let filters = FilterState {
        industry: "software".to_string(),
        ..FilterState::default()
    };
    assert_eq!(
        matching_lead_ids(&filters, Vec::new()),
        ids(&["1", "5", "8", "11", "12"])
    );

    let enterprise = FilterState {
        employee_ranges: BTreeSet::from(["1000+".to_string()]),
        ..FilterState::default()
    };
    assert_eq!(matching_lead_ids(&enterprise, Vec::new()), ids(&["7", "10"]));
}

#[test]
fn leads_with_unknown_companies_fail_company_filters() {
    let mut leads = demo_leads();
    leads.truncate(1);
    leads[0].company = "Nowhere Ltd".to_string();
    let companies = demo_companies();
    let index = crate::workflows::lists::MembershipIndex::default();
    let directory = crate::workflows::prospecting::CompanyDirectory::new(&companies);
    let context = crate::workflows::prospecting::FilterContext {
        memberships: &index,
        companies: &directory,
    };

    let unfiltered =
        crate::workflows::prospecting::filter_prospects(&leads, &FilterState::default(), &context);
    assert_eq!(unfiltered.len(), 1);

    let filters = FilterState {
        industry: "Software".to_string(),
        ..FilterState::default()
    };
    let filtered = crate::workflows::prospecting::filter_prospects(&leads, &filters, &context);
    assert!(filtered.is_empty());
}

#[test]
fn company_filters_use_their_own_attributes() {
    let filters = FilterState {
        industry: "Software".to_string(),
        intent: Some(IntentBucket::High),
        ..FilterState::default()
    };
    let matched = matching_company_ids(&filters, Vec::new());
    assert!(matched.contains(&"1".to_string()));
    assert!(!matched.contains(&"2".to_string()));

    let saved_company = ListMembership {
        list_id: ListId("l2".to_string()),
        member: ListMember::Company(CompanyId("1".to_string())),
    };
    let net_new = matching_company_ids(&FilterState::default(), vec![saved_company]);
    assert_eq!(net_new.len(), demo_companies().len() - 1);
    assert!(!net_new.contains(&"1".to_string()));
}

#[test]
fn saved_search_overlay_keeps_unset_criteria() {
    let mut current = FilterState {
        location: "Austin".to_string(),
        intent: Some(IntentBucket::Low),
        ..FilterState::default()
    };
    let saved = FilterState {
        management_levels: BTreeSet::from([ManagementLevel::CLevel]),
        intent: Some(IntentBucket::High),
        ..FilterState::default()
    };

    current.overlay(&saved);

    assert_eq!(current.location, "Austin");
    assert_eq!(current.intent, Some(IntentBucket::High));
    assert!(current.management_levels.contains(&ManagementLevel::CLevel));
}

#[test]
fn switching_to_companies_drops_people_criteria() {
    let mut filters = FilterState {
        job_titles: "VP".to_string(),
        management_levels: BTreeSet::from([ManagementLevel::Vp]),
        location: "Chicago".to_string(),
        ..FilterState::default()
    };

    filters.clear_people_only();

    assert!(filters.job_titles.is_empty());
    assert!(filters.management_levels.is_empty());
    assert_eq!(filters.location, "Chicago");
    assert_eq!(EntityType::default(), EntityType::People);
}
