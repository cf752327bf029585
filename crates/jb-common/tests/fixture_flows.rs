use jb_common::{
    board::JobBoard,
    config::BoardConfig,
    matching::{
        filter::{filter_jobs, matches, FilterCriteria, StatusFilter},
        location::REMOTE_LOCATION,
        scoring::score,
    },
    profile::profile_completeness,
    source::{FixtureSource, JobSource, ProfileSource},
    CandidateProfile, IntRange, JobId, JobPosting, JobStatus,
};

fn fixture_jobs() -> Vec<JobPosting> {
    FixtureSource.load_jobs().unwrap()
}

fn ids<'a>(jobs: impl IntoIterator<Item = &'a JobPosting>) -> Vec<JobId> {
    jobs.into_iter().map(|job| job.id.clone()).collect()
}

#[test]
fn active_react_jobs_keep_collection_order() {
    let jobs = fixture_jobs();
    let criteria = FilterCriteria {
        status_filter: StatusFilter::Active,
        selected_tags: vec!["React".into()],
        ..FilterCriteria::default()
    };

    let filtered = filter_jobs(&jobs, &criteria);
    assert_eq!(ids(filtered.iter().copied()), vec![JobId::Int(1), JobId::Int(2)]);
    assert!(filtered
        .iter()
        .all(|job| job.status == JobStatus::Active && job.tags.iter().any(|t| t == "React")));
}

#[test]
fn every_fixture_matches_empty_criteria_and_its_own_status() {
    let criteria = FilterCriteria::default();
    for job in fixture_jobs() {
        assert!(matches(&job, &criteria));

        let own = FilterCriteria {
            status_filter: job.status.into(),
            ..FilterCriteria::default()
        };
        assert!(matches(&job, &own));

        for other in [JobStatus::Active, JobStatus::Closed, JobStatus::Draft] {
            if other != job.status {
                let criteria = FilterCriteria {
                    status_filter: other.into(),
                    ..FilterCriteria::default()
                };
                assert!(!matches(&job, &criteria));
            }
        }
    }
}

#[test]
fn remote_location_keeps_every_fixture() {
    let jobs = fixture_jobs();
    let criteria = FilterCriteria {
        location: Some(REMOTE_LOCATION.into()),
        ..FilterCriteria::default()
    };
    assert_eq!(filter_jobs(&jobs, &criteria).len(), jobs.len());

    let tokyo = FilterCriteria {
        location: Some("Tokyo".into()),
        ..FilterCriteria::default()
    };
    assert_eq!(
        ids(filter_jobs(&jobs, &tokyo)),
        vec![JobId::Int(1), JobId::Int(5), JobId::Int(7)]
    );
}

#[test]
fn end_to_end_score_example() {
    let profile = CandidateProfile {
        skills: vec!["React".into(), "TypeScript".into()],
        desired_salary: IntRange::new(500, 800),
        desired_job_categories: vec!["Frontend Engineer".into()],
        desired_industries: vec!["IT".into()],
        ..CandidateProfile::default()
    };
    let mut job = fixture_jobs().remove(0);
    job.tags = vec!["React".into(), "Node.js".into()];
    job.salary_min = 600;
    job.salary_max = 900;

    let result = score(&profile, &job);
    assert_eq!(result.score, 80);
    assert_eq!(
        result.reason_texts(),
        vec![
            "1 skill(s) matched",
            "job category matched",
            "industry matched",
            "desired salary range matched",
        ]
    );
}

#[test]
fn scores_stay_within_bounds_and_are_repeatable() {
    let profile = FixtureSource.load_profile().unwrap();
    for job in fixture_jobs() {
        let first = score(&profile, &job);
        let second = score(&profile, &job);
        assert!(first.score <= 100);
        assert_eq!(first, second);
    }
}

#[test]
fn fixture_profile_recommendations() {
    let profile = FixtureSource.load_profile().unwrap();
    let board = JobBoard::from_source(&FixtureSource, BoardConfig::default()).unwrap();
    let buckets = board.recommendations(&profile);

    let recommended: Vec<_> = buckets
        .recommended
        .iter()
        .map(|e| (e.job.id.clone(), e.result.score, e.high_match))
        .collect();
    assert_eq!(
        recommended,
        vec![(JobId::Int(1), 90, true), (JobId::Int(2), 80, true)]
    );

    assert_eq!(ids(buckets.favorites.iter().map(|e| e.job)), vec![JobId::Int(2)]);
    assert_eq!(buckets.recent.len(), 8);
    assert_eq!(buckets.recent[0].job.id, JobId::Int(1));
    assert_eq!(buckets.recent[7].job.id, JobId::Int(8));

    assert_eq!(profile_completeness(&profile), 100);
}

#[test]
fn paging_through_filtered_listing() {
    let config = BoardConfig::default().with_page_size(2).unwrap();
    let mut board = JobBoard::from_source(&FixtureSource, config).unwrap();
    board.update_criteria(|c| c.industry = Some("IT".into()));

    let first = board.listing();
    assert_eq!(first.total_items, 5);
    assert_eq!(first.total_pages, 3);
    assert_eq!(ids(first.items.iter().copied()), vec![JobId::Int(1), JobId::Int(2)]);

    board.set_page(3);
    let last = board.listing();
    assert_eq!(ids(last.items.iter().copied()), vec![JobId::Int(7)]);
}
