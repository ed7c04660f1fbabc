use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::NaiveDate;
use coffeechat::coffee_chat::candidate_source::{
    CandidateSource, CandidateSourceError, MockCandidates,
};
use coffeechat::coffee_chat::helpers::{get_candidates, get_config, get_semesters};
use coffeechat::coffee_chat::models::{Args, Candidate, Proposal, ProposalError};
use coffeechat::coffee_chat::proposal_sender::{LoggingProposalSender, ProposalSender};
use coffeechat::coffee_chat::run_tool::run;
use coffeechat::schedule::models::ClockTime;
use coffeechat::schedule::store::ScheduleStore;

pub struct TestSource {
    pub args: Args,
}

impl CandidateSource for TestSource {
    async fn fetch_candidates(&self) -> Result<Vec<Candidate>, CandidateSourceError> {
        get_candidates(&self.args).map_err(|err| CandidateSourceError::Unavailable(err.to_string()))
    }
}

pub struct DownSource;

impl CandidateSource for DownSource {
    async fn fetch_candidates(&self) -> Result<Vec<Candidate>, CandidateSourceError> {
        Err(CandidateSourceError::Unavailable("maintenance".to_owned()))
    }
}

pub struct TestSender {
    // proposals that reached the sender, in the order they were handed over
    pub received: Arc<Mutex<Vec<Proposal>>>,
    // recipients whose delivery should fail
    pub unreachable: Vec<String>,
}

impl ProposalSender for TestSender {
    async fn send_proposal(&self, proposal: &Proposal) -> Result<(), ProposalError> {
        proposal.validate()?;
        self.received.lock().unwrap().push(proposal.clone());
        if self.unreachable.contains(&proposal.recipient_id) {
            return Err(ProposalError::Delivery("recipient offline".to_owned()));
        }
        Ok(())
    }
}

fn test_args() -> Args {
    Args {
        config_json_path: PathBuf::from("tests/test.config.json"),
        candidates_json_path: PathBuf::from("tests/test.candidates.json"),
        semesters_json_path: Some(PathBuf::from("tests/test.semesters.json")),
    }
}

fn time(s: &str) -> ClockTime {
    s.parse().unwrap()
}

/* 2024-09-04 is a Wednesday */
fn wednesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 4).unwrap()
}

#[tokio::test]
async fn test_main() {
    let args = test_args();
    let config = get_config(&args).unwrap();
    let store = ScheduleStore::new(get_semesters(&args).unwrap());
    let received = Arc::new(Mutex::new(Vec::new()));
    let sender = TestSender {
        received: Arc::clone(&received),
        unreachable: Vec::new(),
    };

    let summary = run(TestSource { args }, sender, &store, &config, wednesday())
        .await
        .unwrap();

    // viewer has "인공지능 개론" on Monday 13:00-15:00, which hides both of 이지원's slots
    assert_eq!(summary.reviewed, 3);
    assert_eq!(
        summary.favorites.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["1", "3"]
    );
    assert!(summary.failed.is_empty());

    let expected = vec![
        Proposal {
            recipient_id: "1".to_owned(),
            date: NaiveDate::from_ymd_opt(2024, 9, 9).unwrap(),
            time: time("10:00"),
            location: "학생회관 카페".to_owned(),
            message: Some("커피 한 잔 하면서 이야기 나눠요!".to_owned()),
        },
        Proposal {
            recipient_id: "3".to_owned(),
            date: NaiveDate::from_ymd_opt(2024, 9, 6).unwrap(),
            time: time("15:00"),
            location: "학생회관 카페".to_owned(),
            message: Some("커피 한 잔 하면서 이야기 나눠요!".to_owned()),
        },
    ];
    assert_eq!(summary.sent, expected);

    let mut received = received.lock().unwrap().clone();
    received.sort_by(|a, b| a.recipient_id.cmp(&b.recipient_id));
    assert_eq!(received, expected);
}

#[tokio::test]
async fn test_failed_delivery_is_reported() {
    let args = test_args();
    let config = get_config(&args).unwrap();
    let store = ScheduleStore::new(get_semesters(&args).unwrap());
    let sender = TestSender {
        received: Arc::new(Mutex::new(Vec::new())),
        unreachable: vec!["3".to_owned()],
    };

    let summary = run(TestSource { args }, sender, &store, &config, wednesday())
        .await
        .unwrap();

    assert_eq!(summary.sent.len(), 1);
    assert_eq!(summary.sent[0].recipient_id, "1");
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].recipient_id, "3");
}

#[tokio::test]
async fn test_free_semester_proposes_to_everyone() {
    let args = Args {
        semesters_json_path: None,
        ..test_args()
    };
    let config = get_config(&args).unwrap();
    let store = ScheduleStore::new(get_semesters(&args).unwrap());
    let sender = TestSender {
        received: Arc::new(Mutex::new(Vec::new())),
        unreachable: Vec::new(),
    };

    let summary = run(TestSource { args }, sender, &store, &config, wednesday())
        .await
        .unwrap();

    assert_eq!(summary.favorites.len(), 3);
    assert_eq!(summary.sent[1].recipient_id, "2");
    assert_eq!(summary.sent[1].time, time("13:00"));
}

#[tokio::test]
async fn test_unavailable_source_stops_run() {
    let args = test_args();
    let config = get_config(&args).unwrap();
    let store = ScheduleStore::default();
    let sender = TestSender {
        received: Arc::new(Mutex::new(Vec::new())),
        unreachable: Vec::new(),
    };

    let err = run(DownSource, sender, &store, &config, wednesday())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        CandidateSourceError::Unavailable("maintenance".to_owned())
    );
}

#[tokio::test]
async fn test_mock_backends() {
    let candidates = get_candidates(&test_args()).unwrap();
    let source = MockCandidates::new(candidates.clone(), Duration::from_millis(1));
    assert_eq!(source.fetch_candidates().await.unwrap(), candidates);

    let sender = LoggingProposalSender::new(Duration::ZERO);
    let mut proposal = Proposal {
        recipient_id: "1".to_owned(),
        date: wednesday(),
        time: time("16:00"),
        location: "중앙도서관 앞".to_owned(),
        message: None,
    };
    assert_eq!(sender.send_proposal(&proposal).await, Ok(()));

    proposal.location = String::new();
    assert_eq!(
        sender.send_proposal(&proposal).await,
        Err(ProposalError::MissingField("location"))
    );
}
