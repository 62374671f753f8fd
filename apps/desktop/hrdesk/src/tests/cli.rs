use crate::cli::{AnalysesCommand, Cli, Command, InterviewsCommand, parse_interview_status};

use models::InterviewStatus;

use clap::Parser;

#[test]
fn given_status_spellings_when_parsed_then_mapped() {
    assert_eq!(
        parse_interview_status("scheduled"),
        Ok(InterviewStatus::Scheduled)
    );
    assert_eq!(
        parse_interview_status("Completed"),
        Ok(InterviewStatus::Completed)
    );
    assert_eq!(
        parse_interview_status("cancelled"),
        Ok(InterviewStatus::Canceled)
    );
    assert!(parse_interview_status("pending").is_err());
}

#[test]
fn given_interview_filters_when_parsed_then_fields_populated() {
    let cli = Cli::try_parse_from([
        "hrdesk",
        "interviews",
        "list",
        "--job-id",
        "3",
        "--status",
        "completed",
    ])
    .unwrap();

    match cli.command {
        Command::Interviews(InterviewsCommand::List {
            job_id,
            resume_id,
            status,
        }) => {
            assert_eq!(job_id, Some(3));
            assert_eq!(resume_id, None);
            assert_eq!(status, Some(InterviewStatus::Completed));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_accepted() {
    let cli = Cli::try_parse_from([
        "hrdesk",
        "analyses",
        "create",
        "--job-id",
        "1",
        "--resume-id",
        "2",
        "--force",
        "--base-url",
        "http://staging/api/v1",
    ])
    .unwrap();

    assert_eq!(cli.base_url.as_deref(), Some("http://staging/api/v1"));
    assert!(matches!(
        cli.command,
        Command::Analyses(AnalysesCommand::Create { force: true, .. })
    ));
}

#[test]
fn given_missing_subcommand_when_parsed_then_error() {
    assert!(Cli::try_parse_from(["hrdesk"]).is_err());
}
