//! End-to-end command handling against a file-backed library

use encore_cli::{CliConfig, Command, Flow, Session};
use encore_core::UserId;
use encore_playback::PlaybackState;
use encore_server_client::FileLibrary;
use std::io::Write;
use tempfile::NamedTempFile;

fn library_file(ids: &[&str]) -> NamedTempFile {
    let tracks: Vec<String> = ids
        .iter()
        .map(|id| {
            format!(
                r#"{{"id":"{id}","name":"Song {id}","artist":"Artist","source":"mem://{id}","owner":"guest"}}"#
            )
        })
        .collect();

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[{}]", tracks.join(",")).unwrap();
    file
}

async fn session_with(ids: &[&str]) -> (Session, NamedTempFile) {
    let file = library_file(ids);
    let config = CliConfig::default();
    let mut session = Session::new(
        &config.playback_config(),
        config.notification_timeout(),
        Box::new(FileLibrary::new(file.path())),
        UserId::new("guest"),
    );
    assert!(session.login().await);
    (session, file)
}

async fn run(session: &mut Session, line: &str) -> String {
    let command: Command = line.parse().unwrap();
    let (flow, output) = session.execute(command).await;
    assert_eq!(flow, Flow::Continue);
    output
}

fn current(session: &Session) -> Option<String> {
    session.player().current_track().map(|t| t.id.to_string())
}

#[tokio::test]
async fn login_loads_library_without_playing() {
    let (session, _file) = session_with(&["a", "b", "c"]).await;

    assert_eq!(session.player().sequencer().library().len(), 3);
    assert_eq!(session.player().state(), PlaybackState::Idle);
    assert!(session.player().transport().loaded().is_none());
}

#[tokio::test]
async fn select_then_next_walks_library() {
    let (mut session, _file) = session_with(&["a", "b", "c"]).await;

    run(&mut session, "select a").await;
    assert_eq!(current(&session).as_deref(), Some("a"));
    assert!(session.player().transport().is_playing());

    run(&mut session, "next").await;
    assert_eq!(current(&session).as_deref(), Some("b"));
    assert_eq!(session.player().transport().loaded(), Some("b"));
}

#[tokio::test]
async fn queued_track_plays_before_library_order() {
    let (mut session, _file) = session_with(&["a", "b", "c"]).await;

    run(&mut session, "select a").await;
    run(&mut session, "queue c").await;

    let up_next = run(&mut session, "upnext").await;
    let first = up_next.lines().nth(1).unwrap();
    assert!(first.contains("[c]"), "unexpected up next: {up_next}");

    run(&mut session, "next").await;
    assert_eq!(current(&session).as_deref(), Some("c"));
}

#[tokio::test]
async fn unknown_track_is_reported() {
    let (mut session, _file) = session_with(&["a"]).await;

    let output = run(&mut session, "queue zzz").await;
    assert!(output.contains("no track"));
    assert!(session.player().sequencer().manual_queue().is_empty());
}

#[tokio::test]
async fn remove_out_of_range_reports_error() {
    let (mut session, _file) = session_with(&["a", "b"]).await;

    run(&mut session, "select a").await;
    let output = run(&mut session, "remove 5").await;

    assert!(output.contains("Index out of bounds"));
    assert_eq!(session.player().up_next().len(), 1);
}

#[tokio::test]
async fn remove_library_entry_skips_it() {
    let (mut session, _file) = session_with(&["a", "b", "c"]).await;

    run(&mut session, "select a").await;
    let output = run(&mut session, "remove 0").await;

    assert!(output.contains("skipping b"));
    run(&mut session, "next").await;
    assert_eq!(current(&session).as_deref(), Some("c"));
}

#[tokio::test]
async fn end_of_last_track_pauses() {
    let (mut session, _file) = session_with(&["a", "b"]).await;

    run(&mut session, "select b").await;
    run(&mut session, "end").await;

    assert_eq!(session.player().state(), PlaybackState::Paused);
    assert_eq!(current(&session).as_deref(), Some("b"));
}

#[tokio::test]
async fn toggles_report_new_state() {
    let (mut session, _file) = session_with(&["a", "b"]).await;

    assert_eq!(run(&mut session, "shuffle").await, "shuffle on");
    assert_eq!(run(&mut session, "shuffle").await, "shuffle off");
    assert_eq!(run(&mut session, "repeat").await, "repeat on");
}

#[tokio::test]
async fn logout_clears_session() {
    let (mut session, _file) = session_with(&["a", "b"]).await;

    run(&mut session, "select a").await;
    run(&mut session, "queue b").await;
    run(&mut session, "logout").await;

    assert!(session.player().current_track().is_none());
    assert!(session.player().sequencer().library().is_empty());
    assert!(session.player().sequencer().manual_queue().is_empty());
}

#[tokio::test]
async fn quit_stops_the_loop() {
    let (mut session, _file) = session_with(&["a"]).await;

    let (flow, _) = session.execute(Command::Quit).await;
    assert_eq!(flow, Flow::Quit);
}

#[tokio::test]
async fn status_shows_current_track() {
    let (mut session, _file) = session_with(&["a"]).await;

    run(&mut session, "select a").await;
    let status = run(&mut session, "status").await;

    assert!(status.contains("Playing"));
    assert!(status.contains("Song a [a]"));
}
