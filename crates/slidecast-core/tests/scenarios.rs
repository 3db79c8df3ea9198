use pretty_assertions::assert_eq;
use slidecast_core::{
    ChatMessage, Coordinator, Effect, Event, HandleId, NarrationClip, NarrationPhase,
    SelectedFile, Ticket, UploadOutcome,
};

fn pdf() -> SelectedFile {
    SelectedFile::new("lecture.pdf", "application/pdf")
}

fn loaded(slides: &[&str]) -> Coordinator {
    let mut coordinator = Coordinator::new();
    let ticket = match coordinator.handle(Event::UploadRequested(Some(pdf()))).as_slice() {
        [Effect::Upload { ticket }] => *ticket,
        other => panic!("expected an upload, got {other:?}"),
    };
    coordinator.handle(Event::UploadFinished {
        ticket,
        result: Ok(UploadOutcome {
            message: None,
            slides: slides.iter().map(|s| s.to_string()).collect(),
        }),
    });
    coordinator
}

fn fetch_ticket(effects: &[Effect]) -> Ticket {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchNarration { ticket, .. } => Some(*ticket),
            _ => None,
        })
        .expect("no narration fetch issued")
}

fn start_narration(coordinator: &mut Coordinator) -> HandleId {
    let ticket = fetch_ticket(&coordinator.handle(Event::PresentToggled));
    match coordinator
        .handle(Event::NarrationFetched {
            ticket,
            result: Ok(NarrationClip::new("/static/a1.mp3")),
        })
        .as_slice()
    {
        [Effect::StartPlayback(handle)] => handle.id,
        other => panic!("expected playback to start, got {other:?}"),
    }
}

#[test]
fn test_upload_shows_first_slide() {
    let coordinator = loaded(&["s1.png", "s2.png"]);
    let snapshot = coordinator.snapshot();

    assert!(snapshot.deck.visible);
    assert_eq!(snapshot.deck.label, "Slide 1 of 2");
    assert_eq!(snapshot.deck.slide.as_deref(), Some("s1.png"));
    assert!(!snapshot.deck.previous_enabled);
    assert!(snapshot.deck.next_enabled);
    assert!(snapshot.narration.toggle_enabled);
    assert_eq!(
        snapshot.status.map(|s| s.text),
        Some("PDF processed successfully!".to_string())
    );
}

#[test]
fn test_present_pause_resume_complete() {
    let mut coordinator = loaded(&["s1.png", "s2.png"]);

    let effects = coordinator.handle(Event::PresentToggled);
    let ticket = fetch_ticket(&effects);
    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot.narration.phase, NarrationPhase::Loading);
    assert!(!snapshot.narration.toggle_enabled);

    coordinator.handle(Event::NarrationFetched {
        ticket,
        result: Ok(NarrationClip::new("/static/a1.mp3")),
    });
    assert_eq!(coordinator.snapshot().narration.phase, NarrationPhase::Playing);
    let handle = coordinator.narration().handle().map(|h| h.id).unwrap();

    assert_eq!(
        coordinator.handle(Event::PresentToggled),
        vec![Effect::PausePlayback(handle)]
    );
    assert_eq!(coordinator.snapshot().narration.phase, NarrationPhase::Paused);
    assert_eq!(
        coordinator.snapshot().narration.toggle_label,
        "▶️ Resume Presentation"
    );

    coordinator.handle(Event::PresentToggled);
    assert_eq!(coordinator.snapshot().narration.phase, NarrationPhase::Playing);

    assert_eq!(
        coordinator.handle(Event::PlaybackCompleted(handle)),
        vec![Effect::ReleasePlayback(handle)]
    );
    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot.narration.phase, NarrationPhase::Idle);
    assert_eq!(snapshot.narration.toggle_label, "🎤 Present Slide");
}

#[test]
fn test_next_while_playing_releases_audio() {
    let mut coordinator = loaded(&["s1.png", "s2.png"]);
    let handle = start_narration(&mut coordinator);

    assert_eq!(
        coordinator.handle(Event::NextSlide),
        vec![Effect::ReleasePlayback(handle)]
    );
    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot.deck.slide.as_deref(), Some("s2.png"));
    assert_eq!(snapshot.narration.phase, NarrationPhase::Idle);
    assert_eq!(snapshot.narration.transcript, None);
    assert_eq!(coordinator.narration().live_resources(), 0);

    // The old clip finishing late must not touch the new slide.
    assert!(coordinator.handle(Event::PlaybackCompleted(handle)).is_empty());
}

#[test]
fn test_chat_without_deck_does_nothing() {
    let mut coordinator = Coordinator::new();
    assert!(coordinator.handle(Event::ChatSubmitted("hello".into())).is_empty());
    assert!(coordinator.snapshot().chat.messages.is_empty());
}

#[test]
fn test_chat_network_error_replaces_placeholder() {
    let mut coordinator = loaded(&["s1.png"]);
    let ticket = match coordinator
        .handle(Event::ChatSubmitted("hello".into()))
        .as_slice()
    {
        [Effect::SendChat { ticket, message, slide }] => {
            assert_eq!(message, "hello");
            assert_eq!(slide, "s1.png");
            *ticket
        }
        other => panic!("expected a chat request, got {other:?}"),
    };
    assert!(coordinator.snapshot().chat.awaiting_reply);

    coordinator.handle(Event::ChatReplied {
        ticket,
        result: Err("Failed to send message.".into()),
    });
    assert_eq!(
        coordinator.snapshot().chat.messages,
        vec![
            ChatMessage::user("hello"),
            ChatMessage::assistant("Failed to send message."),
        ]
    );
}

#[test]
fn test_late_chat_reply_after_navigation_is_dropped() {
    let mut coordinator = loaded(&["s1.png", "s2.png"]);
    let effects = coordinator.handle(Event::ChatSubmitted("what is this?".into()));
    let ticket = match effects.as_slice() {
        [Effect::SendChat { ticket, .. }] => *ticket,
        other => panic!("unexpected {other:?}"),
    };

    coordinator.handle(Event::NextSlide);
    coordinator.handle(Event::ChatReplied {
        ticket,
        result: Ok("It is slide one.".into()),
    });
    assert!(coordinator.snapshot().chat.messages.is_empty());
}

#[test]
fn test_late_narration_after_navigation_is_dropped() {
    let mut coordinator = loaded(&["s1.png", "s2.png"]);
    let ticket = fetch_ticket(&coordinator.handle(Event::PresentToggled));

    coordinator.handle(Event::NextSlide);
    let effects = coordinator.handle(Event::NarrationFetched {
        ticket,
        result: Ok(NarrationClip::new("/static/a1.mp3")),
    });
    assert!(effects.is_empty());
    assert_eq!(coordinator.snapshot().narration.phase, NarrationPhase::Idle);
}

#[test]
fn test_narration_failure_is_reported_in_chat() {
    let mut coordinator = loaded(&["s1.png"]);
    let ticket = fetch_ticket(&coordinator.handle(Event::PresentToggled));
    coordinator.handle(Event::NarrationFetched {
        ticket,
        result: Err("Failed to fetch audio script.".into()),
    });

    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot.narration.phase, NarrationPhase::Idle);
    assert!(snapshot.narration.toggle_enabled);
    assert_eq!(
        snapshot.chat.messages,
        vec![ChatMessage::assistant("Failed to fetch audio script.")]
    );
}

#[test]
fn test_invalid_upload_issues_nothing() {
    let mut coordinator = Coordinator::new();
    assert!(coordinator.handle(Event::UploadRequested(None)).is_empty());
    let status = coordinator.snapshot().status.unwrap();
    assert!(status.is_error);
    assert_eq!(status.text, "Please select a PDF file.");

    let text = SelectedFile::new("notes.txt", "text/plain");
    assert!(coordinator.handle(Event::UploadRequested(Some(text))).is_empty());
}

#[test]
fn test_failed_upload_clears_deck_and_stops_audio() {
    let mut coordinator = loaded(&["s1.png", "s2.png"]);
    let handle = start_narration(&mut coordinator);

    let effects = coordinator.handle(Event::UploadRequested(Some(pdf())));
    assert_eq!(effects[0], Effect::ReleasePlayback(handle));
    let ticket = match effects.last() {
        Some(Effect::Upload { ticket }) => *ticket,
        other => panic!("unexpected {other:?}"),
    };

    coordinator.handle(Event::UploadFinished {
        ticket,
        result: Err("Invalid file type. Only PDF is allowed.".into()),
    });
    let snapshot = coordinator.snapshot();
    assert!(!snapshot.deck.visible);
    assert!(!snapshot.chat.visible);
    assert!(!snapshot.narration.toggle_enabled);
    assert!(snapshot.status.unwrap().is_error);
}

#[test]
fn test_superseded_upload_result_is_dropped() {
    let mut coordinator = Coordinator::new();
    let first = match coordinator.handle(Event::UploadRequested(Some(pdf()))).as_slice() {
        [Effect::Upload { ticket }] => *ticket,
        other => panic!("expected an upload, got {other:?}"),
    };
    let second = match coordinator.handle(Event::UploadRequested(Some(pdf()))).as_slice() {
        [Effect::Upload { ticket }] => *ticket,
        other => panic!("expected an upload, got {other:?}"),
    };
    assert_ne!(first, second);
    let uploading = coordinator.snapshot();

    let effects = coordinator.handle(Event::UploadFinished {
        ticket: first,
        result: Ok(UploadOutcome {
            message: Some("old deck".into()),
            slides: vec!["old1.png".into()],
        }),
    });
    assert!(effects.is_empty());
    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot, uploading);
    assert_eq!(snapshot.deck.label, "");
    assert_eq!(
        snapshot.status.map(|s| s.text),
        Some("Uploading and processing PDF...".to_string())
    );

    coordinator.handle(Event::UploadFinished {
        ticket: second,
        result: Ok(UploadOutcome {
            message: None,
            slides: vec!["s1.png".into(), "s2.png".into()],
        }),
    });
    assert_eq!(coordinator.snapshot().deck.label, "Slide 1 of 2");

    // A failure for the superseded request arriving late changes nothing either.
    let settled = coordinator.snapshot();
    coordinator.handle(Event::UploadFinished {
        ticket: first,
        result: Err("Failed to process PDF.".into()),
    });
    assert_eq!(coordinator.snapshot(), settled);
}

#[test]
fn test_go_to_slide_out_of_range_is_ignored() {
    let mut coordinator = loaded(&["s1.png", "s2.png", "s3.png"]);
    assert!(coordinator.handle(Event::GoToSlide(9)).is_empty());
    coordinator.handle(Event::GoToSlide(2));
    let snapshot = coordinator.snapshot();
    assert_eq!(snapshot.deck.label, "Slide 3 of 3");
    assert!(!snapshot.deck.next_enabled);
}
