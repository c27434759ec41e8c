use folio::{
    Click, ElementRef, Event, FeedbackKind, FormInput, Key, Millis, PageLayout, Rect, Runtime,
    RuntimeOptions, SectionBox, Session, SiteConfig, Viewport,
};

fn layout() -> PageLayout {
    let ids = ["home", "about", "skills", "projects", "experience", "resume", "contact"];
    PageLayout {
        header_height: None,
        sections: ids
            .iter()
            .enumerate()
            .map(|(i, id)| SectionBox {
                id: (*id).to_string(),
                top: i as f64 * 900.0,
                height: 900.0,
            })
            .collect(),
    }
}

fn runtime(width: f64) -> Runtime {
    let session = Session::open(SiteConfig::default()).unwrap();
    session.attach(RuntimeOptions {
        viewport: Viewport::new(0.0, width, 800.0),
        layout: layout(),
        now: Millis::ZERO,
    })
}

#[test]
fn every_reveal_target_fires_exactly_once() {
    let session = Session::open(SiteConfig::default()).unwrap();
    let targets = session.page().reveal_targets();
    assert_eq!(targets.len(), 18);
    let mut rt = session.attach(RuntimeOptions::default());

    let mut fired = 0;
    for round in 0..3u64 {
        for target in &targets {
            let r = rt.dispatch(Event::Visibility {
                now: Millis(round * 100),
                target: *target,
                ratio: 0.5,
            });
            fired += r.fired.len();
        }
    }
    assert_eq!(fired, targets.len());
    assert_eq!(rt.revealed_count(), targets.len());
}

#[test]
fn timeline_and_dividers_use_their_own_thresholds() {
    let mut rt = runtime(1280.0);

    rt.dispatch(Event::Visibility { now: Millis(0), target: ElementRef::Timeline, ratio: 0.04 });
    assert!(!rt.timeline_animated());
    rt.dispatch(Event::Visibility { now: Millis(1), target: ElementRef::Timeline, ratio: 0.05 });
    assert!(rt.timeline_animated());

    let divider = ElementRef::Divider { index: 2 };
    rt.dispatch(Event::Visibility { now: Millis(2), target: divider, ratio: 0.29 });
    assert!(!rt.divider_drawn(2));
    rt.dispatch(Event::Visibility { now: Millis(3), target: divider, ratio: 0.3 });
    assert!(rt.divider_drawn(2));
    assert!(!rt.divider_drawn(0));
}

#[test]
fn counters_animate_to_their_targets() {
    let mut rt = runtime(1280.0);
    let boxes: Vec<(ElementRef, Rect)> = (0..3)
        .map(|index| {
            (
                ElementRef::Counter { index },
                Rect::new(0.0, 400.0, 120.0, 460.0),
            )
        })
        .collect();
    assert_eq!(rt.observe_boxes(Millis(1_000), &boxes).len(), 3);

    rt.dispatch(Event::Frame { now: Millis(1_900) });
    let mid: Vec<u64> = rt.counter_values().into_iter().map(|(_, v)| v).collect();
    assert!(mid[1] > 0 && mid[1] < 28);

    rt.dispatch(Event::Frame { now: Millis(2_800) });
    let done: Vec<u64> = rt.counter_values().into_iter().map(|(_, v)| v).collect();
    assert_eq!(done, vec![4, 28, 4]);
}

#[test]
fn anchor_clicks_scroll_below_default_header() {
    let mut rt = runtime(1280.0);
    let r = rt.dispatch(Event::Click {
        now: Millis(0),
        target: Click::Anchor("#projects".into()),
    });
    assert!(r.prevent_default);
    assert_eq!(r.scroll_to, Some(3.0 * 900.0 - 72.0));

    let r = rt.dispatch(Event::Click { now: Millis(5), target: Click::Anchor("#".into()) });
    assert_eq!(r.scroll_to, None);
    assert!(!r.prevent_default);
}

#[test]
fn open_nav_traps_focus_and_closes_on_escape() {
    let mut rt = runtime(600.0);
    rt.dispatch(Event::Click { now: Millis(0), target: Click::NavToggle });
    assert!(rt.nav().is_open());
    assert!(rt.body_scroll_locked());

    let r = rt.dispatch(Event::Key { key: Key::Tab, shift: false, focused: Some(5) });
    assert!(r.prevent_default);
    assert_eq!(r.focus, Some(0));
    let r = rt.dispatch(Event::Key { key: Key::Tab, shift: true, focused: Some(0) });
    assert_eq!(r.focus, Some(5));

    rt.dispatch(Event::Key { key: Key::Escape, shift: false, focused: None });
    assert!(!rt.nav().is_open());
    assert!(!rt.body_scroll_locked());
    let r = rt.dispatch(Event::Key { key: Key::Tab, shift: false, focused: Some(5) });
    assert_eq!(r.focus, None);
}

#[test]
fn cursor_glow_only_on_wide_viewports() {
    assert!(runtime(768.0).glow().is_none());

    let mut rt = runtime(1440.0);
    assert!(!rt.glow().unwrap().is_active());
    rt.dispatch(Event::PointerMove { x: 200.0, y: 300.0 });
    assert!(rt.glow().unwrap().is_active());
    for i in 0..400 {
        rt.dispatch(Event::Frame { now: Millis(i * 16) });
    }
    let p = rt.glow().unwrap().position();
    assert!((p.x - 200.0).abs() < 1e-6 && (p.y - 300.0).abs() < 1e-6);
    rt.dispatch(Event::PointerLeave);
    assert!(!rt.glow().unwrap().is_active());
}

#[test]
fn contact_form_round_trip() {
    let mut rt = runtime(1280.0);

    rt.dispatch(Event::Input(FormInput {
        name: "Ada".into(),
        email: "ada@example".into(),
        message: "Hello".into(),
    }));
    let r = rt.dispatch(Event::Submit { now: Millis(0) });
    assert!(r.prevent_default);
    assert_eq!(rt.form().feedback().unwrap().kind, FeedbackKind::Error);

    rt.dispatch(Event::Input(FormInput {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "Hello".into(),
    }));
    rt.dispatch(Event::Submit { now: Millis(100) });
    assert!(rt.form().is_sending());
    assert_eq!(rt.form().button_label(), "Sending…");

    rt.dispatch(Event::Frame { now: Millis(1_300) });
    assert!(!rt.form().is_sending());
    let fb = rt.form().feedback().unwrap();
    assert_eq!(fb.kind, FeedbackKind::Success);
    assert_eq!(fb.message, "Message sent successfully! I'll get back to you soon.");
    assert!(rt.form().fields().name.is_empty());

    rt.dispatch(Event::Frame { now: Millis(6_700) });
    assert!(rt.form().feedback().is_none());
}

#[test]
fn resume_clicks_are_counted() {
    let mut rt = runtime(1280.0);
    rt.dispatch(Event::Click { now: Millis(0), target: Click::ResumeDownload });
    rt.dispatch(Event::Click { now: Millis(1), target: Click::ResumeDownload });
    assert_eq!(rt.resume_downloads(), 2);
}
