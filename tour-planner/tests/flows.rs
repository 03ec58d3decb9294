use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use rstest::rstest;
use tour_components::{duration_picker::TimeUnit, notification::NotificationStyle};
use tour_planner::{
    App, AppConfig, AppError, Route, Target, TourStyle, UiEvent,
    pages::{EMPTY_TOUR_MESSAGE, PageState, TOUR_STOPS_KEY},
};
use tour_platform::{
    ContainerMinHeight, ShareData, ShareError, ShareService, ShareTarget,
    share::SHARE_UNSUPPORTED_MESSAGE,
};
use tour_ui::{Key, Px};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn app_at(path: &str) -> App {
    let mut app = App::new(AppConfig::default());
    app.open(path).expect("known path");
    app
}

fn click(app: &mut App, target: Target, now: Instant) -> bool {
    app.dispatch(UiEvent::Click(target), now)
        .expect("event handled without error")
}

fn toast_message(app: &App) -> Option<String> {
    app.notification().map(|toast| toast.message.clone())
}

#[test]
fn option_card_reports_after_loading() {
    let mut app = App::new(AppConfig::default());
    let t0 = Instant::now();

    assert!(click(&mut app, Target::OptionCard(0), t0));
    assert!(!click(&mut app, Target::OptionCard(0), t0 + ms(200)));
    app.tick(t0 + ms(999));
    assert_eq!(toast_message(&app), None);

    app.tick(t0 + ms(1_000));
    assert_eq!(
        toast_message(&app).as_deref(),
        Some("Starting Classic Garden Route...")
    );
}

#[rstest]
#[case(0, "Already on Home page")]
#[case(1, "Search feature coming soon!")]
#[case(2, "Settings feature coming soon!")]
fn nav_items_show_messages(#[case] index: usize, #[case] message: &str) {
    let mut app = app_at("/preferences");
    let t0 = Instant::now();
    assert!(click(&mut app, Target::NavItem(index), t0));
    app.tick(t0 + ms(100));
    assert_eq!(toast_message(&app).as_deref(), Some(message));
}

#[test]
fn toast_expires_after_its_lifetime() {
    let mut app = App::new(AppConfig::default());
    let t0 = Instant::now();
    click(&mut app, Target::NavItem(0), t0);
    app.tick(t0 + ms(3_299));
    assert!(app.notification().is_some());
    app.tick(t0 + ms(3_300));
    assert!(app.notification().is_none());
}

#[test]
fn keyboard_moves_focus_and_activates_cards() {
    let mut app = App::new(AppConfig::default());
    let t0 = Instant::now();
    app.dispatch(UiEvent::Focus(Target::OptionCard(0)), t0)
        .expect("focus");
    assert!(app.dispatch(UiEvent::Key(Key::ArrowDown), t0).expect("key"));
    assert!(app.dispatch(UiEvent::Key(Key::parse("Enter")), t0).expect("key"));

    app.tick(t0 + ms(1_000));
    assert_eq!(
        toast_message(&app).as_deref(),
        Some("Starting Limited Time Tour...")
    );
}

#[test]
fn custom_duration_moves_straight_to_tour_plan() {
    let mut app = app_at("durationPage.html");
    let t0 = Instant::now();
    for (unit, value) in [
        (TimeUnit::Hours, 2),
        (TimeUnit::Minutes, 15),
        (TimeUnit::Seconds, 40),
    ] {
        app.dispatch(
            UiEvent::Scroll {
                unit,
                scroll_top: Px(value * 30),
            },
            t0,
        )
        .expect("scroll");
    }
    let PageState::Duration(page) = app.page() else {
        panic!("expected the duration page");
    };
    assert_eq!(page.picker.selected_duration().total_minutes(), 136);

    let version = app.router_version();
    assert!(click(&mut app, Target::NextButton, t0));
    assert_eq!(app.route(), Route::TourPlan);
    assert!(app.router_version() > version);
    assert!(matches!(app.page(), PageState::TourPlan(_)));

    // Nothing is left pending on the duration page.
    app.tick(t0 + ms(1_000));
    assert_eq!(app.route(), Route::TourPlan);
    assert!(app.notification().is_none());
    assert!(app.back());
    assert_eq!(app.route(), Route::Duration);
}

#[test]
fn preset_duration_confirms_from_keyboard() {
    let mut app = app_at("/durationPage.html");
    let t0 = Instant::now();
    assert!(click(&mut app, Target::Preset(1), t0));
    let PageState::Duration(page) = app.page() else {
        panic!("expected the duration page");
    };
    assert_eq!(page.picker.selected_duration().summary(), "30 min");

    app.dispatch(UiEvent::Focus(Target::NextButton), t0).expect("focus");
    assert!(app.dispatch(UiEvent::Key(Key::Enter), t0).expect("key"));
    assert_eq!(app.route(), Route::TourPlan);
}

#[test]
fn preferences_toggle_without_next_button() {
    let mut app = app_at("/preferences");
    let t0 = Instant::now();
    click(&mut app, Target::TourStyle(TourStyle::Custom), t0);
    click(&mut app, Target::TourStyle(TourStyle::Classic), t0);
    let PageState::Preferences(page) = app.page() else {
        panic!("expected the preferences page");
    };
    assert_eq!(page.selected_style(), Some(TourStyle::Classic));

    let version = app.router_version();
    assert!(!click(&mut app, Target::NextButton, t0));
    assert_eq!(app.route(), Route::Preferences);
    assert_eq!(app.router_version(), version);
}

#[test]
fn toasts_use_the_configured_style() {
    let style = NotificationStyle {
        top: 48,
        ..NotificationStyle::default()
    };
    let mut app = App::new(AppConfig::default().notification_style(style));
    let t0 = Instant::now();
    click(&mut app, Target::NavItem(2), t0);
    app.tick(t0 + ms(500));
    let toast = app.notification().expect("toast shown");
    assert_eq!(toast.style, style);
    assert_eq!(toast.style.background_rgb, 0x4a7c59);
}

#[test]
fn empty_tour_does_not_start() {
    let mut app = app_at("/tour-plan");
    let t0 = Instant::now();
    click(&mut app, Target::StartTour, t0);
    app.tick(t0);
    assert_eq!(toast_message(&app).as_deref(), Some(EMPTY_TOUR_MESSAGE));
    assert_eq!(app.route(), Route::TourPlan);
    assert!(app.storage().get_item(TOUR_STOPS_KEY).is_none());
}

#[test]
fn tour_stops_are_handed_to_the_route_map() {
    let mut app = app_at("/tour-plan");
    let t0 = Instant::now();
    for stop in ["Cape Town", "Stellenbosch"] {
        app.dispatch(UiEvent::Input(stop.to_owned()), t0)
            .expect("input");
        click(&mut app, Target::AddDestination, t0);
    }
    app.dispatch(UiEvent::Focus(Target::TextInput), t0)
        .expect("focus");
    app.dispatch(UiEvent::Input("  Franschhoek ".to_owned()), t0)
        .expect("input");
    assert!(app.dispatch(UiEvent::Key(Key::Enter), t0).expect("key"));
    click(&mut app, Target::RemoveDestination(0), t0);

    let PageState::TourPlan(page) = app.page() else {
        panic!("expected the tour plan page");
    };
    assert_eq!(
        page.destinations.labels(),
        ["1. Stellenbosch", "2. Franschhoek"]
    );

    click(&mut app, Target::StartTour, t0);
    assert_eq!(app.route(), Route::Dijkstra);
    assert_eq!(
        app.storage().get_item(TOUR_STOPS_KEY),
        Some(r#"["Stellenbosch","Franschhoek"]"#)
    );
    let PageState::Dijkstra(map) = app.page() else {
        panic!("expected the route map");
    };
    assert_eq!(map.stops, ["Stellenbosch", "Franschhoek"]);
}

#[test]
fn navigation_drops_pending_card_timers() {
    let mut app = App::new(AppConfig::default());
    let t0 = Instant::now();
    click(&mut app, Target::OptionCard(1), t0);
    app.open("/preferences").expect("known path");
    app.tick(t0 + ms(1_500));
    assert!(app.notification().is_none());
}

#[test]
fn feedback_submission_alerts_and_resets() {
    let mut app = app_at("feedbackPage.html");
    let t0 = Instant::now();
    app.dispatch(UiEvent::Input("Great guides".to_owned()), t0)
        .expect("input");
    assert!(app.dispatch(UiEvent::Submit, t0).expect("submit"));
    assert_eq!(app.take_alerts(), ["Thank you for your feedback!"]);
    assert!(app.take_alerts().is_empty());

    let PageState::Feedback(page) = app.page() else {
        panic!("expected the feedback page");
    };
    assert_eq!(page.form.text(), "");
}

#[test]
fn settings_entries_and_language() {
    let mut app = app_at("settingsPage.html");
    let t0 = Instant::now();
    assert!(click(&mut app, Target::SettingsItem(0), t0));
    assert!(!click(&mut app, Target::SettingsItem(42), t0));
    app.dispatch(UiEvent::LanguageChanged("fr".to_owned()), t0)
        .expect("language");
    let PageState::Settings(page) = app.page() else {
        panic!("expected the settings page");
    };
    assert_eq!(page.settings.language(), "fr");
}

#[derive(Clone, Default)]
struct RecordingTarget {
    shared: Arc<Mutex<Vec<ShareData>>>,
}

impl ShareTarget for RecordingTarget {
    fn share(&self, data: &ShareData) -> Result<(), ShareError> {
        self.shared.lock().expect("lock").push(data.clone());
        Ok(())
    }
}

#[test]
fn report_is_shared_with_current_url() {
    let target = RecordingTarget::default();
    let mut app = App::new(AppConfig::default().origin("https://tours.example"))
        .with_share_service(ShareService::with_target(target.clone()));
    app.open("visitorReportPage.html").expect("known path");

    assert!(click(&mut app, Target::ShareButton, Instant::now()));
    assert!(app.take_alerts().is_empty());
    assert_eq!(
        *target.shared.lock().expect("lock"),
        vec![ShareData::new(
            "My Tour Report",
            "Check out the summary of my latest tour!",
            "https://tours.example/visitorReportPage.html",
        )]
    );
}

#[test]
fn share_without_support_falls_back_to_alert() {
    let mut app = app_at("visitorReportPage.html");
    click(&mut app, Target::ShareButton, Instant::now());
    assert_eq!(app.take_alerts(), [SHARE_UNSUPPORTED_MESSAGE]);
}

#[test]
fn resize_is_debounced() {
    let mut app = App::new(AppConfig::default());
    let t0 = Instant::now();
    assert_eq!(app.min_height(), ContainerMinHeight::FullViewport);

    app.dispatch(UiEvent::Resize(Px(700)), t0).expect("resize");
    app.dispatch(UiEvent::Resize(Px(540)), t0 + ms(100))
        .expect("resize");
    app.tick(t0 + ms(300));
    assert_eq!(app.min_height(), ContainerMinHeight::FullViewport);
    app.tick(t0 + ms(350));
    assert_eq!(app.min_height(), ContainerMinHeight::Fixed(Px(540)));
}

#[test]
fn unknown_paths_are_rejected() {
    let mut app = App::new(AppConfig::default());
    let err = app.open("/journey/classic").expect_err("unknown path");
    assert!(matches!(err, AppError::UnknownPath(path) if path == "/journey/classic"));
    assert_eq!(app.route(), Route::Home);

    assert!(tour_planner::launch(AppConfig::default(), "/nowhere").is_err());
    let launched = tour_planner::launch(AppConfig::default(), "/dijkstra").expect("launch");
    assert_eq!(launched.route(), Route::Dijkstra);
}
