use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pagerline::config::{Config, LoggingConfig, PagerConfig};
use pagerline::ui::app::App;
use pagerline::ui::input::handle_key;

fn two_pager_config() -> Config {
    Config {
        pagers: vec![
            PagerConfig {
                id: "results".to_string(),
                total_pages: 100,
                current_page: 1,
            },
            PagerConfig {
                id: "audit".to_string(),
                total_pages: 5,
                current_page: 9,
            },
        ],
        logging: LoggingConfig::default(),
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn current_pages(app: &App) -> Vec<u32> {
    app.pager_views()
        .iter()
        .map(|view| view.state.current_page())
        .collect()
}

#[test]
fn startup_clamps_configured_pages_and_mounts_plans() {
    let app = App::from_config(&two_pager_config()).unwrap();
    let views = app.pager_views();
    assert_eq!(views.len(), 2);
    assert_eq!(current_pages(&app), vec![1, 5]);
    assert_eq!(views[0].plan.page_numbers(), vec![1, 2, 3, 100]);
    assert!(views[0].focused);
    assert!(app.activity().is_empty());
}

#[test]
fn arrow_keys_move_focused_pager_only() {
    let mut app = App::from_config(&two_pager_config()).unwrap();
    app.on_key(key(KeyCode::Right));
    app.on_key(key(KeyCode::Right));
    assert_eq!(current_pages(&app), vec![3, 5]);

    app.on_key(key(KeyCode::Tab));
    app.on_key(key(KeyCode::Left));
    assert_eq!(current_pages(&app), vec![3, 4]);

    assert_eq!(app.activity().len(), 3);
}

#[test]
fn mounted_plan_follows_signals() {
    let mut app = App::from_config(&two_pager_config()).unwrap();
    app.on_key(key(KeyCode::End));
    let view = &app.pager_views()[0];
    assert_eq!(view.plan.page_numbers(), vec![1, 98, 99, 100]);
    assert_eq!(view.plan.current_page(), Some(100));
}

#[test]
fn boundary_keys_do_not_log_activity() {
    let mut app = App::from_config(&two_pager_config()).unwrap();
    app.on_key(key(KeyCode::Left));
    app.on_key(key(KeyCode::Home));
    assert!(app.activity().is_empty());
}

#[test]
fn minus_shrinks_total_and_reclamps() {
    let mut app = App::from_config(&two_pager_config()).unwrap();
    app.on_key(key(KeyCode::Tab));
    app.on_key(key(KeyCode::Char('-')));
    let view = &app.pager_views()[1];
    assert_eq!(view.state.total_pages(), 4);
    assert_eq!(view.state.current_page(), 4);
    assert!(app.activity()[0].contains("5 -> 4 pages"));
}

#[test]
fn click_on_page_button_dispatches_to_that_pager() {
    let mut app = App::from_config(&two_pager_config()).unwrap();
    app.on_resize(80, 24);

    // header rows 0..3, first pager block rows 3..6, buttons on row 4 from column 2:
    // " ‹ Prev " 2..10, " 1 " 11..14, " 2 " 15..18
    app.on_mouse(click(16, 4));
    assert_eq!(current_pages(&app), vec![2, 5]);

    // second block rows 6..9, buttons on row 7; " 1 " sits at 11..14
    app.on_mouse(click(12, 7));
    assert_eq!(current_pages(&app), vec![2, 1]);
    assert!(app.pager_views()[1].focused);
}

#[test]
fn click_outside_controls_changes_nothing() {
    let mut app = App::from_config(&two_pager_config()).unwrap();
    app.on_resize(80, 24);
    app.on_mouse(click(12, 4)); // current page button
    app.on_mouse(click(70, 20));
    assert_eq!(current_pages(&app), vec![1, 5]);
    assert!(app.activity().is_empty());
}

#[test]
fn quit_keys() {
    let mut app = App::from_config(&two_pager_config()).unwrap();
    handle_key(&mut app, key(KeyCode::Char('x')));
    assert!(!app.should_quit());
    handle_key(&mut app, key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn duplicate_ids_fail_startup() {
    let mut config = two_pager_config();
    config.pagers[1].id = "results".to_string();
    assert!(App::from_config(&config).is_err());
}
