mod common;

use common::{Call, FakeIcon, FakeSurface, ROOT, call_log, dropdown, items};
use dropdown::prelude::*;
use dropdown::widget::width::{apply_root_width, menu_style, overlay_width};

// ============================================================================
// Root surface sizing
// ============================================================================

#[test]
fn test_auto_width_sizes_root_on_mount() {
    let log = call_log();
    let mut dd = DropDown::new(
        DropDownConfig::new(items()),
        FakeSurface::new(&log, Some(ROOT)),
        FakeIcon::new(&log),
    );
    assert!(log.borrow().is_empty());

    dd.mount();

    assert_eq!(*log.borrow(), vec![Call::IntrinsicWidth]);
}

#[test]
fn test_root_width_override_wins_over_auto_width() {
    let log = call_log();
    let mut dd = DropDown::new(
        DropDownConfig::new(items()).style(Style::new().width(30)),
        FakeSurface::new(&log, Some(ROOT)),
        FakeIcon::new(&log),
    );

    dd.mount();

    assert!(log.borrow().is_empty());
}

#[test]
fn test_no_intrinsic_sizing_without_auto_width() {
    let log = call_log();
    let mut surface = FakeSurface::new(&log, Some(ROOT));
    let config: DropDownConfig<i32> = DropDownConfig::new(items()).auto_width(false);

    assert!(!apply_root_width(&config, &mut surface));
    assert!(log.borrow().is_empty());
}

#[test]
fn test_config_change_reapplies_width() {
    let (mut dd, log) = dropdown(DropDownConfig::new(items()));

    dd.set_config(DropDownConfig::new(items()).value(3));
    assert_eq!(*log.borrow(), vec![Call::IntrinsicWidth]);

    dd.set_config(DropDownConfig::new(items()).style(Style::new().width(12)));
    assert_eq!(*log.borrow(), vec![Call::IntrinsicWidth]);
}

#[test]
fn test_config_before_mount_does_not_size() {
    let log = call_log();
    let mut dd = DropDown::new(
        DropDownConfig::new(items()),
        FakeSurface::new(&log, Some(ROOT)),
        FakeIcon::new(&log),
    );
    dd.set_config(DropDownConfig::new(items()).value(1));
    assert!(log.borrow().is_empty());
}

// ============================================================================
// Overlay width
// ============================================================================

#[test]
fn test_fixed_width_overlay_matches_anchor() {
    let (mut dd, _log) = dropdown(DropDownConfig::new(items()).auto_width(false));
    dd.activate_control(&Event::click(0, 0));

    let view = dd.view();
    assert_eq!(view.list.style.width, Some(240));
}

#[test]
fn test_menu_style_override_wins_over_anchor_width() {
    let config = DropDownConfig::new(items())
        .auto_width(false)
        .menu_style(Style::new().width(100).bold());
    let (mut dd, _log) = dropdown(config);
    dd.activate_control(&Event::click(0, 0));

    let style = dd.view().list.style;
    assert_eq!(style.width, Some(100));
    assert_eq!(style.bold, Some(true));
}

#[test]
fn test_menu_style_merges_with_anchor_width() {
    let config = DropDownConfig::new(items())
        .auto_width(false)
        .menu_style(Style::new().dim());
    let (mut dd, _log) = dropdown(config);
    dd.activate_control(&Event::click(0, 0));

    let style = dd.view().list.style;
    assert_eq!(style.width, Some(240));
    assert_eq!(style.dim, Some(true));
}

#[test]
fn test_closed_overlay_forces_no_width() {
    let (mut dd, _log) = dropdown(DropDownConfig::new(items()).auto_width(false));
    dd.activate_control(&Event::click(0, 0));
    dd.on_close_requested();

    assert_eq!(dd.view().list.style.width, None);
}

#[test]
fn test_auto_width_overlay_uses_natural_width() {
    let (mut dd, _log) = dropdown(DropDownConfig::new(items()));
    dd.activate_control(&Event::click(0, 0));
    assert_eq!(dd.view().list.style.width, None);
}

#[test]
fn test_overlay_width_recomputed_on_reopen() {
    let (mut dd, _log) = dropdown(DropDownConfig::new(items()).auto_width(false));
    dd.activate_control(&Event::click(0, 0));
    dd.on_close_requested();

    dd.surface_mut().rect = Some(Rect::new(0, 0, 80, 1));
    dd.activate_control(&Event::click(0, 0));

    assert_eq!(dd.view().list.style.width, Some(80));
}

#[test]
fn test_overlay_width_helpers() {
    let anchor = Anchor::new("root", Rect::new(0, 0, 240, 1));
    assert_eq!(overlay_width(false, true, Some(&anchor)), Some(240));
    assert_eq!(overlay_width(true, true, Some(&anchor)), None);
    assert_eq!(overlay_width(false, false, Some(&anchor)), None);
    assert_eq!(overlay_width(false, true, None), None);

    let config: DropDownConfig<i32> = DropDownConfig::default()
        .auto_width(false)
        .menu_style(Style::new().width(50));
    assert_eq!(menu_style(&config, true, Some(&anchor)).width, Some(50));
}
