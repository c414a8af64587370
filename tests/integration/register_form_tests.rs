use kivo_forms::features::register::{RegisterEvent, RegisterState};

use super::open_register;

#[test]
fn given_every_field_change_should_fill_the_form() {
    let (mut controller, renderer) = open_register();

    controller.submit(RegisterEvent::FullNameChanged("Ada Lovelace".into()));
    controller.submit(RegisterEvent::EmailChanged("ada@example.com".into()));
    controller.submit(RegisterEvent::PasswordChanged("engine".into()));
    controller.submit(RegisterEvent::ConfirmPasswordChanged("engine".into()));

    assert_eq!(
        controller.state(),
        &RegisterState {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            password: "engine".into(),
            confirm_password: "engine".into(),
            ..Default::default()
        }
    );
    assert_eq!(renderer.count(), 5);
}

#[test]
fn given_both_visibility_toggles_should_flip_their_own_flag() {
    let (mut controller, renderer) = open_register();

    renderer.with_renders(|renders| {
        (renders[0].on_confirm_password_visibility_toggle)();
    });
    controller.process_events();
    assert!(controller.state().is_confirm_password_visible);
    assert!(!controller.state().is_password_visible);

    controller.submit(RegisterEvent::TogglePasswordVisibility);
    controller.submit(RegisterEvent::ToggleConfirmPasswordVisibility);
    assert!(controller.state().is_password_visible);
    assert!(!controller.state().is_confirm_password_visible);
}

#[test]
fn given_register_and_navigation_clicks_should_leave_state_unchanged() {
    let (mut controller, renderer) = open_register();
    controller.submit(RegisterEvent::EmailChanged("ada@example.com".into()));
    let before = controller.state().clone();

    renderer.with_renders(|renders| {
        (renders[1].on_register_click)();
        (renders[1].on_login_click)();
        (renders[1].on_google_login_click)();
    });
    controller.process_events();

    assert_eq!(controller.state(), &before);
    assert_eq!(renderer.count(), 2);
}

#[test]
fn given_two_register_forms_should_not_share_state() {
    let (mut first, _) = open_register();
    let (second, _) = open_register();

    first.submit(RegisterEvent::FullNameChanged("Grace Hopper".into()));

    assert_eq!(second.state(), &RegisterState::default());
}
