use kivo_forms::features::login::{LoginEvent, LoginLogic, LoginProps, LoginState};
use kivo_forms::features::register::{RegisterEvent, RegisterLogic, RegisterProps, RegisterState};
use kivo_forms::{FormController, FormLogic, TestRenderer};
use proptest::prelude::*;

// ── Strategies ───────────────────────────────────────────────────────

fn arb_text() -> impl Strategy<Value = String> {
    "[ -~]{0,24}"
}

fn arb_login_state() -> impl Strategy<Value = LoginState> {
    (arb_text(), arb_text(), any::<bool>()).prop_map(|(email, password, is_password_visible)| {
        LoginState {
            email,
            password,
            is_password_visible,
        }
    })
}

fn arb_login_event() -> impl Strategy<Value = LoginEvent> {
    prop_oneof![
        arb_text().prop_map(LoginEvent::EmailChanged),
        arb_text().prop_map(LoginEvent::PasswordChanged),
        Just(LoginEvent::TogglePasswordVisibility),
        Just(LoginEvent::Login),
        Just(LoginEvent::ForgotPassword),
        Just(LoginEvent::SignUp),
        Just(LoginEvent::GoogleLogin),
    ]
}

fn arb_register_state() -> impl Strategy<Value = RegisterState> {
    (
        arb_text(),
        arb_text(),
        arb_text(),
        arb_text(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(full_name, email, password, confirm_password, visible, confirm_visible)| RegisterState {
                full_name,
                email,
                password,
                confirm_password,
                is_password_visible: visible,
                is_confirm_password_visible: confirm_visible,
            },
        )
}

fn arb_register_event() -> impl Strategy<Value = RegisterEvent> {
    prop_oneof![
        arb_text().prop_map(RegisterEvent::FullNameChanged),
        arb_text().prop_map(RegisterEvent::EmailChanged),
        arb_text().prop_map(RegisterEvent::PasswordChanged),
        arb_text().prop_map(RegisterEvent::ConfirmPasswordChanged),
        Just(RegisterEvent::TogglePasswordVisibility),
        Just(RegisterEvent::ToggleConfirmPasswordVisibility),
        Just(RegisterEvent::Register),
        Just(RegisterEvent::Login),
        Just(RegisterEvent::GoogleLogin),
    ]
}

fn reduce_login(state: &LoginState, event: LoginEvent) -> LoginState {
    LoginLogic.update(event, state).0
}

fn reduce_register(state: &RegisterState, event: RegisterEvent) -> RegisterState {
    RegisterLogic.update(event, state).0
}

// ── Properties ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn field_change_replaces_only_that_field(state in arb_login_state(), value in arb_text()) {
        let next = reduce_login(&state, LoginEvent::PasswordChanged(value.clone()));
        prop_assert_eq!(next, LoginState { password: value, ..state });
    }

    #[test]
    fn register_field_change_replaces_only_that_field(state in arb_register_state(), value in arb_text()) {
        let next = reduce_register(&state, RegisterEvent::FullNameChanged(value.clone()));
        prop_assert_eq!(next, RegisterState { full_name: value, ..state });
    }

    #[test]
    fn toggling_twice_is_identity(state in arb_login_state()) {
        let once = reduce_login(&state, LoginEvent::TogglePasswordVisibility);
        prop_assert_ne!(&once, &state);
        prop_assert_eq!(reduce_login(&once, LoginEvent::TogglePasswordVisibility), state);
    }

    #[test]
    fn register_toggles_twice_are_identity(state in arb_register_state()) {
        for toggle in [
            RegisterEvent::TogglePasswordVisibility,
            RegisterEvent::ToggleConfirmPasswordVisibility,
        ] {
            let once = reduce_register(&state, toggle.clone());
            prop_assert_eq!(reduce_register(&once, toggle), state.clone());
        }
    }

    #[test]
    fn unimplemented_events_are_no_ops(
        login in arb_login_state(),
        register in arb_register_state(),
    ) {
        for event in [LoginEvent::Login, LoginEvent::ForgotPassword, LoginEvent::SignUp, LoginEvent::GoogleLogin] {
            prop_assert_eq!(reduce_login(&login, event), login.clone());
        }
        for event in [RegisterEvent::Register, RegisterEvent::Login, RegisterEvent::GoogleLogin] {
            prop_assert_eq!(reduce_register(&register, event), register.clone());
        }
    }

    #[test]
    fn controller_matches_sequential_reduction(
        initial in arb_login_state(),
        events in proptest::collection::vec(arb_login_event(), 0..16),
    ) {
        let mut controller = FormController::new(initial.clone(), LoginLogic, TestRenderer::<LoginProps>::new());
        controller.start();

        let mut expected = initial;
        for event in events {
            expected = reduce_login(&expected, event.clone());
            controller.submit(event);
        }

        prop_assert_eq!(controller.state(), &expected);
    }

    #[test]
    fn register_controller_matches_sequential_reduction(
        events in proptest::collection::vec(arb_register_event(), 0..16),
    ) {
        let renderer = TestRenderer::<RegisterProps>::new();
        let mut controller = FormController::new(RegisterState::default(), RegisterLogic, renderer.clone());
        controller.start();

        let mut expected = RegisterState::default();
        let mut changes = 0;
        for event in events {
            let next = reduce_register(&expected, event.clone());
            if next != expected {
                changes += 1;
            }
            expected = next;
            controller.submit(event);
        }

        prop_assert_eq!(controller.state(), &expected);
        prop_assert_eq!(renderer.count(), 1 + changes);
    }
}
