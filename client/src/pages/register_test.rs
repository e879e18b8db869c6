use super::*;
use session::Role;

fn filled() -> RegisterForm {
    RegisterForm {
        full_name: "  Grace Brewster Hopper ".to_owned(),
        email: " grace@navy.mil ".to_owned(),
        profile_details: "Compiler pioneer".to_owned(),
        password: "cobol".to_owned(),
        confirm_password: "cobol".to_owned(),
    }
}

#[test]
fn valid_form_builds_member_registration() {
    let registration = validate_registration(&filled()).unwrap();
    assert_eq!(registration.first_name, "Grace");
    assert_eq!(registration.last_name, "Brewster Hopper");
    assert_eq!(registration.email, "grace@navy.mil");
    assert_eq!(registration.role, Role::Member);
}

#[test]
fn missing_fields_report_in_form_order() {
    let cases: [(fn(&mut RegisterForm), &str); 6] = [
        (|f| f.full_name = " ".to_owned(), "Please enter your full name!"),
        (|f| f.email = String::new(), "Please enter your email!"),
        (|f| f.email = "not-an-email".to_owned(), "Please enter a valid email!"),
        (|f| f.profile_details = String::new(), "Please enter your profile details!"),
        (|f| f.password = String::new(), "Please enter your password!"),
        (|f| f.confirm_password = String::new(), "Please confirm your password!"),
    ];
    for (mutate, expected) in cases {
        let mut form = filled();
        mutate(&mut form);
        assert_eq!(validate_registration(&form), Err(expected));
    }
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let mut form = filled();
    form.confirm_password = "fortran".to_owned();
    assert_eq!(validate_registration(&form), Err("Passwords do not match!"));
}

#[test]
fn email_shape_check() {
    assert!(looks_like_email("a@b.co"));
    assert!(!looks_like_email("a@b"));
    assert!(!looks_like_email("@b.co"));
    assert!(!looks_like_email("a@@b.co"));
    assert!(!looks_like_email("a b@c.co"));
    assert!(!looks_like_email("a@b..co"));
}
