use super::*;

#[test]
fn section_title_uses_role_wording() {
    assert_eq!(section_title(Role::Admin, "programs").as_deref(), Some("Manage Programs"));
    assert_eq!(section_title(Role::Member, "programs").as_deref(), Some("Programs"));
    assert_eq!(section_title(Role::Mentor, "mentees").as_deref(), Some("My Mentees"));
}

#[test]
fn section_title_falls_back_to_segment_words() {
    assert_eq!(section_title(Role::Mentor, "resource-center").as_deref(), Some("Resource Center"));
    assert_eq!(section_title(Role::Member, "profile").as_deref(), Some("Profile"));
}

#[test]
fn unknown_segment_has_no_title() {
    assert_eq!(section_title(Role::Member, "nope"), None);
}
