//! Tests for the account aggregate and its roles.

use super::*;
use rstest::rstest;

#[rstest]
fn blank_account_has_no_facets() {
    let account = Account::new();
    assert!(!account.is_becoming_user());
    assert!(!account.is_provider_enabled());
    assert!(account.provider().is_none());
}

#[rstest]
#[case::username(|account: &mut Account| account.set_username("bob"))]
#[case::privilege_level(|account: &mut Account| account.set_privilege_level(Role::full_privilege_level()))]
#[case::capabilities(|account: &mut Account| account.set_capabilities(Vec::new()))]
#[case::system_id(|account: &mut Account| account.user_mut().set_system_id("3-4"))]
fn setting_any_user_field_materialises_the_user(#[case] set: fn(&mut Account)) {
    let mut account = Account::new();
    set(&mut account);
    assert!(account.is_becoming_user());
    assert!(!account.is_persisted_user());
}

#[rstest]
fn user_id_marks_the_user_as_persisted() {
    let mut account = Account::new();
    account.user_mut().set_user_id(1);
    assert!(account.is_persisted_user());
}

#[rstest]
#[case("   ")]
#[case("")]
fn blank_names_read_back_as_missing(#[case] raw: &str) {
    let mut account = Account::new();
    account.set_given_name(raw);
    account.set_family_name(raw);
    account.set_username(raw);
    assert!(account.given_name().is_none());
    assert!(account.family_name().is_none());
    assert_eq!(account.user().and_then(AccountUser::username), None);
}

#[rstest]
fn whitespace_passwords_count_as_supplied() {
    let mut account = Account::new();
    account.set_password(" ");
    account.set_confirm_password("");
    assert_eq!(account.password(), Some(" "));
    assert!(account.confirm_password().is_none());
}

#[rstest]
fn disabled_provider_keeps_its_identifier() {
    let mut account = Account::new();
    account.set_provider_identifier("P-1");
    account.set_provider_enabled(false);
    assert!(!account.is_provider_enabled());
    assert_eq!(
        account.provider().and_then(ProviderLink::identifier),
        Some("P-1")
    );
}

#[rstest]
fn capabilities_are_deduplicated_and_ordered() {
    let mut account = Account::new();
    let registration = Role::capability("Registration").expect("valid role");
    let clinical = Role::capability("Clinical").expect("valid role");
    account.set_capabilities([registration.clone(), clinical.clone(), registration]);
    let names: Vec<&str> = account
        .user()
        .map(|user| user.capabilities().iter().map(Role::display_name).collect())
        .unwrap_or_default();
    assert_eq!(names, vec!["Clinical", "Registration"]);
}

#[rstest]
#[case("M", Gender::Male)]
#[case("F", Gender::Female)]
fn gender_parses_form_values(#[case] raw: &str, #[case] expected: Gender) {
    assert_eq!(raw.parse::<Gender>(), Ok(expected));
}

#[rstest]
#[case("X")]
#[case("")]
#[case("Male")]
#[case("m")]
#[case(" M")]
#[case("F ")]
fn gender_rejects_unknown_values(#[case] raw: &str) {
    assert!(raw.parse::<Gender>().is_err());
}

#[rstest]
#[case("Application Role: Registration", RoleKind::Capability, "Registration")]
#[case("Privilege Level: Full", RoleKind::PrivilegeLevel, "Full")]
#[case("System Developer", RoleKind::Other, "System Developer")]
fn role_kind_follows_the_name_prefix(
    #[case] name: &str,
    #[case] kind: RoleKind,
    #[case] display: &str,
) {
    let role = Role::new(name).expect("valid role");
    assert_eq!(role.kind(), kind);
    assert_eq!(role.display_name(), display);
}

#[rstest]
#[case("", RoleValidationError::EmptyName)]
#[case("  ", RoleValidationError::EmptyName)]
#[case(" Provider", RoleValidationError::UntrimmedName)]
fn role_rejects_invalid_names(#[case] name: &str, #[case] expected: RoleValidationError) {
    assert_eq!(Role::new(name), Err(expected));
}

#[rstest]
fn prefixed_constructors_reject_blank_suffixes() {
    assert_eq!(
        Role::privilege_level(" "),
        Err(RoleValidationError::EmptyName)
    );
    assert_eq!(
        Role::full_privilege_level().as_ref(),
        FULL_PRIVILEGE_LEVEL
    );
}
