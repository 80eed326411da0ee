//! Behavioural tests composing the kernel primitives the way a domain does.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::HashSet;

use rstest::{fixture, rstest};
use shared_kernel::{
    Email, Entity, EntityBase, Enumeration, Outcome, UserType, ValidationReport, entity_identity,
    enumeration,
};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
enum AccountEvent {
    Renamed(String),
}

#[derive(Debug)]
struct Account {
    base: EntityBase<Uuid, AccountEvent>,
    email: Email,
    kind: &'static UserType,
    display_name: String,
}

impl Entity for Account {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        self.base.id()
    }
}

entity_identity!(Account);

impl Account {
    fn open(email: &str, kind: &str, display_name: &str) -> Outcome<Self> {
        let mut report = ValidationReport::default();
        report.check(!display_name.trim().is_empty(), "Display name should not be empty");
        let parsed_email = Email::create(email);
        report.absorb(&parsed_email);
        let parsed_kind = Outcome::from_result(UserType::from_name(kind));
        report.absorb(&parsed_kind);

        report.into_outcome(()).bind(|()| {
            parsed_email.bind(|valid_email| {
                parsed_kind.map(|valid_kind| Self {
                    base: EntityBase::transient(),
                    email: valid_email,
                    kind: valid_kind,
                    display_name: display_name.trim().to_owned(),
                })
            })
        })
    }

    fn rename(&mut self, display_name: &str) -> Outcome {
        if display_name.trim().is_empty() {
            return Outcome::failure("Display name should not be empty");
        }
        self.display_name = display_name.trim().to_owned();
        self.base
            .record_event(AccountEvent::Renamed(self.display_name.clone()));
        Outcome::success(())
    }
}

#[fixture]
fn account() -> Account {
    Account::open("ada@example.org", "student", "Ada")
        .into_value()
        .expect("valid account")
}

#[rstest]
fn opened_account_is_transient_until_persisted(mut account: Account) {
    assert!(account.is_transient());
    assert!(account.identity_key().is_none());
    assert!(account.base.assign_id(Uuid::new_v4()).is_success());
    assert!(!account.is_transient());
    assert!(std::ptr::eq(account.kind, UserType::STUDENT));
}

#[test]
fn every_violation_is_reported_together() {
    let outcome = Account::open("", "janitor", " ");
    assert_eq!(
        outcome.error(),
        "Display name should not be empty; Email should not be empty; \
         'janitor' is not a valid name in UserType"
    );
}

#[rstest]
fn failed_mutation_leaves_state_and_events_untouched(mut account: Account) {
    let outcome = account.rename("   ");
    assert!(outcome.is_failure());
    assert_eq!(account.display_name, "Ada");
    assert!(account.base.events().is_empty());

    assert!(account.rename("Ada Lovelace").is_success());
    assert_eq!(
        account.base.events(),
        [AccountEvent::Renamed("Ada Lovelace".to_owned())]
    );
}

#[rstest]
fn persisted_accounts_deduplicate_by_identity(account: Account) {
    let id = Uuid::new_v4();
    let mut first = account;
    assert!(first.base.assign_id(id).is_success());
    let mut second = Account::open("ADA@example.org", "professor", "Someone else")
        .into_value()
        .expect("valid account");
    assert!(second.base.assign_id(id).is_success());

    assert_eq!(first, second);
    assert_eq!(first.email, second.email);
    let keys: HashSet<_> = [&first, &second]
        .into_iter()
        .filter_map(Entity::identity_key)
        .collect();
    assert_eq!(keys.len(), 1);
}

#[test]
fn railway_chain_short_circuits_on_first_failure() {
    let positive = Outcome::success(5)
        .ensure(|x| *x > 0, "must be positive")
        .map(|x| x * 2);
    assert_eq!(positive.value(), Some(&10));

    let negative = Outcome::success(-5)
        .ensure(|x| *x > 0, "must be positive")
        .map(|x| x * 2);
    assert!(negative.is_failure());
    assert_eq!(negative.error(), "must be positive");
}

#[rstest]
#[case("student")]
#[case("STUDENT")]
fn name_lookup_returns_the_declared_singleton(#[case] name: &str) {
    let resolved = UserType::from_name(name).expect("declared name");
    assert!(std::ptr::eq(resolved, UserType::STUDENT));
}

enumeration! {
    /// Colour codes keyed by text.
    pub struct Swatch: &'static str {
        /// Red.
        RED = ("R", "red"),
        /// Blue.
        BLUE = ("B", "blue"),
    }
}

#[test]
fn text_backed_enumerations_match_values_ignoring_case() {
    let resolved = Swatch::from_value(&"r").expect("declared value");
    assert!(std::ptr::eq(resolved, Swatch::RED));
    assert_eq!(Swatch::get_all().len(), 2);
    assert!(Swatch::try_from_name("green").is_none());
}
