//! Deterministic roster generation.
//!
//! The same seed always produces the same professor and students.

use std::collections::HashSet;

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::distr::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use shared_kernel::{EMAIL_MAX_LENGTH, Email, UserLevel, UserType};
use thiserror::Error;

use crate::domain::UserDraft;

/// Maximum number of attempts to generate a usable account.
const MAX_ACCOUNT_ATTEMPTS: usize = 100;

/// Length of generated passwords.
const PASSWORD_LEN: usize = 12;

/// Mail domain for generated usernames.
const MAIL_DOMAIN: &str = "campus.example";

/// Upper bound for the numeric suffix that separates namesakes.
const SUFFIX_BOUND: u16 = 1000;

/// Errors raised while generating a roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No valid, unique username appeared within the retry budget.
    #[error("failed to generate a unique username after {max_attempts} attempts")]
    UsernameGenerationFailed {
        /// Attempts made before giving up.
        max_attempts: usize,
    },
}

/// Accounts for one demo campus.
#[derive(Debug, Clone)]
pub struct Roster {
    /// Professor account teaching the demo lecture.
    pub professor: UserDraft,
    /// Student accounts, in generation order.
    pub students: Vec<UserDraft>,
}

/// Generate a professor and `student_count` students from `seed`.
///
/// Usernames are unique within the roster and always pass [`Email`]
/// validation.
///
/// # Errors
///
/// Returns [`GenerationError::UsernameGenerationFailed`] when the name pool
/// is exhausted.
///
/// # Examples
///
/// ```
/// use campus::example_data::generate_roster;
///
/// let first = generate_roster(42, 3).expect("generated");
/// let second = generate_roster(42, 3).expect("generated");
/// assert_eq!(first.students.len(), 3);
/// assert_eq!(first.professor.username, second.professor.username);
/// ```
pub fn generate_roster(seed: u64, student_count: usize) -> Result<Roster, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut taken = HashSet::new();

    let professor = generate_account(
        &mut rng,
        &mut taken,
        UserType::PROFESSOR,
        UserLevel::PROFESSOR,
    )?;
    let mut students = Vec::with_capacity(student_count);
    for _ in 0..student_count {
        students.push(generate_account(
            &mut rng,
            &mut taken,
            UserType::STUDENT,
            UserLevel::STUDENT,
        )?);
    }

    Ok(Roster {
        professor,
        students,
    })
}

fn generate_account(
    rng: &mut ChaCha8Rng,
    taken: &mut HashSet<String>,
    user_type: &'static UserType,
    level: &'static UserLevel,
) -> Result<UserDraft, GenerationError> {
    for _ in 0..MAX_ACCOUNT_ATTEMPTS {
        let first_name: String = FirstName(EN).fake_with_rng(rng);
        let last_name: String = LastName(EN).fake_with_rng(rng);
        let suffix = rng.random_range(0..SUFFIX_BOUND);
        let username = username_for(&first_name, &last_name, suffix);

        if Email::parse(&username).is_err() || !taken.insert(username.to_lowercase()) {
            continue;
        }

        let password = (0..PASSWORD_LEN)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect();
        return Ok(UserDraft {
            username,
            password,
            first_name,
            last_name,
            user_type,
            level,
        });
    }

    Err(GenerationError::UsernameGenerationFailed {
        max_attempts: MAX_ACCOUNT_ATTEMPTS,
    })
}

/// Build `first.last<suffix>@campus.example` from ASCII alphanumerics,
/// shortening the local part to fit [`EMAIL_MAX_LENGTH`].
fn username_for(first_name: &str, last_name: &str, suffix: u16) -> String {
    let clean = |name: &str| -> String {
        name.chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|ch| ch.to_ascii_lowercase())
            .collect()
    };
    let tail = format!("{suffix}@{MAIL_DOMAIN}");
    let local: String = format!("{}.{}", clean(first_name), clean(last_name))
        .chars()
        .take(EMAIL_MAX_LENGTH.saturating_sub(tail.len()))
        .collect();
    format!("{}{tail}", local.trim_matches('.'))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for roster generation.
    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(25)]
    fn roster_has_requested_size(#[case] count: usize) {
        let roster = generate_roster(7, count).expect("generated");
        assert_eq!(roster.students.len(), count);
    }

    #[test]
    fn same_seed_same_roster() {
        let first = generate_roster(99, 5).expect("generated");
        let second = generate_roster(99, 5).expect("generated");
        let names = |roster: &Roster| -> Vec<String> {
            roster
                .students
                .iter()
                .map(|draft| draft.username.clone())
                .collect()
        };
        assert_eq!(names(&first), names(&second));
        assert_eq!(first.professor.password, second.professor.password);
    }

    #[test]
    fn accounts_have_expected_roles_and_unique_usernames() {
        let roster = generate_roster(3, 20).expect("generated");
        assert!(std::ptr::eq(roster.professor.user_type, UserType::PROFESSOR));
        assert!(
            roster
                .students
                .iter()
                .all(|draft| std::ptr::eq(draft.user_type, UserType::STUDENT))
        );

        let unique: HashSet<_> = roster
            .students
            .iter()
            .chain(std::iter::once(&roster.professor))
            .map(|draft| draft.username.to_lowercase())
            .collect();
        assert_eq!(unique.len(), 21);
    }

    #[test]
    fn generated_drafts_build_valid_users() {
        let roster = generate_roster(11, 10).expect("generated");
        for draft in roster.students {
            assert_eq!(draft.password.len(), PASSWORD_LEN);
            let outcome = crate::domain::User::create(draft);
            assert!(outcome.is_success(), "{}", outcome.error());
        }
    }

    #[rstest]
    #[case("Ada", "Lovelace", 7, "ada.lovelace7@campus.example")]
    #[case("Seán", "O'Brien", 12, "sen.obrien12@campus.example")]
    fn usernames_are_sanitised(
        #[case] first: &str,
        #[case] last: &str,
        #[case] suffix: u16,
        #[case] expected: &str,
    ) {
        assert_eq!(username_for(first, last, suffix), expected);
    }

    #[test]
    fn long_names_are_shortened_to_fit() {
        let username = username_for(&"a".repeat(60), &"b".repeat(60), 999);
        assert!(username.len() <= EMAIL_MAX_LENGTH);
        assert!(Email::parse(&username).is_ok());
    }
}
