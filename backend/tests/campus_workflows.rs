//! End-to-end workflows through the services and the in-memory store.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;

use campus::application::{
    EnrolmentService, GetUserInfoQuery, StudentGradeService, UpdateStudentGradeCommand,
    UserInfoService,
};
use campus::domain::ports::{ProfessorRepository, StudentRepository};
use campus::domain::{DomainEvent, UserDraft};
use campus::inbound::ResponseEnvelope;
use campus::outbound::persistence::InMemoryCampusStore;
use rstest::{fixture, rstest};
use serde_json::json;
use shared_kernel::{Entity, UserLevel, UserType};
use uuid::Uuid;

type Enrolment = EnrolmentService<
    InMemoryCampusStore,
    InMemoryCampusStore,
    InMemoryCampusStore,
    InMemoryCampusStore,
>;

struct Services {
    store: Arc<InMemoryCampusStore>,
    enrolment: Enrolment,
    grades: StudentGradeService<InMemoryCampusStore>,
    profiles: UserInfoService<InMemoryCampusStore>,
}

#[fixture]
fn services() -> Services {
    let store = Arc::new(InMemoryCampusStore::default());
    Services {
        enrolment: EnrolmentService::new(
            Arc::clone(&store),
            Arc::clone(&store),
            Arc::clone(&store),
            Arc::clone(&store),
        ),
        grades: StudentGradeService::new(Arc::clone(&store)),
        profiles: UserInfoService::new(Arc::clone(&store)),
        store,
    }
}

fn student_draft() -> UserDraft {
    UserDraft {
        username: "mary@example.org".to_owned(),
        password: "analytical".to_owned(),
        first_name: "Mary".to_owned(),
        last_name: "Somerville".to_owned(),
        user_type: UserType::STUDENT,
        level: UserLevel::STUDENT,
    }
}

async fn enrolled_student(services: &Services) -> Uuid {
    let user = services
        .enrolment
        .register_user(student_draft())
        .await
        .into_value()
        .expect("registered");
    let student = services
        .enrolment
        .enrol_student(*user.id())
        .await
        .into_value()
        .expect("enrolled");
    *student.id()
}

#[rstest]
#[tokio::test]
async fn grade_update_is_persisted_and_published(services: Services) {
    let student_id = enrolled_student(&services).await;

    let outcome = services
        .grades
        .update_grade(UpdateStudentGradeCommand {
            student_id,
            new_grade: 85.5,
        })
        .await;
    assert!(outcome.is_success(), "{}", outcome.error());

    let stored = StudentRepository::find_by_id(services.store.as_ref(), &student_id)
        .await
        .expect("lookup succeeds")
        .expect("student stored");
    assert_eq!(stored.grade().to_bits(), 85.5_f64.to_bits());

    let events = services.store.published_events().await;
    assert!(matches!(
        events.as_slice(),
        [
            DomainEvent::UserRegistered { .. },
            DomainEvent::StudentEnrolled { .. },
            DomainEvent::GradeUpdated { .. },
        ]
    ));
}

#[rstest]
#[case(-5.0)]
#[case(100.5)]
#[case(f64::NAN)]
#[tokio::test]
async fn rejected_grades_leave_the_student_untouched(services: Services, #[case] new_grade: f64) {
    let student_id = enrolled_student(&services).await;

    let envelope = ResponseEnvelope::from(
        services
            .grades
            .update_grade(UpdateStudentGradeCommand {
                student_id,
                new_grade,
            })
            .await,
    );
    assert_eq!(
        serde_json::to_value(&envelope).expect("serialise"),
        json!({"status": "error", "error": "Grade must be between 0 and 100"})
    );

    let stored = StudentRepository::find_by_id(services.store.as_ref(), &student_id)
        .await
        .expect("lookup succeeds")
        .expect("student stored");
    assert_eq!(stored.grade().to_bits(), 0.0_f64.to_bits());
}

#[rstest]
#[tokio::test]
async fn profile_is_served_as_a_success_envelope(services: Services) {
    let user = services
        .enrolment
        .register_user(student_draft())
        .await
        .into_value()
        .expect("registered");

    let envelope = ResponseEnvelope::from(
        services
            .profiles
            .get_user_info(GetUserInfoQuery { user_id: *user.id() })
            .await,
    );
    assert_eq!(
        serde_json::to_value(&envelope).expect("serialise"),
        json!({
            "status": "success",
            "data": {"firstName": "Mary", "lastName": "Somerville"}
        })
    );
}

#[rstest]
#[tokio::test]
async fn usernames_are_unique_regardless_of_case(services: Services) {
    let first = services.enrolment.register_user(student_draft()).await;
    assert!(first.is_success());

    let mut shouted = student_draft();
    shouted.username = "MARY@EXAMPLE.ORG".to_owned();
    let second = services.enrolment.register_user(shouted).await;
    assert_eq!(second.error(), "Username is already registered");
}

#[rstest]
#[tokio::test]
async fn professors_and_lectures_link_both_ways(services: Services) {
    let mut draft = student_draft();
    draft.username = "ada@example.org".to_owned();
    draft.user_type = UserType::PROFESSOR;
    draft.level = UserLevel::PROFESSOR;
    let user = services
        .enrolment
        .register_user(draft)
        .await
        .into_value()
        .expect("registered");
    let professor = services
        .enrolment
        .appoint_professor(*user.id())
        .await
        .into_value()
        .expect("appointed");
    let lecture = services
        .enrolment
        .schedule_lecture("Analytical Engines")
        .await
        .into_value()
        .expect("scheduled");

    let first = services
        .enrolment
        .assign_lecture(*professor.id(), *lecture.id())
        .await;
    assert!(first.is_success(), "{}", first.error());

    let again = services
        .enrolment
        .assign_lecture(*professor.id(), *lecture.id())
        .await;
    assert_eq!(again.error(), "Lecture is already assigned to this professor");

    let appointed_twice = services.enrolment.appoint_professor(*user.id()).await;
    assert_eq!(
        appointed_twice.error(),
        "User is already appointed as a professor"
    );
}

#[rstest]
#[tokio::test]
async fn supervision_is_stored_on_both_records(services: Services) {
    let student_id = enrolled_student(&services).await;
    let mut draft = student_draft();
    draft.username = "charles@example.org".to_owned();
    draft.user_type = UserType::PROFESSOR;
    draft.level = UserLevel::PROFESSOR;
    let user = services
        .enrolment
        .register_user(draft)
        .await
        .into_value()
        .expect("registered");
    let professor_id = *services
        .enrolment
        .appoint_professor(*user.id())
        .await
        .into_value()
        .expect("appointed")
        .id();

    let outcome = services
        .enrolment
        .assign_supervisor(professor_id, student_id)
        .await;
    assert!(outcome.is_success(), "{}", outcome.error());

    let professor = ProfessorRepository::find_by_id(services.store.as_ref(), &professor_id)
        .await
        .expect("lookup succeeds")
        .expect("professor stored");
    assert_eq!(professor.student_ids(), [student_id]);
    let student = StudentRepository::find_by_id(services.store.as_ref(), &student_id)
        .await
        .expect("lookup succeeds")
        .expect("student stored");
    assert_eq!(student.professor_ids(), [professor_id]);

    let again = services
        .enrolment
        .assign_supervisor(professor_id, student_id)
        .await;
    assert_eq!(again.error(), "Student is already assigned to this professor");
}
