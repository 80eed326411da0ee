//! Campus demo entry-point: seeds an in-memory campus and logs the service
//! responses as JSON envelopes.

use std::sync::Arc;

use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use campus::application::{
    GetUserInfoQuery, StudentGradeService, UpdateStudentGradeCommand, UserInfoService,
};
use campus::config::CampusSettings;
use campus::example_data::seed_campus;
use campus::inbound::ResponseEnvelope;
use campus::outbound::persistence::InMemoryCampusStore;

const DEFAULT_FILTER: &str = "info";

/// Application bootstrap.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = CampusSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    init_tracing(settings.json_logs);

    let store = Arc::new(InMemoryCampusStore::default());
    let campus = seed_campus(&settings, Arc::clone(&store))
        .await
        .wrap_err("failed to seed demo campus")?;

    let profiles = UserInfoService::new(Arc::clone(&store));
    for user_id in &campus.student_user_ids {
        let profile = profiles
            .get_user_info(GetUserInfoQuery { user_id: *user_id })
            .await;
        log_envelope("get_user_info", &ResponseEnvelope::from(profile))?;
    }

    let grades = StudentGradeService::new(Arc::clone(&store));
    if let Some(student_id) = campus.student_ids.first() {
        let rejected = grades
            .update_grade(UpdateStudentGradeCommand {
                student_id: *student_id,
                new_grade: 150.0,
            })
            .await;
        log_envelope("update_grade", &ResponseEnvelope::from(rejected))?;
    }

    info!(
        events = store.published_events().await.len(),
        "demo complete"
    );
    Ok(())
}

fn init_tracing(json_logs: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = fmt().with_env_filter(filter);
    let result = if json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

fn log_envelope<T: serde::Serialize>(
    operation: &str,
    envelope: &ResponseEnvelope<T>,
) -> Result<()> {
    let json = envelope
        .to_json()
        .wrap_err("failed to serialise response envelope")?;
    info!(operation, envelope = %json, "service response");
    Ok(())
}
