pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::{admin, assignment, auth, notification, submission};

use crate::admin::adapter::outgoing::admin_stats_postgres::AdminStatsPostgres;
use crate::admin::application::admin_use_cases::AdminUseCases;
use crate::admin::application::service::{
    ContentOversightService, ManageUsersService, SystemOverviewService,
};
use crate::api::openapi::ApiDoc;
use crate::assignment::adapter::outgoing::assignment_query_postgres::AssignmentQueryPostgres;
use crate::assignment::adapter::outgoing::assignment_repository_postgres::AssignmentRepositoryPostgres;
use crate::assignment::application::assignment_use_cases::AssignmentUseCases;
use crate::assignment::application::service::{
    CreateAssignmentService, DeleteAssignmentService, GetAssignmentsService,
    GetSingleAssignmentService, UpdateAssignmentService,
};
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::{
    change_password::ChangePasswordUseCase, fetch_current_user::FetchCurrentUserUseCase,
    login_user::LoginUserUseCase, register_user::RegisterUserUseCase,
};
use crate::notification::adapter::outgoing::notification_query_postgres::NotificationQueryPostgres;
use crate::notification::adapter::outgoing::notification_repository_postgres::NotificationRepositoryPostgres;
use crate::notification::application::notification_use_cases::NotificationUseCases;
use crate::notification::application::service::{
    DeleteNotificationService, ListNotificationsService, MarkAllNotificationsReadService,
    MarkNotificationReadService, NotifyActivityService,
};
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::submission::adapter::outgoing::submission_query_postgres::SubmissionQueryPostgres;
use crate::submission::adapter::outgoing::submission_repository_postgres::SubmissionRepositoryPostgres;
use crate::submission::application::domain::entities::SubmissionWindow;
use crate::submission::application::service::{
    GetAssignmentSubmissionsService, GetMySubmissionsService, ReviewSubmissionService,
    SubmitAssignmentService, UpdateSubmissionService,
};
use crate::submission::application::submission_use_cases::SubmissionUseCases;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub assignment: AssignmentUseCases,
    pub submission: SubmissionUseCases,
    pub notification: NotificationUseCases,
    pub admin: AdminUseCases,
}

fn env_flag(key: &str) -> bool {
    env::var(key)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let max_connections: u32 = env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(20);

    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(max_connections)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    if env_flag("RUN_MIGRATIONS") {
        Migrator::up(&conn, None)
            .await
            .expect("Failed to run database migrations");
        info!("Database migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let jwt_service = Arc::new(JwtTokenService::new(JwtConfig::from_env()));
    let hasher = Arc::new(Argon2Hasher::from_env());
    let user_query = Arc::new(UserQueryPostgres::new(Arc::clone(&db_arc)));
    let user_repo = Arc::new(UserRepositoryPostgres::new(Arc::clone(&db_arc)));
    let assignment_query = Arc::new(AssignmentQueryPostgres::new(Arc::clone(&db_arc)));
    let assignment_repo = Arc::new(AssignmentRepositoryPostgres::new(Arc::clone(&db_arc)));
    let submission_query = Arc::new(SubmissionQueryPostgres::new(Arc::clone(&db_arc)));
    let submission_repo = Arc::new(SubmissionRepositoryPostgres::new(Arc::clone(&db_arc)));
    let notification_query = Arc::new(NotificationQueryPostgres::new(Arc::clone(&db_arc)));
    let notification_repo = Arc::new(NotificationRepositoryPostgres::new(Arc::clone(&db_arc)));
    let admin_stats = Arc::new(AdminStatsPostgres::new(Arc::clone(&db_arc)));

    let window = SubmissionWindow::new(env_flag("ALLOW_LATE_SUBMISSIONS"));
    info!(accept_late = window.accept_late, "Submission window configured");

    let notifier = Arc::new(NotifyActivityService::new(
        notification_repo.clone(),
        user_query.clone(),
    ));

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            hasher.clone(),
            jwt_service.clone(),
        )),
        login: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            hasher.clone(),
            jwt_service.clone(),
        )),
        current_user: Arc::new(FetchCurrentUserUseCase::new(user_query.clone())),
        change_password: Arc::new(ChangePasswordUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            hasher.clone(),
        )),
    };

    let assignment = AssignmentUseCases {
        create: Arc::new(CreateAssignmentService::new(
            assignment_repo.clone(),
            assignment_query.clone(),
            notifier.clone(),
        )),
        get_list: Arc::new(GetAssignmentsService::new(assignment_query.clone())),
        get_single: Arc::new(GetSingleAssignmentService::new(assignment_query.clone())),
        update: Arc::new(UpdateAssignmentService::new(
            assignment_repo.clone(),
            assignment_query.clone(),
        )),
        delete: Arc::new(DeleteAssignmentService::new(
            assignment_repo,
            assignment_query.clone(),
        )),
    };

    let submission = SubmissionUseCases {
        submit: Arc::new(SubmitAssignmentService::new(
            submission_repo.clone(),
            submission_query.clone(),
            assignment_query.clone(),
            notifier,
            window,
        )),
        update: Arc::new(UpdateSubmissionService::new(
            submission_repo.clone(),
            submission_query.clone(),
            assignment_query.clone(),
            window,
        )),
        by_assignment: Arc::new(GetAssignmentSubmissionsService::new(
            submission_query.clone(),
            assignment_query.clone(),
        )),
        mine: Arc::new(GetMySubmissionsService::new(submission_query.clone())),
        review: Arc::new(ReviewSubmissionService::new(
            submission_repo,
            submission_query.clone(),
            assignment_query.clone(),
        )),
    };

    let notification = NotificationUseCases {
        list: Arc::new(ListNotificationsService::new(notification_query.clone())),
        mark_read: Arc::new(MarkNotificationReadService::new(
            notification_query.clone(),
            notification_repo.clone(),
        )),
        mark_all_read: Arc::new(MarkAllNotificationsReadService::new(
            notification_repo.clone(),
        )),
        delete: Arc::new(DeleteNotificationService::new(
            notification_query,
            notification_repo,
        )),
    };

    let admin = AdminUseCases {
        users: Arc::new(ManageUsersService::new(
            user_query.clone(),
            user_repo,
            hasher,
            admin_stats.clone(),
        )),
        overview: Arc::new(SystemOverviewService::new(admin_stats, user_query)),
        content: Arc::new(ContentOversightService::new(
            assignment_query,
            submission_query,
        )),
    };

    let state = AppState {
        auth,
        assignment,
        submission,
        notification,
        admin,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = jwt_service;
    let db_for_server = Arc::clone(&db_arc);
    let openapi = ApiDoc::openapi();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_current_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::change_password_handler);
    // Assignments
    cfg.service(crate::assignment::adapter::incoming::web::routes::get_assignments_handler);
    cfg.service(crate::assignment::adapter::incoming::web::routes::create_assignment_handler);
    cfg.service(crate::assignment::adapter::incoming::web::routes::get_single_assignment_handler);
    cfg.service(crate::assignment::adapter::incoming::web::routes::update_assignment_handler);
    cfg.service(crate::assignment::adapter::incoming::web::routes::delete_assignment_handler);
    // Submissions
    cfg.service(crate::submission::adapter::incoming::web::routes::get_my_submissions_handler);
    cfg.service(crate::submission::adapter::incoming::web::routes::get_assignment_submissions_handler);
    cfg.service(crate::submission::adapter::incoming::web::routes::submit_assignment_handler);
    cfg.service(crate::submission::adapter::incoming::web::routes::update_submission_handler);
    cfg.service(crate::submission::adapter::incoming::web::routes::review_submission_handler);
    // Notifications
    cfg.service(crate::notification::adapter::incoming::web::routes::list_notifications_handler);
    cfg.service(crate::notification::adapter::incoming::web::routes::mark_all_notifications_read_handler);
    cfg.service(crate::notification::adapter::incoming::web::routes::mark_notification_read_handler);
    cfg.service(crate::notification::adapter::incoming::web::routes::delete_notification_handler);
    // Admin
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_health_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::system_stats_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::activity_log_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::create_user_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::get_user_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::update_user_status_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::update_user_role_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::delete_user_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_assignments_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_submissions_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
