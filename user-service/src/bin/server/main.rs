use std::sync::Arc;

use auth::JwtHandler;
use auth::TokenPairGenerator;
use pipeline::Authenticator;
use pipeline::Pipeline;
use sqlx::postgres::PgPoolOptions;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use user_service::config::Config;
use user_service::config::LoggingConfig;
use user_service::domain::auth::service::AuthService;
use user_service::domain::user::service::UserService;
use user_service::inbound::grpc::methods;
use user_service::inbound::grpc::AuthGrpcService;
use user_service::inbound::grpc::InternalUserGrpcService;
use user_service::inbound::grpc::UserGrpcService;
use user_service::inbound::http::router::create_router;
use user_service::outbound::repositories::PostgresTokenRepository;
use user_service::outbound::repositories::PostgresUserRepository;
use user_service::outbound::security::Argon2CredentialHasher;
use user_service::outbound::security::JwtTokenIssuer;
use user_service::proto::user::internal_user_service_server::InternalUserServiceServer;
use user_service::proto::user::user_service_server::UserServiceServer;
use user_service::proto::user_auth::auth_service_server::AuthServiceServer;

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "user_service=debug,pipeline=debug,tower_http=debug".into());

    if logging.is_json() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;
    init_tracing(&config.logging);

    tracing::info!(
        service = "user-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );
    tracing::info!(
        http_port = config.server.http_port,
        grpc_port = config.server.grpc_port,
        access_token_ttl_minutes = config.jwt.access_token_ttl_minutes,
        refresh_token_ttl_days = config.jwt.refresh_token_ttl_days,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let secret = config.jwt.secret.as_bytes();
    let pipeline = Pipeline::new(
        config.timeouts.table(),
        Authenticator::new(JwtHandler::new(secret), methods::PUBLIC_METHODS),
    );

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let token_repository = Arc::new(PostgresTokenRepository::new(pg_pool));
    let token_issuer = Arc::new(JwtTokenIssuer::new(TokenPairGenerator::new(
        secret,
        config.jwt.access_token_ttl(),
    )));

    let auth_service = Arc::new(
        AuthService::new(
            Arc::clone(&user_repository),
            token_repository,
            Arc::new(Argon2CredentialHasher::new()),
            token_issuer,
        )
        .with_refresh_ttl(config.jwt.refresh_token_ttl()),
    );
    let user_service = Arc::new(UserService::new(user_repository));

    let auth_grpc = Arc::new(AuthGrpcService::new(auth_service, pipeline.clone()));
    let user_grpc = Arc::new(UserGrpcService::new(
        Arc::clone(&user_service),
        pipeline.clone(),
    ));
    let internal_user_grpc = Arc::new(InternalUserGrpcService::new(user_service, pipeline));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        auth_grpc.clone(),
        user_grpc.clone(),
        internal_user_grpc.clone(),
    );
    let http_server = tokio::spawn(async move {
        axum::serve(http_listener, http_application)
            .with_graceful_shutdown(shutdown_signal())
            .await
    });

    let grpc_address = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    tracing::info!(
        address = %grpc_address,
        port = config.server.grpc_port,
        protocol = "grpc",
        "gRpc server listening"
    );

    let grpc_server = tokio::spawn(async move {
        Server::builder()
            .add_service(AuthServiceServer::from_arc(auth_grpc))
            .add_service(UserServiceServer::from_arc(user_grpc))
            .add_service(InternalUserServiceServer::from_arc(internal_user_grpc))
            .serve_with_shutdown(grpc_address, shutdown_signal())
            .await
    });

    match tokio::try_join!(http_server, grpc_server) {
        Ok((http_result, grpc_result)) => {
            if let Err(e) = http_result {
                tracing::error!(error = %e, "Http server error");
            }
            if let Err(e) = grpc_result {
                tracing::error!(error = %e, "gRpc server error");
            }
            tracing::info!("Servers exited");
        }
        Err(e) => tracing::error!(error = %e, "Server task failed"),
    };

    Ok(())
}
