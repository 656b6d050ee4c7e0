use std::sync::Arc;

use auth::JwtHandler;
use chat_service::config::Config;
use chat_service::config::LoggingConfig;
use chat_service::domain::room::service::RoomService;
use chat_service::inbound::grpc::methods;
use chat_service::inbound::grpc::ChatGrpcService;
use chat_service::inbound::http::router::create_router;
use chat_service::outbound::grpc::GrpcUserDirectory;
use chat_service::outbound::repositories::PostgresRoomRepository;
use chat_service::proto::chat::chat_service_server::ChatServiceServer;
use pipeline::Authenticator;
use pipeline::Pipeline;
use sqlx::postgres::PgPoolOptions;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "chat_service=debug,pipeline=debug,tower_http=debug".into());

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
        service = "chat-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );
    tracing::info!(
        http_port = config.server.http_port,
        grpc_port = config.server.grpc_port,
        user_service_url = %config.user_service.grpc_url,
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

    let user_directory = Arc::new(GrpcUserDirectory::new(&config.user_service.grpc_url)?);
    let room_repository = Arc::new(PostgresRoomRepository::new(pg_pool));
    let room_service = Arc::new(RoomService::new(room_repository, user_directory));

    let pipeline = Pipeline::new(
        config.timeouts.table(),
        Authenticator::new(
            JwtHandler::new(config.jwt.secret.as_bytes()),
            methods::PUBLIC_METHODS,
        ),
    );
    let chat_grpc = Arc::new(ChatGrpcService::new(room_service, pipeline));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(chat_grpc.clone());
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
            .add_service(ChatServiceServer::from_arc(chat_grpc))
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
