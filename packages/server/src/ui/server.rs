//! Server execution logic.

use std::sync::Arc;

use agora_shared::time::Clock;
use axum::{Router, http::Method, routing::get};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    infrastructure::{
        message_pusher::WebSocketMessagePusher,
        repository::{InMemoryMessageLogRepository, InMemoryProjectRepository},
    },
    usecase::{
        ConnectParticipantUseCase, CreateProjectUseCase, DisconnectParticipantUseCase,
        GetChatStatusUseCase, HandleFrameUseCase, ListProjectsUseCase, SendMessageUseCase,
        new_commit_lock,
    },
};

use super::{
    handler::{create_project, health_check, list_projects, root, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket chat server
///
/// # Example
///
/// ```ignore
/// let server = Server::with_in_memory_stores(Arc::new(SystemClock));
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    /// Create a new Server instance from already wired use cases
    pub fn new(
        connect_participant_usecase: Arc<ConnectParticipantUseCase>,
        disconnect_participant_usecase: Arc<DisconnectParticipantUseCase>,
        handle_frame_usecase: Arc<HandleFrameUseCase>,
        get_chat_status_usecase: Arc<GetChatStatusUseCase>,
        create_project_usecase: Arc<CreateProjectUseCase>,
        list_projects_usecase: Arc<ListProjectsUseCase>,
    ) -> Self {
        Self {
            state: Arc::new(AppState {
                connect_participant_usecase,
                disconnect_participant_usecase,
                handle_frame_usecase,
                get_chat_status_usecase,
                create_project_usecase,
                list_projects_usecase,
            }),
        }
    }

    /// Wire every use case against fresh in-memory stores.
    ///
    /// Initialization order:
    /// 1. Repositories (message log, projects)
    /// 2. MessagePusher (connection registry)
    /// 3. UseCases
    pub fn with_in_memory_stores(clock: Arc<dyn Clock>) -> Self {
        // 1. Repositories
        let message_log = Arc::new(InMemoryMessageLogRepository::default());
        let projects = Arc::new(InMemoryProjectRepository::default());

        // 2. MessagePusher
        let message_pusher = Arc::new(WebSocketMessagePusher::default());

        // 3. UseCases
        let commit_lock = new_commit_lock();
        let connect_participant_usecase = Arc::new(ConnectParticipantUseCase::new(
            message_log.clone(),
            message_pusher.clone(),
            clock.clone(),
            commit_lock.clone(),
        ));
        let disconnect_participant_usecase =
            Arc::new(DisconnectParticipantUseCase::new(message_pusher.clone()));
        let send_message_usecase = Arc::new(SendMessageUseCase::new(
            message_log.clone(),
            message_pusher.clone(),
            clock,
            commit_lock,
        ));
        let handle_frame_usecase = Arc::new(HandleFrameUseCase::new(
            send_message_usecase,
            message_pusher.clone(),
        ));
        let get_chat_status_usecase =
            Arc::new(GetChatStatusUseCase::new(message_log, message_pusher));
        let create_project_usecase = Arc::new(CreateProjectUseCase::new(projects.clone()));
        let list_projects_usecase = Arc::new(ListProjectsUseCase::new(projects));

        Self::new(
            connect_participant_usecase,
            disconnect_participant_usecase,
            handle_frame_usecase,
            get_chat_status_usecase,
            create_project_usecase,
            list_projects_usecase,
        )
    }

    /// Build the axum router with all endpoints.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any);

        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/", get(root))
            .route("/api/health", get(health_check))
            .route("/projects", get(list_projects).post(create_project))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Serve on an already bound listener until a shutdown signal arrives.
    pub async fn serve(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let app = self.router();

        tracing::info!(
            "WebSocket chat server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Run the WebSocket chat server
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), std::io::Error> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;
        tracing::info!("Connect to: ws://{}/ws", bind_addr);

        self.serve(listener).await
    }
}
