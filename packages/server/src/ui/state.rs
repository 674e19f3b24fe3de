//! Server state shared by all handlers.

use std::sync::Arc;

use crate::usecase::{
    ConnectParticipantUseCase, CreateProjectUseCase, DisconnectParticipantUseCase,
    GetChatStatusUseCase, HandleFrameUseCase, ListProjectsUseCase,
};

/// Shared application state
pub struct AppState {
    /// セッションハンドシェイク
    pub connect_participant_usecase: Arc<ConnectParticipantUseCase>,
    /// 切断時の登録解除
    pub disconnect_participant_usecase: Arc<DisconnectParticipantUseCase>,
    /// 受信フレームの処理
    pub handle_frame_usecase: Arc<HandleFrameUseCase>,
    pub get_chat_status_usecase: Arc<GetChatStatusUseCase>,
    pub create_project_usecase: Arc<CreateProjectUseCase>,
    pub list_projects_usecase: Arc<ListProjectsUseCase>,
}
