// Adapters layer: concrete implementations of the ports over the Planka HTTP API.

pub mod collaborators;
pub mod http;

use crate::core::boards::BoardService;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use collaborators::HttpCollaborators;
use http::HttpTransport;

pub type HttpBoardService = BoardService<HttpTransport, HttpCollaborators<HttpTransport>>;

/// 建立共用同一個 transport（連線池與 token）的看板服務
pub fn connect<C: ConfigProvider + ?Sized>(config: &C) -> Result<HttpBoardService> {
    let transport = HttpTransport::from_config(config)?;
    let collaborators = HttpCollaborators::new(
        transport.clone(),
        config.admin_identity().map(str::to_string),
    );
    Ok(BoardService::new(transport, collaborators))
}
