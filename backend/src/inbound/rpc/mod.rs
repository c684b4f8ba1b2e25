//! RPC inbound adapter carrying request/response envelopes over WebSocket.
//!
//! Responsibilities:
//! - upgrade `GET /rpc` and hand the socket to a per-connection session
//! - decode envelopes and dispatch them to the domain ports
//! - keep WebSocket-specific concerns at the edge of the system

use actix_web::web::{self, Payload};
use actix_web::{HttpRequest, HttpResponse, get};
use tracing::error;

mod dispatch;
mod session;

pub mod messages;
pub mod state;

/// Handle WebSocket upgrade for the `/rpc` endpoint.
#[get("/rpc")]
pub async fn rpc_entry(
    state: web::Data<state::RpcState>,
    req: HttpRequest,
    stream: Payload,
) -> actix_web::Result<HttpResponse> {
    let (response, session, messages) = actix_ws::handle(&req, stream).map_err(|error| {
        error!(error = %error, "WebSocket upgrade failed");
        error
    })?;

    let ports = state.get_ref().clone();
    actix_web::rt::spawn(session::handle_rpc_session(ports, session, messages));
    Ok(response)
}
