use crate::dashboard::Dashboard;
use crate::data::Selection;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use astra::Request;
use std::io::Read;

/// Largest `/update` body read; anything past it is cut off and fails to parse.
pub const MAX_UPDATE_BODY: u64 = 64 * 1024;

pub fn handle(mut req: Request, dashboard: &Dashboard) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    log::debug!("{method} {path}");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(dashboard.page()),
        ("POST", "/update") => {
            let selection = parse_selection(&mut req)?;
            json_response(&dashboard.update(&selection))
        }
        (_, "/") | (_, "/update") => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

/// Read the JSON body of an update request.
fn parse_selection(req: &mut Request) -> Result<Selection, ServerError> {
    let body = req.body_mut().reader().take(MAX_UPDATE_BODY);
    serde_json::from_reader(body)
        .map_err(|e| ServerError::BadRequest(format!("invalid selection: {e}")))
}
