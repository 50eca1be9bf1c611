use super::{plain_text, PlainText};
use crate::error::ApiError;
use crate::models::DataQuery;
use crate::routes;
use crate::state::AppState;
use crate::sync;
use axum::extract::{Query, State};
use axum::http::Method;

/// GET /data handler - Read a record, or store one via `set`
///
/// Without `set` this is a plain read answering the stored value or `none`.
/// With `set` the value is persisted under the resolved key; this side
/// effect on GET is kept so existing clients keep working. axum also routes
/// HEAD here; HEAD never writes and is answered as a read.
#[utoipa::path(
    get,
    path = routes::DATA,
    params(DataQuery),
    responses(
        (status = 200, description = "Stored value, `none`, or `Set to: <value>`", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage error", body = String, content_type = "text/plain")
    ),
    tag = "data"
)]
pub async fn get_handler(
    method: Method,
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> Result<PlainText, ApiError> {
    let key = sync::resolve_key(query.id, &state.config.default_key);

    match query.set.filter(|_| method != Method::HEAD) {
        Some(value) => {
            let reply = sync::set(state.store.as_ref(), &key, &value).await?;
            tracing::info!("Set record {:?} via query ({} bytes)", key, value.len());
            Ok(plain_text(reply))
        }
        None => {
            let value = sync::read(state.store.as_ref(), &key).await?;
            tracing::debug!("Read record {:?}", key);
            Ok(plain_text(value))
        }
    }
}
