use serde::Deserialize;

/// Query parameters accepted by /data
///
/// Both are taken verbatim; an empty `id` is a valid key distinct from the default.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DataQuery {
    /// Record key; the configured default key when omitted
    pub id: Option<String>,
    /// On GET, store this value instead of reading
    pub set: Option<String>,
}
