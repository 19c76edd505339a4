use serde::Deserialize;

/// Collection response: either the paginated envelope
/// `{count, next, previous, results}` or a bare JSON array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paginated {
        #[serde(default)]
        count: Option<u64>,
        #[serde(default)]
        next: Option<String>,
        results: Vec<T>,
    },
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Paginated { results, .. } => results,
            ListResponse::Plain(items) => items,
        }
    }

    /// Total reported by the server, or the length of a bare array
    pub fn total(&self) -> u64 {
        match self {
            ListResponse::Paginated { count, results, .. } => {
                count.unwrap_or(results.len() as u64)
            }
            ListResponse::Plain(items) => items.len() as u64,
        }
    }

    /// Whether the server has more pages after this one
    pub fn has_more(&self) -> bool {
        matches!(self, ListResponse::Paginated { next: Some(_), .. })
    }
}
