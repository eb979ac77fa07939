use caresignal_infra::{Config, PageQuery};

/// Fills in the defaults for `skip` and `limit` and caps `limit` at the configured maximum
pub fn page_query(skip: Option<usize>, limit: Option<usize>, config: &Config) -> PageQuery {
    PageQuery {
        skip: skip.unwrap_or(0),
        limit: limit
            .unwrap_or(config.default_page_size)
            .min(config.max_page_size),
    }
}
