#[derive(Debug, Default, Clone)]
pub struct PageInput {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

impl PageInput {
    pub(crate) fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(skip) = self.skip {
            params.push(format!("skip={}", skip));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }
        params.join("&")
    }
}
