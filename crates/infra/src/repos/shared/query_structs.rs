/// Offset based pagination. Records are returned in insertion order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageQuery {
    pub skip: usize,
    pub limit: usize,
}
