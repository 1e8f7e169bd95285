/// The authenticated user behind a request.
///
/// Produced by the bearer-token middleware and consumed by operations that
/// need an authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: i64,
}

impl Actor {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}
