/// An administrative DNS namespace rooted at `name`. Owned entirely by
/// the external store; the resolver only reads it.
///
/// `name` is stored without a trailing dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    pub id: i64,
    pub name: String,
}

impl Zone {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
