//! JavaScript Symbol primitive.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A JavaScript Symbol value
///
/// Every call to [`SymbolValue::new`] yields a symbol that compares unequal to
/// all others, matching `Symbol()` semantics. Clones share the identity.
#[derive(Debug, Clone)]
pub struct SymbolValue {
    id: u64,
    description: Option<String>,
}

impl SymbolValue {
    /// Create a new unique symbol with an optional description
    pub fn new(description: Option<String>) -> Self {
        let id = SYMBOL_COUNTER.fetch_add(1, Ordering::Relaxed);
        SymbolValue { id, description }
    }

    /// Unique identifier of this symbol
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Description passed at creation, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for SymbolValue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SymbolValue {}

impl std::hash::Hash for SymbolValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Formats as `Symbol(description)` the way `Symbol.prototype.toString` does.
impl fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "Symbol({})", desc),
            None => write!(f, "Symbol()"),
        }
    }
}
