//! String interner for identifiers.
//!
//! Interning gives O(1) equality on identifiers and lets the type pool and
//! the scope store compact [`Name`] handles instead of owned strings.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::Name;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// More than `u32::MAX` strings were interned.
    Overflow { count: usize },
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {count} strings, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

struct InternTable {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

/// String interner with concurrent read access.
///
/// Strings are leaked on first insertion so lookups can hand out `&'static`
/// references without holding the lock.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned as [`Name::EMPTY`].
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        StringInterner {
            table: RwLock::new(InternTable {
                map,
                strings: vec![empty],
            }),
        }
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        {
            let guard = self.table.read();
            if let Some(&index) = guard.map.get(s) {
                return Ok(Name::from_raw(index));
            }
        }

        let mut guard = self.table.write();

        // Another writer may have inserted it between the two locks.
        if let Some(&index) = guard.map.get(s) {
            return Ok(Name::from_raw(index));
        }

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);
        Ok(Name::from_raw(index))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` strings are interned.
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up a string that has already been interned, without inserting it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.table.read().map.get(s).copied().map(Name::from_raw)
    }

    /// Look up the string for a Name.
    ///
    /// Names from a different interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or("")
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Check if only the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}

/// Reference-counted interner handle.
///
/// Use this when the interner is created at a coordination point and handed
/// to work that may run on other threads; borrow `&StringInterner` otherwise.
#[derive(Clone, Debug, Default)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a new shared interner.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
