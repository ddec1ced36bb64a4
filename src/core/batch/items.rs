//! Item normalization
//!
//! A batch accepts either a single identifier or an ordered sequence of
//! them. Both are folded into [`Items`] once, before anything is dispatched.

use std::ops::Deref;
use std::sync::Arc;

/// Immutable, ordered identifiers for one batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Items(Arc<[String]>);

impl Items {
    /// An empty (absent) item list
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Deref for Items {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for Items {
    fn from(item: &str) -> Self {
        Self(Arc::from(vec![item.to_string()]))
    }
}

impl From<String> for Items {
    fn from(item: String) -> Self {
        Self(Arc::from(vec![item]))
    }
}

impl From<&String> for Items {
    fn from(item: &String) -> Self {
        Self::from(item.as_str())
    }
}

impl From<Vec<String>> for Items {
    fn from(items: Vec<String>) -> Self {
        Self(Arc::from(items))
    }
}

impl From<Vec<&str>> for Items {
    fn from(items: Vec<&str>) -> Self {
        items.into_iter().collect()
    }
}

impl From<&[&str]> for Items {
    fn from(items: &[&str]) -> Self {
        items.iter().copied().collect()
    }
}

impl From<&[String]> for Items {
    fn from(items: &[String]) -> Self {
        Self(Arc::from(items))
    }
}

impl<const N: usize> From<[&str; N]> for Items {
    fn from(items: [&str; N]) -> Self {
        items.into_iter().collect()
    }
}

/// `None` is an absent item list, which dispatches nothing.
impl<T: Into<Items>> From<Option<T>> for Items {
    fn from(items: Option<T>) -> Self {
        items.map(Into::into).unwrap_or_default()
    }
}

impl<S: Into<String>> FromIterator<S> for Items {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
