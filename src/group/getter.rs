//! Getter Module
//!
//! The loader seam: how a group fetches a value it does not have.

use std::sync::Arc;

// == Getter Trait ==
/// Loads the value for a key from an external source.
///
/// Implementations may block on disk or network; the group imposes no
/// timeout, so wrap the getter if bounded latency is required.
pub trait Getter: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Vec<u8>>;
}

// == Getter Func ==
/// Adapts a plain function or closure into a `Getter`.
///
/// # Example
/// ```
/// use gee_cache::group::{Getter, GetterFunc};
///
/// let getter = GetterFunc::new(|key: &str| Ok(key.as_bytes().to_vec()));
/// assert_eq!(getter.get("key").unwrap(), b"key".to_vec());
/// ```
#[derive(Debug, Clone)]
pub struct GetterFunc<F>(F);

impl<F> GetterFunc<F>
where
    F: Fn(&str) -> anyhow::Result<Vec<u8>> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Getter for GetterFunc<F>
where
    F: Fn(&str) -> anyhow::Result<Vec<u8>> + Send + Sync,
{
    fn get(&self, key: &str) -> anyhow::Result<Vec<u8>> {
        (self.0)(key)
    }
}

impl<G: Getter + ?Sized> Getter for Arc<G> {
    fn get(&self, key: &str) -> anyhow::Result<Vec<u8>> {
        (**self).get(key)
    }
}

impl<G: Getter + ?Sized> Getter for Box<G> {
    fn get(&self, key: &str) -> anyhow::Result<Vec<u8>> {
        (**self).get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    struct Upper;

    impl Getter for Upper {
        fn get(&self, key: &str) -> anyhow::Result<Vec<u8>> {
            if key == "bad" {
                bail!("{} not exist", key);
            }
            Ok(key.to_uppercase().into_bytes())
        }
    }

    #[test]
    fn test_getter_func() {
        let getter = GetterFunc::new(|key: &str| Ok(key.as_bytes().to_vec()));
        assert_eq!(getter.get("key").unwrap(), b"key".to_vec());
    }

    #[test]
    fn test_custom_getter_through_pointers() {
        let shared: Arc<dyn Getter> = Arc::new(Upper);
        assert_eq!(shared.get("tom").unwrap(), b"TOM".to_vec());

        let boxed: Box<dyn Getter> = Box::new(Upper);
        let err = boxed.get("bad").unwrap_err();
        assert_eq!(err.to_string(), "bad not exist");
    }
}
