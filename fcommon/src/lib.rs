//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use fcommon::{FormType, RecordId};
//!
//! let form_type = FormType::from("address");
//! let id = RecordId::generate();
//!
//! assert_eq!(form_type, FormType::address());
//! assert_eq!(form_type.as_str(), "address");
//! assert_ne!(id, RecordId::generate());
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use fcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Form-type and record identifier newtypes shared by every layer.
    //!
    //! ```rust
    //! use fcommon::{FormType, RecordId};
    //!
    //! let payment = FormType::new("payment");
    //! assert_eq!(payment.to_string(), "payment");
    //! assert_eq!(payment.display_title(), "Payment Information");
    //!
    //! let id = RecordId::new("rec-1");
    //! assert_eq!(id.as_str(), "rec-1");
    //! ```

    use std::fmt::{Display, Formatter};

    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    /// Selector naming which schema and record group is active.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FormType(String);

    impl FormType {
        pub const USER_INFO: &'static str = "userInfo";
        pub const ADDRESS: &'static str = "address";
        pub const PAYMENT: &'static str = "payment";

        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        pub fn user_info() -> Self {
            Self::new(Self::USER_INFO)
        }

        pub fn address() -> Self {
            Self::new(Self::ADDRESS)
        }

        pub fn payment() -> Self {
            Self::new(Self::PAYMENT)
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }

        /// Heading used when records of this type are listed.
        ///
        /// Unknown form types fall back to their raw key.
        pub fn display_title(&self) -> &str {
            match self.0.as_str() {
                Self::USER_INFO => "User Information",
                Self::ADDRESS => "Address Information",
                Self::PAYMENT => "Payment Information",
                other => other,
            }
        }
    }

    impl Default for FormType {
        fn default() -> Self {
            Self::user_info()
        }
    }

    impl Display for FormType {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for FormType {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for FormType {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }

    /// Opaque record identity, stable across edits.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct RecordId(String);

    impl RecordId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        /// Draws a fresh identifier from the v4 UUID space.
        pub fn generate() -> Self {
            Self(Uuid::new_v4().simple().to_string())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }
    }

    impl Display for RecordId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for RecordId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for RecordId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }
}

pub mod registry {
    //! Generic registry map wrapper used by catalog lookups.
    //!
    //! ```rust
    //! use fcommon::Registry;
    //!
    //! let mut registry = Registry::new();
    //! registry.insert("alpha".to_string(), 1_u32);
    //!
    //! assert_eq!(registry.get("alpha"), Some(&1));
    //! assert!(registry.contains_key("alpha"));
    //! ```

    use std::borrow::Borrow;
    use std::collections::HashMap;
    use std::hash::Hash;

    #[derive(Debug, Clone)]
    pub struct Registry<K, V> {
        items: HashMap<K, V>,
    }

    impl<K, V> Default for Registry<K, V>
    where
        K: Eq + Hash,
    {
        fn default() -> Self {
            Self {
                items: HashMap::new(),
            }
        }
    }

    impl<K, V> Registry<K, V>
    where
        K: Eq + Hash,
    {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert(&mut self, key: K, value: V) -> Option<V> {
            self.items.insert(key, value)
        }

        pub fn get<Q>(&self, key: &Q) -> Option<&V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.items.get(key)
        }

        pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.items.remove(key)
        }

        pub fn contains_key<Q>(&self, key: &Q) -> bool
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.items.contains_key(key)
        }

        pub fn keys(&self) -> impl Iterator<Item = &K> {
            self.items.keys()
        }

        pub fn values(&self) -> impl Iterator<Item = &V> {
            self.items.values()
        }

        pub fn len(&self) -> usize {
            self.items.len()
        }

        pub fn is_empty(&self) -> bool {
            self.items.is_empty()
        }
    }
}

pub use context::{FormType, RecordId};
pub use future::BoxFuture;
pub use registry::Registry;
