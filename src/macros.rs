//! The [`xml!`](crate::xml) macro: literal construction of [`XmlValue`]
//! trees, mostly for tests and demos.
//!
//! ```rust
//! use canonxml::xml;
//!
//! let tree = xml!({
//!     "root": {
//!         "item": [{"name": "a"}, {"name": "b"}],
//!         "custom": "true",
//!     }
//! });
//! assert!(tree.is_mapping());
//! ```
//!
//! String (and other `Display`) expressions become leaves, `[...]` becomes
//! a list, `{...}` becomes a mapping with insertion order following source
//! order.
//!
//! [`XmlValue`]: crate::XmlValue

#[macro_export]
macro_rules! xml {
    // Lists
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::XmlValue::List(vec![$($crate::xml!($elem)),*])
    };

    // Mappings
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut mapping = $crate::XmlMap::new();
        $(
            mapping.insert($key.to_string(), $crate::xml!($value));
        )*
        $crate::XmlValue::Mapping(mapping)
    }};

    // Leaves: any displayable expression
    ($text:expr) => {
        $crate::XmlValue::Leaf($text.to_string())
    };
}
