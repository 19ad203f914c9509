use crate::location::unescape;
use std::borrow::Cow;

type ParamsMapInner = Vec<(Cow<'static, str>, Vec<String>)>;

/// Ordered key-value storage for route params and the fragment's query string.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ParamsMap(ParamsMapInner);

impl ParamsMap {
    /// Creates an empty map.
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an already-decoded value into the map.
    ///
    /// If a value with that key already exists, the new value will be added to it.
    pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, value: String) {
        let key = key.into();
        if let Some(prev) = self.0.iter_mut().find(|(k, _)| k == &key) {
            prev.1.push(value);
        } else {
            self.0.push((key, vec![value]));
        }
    }

    /// Gets the most-recently-added value of this param from the map.
    pub fn get(&self, key: &str) -> Option<String> {
        self.get_str(key).map(ToOwned::to_owned)
    }

    /// Gets all values of a param of this name from the map.
    pub fn get_all(&self, key: &str) -> Option<Vec<String>> {
        self.0
            .iter()
            .find_map(|(k, v)| if k == key { Some(v.clone()) } else { None })
    }

    /// Gets a reference to the most-recently-added value of this param from the map.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.iter().find_map(|(k, v)| {
            if k == key {
                v.last().map(|i| i.as_str())
            } else {
                None
            }
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses a raw query string (without the leading `?`).
    ///
    /// Keys and values are percent-decoded and `+` is read as a space.
    pub fn from_query(query: &str) -> Self {
        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (
                    unescape(&k.replace('+', " ")),
                    unescape(&v.replace('+', " ")),
                )
            })
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for ParamsMap
where
    K: Into<Cow<'static, str>>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();

        for (key, value) in iter {
            map.insert(key, value.into());
        }
        map
    }
}

/// Builds a [`ParamsMap`] from `key => value` pairs.
#[macro_export]
macro_rules! params_map {
    ($($key:expr => $val:expr),* $(,)?) => ({
        #[allow(unused_mut)]
        let mut map = $crate::ParamsMap::new();
        $( map.insert($key, ::std::string::String::from($val)); )*
        map
    });
}
