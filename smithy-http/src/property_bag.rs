/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A type map used to carry configuration alongside a request through the middleware stack.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Debug, Formatter};

struct NamedType {
    name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl NamedType {
    fn into_inner<T: 'static>(self) -> Option<T> {
        self.value.downcast().map(|t| *t).ok()
    }
}

/// A type map of values keyed by their type
///
/// Each type can be stored at most once. Service crates insert their configuration (region,
/// credentials provider, endpoint resolver...) when an operation is built, and middleware
/// stages read it back out.
#[derive(Default)]
pub struct PropertyBag {
    map: HashMap<TypeId, NamedType>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value of the same type if there was one
    ///
    /// ```
    /// # use smithy_http::property_bag::PropertyBag;
    /// let mut props = PropertyBag::new();
    /// assert!(props.insert(5i32).is_none());
    /// assert_eq!(props.insert(9i32), Some(5i32));
    /// ```
    pub fn insert<T: Send + Sync + 'static>(&mut self, val: T) -> Option<T> {
        self.map
            .insert(
                TypeId::of::<T>(),
                NamedType {
                    name: std::any::type_name::<T>(),
                    value: Box::new(val),
                },
            )
            .and_then(|previous| previous.into_inner())
    }

    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|named| named.value.downcast_ref())
    }

    pub fn get_mut<T: Send + Sync + 'static>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|named| named.value.downcast_mut())
    }

    pub fn remove<T: Send + Sync + 'static>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(|named| named.into_inner())
    }

    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.map.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Debug for PropertyBag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.map.values().map(|named| named.name).collect();
        names.sort_unstable();
        f.debug_struct("PropertyBag").field("types", &names).finish()
    }
}

#[cfg(test)]
mod test {
    use super::PropertyBag;

    #[derive(Debug, PartialEq)]
    struct Region(&'static str);

    #[test]
    fn values_are_keyed_by_type() {
        let mut props = PropertyBag::new();
        props.insert(Region("us-east-1"));
        props.insert(String::from("hello"));
        assert_eq!(props.get::<Region>(), Some(&Region("us-east-1")));
        assert_eq!(props.get::<String>().map(|s| s.as_str()), Some("hello"));
        assert!(props.get::<u64>().is_none());
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn get_mut_and_remove() {
        let mut props = PropertyBag::new();
        props.insert(vec![1, 2]);
        props.get_mut::<Vec<i32>>().expect("present").push(3);
        assert_eq!(props.remove::<Vec<i32>>(), Some(vec![1, 2, 3]));
        assert!(!props.contains::<Vec<i32>>());
        assert!(props.is_empty());
    }

    #[test]
    fn debug_lists_type_names() {
        let mut props = PropertyBag::new();
        props.insert(7u8);
        assert_eq!(format!("{:?}", props), "PropertyBag { types: [\"u8\"] }");
    }
}
