// Copyright 2026 Sean Kelleher. All rights reserved.
// Use of this source code is governed by an MIT
// licence that can be found in the LICENCE file.

use std::ops::Index;

pub mod error;
pub mod value;

use indexmap::map::Iter;
use indexmap::IndexMap;
use snafu::OptionExt;
use snafu::ResultExt;

use self::error::Error;
use self::error::PropNotFound;
use self::error::UndefinedMethod;
use self::value::Method;
use self::value::Value;

// An `Object` is an ordered collection of named slots. A slot's value may be
// ordinary data or a func; funcs stored in slots can be run as instance
// methods via `invoke`, with the object bound as their receiver. `duplicate`
// returns a shallow copy, which supports prototype-style extension: attach
// new or overriding slots to the copy without touching the original.
//
// An `Object` holds no locks of its own; exposing one object to concurrent
// callers is the caller's concern. Compound slot values (lists, objects) are
// shared through `Arc<Mutex<..>>` handles, so they can alias structures held
// by other objects.
#[derive(Clone, Debug, Default)]
pub struct Object {
    slots: IndexMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Object{slots: IndexMap::new()}
    }

    // `has_key` returns `true` if a slot named `key` exists, regardless of
    // its value; a slot holding `Null` still exists. See `exists_non_null`
    // for the value-sensitive check.
    pub fn has_key(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    // `keys` returns a snapshot of the slot names, in insertion order;
    // mutating the object afterwards doesn't change an already-returned
    // vector.
    pub fn keys(&self) -> Vec<String> {
        self.slots.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // `iter` returns an insertion-order traversal of the current slots. Each
    // call starts a fresh traversal, and the borrow it takes prevents the
    // object from being mutated while a traversal is live.
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.slots.iter()
    }

    // `get` returns the value of the slot named `key`, or `PropNotFound` if
    // no such slot exists. A slot holding `Null` is present, so `get`
    // returns `Null` for it rather than failing.
    pub fn get(&self, key: &str) -> Result<Value, Error> {
        let v = self.slots.get(key)
            .context(PropNotFound{name: key.to_string()})?;

        Ok(v.clone())
    }

    // `set` creates the slot named `key`, or overwrites its value if it
    // already exists. Overwriting keeps the key's original position in the
    // iteration order.
    pub fn set(&mut self, key: &str, v: Value) {
        self.slots.insert(key.to_string(), v);
    }

    // `delete` removes the slot named `key`, preserving the order of the
    // remaining slots. Deleting an absent key is a no-op.
    pub fn delete(&mut self, key: &str) {
        self.slots.shift_remove(key);
    }

    // `exists_non_null` returns `true` if the slot named `key` exists and
    // its value isn't `Null`.
    pub fn exists_non_null(&self, key: &str) -> bool {
        match self.slots.get(key) {
            Some(v) => !matches!(v, Value::Null),
            None => false,
        }
    }

    // `invoke` runs the func stored in the slot named `key` as an instance
    // method of this object: the func is called with this object bound as
    // its receiver, followed by `args`, and its result is returned as-is.
    // Failures raised by the func itself propagate unchanged; only the
    // resolution failures (`UndefinedMethod`, `CannotCallNonFunc`) originate
    // here. A failed `invoke` leaves the slots unmodified.
    pub fn invoke(&mut self, key: &str, args: Vec<Value>)
        -> Result<Value, Error>
    {
        let v = self.get(key)
            .context(UndefinedMethod{name: key.to_string()})?;

        let f: Method =
            match v {
                Value::Func(f) => f,
                v => return Err(Error::CannotCallNonFunc{
                    name: key.to_string(),
                    v,
                }),
            };

        // The func was cloned out of its slot above, so the receiver borrow
        // here is exclusive and the func body may mutate this object.
        f(self, args)
    }

    // `duplicate` returns a shallow copy of this object. The copy gets its
    // own slot mapping, so adding or removing slots on one object never
    // affects the other, but compound slot values (lists, objects) share
    // their underlying structure with the source.
    pub fn duplicate(&self) -> Object {
        self.clone()
    }
}

// Bracket reads share `get`'s lookup; an absent key panics with the message
// `get` would return as an error, following the standard library's map
// `Index` convention.
impl Index<&str> for Object {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.slots.get(key) {
            Some(v) => v,
            None => panic!("{}", Error::PropNotFound{name: key.to_string()}),
        }
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(pairs: I) -> Self {
        Object{slots: IndexMap::from_iter(pairs)}
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
