use std::any::Any;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};
use std::{slice, vec};

use super::{
    EmptyCollectionError, GetError, IndexOutOfBounds, NotFoundError, PopError, Slot,
    TypeMismatchError,
};
use super::render::Joined;
use crate::text::Text;
use crate::util::result::ResultExtension;

/// A list that can hold values of any (cloneable) type at once, with an API modelled on Python's
/// `list`.
///
/// Every value is stored in a [`Slot`] together with a [`TypeTag`](super::TypeTag) recording the
/// type it was added as. All searching methods compare by tag first and then by value, meaning
/// that `5_i32`, `5_i64` and `5.0_f64` are three distinct elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the List.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the second List.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `append` | `O(1)`* |
/// | `extend` | `O(m)` |
/// | `insert` | `O(n-i)` |
/// | `pop` | `O(1)` |
/// | `pop_at` | `O(n-i)` |
/// | `remove` | `O(n)` |
/// | `index` | `O(n)` |
/// | `count` | `O(n)` |
/// | `reverse` | `O(n)` |
/// | `get` | `O(1)` |
///
/// \* Amortized, occasionally `O(n)` when the backing storage grows.
///
/// # Examples
/// ```
/// # use pylike::list;
/// let mut list = list![5_i32, "five", 5.0_f64];
/// assert_eq!(list.index(&5_i32), Ok(0));
/// assert_eq!(list.count(&5.0_f64), 1);
/// assert_eq!(list.join(","), "5,five,5.000000");
///
/// list.reverse();
/// assert_eq!(list.to_string(), "[5.000000, five, 5]");
/// ```
#[derive(Clone, Default)]
pub struct List {
    slots: Vec<Slot>,
}

impl List {
    pub const fn new() -> List {
        List { slots: Vec::new() }
    }

    pub fn with_cap(cap: usize) -> List {
        List { slots: Vec::with_capacity(cap) }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Appends `value` to the end of the List, tagged with its type.
    pub fn append<T: Any + Clone>(&mut self, value: T) {
        self.slots.push(Slot::new(value));
    }

    /// Appends a raw Slot, which may be empty.
    pub fn append_slot(&mut self, slot: Slot) {
        self.slots.push(slot);
    }

    /// Appends a copy of every element in `other`, in order.
    ///
    /// # Examples
    /// ```
    /// # use pylike::list;
    /// let mut list = list![1_u8];
    /// list.extend(&list!["two", 3.0_f32]);
    /// assert_eq!(list.join(" "), "1 two 3.000000");
    /// ```
    pub fn extend(&mut self, other: &List) {
        self.slots.extend(other.slots.iter().cloned());
    }

    /// Inserts `value` before the element currently at `index`. An index equal to the length of
    /// the List appends.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`, leaving the List unchanged.
    pub fn insert<T: Any + Clone>(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len() {
            return Err(IndexOutOfBounds { index, len: self.len() });
        }
        self.slots.insert(index, Slot::new(value));
        Ok(())
    }

    /// Removes the first element that has the same type as `value` and compares equal to it.
    /// Returns whether an element was removed.
    pub fn remove<T: Any + PartialEq>(&mut self, value: &T) -> bool {
        match self.position(value, 0) {
            Some(index) => {
                self.slots.remove(index);
                true
            },
            None => false,
        }
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// Returns [`EmptyCollectionError`] if the List is empty.
    pub fn pop(&mut self) -> Result<Slot, PopError> {
        Ok(self.slots.pop().ok_or(EmptyCollectionError)?)
    }

    /// Removes and returns the element at `index`, shifting all following elements down by one.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`, including when the List is empty.
    pub fn pop_at(&mut self, index: usize) -> Result<Slot, PopError> {
        self.check_index(index)?;
        Ok(self.slots.remove(index))
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Returns the index of the first element matching `value` in type and contents.
    ///
    /// # Errors
    /// Returns [`NotFoundError`] if there is no such element.
    pub fn index<T: Any + PartialEq + Debug>(&self, value: &T) -> Result<usize, NotFoundError> {
        self.index_from(value, 0)
    }

    /// Returns the index of the first element at or after `start` matching `value` in type and
    /// contents. A `start` past the end of the List simply finds nothing.
    ///
    /// # Errors
    /// Returns [`NotFoundError`] if there is no such element.
    pub fn index_from<T: Any + PartialEq + Debug>(
        &self,
        value: &T,
        start: usize,
    ) -> Result<usize, NotFoundError> {
        self.position(value, start).ok_or_else(|| NotFoundError {
            value: format!("{:?}", value),
        })
    }

    pub fn count<T: Any + PartialEq>(&self, value: &T) -> usize {
        self.slots.iter().filter(|slot| slot.matches(value)).count()
    }

    pub fn contains<T: Any + PartialEq>(&self, value: &T) -> bool {
        self.position(value, 0).is_some()
    }

    pub fn reverse(&mut self) {
        self.slots.reverse();
    }

    /// Concatenates the textual form of every element, with `separator` between each.
    ///
    /// Integers are written in decimal, floats with six fractional digits and text verbatim. Any
    /// other type is written as `(<type name> at <address>)`. If any Slot is empty, the whole
    /// result is empty.
    pub fn join(&self, separator: &str) -> Text {
        if self.slots.iter().any(Slot::is_empty) {
            return Text::new();
        }

        Text::from(Joined { slots: &self.slots, separator }.to_string())
    }

    /// Returns a copy of the value at `index`, provided that it was stored as a `T`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] for an invalid index and [`TypeMismatchError`] if the element
    /// isn't a `T` or the Slot is empty.
    ///
    /// # Examples
    /// ```
    /// # use pylike::list;
    /// let list = list![String::from("text")];
    /// assert_eq!(list.get::<String>(0).as_deref(), Ok("text"));
    /// assert!(list.get::<i32>(0).unwrap_err().is_type_mismatch());
    /// assert!(list.get::<String>(1).unwrap_err().is_index_out_of_bounds());
    /// ```
    pub fn get<T: Any + Clone>(&self, index: usize) -> Result<T, GetError> {
        self.get_ref(index).cloned()
    }

    pub fn get_ref<T: Any>(&self, index: usize) -> Result<&T, GetError> {
        let slot = self.slot(index)?;
        slot.downcast_ref()
            .ok_or_else(|| Self::mismatch::<T>(index, slot).into())
    }

    pub fn get_mut<T: Any>(&mut self, index: usize) -> Result<&mut T, GetError> {
        let slot = self.slot_mut(index)?;
        let mismatch = Self::mismatch::<T>(index, slot);
        slot.downcast_mut().ok_or(mismatch.into())
    }

    /// Returns the raw Slot at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn slot(&self, index: usize) -> Result<&Slot, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self.slots[index])
    }

    /// Returns the raw Slot at `index` mutably, allowing its value to be replaced or taken.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn slot_mut(&mut self, index: usize) -> Result<&mut Slot, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self.slots[index])
    }

    pub fn iter(&self) -> slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Slot> {
        self.slots.iter_mut()
    }

    fn position<T: Any + PartialEq>(&self, value: &T, start: usize) -> Option<usize> {
        self.slots.iter()
            .enumerate()
            .skip(start)
            .find_map(|(i, slot)| slot.matches(value).then_some(i))
    }

    fn mismatch<T: Any>(index: usize, slot: &Slot) -> TypeMismatchError {
        TypeMismatchError {
            index,
            expected: std::any::type_name::<T>(),
            found: if slot.is_empty() { "<empty>" } else { slot.type_name() },
        }
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.slots.len() {
            Err(IndexOutOfBounds {
                index,
                len: self.slots.len(),
            })
        } else {
            Ok(())
        }
    }
}

impl Index<usize> for List {
    type Output = Slot;

    /// # Panics
    /// Panics if the provided index is out of bounds.
    fn index(&self, index: usize) -> &Self::Output {
        self.slot(index).throw()
    }
}

impl IndexMut<usize> for List {
    /// # Panics
    /// Panics if the provided index is out of bounds.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.slot_mut(index).throw()
    }
}

impl Extend<Slot> for List {
    fn extend<I: IntoIterator<Item = Slot>>(&mut self, iter: I) {
        self.slots.extend(iter);
    }
}

impl FromIterator<Slot> for List {
    fn from_iter<I: IntoIterator<Item = Slot>>(iter: I) -> Self {
        List { slots: iter.into_iter().collect() }
    }
}

impl IntoIterator for List {
    type Item = Slot;
    type IntoIter = vec::IntoIter<Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Slot;
    type IntoIter = slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl<'a> IntoIterator for &'a mut List {
    type Item = &'a mut Slot;
    type IntoIter = slice::IterMut<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter_mut()
    }
}

impl Debug for List {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.iter()).finish()
    }
}

impl Display for List {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", Joined { slots: &self.slots, separator: ", " })
    }
}

/// Creates a [`List`](crate::collections::list::List) containing the provided values, each tagged
/// with its own type.
///
/// # Examples
/// ```
/// # use pylike::list;
/// let list = list![1_i32, "two", 3.0_f64];
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get::<&str>(1), Ok("two"));
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::collections::list::List::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut list = $crate::collections::list::List::new();
        $( list.append($value); )+
        list
    }};
}
