use std::any::{self, Any, TypeId};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};

use super::render;

/// An object-safe view of any value that can be stored in a [`List`](super::List).
///
/// This trait is implemented for every `'static` type that implements [`Clone`] and doesn't need
/// to be implemented manually. Cloning is required so that a whole List can be deep copied.
pub trait Element: Any {
    /// Clones the value into a new box, retaining its concrete type.
    fn clone_boxed(&self) -> Box<dyn Element>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any + Clone> Element for T {
    fn clone_boxed(&self) -> Box<dyn Element> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// The runtime discriminator of a [`Slot`], identifying the type its value was created from.
///
/// Two tags are equal only if they were created from exactly the same type, so `i32` and `i64`
/// (or `i32` and `f64`) are never considered the same.
#[derive(Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    pub fn of<T: Any>() -> TypeTag {
        TypeTag {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
        }
    }

    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the name of the type, as given by [`type_name`](std::any::type_name). This is meant
    /// for diagnostics only and may change between compiler versions.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Debug for TypeTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag({})", self.name)
    }
}

/// A single entry of a [`List`](super::List): a type-erased value paired with its [`TypeTag`].
///
/// A Slot may also be empty, holding no value at all. Empty slots are created by
/// [`Slot::empty`] or by [`take`](Slot::take)-ing the value out of an existing slot, in which case
/// the slot keeps the tag of the value it used to hold.
///
/// # Examples
/// ```
/// # use pylike::collections::list::Slot;
/// let mut slot = Slot::new(5_i32);
/// assert!(slot.is::<i32>());
/// assert_eq!(slot.downcast_ref::<i32>(), Some(&5));
/// assert_eq!(slot.downcast_ref::<f64>(), None);
///
/// slot.set("five");
/// assert_eq!(slot.into_inner::<&str>().ok(), Some("five"));
/// ```
pub struct Slot {
    value: Option<Box<dyn Element>>,
    tag: TypeTag,
}

impl Slot {
    pub fn new<T: Any + Clone>(value: T) -> Slot {
        Slot {
            value: Some(Box::new(value)),
            tag: TypeTag::of::<T>(),
        }
    }

    /// Creates a Slot holding no value, tagged with the unit type.
    pub fn empty() -> Slot {
        Slot {
            value: None,
            tag: TypeTag::of::<()>(),
        }
    }

    pub const fn tag(&self) -> TypeTag {
        self.tag
    }

    pub const fn type_name(&self) -> &'static str {
        self.tag.name
    }

    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns true if the Slot holds a value of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.value.is_some() && self.tag.is::<T>()
    }

    pub fn value(&self) -> Option<&dyn Element> {
        self.value.as_deref()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        if !self.tag.is::<T>() {
            return None;
        }
        self.value.as_deref()?.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        if !self.tag.is::<T>() {
            return None;
        }
        self.value.as_deref_mut()?.as_any_mut().downcast_mut()
    }

    /// Compares the Slot against `value`, requiring both the tag and the contents to match.
    pub fn matches<T: Any + PartialEq>(&self, value: &T) -> bool {
        self.downcast_ref::<T>().is_some_and(|held| held == value)
    }

    /// Consumes the Slot, returning the held value if it is of type `T`. Otherwise, the Slot is
    /// handed back unchanged.
    pub fn into_inner<T: Any>(mut self) -> Result<T, Slot> {
        if !self.is::<T>() {
            return Err(self);
        }
        // The tag matched, so the downcast can't fail.
        match self.value.take().and_then(|value| value.into_any().downcast::<T>().ok()) {
            Some(value) => Ok(*value),
            None => Err(self),
        }
    }

    /// Takes the value out of the Slot, leaving it empty. The tag is left unchanged.
    pub fn take(&mut self) -> Option<Box<dyn Element>> {
        self.value.take()
    }

    /// Replaces the contents of the Slot, updating the tag along with the value.
    pub fn set<T: Any + Clone>(&mut self, value: T) {
        *self = Slot::new(value);
    }
}

impl Clone for Slot {
    fn clone(&self) -> Self {
        Slot {
            value: self.value.as_deref().map(|value| value.clone_boxed()),
            tag: self.tag,
        }
    }
}

impl Default for Slot {
    fn default() -> Self {
        Slot::empty()
    }
}

impl Debug for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.tag.name)?;
        match self.value.as_deref() {
            Some(value) => render::render(f, value, self.tag.name),
            None => write!(f, "<empty>"),
        }
    }
}
