use derive_more::{Display, Error, From, IsVariant};

#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("pop from empty list")]
pub struct EmptyCollectionError;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("{value} is not in list")]
pub struct NotFoundError {
    pub value: String,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("element {index} holds `{found}`, not `{expected}`")]
pub struct TypeMismatchError {
    pub index: usize,
    pub expected: &'static str,
    pub found: &'static str,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum PopError {
    Empty(EmptyCollectionError),
    IndexOutOfBounds(IndexOutOfBounds),
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum GetError {
    IndexOutOfBounds(IndexOutOfBounds),
    TypeMismatch(TypeMismatchError),
}
