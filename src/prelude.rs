//! Crate prelude.

// The actual prelude.
pub use crate::{
    class::Class,
    set::{Set, SetError},
    Membership,
};

// Convenient imports within the crate.
pub(crate) use crate::{
    log::{debug, trace},
    Seal, SmallVec,
};
pub(crate) use derive_more::IntoIterator;
pub(crate) use std::{
    borrow::Borrow,
    cmp::Ordering,
    collections::HashSet,
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
    hash::{BuildHasher, Hash},
    ops::{Add, BitAnd, BitOr, BitXor, Mul, Not, Sub},
    rc::Rc,
    str::FromStr,
};
