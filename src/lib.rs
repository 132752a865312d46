//! # Finite sets
//!
//! Sets can be given in two ways:
//!
//! - **Extensionally**, by listing their elements. These are [`Set`]s.
//! - **Intensionally**, by a predicate deciding membership. These are [`Class`]es.
//!
//! Both support union, intersection, (relative) complement and cartesian product. Every operation
//! builds a new value and leaves its operands untouched.
//!
//! ```
//! use fset::prelude::*;
//!
//! let a = Set::new([1, 2, 3, 4, 5]);
//! let b = Set::new([4, 5, 6, 7, 8, 9, 10]);
//!
//! assert_eq!(&a & &b, Set::new([4, 5]));
//! assert_eq!(&a - &b, Set::new([1, 2, 3]));
//! assert!((&a + &b).contains(&10));
//! assert!(a.product(&b).contains(&(1, 4)));
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Implements the by-value versions of binary operators in terms of the by-reference ones.
///
/// The by-reference implementations must already exist for the type.
macro_rules! forward_ops {
    (@one $t: ident, [$($bounds: tt)*], $op: ident :: $method: ident) => {
        impl<T: $($bounds)*> std::ops::$op for $t<T> {
            type Output = $t<T>;

            fn $method(self, rhs: Self) -> $t<T> {
                std::ops::$op::$method(&self, &rhs)
            }
        }
    };
    ($t: ident, $bounds: tt, $($op: ident :: $method: ident),*) => {
        $(
            forward_ops!(@one $t, $bounds, $op::$method);
        )*
    };
}

pub mod class;
mod log;
pub mod prelude;
pub mod set;

/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 8]>;

/// A seal for [`Membership`], avoiding foreign implementations.
trait Seal {}

/// Membership testing, shared by [`Set`](set::Set) and [`Class`](class::Class).
///
/// The trait is sealed so that these are the only two types that ever implement it.
#[allow(private_bounds)]
pub trait Membership<T>: Seal {
    /// Membership relation ∈.
    fn contains(&self, x: &T) -> bool;

    /// Membership relation ∈. Always agrees with [`Membership::contains`].
    fn is_element(&self, x: &T) -> bool {
        self.contains(x)
    }
}
