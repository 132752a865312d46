//! Intensionally defined [`Classes`](Class).

use crate::prelude::*;

/// A [class](https://en.wikipedia.org/wiki/Class_(set_theory)), i.e. a collection given by a
/// predicate deciding membership.
///
/// Nothing is assumed about the collection other than its predicate: it might be infinite, and
/// there is no domain to enumerate it from. As a consequence, classes can't be iterated or
/// counted. Use [`Class::select`] to recover the members found within a finite domain.
///
/// Cloning a class is cheap, as the predicate is shared.
///
/// ```
/// # use fset::prelude::*;
/// let even = Class::pred(|x: &i32| x % 2 == 0);
/// let small = Class::from(Set::new(0..10));
///
/// assert!((&even & &small).contains(&4));
/// assert!(!(&even - &small).contains(&4));
/// assert_eq!((&even & &small).select(-5..5), Set::new([0, 2, 4]));
/// ```
pub struct Class<T>(Rc<dyn Fn(&T) -> bool>);

impl<T> Clone for Class<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

/// Predicates can't be inspected.
impl<T> Debug for Class<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Class { .. }")
    }
}

impl<T: 'static> Default for Class<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Hash + Eq + 'static> From<Set<T>> for Class<T> {
    fn from(set: Set<T>) -> Self {
        Self::pred(move |x| set.contains(x))
    }
}

impl<T> Seal for Class<T> {}

impl<T> Membership<T> for Class<T> {
    fn contains(&self, x: &T) -> bool {
        (self.0)(x)
    }
}

impl<T: 'static> Class<T> {
    /// Intensional definition: the class of values satisfying a predicate.
    #[must_use]
    pub fn pred<P: Fn(&T) -> bool + 'static>(pred: P) -> Self {
        Self(Rc::new(pred))
    }

    /// The empty class Ø.
    #[must_use]
    pub fn empty() -> Self {
        Self::pred(|_| false)
    }

    /// The universal class, containing every value of the type.
    #[must_use]
    pub fn univ() -> Self {
        Self::pred(|_| true)
    }

    /// Membership relation ∈.
    #[must_use]
    pub fn contains(&self, x: &T) -> bool {
        (self.0)(x)
    }

    /// Membership relation ∈. An alias for [`Class::contains`].
    #[must_use]
    pub fn is_element(&self, x: &T) -> bool {
        self.contains(x)
    }

    /// Class union x ∪ y.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (fst, snd) = (self.clone(), other.clone());
        Self::pred(move |x| fst.contains(x) || snd.contains(x))
    }

    /// Class intersection x ∩ y.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (fst, snd) = (self.clone(), other.clone());
        Self::pred(move |x| fst.contains(x) && snd.contains(x))
    }

    /// Relative complement x \ y, i.e. the members of `self` not in `other`.
    #[must_use]
    pub fn complement(&self, other: &Self) -> Self {
        let (fst, snd) = (self.clone(), other.clone());
        Self::pred(move |x| fst.contains(x) && !snd.contains(x))
    }

    /// Absolute complement, i.e. every value not in the class.
    #[must_use]
    pub fn negate(&self) -> Self {
        let class = self.clone();
        Self::pred(move |x| !class.contains(x))
    }

    /// Cartesian product x × y, the class of pairs `(a, b)` with `a ∈ x` and `b ∈ y`.
    #[must_use]
    pub fn product<U: 'static>(&self, other: &Class<U>) -> Class<(T, U)> {
        let (fst, snd) = (self.clone(), other.clone());
        Class::pred(move |(a, b): &(T, U)| fst.contains(a) && snd.contains(b))
    }

    /// Class specification over a domain, i.e. the set of members of `self` found in `domain`.
    #[must_use]
    pub fn select<I: IntoIterator<Item = T>>(&self, domain: I) -> Set<T>
    where
        T: Hash + Eq,
    {
        let set: Set<T> = domain.into_iter().filter(|x| self.contains(x)).collect();
        trace!("selected {} members from domain", set.card());
        set
    }
}

// -------------------- Operators -------------------- //

impl<T: 'static> Add for &Class<T> {
    type Output = Class<T>;

    fn add(self, rhs: Self) -> Class<T> {
        self.union(rhs)
    }
}

impl<T: 'static> BitOr for &Class<T> {
    type Output = Class<T>;

    fn bitor(self, rhs: Self) -> Class<T> {
        self.union(rhs)
    }
}

impl<T: 'static> BitAnd for &Class<T> {
    type Output = Class<T>;

    fn bitand(self, rhs: Self) -> Class<T> {
        self.intersection(rhs)
    }
}

impl<T: 'static> Sub for &Class<T> {
    type Output = Class<T>;

    fn sub(self, rhs: Self) -> Class<T> {
        self.complement(rhs)
    }
}

forward_ops!(Class, ['static], Add::add, BitOr::bitor, BitAnd::bitand, Sub::sub);

impl<T: 'static> Not for &Class<T> {
    type Output = Class<T>;

    fn not(self) -> Class<T> {
        self.negate()
    }
}

impl<T: 'static> Not for Class<T> {
    type Output = Class<T>;

    fn not(self) -> Class<T> {
        self.negate()
    }
}

impl<T: 'static, U: 'static> Mul<&Class<U>> for &Class<T> {
    type Output = Class<(T, U)>;

    fn mul(self, rhs: &Class<U>) -> Class<(T, U)> {
        self.product(rhs)
    }
}

impl<T: 'static, U: 'static> Mul<Class<U>> for Class<T> {
    type Output = Class<(T, U)>;

    fn mul(self, rhs: Class<U>) -> Class<(T, U)> {
        self.product(&rhs)
    }
}
