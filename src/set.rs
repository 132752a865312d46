//! Extensionally defined finite sets [`Set`].

use crate::prelude::*;

/// A finite set, given by listing its elements.
///
/// Elements are stored in a hash set, so membership tests take constant expected time and no
/// order among the elements is kept. Every construction returns a new set, leaving its operands
/// untouched.
///
/// ## Invariants
///
/// Every two elements in a [`Set`] are distinct. Duplicates are collapsed on construction.
#[derive(Clone, IntoIterator)]
pub struct Set<T>(#[into_iterator(owned, ref)] HashSet<T>);

// -------------------- Basic traits -------------------- //

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> From<Set<T>> for HashSet<T, S> {
    fn from(set: Set<T>) -> Self {
        set.0.into_iter().collect()
    }
}

impl<T: Hash + Eq, S: BuildHasher> From<HashSet<T, S>> for Set<T> {
    fn from(set: HashSet<T, S>) -> Self {
        set.into_iter().collect()
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        Self::new(elements)
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// Writes the set as stored in memory, in no particular order.
impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(&self.0).finish()
    }
}

/// Displays a set in canonical roster notation, with its elements in increasing order.
///
/// Elements are written as is, so the output doesn't always parse back; see the [`FromStr`] impl.
impl<T: Display + Ord> Display for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut elements: SmallVec<&T> = self.iter().collect();
        elements.sort_unstable();

        f.write_char('{')?;
        let mut iter = elements.into_iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
        }
        for el in iter {
            write!(f, ", {el}")?;
        }
        f.write_char('}')
    }
}

/// Two sets are equal when they have the same elements.
impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

/// Sets are partially ordered by inclusion.
impl<T: Hash + Eq> PartialOrd for Set<T> {
    fn le(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }

    fn ge(&self, other: &Self) -> bool {
        other.le(self)
    }

    fn lt(&self, other: &Self) -> bool {
        self.card() < other.card() && self.le(other)
    }

    fn gt(&self, other: &Self) -> bool {
        other.lt(self)
    }

    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let cmp = self.card().cmp(&other.card());
        let test = match cmp {
            Ordering::Equal => self.eq(other),
            Ordering::Less => self.le(other),
            Ordering::Greater => self.ge(other),
        };

        if test {
            Some(cmp)
        } else {
            None
        }
    }
}

// -------------------- String parsing -------------------- //

/// Error in parsing a set from its roster notation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetError {
    /// The set was not enclosed in a single pair of braces.
    #[error("mismatched brackets")]
    Brackets,
    /// One of the elements could not be parsed.
    #[error("invalid element {element:?}: {reason}")]
    Element {
        /// The offending element, trimmed.
        element: String,
        /// Why the element was rejected.
        reason: String,
    },
}

/// Sets are parsed from their roster notation `{a, b, c}`. Elements are separated by commas and
/// trimmed before parsing; duplicates are collapsed.
///
/// Elements are not escaped. Parsing the [`Display`] output of a set only gives back the same set
/// when no element renders with a comma, a brace, or leading or trailing whitespace.
impl<T: FromStr + Hash + Eq> FromStr for Set<T>
where
    T::Err: Display,
{
    type Err = SetError;

    fn from_str(s: &str) -> Result<Self, SetError> {
        let inner = s
            .trim()
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or(SetError::Brackets)?;
        if inner.contains(['{', '}']) {
            debug!("nested brackets in {s:?}");
            return Err(SetError::Brackets);
        }

        if inner.trim().is_empty() {
            return Ok(Self::empty());
        }

        inner
            .split(',')
            .map(|el| {
                let el = el.trim();
                el.parse().map_err(|err: T::Err| {
                    debug!("failed to parse element {el:?} of {s:?}");
                    SetError::Element {
                        element: el.to_owned(),
                        reason: err.to_string(),
                    }
                })
            })
            .collect()
    }
}

// -------------------- Membership -------------------- //

impl<T> Seal for Set<T> {}

impl<T: Hash + Eq> Membership<T> for Set<T> {
    fn contains(&self, x: &T) -> bool {
        self.0.contains(x)
    }
}

// -------------------- Basic methods -------------------- //

impl<T> Set<T> {
    /// Empty set Ø.
    #[must_use]
    pub fn empty() -> Self {
        Self(HashSet::new())
    }

    /// Set cardinality.
    #[must_use]
    pub fn card(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the elements of the set, in no particular order.
    #[must_use]
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Extensional definition: the set of the given elements. Repeated elements are collapsed.
    #[must_use]
    pub fn new<I: IntoIterator<Item = T>>(elements: I) -> Self {
        elements.into_iter().collect()
    }

    /// Singleton set {x}.
    #[must_use]
    pub fn singleton(x: T) -> Self {
        Self::new([x])
    }

    /// Set insertion x ∪ {y}.
    #[must_use]
    pub fn insert(mut self, x: T) -> Self {
        self.0.insert(x);
        self
    }

    /// Membership relation ∈.
    #[must_use]
    pub fn contains<Q: Hash + Eq + ?Sized>(&self, x: &Q) -> bool
    where
        T: Borrow<Q>,
    {
        self.0.contains(x)
    }

    /// Membership relation ∈. An alias for [`Set::contains`].
    #[must_use]
    pub fn is_element<Q: Hash + Eq + ?Sized>(&self, x: &Q) -> bool
    where
        T: Borrow<Q>,
    {
        self.contains(x)
    }

    // -------------------- Relations -------------------- //

    /// Subset relation ⊆.
    #[must_use]
    pub fn subset(&self, other: &Self) -> bool {
        self.le(other)
    }

    /// Strict subset relation ⊂.
    #[must_use]
    pub fn ssubset(&self, other: &Self) -> bool {
        self.lt(other)
    }

    /// Superset relation ⊇.
    #[must_use]
    pub fn superset(&self, other: &Self) -> bool {
        self.ge(other)
    }

    /// Whether the sets have no element in common.
    #[must_use]
    pub fn disjoint(&self, other: &Self) -> bool {
        self.0.is_disjoint(&other.0)
    }
}

// -------------------- Constructions -------------------- //

impl<T: Hash + Eq + Clone> Set<T> {
    /// Union x ∪ y.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let union: Self = self.0.union(&other.0).cloned().collect();
        trace!(
            "union of {} and {} elements has {}",
            self.card(),
            other.card(),
            union.card()
        );
        union
    }

    /// Intersection x ∩ y.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let inter: Self = self.0.intersection(&other.0).cloned().collect();
        trace!(
            "intersection of {} and {} elements has {}",
            self.card(),
            other.card(),
            inter.card()
        );
        inter
    }

    /// Relative complement x \ y, i.e. the elements of `self` not in `other`.
    ///
    /// This is a set difference. Sets carry no universe to take an absolute complement against;
    /// see [`Class::negate`] for that.
    #[must_use]
    pub fn complement(&self, other: &Self) -> Self {
        let diff: Self = self.0.difference(&other.0).cloned().collect();
        trace!(
            "complement of {} in {} elements has {}",
            other.card(),
            self.card(),
            diff.card()
        );
        diff
    }

    /// Symmetric difference x △ y.
    #[must_use]
    pub fn sym_diff(&self, other: &Self) -> Self {
        let diff: Self = self.0.symmetric_difference(&other.0).cloned().collect();
        trace!(
            "symmetric difference of {} and {} elements has {}",
            self.card(),
            other.card(),
            diff.card()
        );
        diff
    }

    /// Set specification {x ∈ A | P(x)}.
    #[must_use]
    pub fn select<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Self {
        let set: Self = self.iter().filter(|x| pred(x)).cloned().collect();
        trace!("selected {} of {} elements", set.card(), self.card());
        set
    }

    /// Cartesian product x × y, the set of pairs `(a, b)` with `a ∈ x` and `b ∈ y`.
    #[must_use]
    pub fn product<U: Hash + Eq + Clone>(&self, other: &Set<U>) -> Set<(T, U)> {
        let mut product = HashSet::with_capacity(self.card() * other.card());
        for a in self {
            product.extend(other.iter().map(|b| (a.clone(), b.clone())));
        }

        trace!(
            "product of {} and {} elements has {}",
            self.card(),
            other.card(),
            product.len()
        );
        Set(product)
    }
}

// -------------------- Operators -------------------- //

impl<T: Hash + Eq + Clone> Add for &Set<T> {
    type Output = Set<T>;

    fn add(self, rhs: Self) -> Set<T> {
        self.union(rhs)
    }
}

impl<T: Hash + Eq + Clone> BitOr for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, rhs: Self) -> Set<T> {
        self.union(rhs)
    }
}

impl<T: Hash + Eq + Clone> BitAnd for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, rhs: Self) -> Set<T> {
        self.intersection(rhs)
    }
}

impl<T: Hash + Eq + Clone> Sub for &Set<T> {
    type Output = Set<T>;

    fn sub(self, rhs: Self) -> Set<T> {
        self.complement(rhs)
    }
}

impl<T: Hash + Eq + Clone> BitXor for &Set<T> {
    type Output = Set<T>;

    fn bitxor(self, rhs: Self) -> Set<T> {
        self.sym_diff(rhs)
    }
}

forward_ops!(
    Set,
    [Hash + Eq + Clone],
    Add::add,
    BitOr::bitor,
    BitAnd::bitand,
    Sub::sub,
    BitXor::bitxor
);

impl<T: Hash + Eq + Clone, U: Hash + Eq + Clone> Mul<&Set<U>> for &Set<T> {
    type Output = Set<(T, U)>;

    fn mul(self, rhs: &Set<U>) -> Set<(T, U)> {
        self.product(rhs)
    }
}

impl<T: Hash + Eq + Clone, U: Hash + Eq + Clone> Mul<Set<U>> for Set<T> {
    type Output = Set<(T, U)>;

    fn mul(self, rhs: Set<U>) -> Set<(T, U)> {
        self.product(&rhs)
    }
}

/// Tests for [`Set`].
#[cfg(test)]
mod set {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    /// Small sets with plenty of collisions.
    fn elements() -> impl Strategy<Value = Vec<i32>> {
        proptest::collection::vec(-20..20_i32, 0..24)
    }

    #[test]
    fn duplicates() {
        let set = Set::new([3, 1, 3, 2, 1, 3]);
        assert_eq!(set.card(), 3);
        assert_eq!(set, Set::new([1, 2, 3]));
    }

    #[test]
    fn empty() {
        let set = Set::<u8>::empty();
        assert!(set.is_empty());
        assert_eq!(set, Set::default());
        assert_eq!(set.to_string(), "{}");
    }

    #[test]
    fn display() {
        assert_eq!(Set::new([10, 2, 7, 2]).to_string(), "{2, 7, 10}");
        assert_eq!(Set::singleton("a").to_string(), "{a}");
    }

    #[test]
    fn parse() {
        let set: Set<i32> = " { 5, 1,3 ,1 } ".parse().unwrap();
        assert_eq!(set, Set::new([1, 3, 5]));
        assert_eq!("{}".parse::<Set<i32>>().unwrap(), Set::empty());
        assert_eq!("{ }".parse::<Set<i32>>().unwrap(), Set::empty());

        for str in ["{1, 2, 3}", "{}", "{-4, 0, 8}"] {
            assert_eq!(str.parse::<Set<i32>>().unwrap().to_string(), str);
        }
    }

    #[test]
    fn unescaped_elements() {
        let words = Set::new(["x".to_owned(), "y z".to_owned()]);
        assert_eq!(words.to_string().parse::<Set<String>>().unwrap(), words);

        let comma = Set::new(["a, b".to_owned()]);
        assert_eq!(comma.to_string(), "{a, b}");
        assert_eq!(
            comma.to_string().parse::<Set<String>>().unwrap(),
            Set::new(["a".to_owned(), "b".to_owned()])
        );

        let padded = Set::new([" a ".to_owned()]);
        assert_eq!(
            padded.to_string().parse::<Set<String>>().unwrap(),
            Set::singleton("a".to_owned())
        );
        assert_eq!(
            Set::singleton("{".to_owned()).to_string().parse::<Set<String>>(),
            Err(SetError::Brackets)
        );
    }

    #[test]
    fn hash_set() {
        let set = Set::new([1, 2, 3]);
        let hash_set: HashSet<i32> = set.clone().into();
        assert_eq!(hash_set.len(), 3);
        assert_eq!(Set::from(hash_set), set);
    }

    #[test]
    fn parse_error() {
        for str in ["", "1, 2", "{1, 2", "1, 2}", "{{1}, 2}", "}{"] {
            assert_eq!(str.parse::<Set<i32>>(), Err(SetError::Brackets), "{str:?}");
        }

        let err = "{1, x, 3}".parse::<Set<i32>>().unwrap_err();
        assert!(
            matches!(&err, SetError::Element { element, .. } if element == "x"),
            "{err}"
        );
        assert!(matches!(
            "{1, , 3}".parse::<Set<i32>>(),
            Err(SetError::Element { .. })
        ));
    }

    #[test]
    fn insert() {
        let set = Set::empty().insert(1).insert(2).insert(1);
        assert_eq!(set, Set::new([1, 2]));
    }

    #[test]
    fn select() {
        let set = Set::new(1..=10);
        let even = set.select(|x| x % 2 == 0);
        assert_eq!(even, Set::new([2, 4, 6, 8, 10]));
        assert_eq!(set.card(), 10);
    }

    #[test]
    fn order() {
        let a = Set::new([1, 2]);
        let b = Set::new([1, 2, 3]);
        let c = Set::new([4]);

        assert!(a.subset(&b) && a.ssubset(&b));
        assert!(b.superset(&a));
        assert!(a.subset(&a) && !a.ssubset(&a));
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
        assert_eq!(b.partial_cmp(&a), Some(Ordering::Greater));
        assert_eq!(a.partial_cmp(&c), None);
        assert!(a.disjoint(&c) && !a.disjoint(&b));
    }

    #[test]
    fn sym_diff() {
        let a = Set::new([1, 2, 3]);
        let b = Set::new([3, 4]);
        assert_eq!(&a ^ &b, Set::new([1, 2, 4]));
    }

    #[test]
    fn borrowed_membership() {
        let set: Set<String> = ["x", "y"].into_iter().map(String::from).collect();
        assert!(set.contains("x"));
        assert!(!set.is_element("z"));
    }

    #[test]
    fn owned_operators() {
        let a = Set::new([1, 2, 3]);
        let b = Set::new([2, 3, 4]);
        assert_eq!(a.clone() + b.clone(), Set::new(1..=4));
        assert_eq!(a.clone() | b.clone(), Set::new(1..=4));
        assert_eq!(a.clone() & b.clone(), Set::new([2, 3]));
        assert_eq!(a.clone() - b.clone(), Set::new([1]));
        assert_eq!(a.clone() ^ b.clone(), Set::new([1, 4]));
        assert_eq!((a * b).card(), 9);
    }

    #[test]
    fn into_iter() {
        let set = Set::new([1, 2, 3]);
        let mut borrowed: Vec<_> = (&set).into_iter().copied().collect();
        borrowed.sort_unstable();
        let mut owned: Vec<_> = set.into_iter().collect();
        owned.sort_unstable();
        assert_eq!(borrowed, [1, 2, 3]);
        assert_eq!(owned, borrowed);
    }

    proptest! {
        #[test]
        fn dedup_card(elements in elements()) {
            let mut distinct = elements.clone();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(Set::new(elements).card(), distinct.len());
        }

        #[test]
        fn idempotence(a in elements()) {
            let a = Set::new(a);
            prop_assert_eq!(&a + &a, a.clone());
            prop_assert_eq!(&a & &a, a.clone());
            prop_assert!((&a - &a).is_empty());
        }

        #[test]
        fn commutativity(a in elements(), b in elements()) {
            let (a, b) = (Set::new(a), Set::new(b));
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&a & &b, &b & &a);
        }

        #[test]
        fn operands_untouched(a in elements(), b in elements()) {
            let (a, b) = (Set::new(a), Set::new(b));
            let (a_copy, b_copy) = (a.clone(), b.clone());
            let _ = (&a + &b, &a & &b, &a - &b, &a * &b);
            prop_assert_eq!(a, a_copy);
            prop_assert_eq!(b, b_copy);
        }

        #[test]
        fn difference(a in elements(), b in elements()) {
            let (a, b) = (Set::new(a), Set::new(b));
            let diff = &a - &b;
            prop_assert!(diff.subset(&a));
            prop_assert!(diff.disjoint(&b));
            prop_assert_eq!(&diff + &(&a & &b), a);
        }

        #[test]
        fn product(a in elements(), b in elements()) {
            let (a, b) = (Set::new(a), Set::new(b));
            let product = a.product(&b);
            prop_assert_eq!(product.card(), a.card() * b.card());
            for (x, y) in &product {
                prop_assert!(a.contains(x) && b.contains(y));
            }
        }
    }
}
