//! Variable names and persistent sets of them.

use std::fmt::Display;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct VarName(usize);

impl Display for VarName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl From<usize> for VarName {
    fn from(value: usize) -> Self {
        VarName(value)
    }
}

impl From<VarName> for usize {
    fn from(value: VarName) -> Self {
        value.0
    }
}

impl VarName {
    pub const fn new(index: usize) -> Self {
        VarName(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Returns [None] for the greatest name.
    pub fn succ(self) -> Option<Self> {
        self.0.checked_add(1).map(VarName)
    }

    /// Returns [None] for the least name.
    pub fn pred(self) -> Option<Self> {
        self.0.checked_sub(1).map(VarName)
    }
}

/// An immutable set of distinct [VarName]s.
///
/// Members are kept sorted, so iteration order and [VarSet::new_name] are deterministic.
/// Updates never mutate a set that is already shared; they return a new one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct VarSet(Arc<Vec<VarName>>);

impl Display for VarSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}")?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<VarName> for VarSet {
    fn from_iter<T: IntoIterator<Item = VarName>>(iter: T) -> Self {
        let mut names: Vec<VarName> = iter.into_iter().collect();
        names.sort();
        names.dedup();
        VarSet(Arc::new(names))
    }
}

impl VarSet {
    pub fn empty() -> Self {
        Default::default()
    }

    pub fn singleton(name: VarName) -> Self {
        VarSet(Arc::new(vec![name]))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = VarName> + '_ {
        self.0.iter().copied()
    }

    pub fn max(&self) -> Option<VarName> {
        self.0.last().copied()
    }

    /// Returns a name that is not a member.
    ///
    /// This is the successor of the greatest member, or the least name for the empty set. When
    /// the greatest member is the greatest name, the least name missing from the set is used.
    pub fn new_name(&self) -> VarName {
        let Some(max) = self.max() else {
            return VarName::default();
        };
        if let Some(name) = max.succ() {
            return name;
        }
        // members are sorted and distinct, so the first index not holding its own name is free
        let gap = self
            .iter()
            .enumerate()
            .find(|&(i, name)| name.index() != i)
            .map_or(self.len(), |(i, _)| i);
        VarName::new(gap)
    }

    pub fn has(&self, name: VarName) -> bool {
        self.0.binary_search(&name).is_ok()
    }

    pub fn add(&self, name: VarName) -> VarSet {
        match self.0.binary_search(&name) {
            Ok(_) => self.clone(),
            Err(pos) => {
                let mut names = self.0.clone();
                Arc::make_mut(&mut names).insert(pos, name);
                VarSet(names)
            }
        }
    }

    pub fn remove(&self, name: VarName) -> VarSet {
        match self.0.binary_search(&name) {
            Ok(pos) => {
                let mut names = self.0.clone();
                Arc::make_mut(&mut names).remove(pos);
                VarSet(names)
            }
            Err(_) => self.clone(),
        }
    }

    pub fn union(&self, other: &VarSet) -> VarSet {
        if other.is_empty() || Arc::ptr_eq(&self.0, &other.0) {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let (xs, ys) = (&self.0, &other.0);
        let mut names = Vec::with_capacity(xs.len() + ys.len());
        let (mut i, mut j) = (0, 0);
        while i < xs.len() && j < ys.len() {
            match xs[i].cmp(&ys[j]) {
                std::cmp::Ordering::Less => {
                    names.push(xs[i]);
                    i += 1;
                }
                std::cmp::Ordering::Equal => {
                    names.push(xs[i]);
                    i += 1;
                    j += 1;
                }
                std::cmp::Ordering::Greater => {
                    names.push(ys[j]);
                    j += 1;
                }
            }
        }
        names.extend_from_slice(&xs[i..]);
        names.extend_from_slice(&ys[j..]);
        VarSet(Arc::new(names))
    }
}
