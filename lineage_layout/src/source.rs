// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Family data sources.
//!
//! The layout engine and the interaction shell take their people from a
//! [`FamilySource`] handed over at construction time. [`Family`] is the
//! validated, owned implementation; plain `Vec<Person>` and slices also
//! implement the trait and are validated on each layout pass instead.

use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::ahnentafel::Ahnentafel;
use crate::error::LayoutError;
use crate::person::Person;

/// A provider of the people in one ancestry tree.
pub trait FamilySource {
    /// Returns the people in their display order.
    fn people(&self) -> &[Person];

    /// Looks up a person by ahnentafel number.
    fn person(&self, ahnentafel: Ahnentafel) -> Option<&Person> {
        self.people().iter().find(|p| p.ahnentafel() == ahnentafel)
    }
}

impl FamilySource for [Person] {
    fn people(&self) -> &[Person] {
        self
    }
}

impl FamilySource for Vec<Person> {
    fn people(&self) -> &[Person] {
        self
    }
}

impl<S: FamilySource + ?Sized> FamilySource for &S {
    fn people(&self) -> &[Person] {
        (**self).people()
    }

    fn person(&self, ahnentafel: Ahnentafel) -> Option<&Person> {
        (**self).person(ahnentafel)
    }
}

/// A non-empty set of people with unique ahnentafel numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Family {
    people: Vec<Person>,
}

impl Family {
    /// Builds a family, rejecting empty input and duplicate numbers.
    pub fn new<I>(people: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = Person>,
    {
        let people: Vec<Person> = people.into_iter().collect();
        check_unique(people.iter().map(Person::ahnentafel))?;
        Ok(Self { people })
    }

    /// Returns the number of people.
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Returns `true` if there are no people.
    ///
    /// Always `false`: [`Family::new`] is the only constructor and rejects
    /// empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Returns the subject's father, if present.
    #[must_use]
    pub fn father_of(&self, person: &Person) -> Option<&Person> {
        self.person(person.ahnentafel().father()?)
    }

    /// Returns the subject's mother, if present.
    #[must_use]
    pub fn mother_of(&self, person: &Person) -> Option<&Person> {
        self.person(person.ahnentafel().mother()?)
    }

    /// Returns the person this one is a parent of, if present.
    #[must_use]
    pub fn child_of(&self, person: &Person) -> Option<&Person> {
        self.person(person.ahnentafel().child()?)
    }

    /// Iterates the people of one generation, in input order.
    pub fn generation(&self, depth: u32) -> impl Iterator<Item = &Person> + '_ {
        self.people.iter().filter(move |p| p.depth() == depth)
    }

    /// Consumes the family, returning its people.
    #[must_use]
    pub fn into_people(self) -> Vec<Person> {
        self.people
    }
}

impl FamilySource for Family {
    fn people(&self) -> &[Person] {
        &self.people
    }
}

/// Fails on an empty sequence or on the first repeated number.
pub(crate) fn check_unique<I>(numbers: I) -> Result<(), LayoutError>
where
    I: IntoIterator<Item = Ahnentafel>,
{
    let mut seen = HashSet::new();
    for n in numbers {
        if !seen.insert(n) {
            return Err(LayoutError::DuplicateAhnentafel(n));
        }
    }
    if seen.is_empty() {
        return Err(LayoutError::Empty);
    }
    Ok(())
}
