use std::ops::BitAnd;

use time::OffsetDateTime;

pub trait ListFilterValue {
    fn condition(self) -> ListFilterCondition<Self>
    where
        Self: Sized,
    {
        ListFilterCondition::Value(self)
    }
}

/// Conjunction tree of filter values
#[derive(Clone, Debug, PartialEq)]
pub enum ListFilterCondition<FV: ListFilterValue> {
    And(Vec<ListFilterCondition<FV>>),
    Value(FV),
}

// empty conjunction - ignored when constructing the final store condition
impl<FV: ListFilterValue> Default for ListFilterCondition<FV> {
    fn default() -> Self {
        Self::And(vec![])
    }
}

impl<FV: ListFilterValue> ListFilterCondition<FV> {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::And(conditions) => conditions.iter().all(ListFilterCondition::is_empty),
            Self::Value(_) => false,
        }
    }

    /// Flattened list of all values in the tree, depth first
    pub fn values(&self) -> Vec<&FV> {
        match self {
            Self::And(conditions) => conditions
                .iter()
                .flat_map(ListFilterCondition::values)
                .collect(),
            Self::Value(value) => vec![value],
        }
    }
}

impl<FV: ListFilterValue> From<FV> for ListFilterCondition<FV> {
    fn from(value: FV) -> Self {
        ListFilterCondition::Value(value)
    }
}

impl<FV: ListFilterValue> BitAnd<ListFilterCondition<FV>> for ListFilterCondition<FV> {
    type Output = Self;
    fn bitand(self, rhs: ListFilterCondition<FV>) -> Self::Output {
        match self {
            ListFilterCondition::And(mut conditions) => match rhs {
                ListFilterCondition::And(rhs) => Self::And({
                    conditions.extend(rhs);
                    conditions
                }),
                rhs => Self::And({
                    conditions.push(rhs);
                    conditions
                }),
            },
            _ => Self::And(vec![self, rhs]),
        }
    }
}

impl<FV: ListFilterValue> BitAnd<FV> for ListFilterCondition<FV> {
    type Output = Self;
    fn bitand(self, rhs: FV) -> Self::Output {
        self & Self::Value(rhs)
    }
}

impl<FV: ListFilterValue> BitAnd<Option<FV>> for ListFilterCondition<FV> {
    type Output = Self;
    fn bitand(self, rhs: Option<FV>) -> Self::Output {
        match rhs {
            Some(rhs) => self & rhs,
            None => self,
        }
    }
}

impl<FV: ListFilterValue> BitAnd<Vec<FV>> for ListFilterCondition<FV> {
    type Output = Self;
    fn bitand(self, rhs: Vec<FV>) -> Self::Output {
        rhs.into_iter().fold(self, |condition, value| condition & value)
    }
}

/// Explicit "empty means no constraint" marker for filters whose natural
/// representation is a possibly empty collection or an optional value.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum FilterConstraint<T> {
    #[default]
    NoConstraint,
    Constraint(T),
}

impl<T> FilterConstraint<T> {
    pub fn as_constraint(&self) -> Option<&T> {
        match self {
            Self::NoConstraint => None,
            Self::Constraint(value) => Some(value),
        }
    }
}

impl<T> FilterConstraint<Vec<T>> {
    /// An empty collection never becomes "match nothing"
    pub fn from_non_empty(values: Vec<T>) -> Self {
        if values.is_empty() {
            Self::NoConstraint
        } else {
            Self::Constraint(values)
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComparisonType {
    GreaterThanOrEqual,
    LessThanOrEqual,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValueComparison<T> {
    pub comparison: ComparisonType,
    pub value: T,
}

pub type DateComparison = ValueComparison<OffsetDateTime>;
