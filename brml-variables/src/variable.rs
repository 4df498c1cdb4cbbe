use std::collections::HashSet;
use std::fmt::Display;

use log::debug;

use crate::brml_assert_moderate;
use crate::VariableError;

/// A discrete random variable: a name, the index used to order it among other variables, and the
/// finite domain of states it can take.
///
/// The position of a state in the domain is the canonical index of that state, see
/// [`Variable::state_index`]. A [`Variable`] cannot be modified after construction.
///
/// # Example
/// ```
/// use brml_variables::Variable;
///
/// let butler = Variable::new("butler", 2, ["murderer", "notmurderer"]);
///
/// assert_eq!("butler", butler.name());
/// assert_eq!(2, butler.index());
/// assert_eq!(Ok(1), butler.state_index("notmurderer"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
    index: usize,
    domain: Vec<String>,
}

impl Variable {
    /// Create a new variable without validating the domain.
    ///
    /// The domain is expected to contain every state exactly once. Use [`Variable::try_new`] to
    /// have this checked.
    pub fn new<State: Into<String>>(
        name: impl Into<String>,
        index: usize,
        domain: impl IntoIterator<Item = State>,
    ) -> Self {
        let variable = Variable {
            name: name.into(),
            index,
            domain: domain.into_iter().map(Into::into).collect(),
        };

        brml_assert_moderate!(
            variable.find_duplicate_state().is_none(),
            "the domain of variable '{}' contains duplicate states",
            variable.name
        );

        variable
    }

    /// Create a new variable, failing with [`VariableError::DuplicateState`] if a state occurs
    /// more than once in the domain.
    pub fn try_new<State: Into<String>>(
        name: impl Into<String>,
        index: usize,
        domain: impl IntoIterator<Item = State>,
    ) -> Result<Self, VariableError> {
        let variable = Variable {
            name: name.into(),
            index,
            domain: domain.into_iter().map(Into::into).collect(),
        };

        if let Some(state) = variable.find_duplicate_state() {
            debug!("Rejecting variable {variable}: duplicate state '{state}'");
            return Err(VariableError::DuplicateState {
                variable: variable.name.clone(),
                state: state.to_owned(),
            });
        }

        Ok(variable)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The states of the variable, in canonical order.
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// The number of states in the domain.
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    pub fn contains(&self, state: &str) -> bool {
        self.domain.iter().any(|candidate| candidate == state)
    }

    /// Get the state at the given position in the domain, if it exists.
    pub fn state(&self, position: usize) -> Option<&str> {
        self.domain.get(position).map(String::as_str)
    }

    /// Iterate over the states in canonical order.
    pub fn states(&self) -> impl Iterator<Item = &str> + '_ {
        self.domain.iter().map(String::as_str)
    }

    /// Get the position of `state` in the domain of this variable.
    ///
    /// If the state is not part of the domain, [`VariableError::StateNotFound`] is returned.
    pub fn state_index(&self, state: &str) -> Result<usize, VariableError> {
        self.domain
            .iter()
            .position(|candidate| candidate == state)
            .ok_or_else(|| VariableError::StateNotFound {
                variable: self.name.clone(),
                state: state.to_owned(),
            })
    }

    /// Decompose the variable into `(name, index, domain)`.
    pub fn into_parts(self) -> (String, usize, Vec<String>) {
        (self.name, self.index, self.domain)
    }

    fn find_duplicate_state(&self) -> Option<&str> {
        let mut seen = HashSet::with_capacity(self.domain.len());

        self.domain
            .iter()
            .find(|state| !seen.insert(state.as_str()))
            .map(String::as_str)
    }
}

impl<Name, Domain, State> From<(Name, usize, Domain)> for Variable
where
    Name: Into<String>,
    Domain: IntoIterator<Item = State>,
    State: Into<String>,
{
    fn from((name, index, domain): (Name, usize, Domain)) -> Self {
        Variable::new(name, index, domain)
    }
}

impl From<Variable> for (String, usize, Vec<String>) {
    fn from(variable: Variable) -> Self {
        variable.into_parts()
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}] = {{{}}}", self.name, self.index, self.domain.join(", "))
    }
}

/// Get the position of `state` in the domain of `variable`.
///
/// Equivalent to [`Variable::state_index`].
pub fn state_index(variable: &Variable, state: &str) -> Result<usize, VariableError> {
    variable.state_index(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn butler() -> Variable {
        Variable::new("butler", 2, ["murderer", "notmurderer"])
    }

    #[test]
    fn every_state_maps_back_to_itself() {
        let variable = Variable::new("weapon", 1, ["knife", "rope", "candlestick", "pistol"]);

        for state in variable.domain() {
            let position = state_index(&variable, state).expect("state is in the domain");
            assert_eq!(state, &variable.domain()[position]);
        }
    }

    #[test]
    fn state_index_of_butler() {
        let butler = butler();

        assert_eq!(Ok(0), state_index(&butler, "murderer"));
        assert_eq!(Ok(1), state_index(&butler, "notmurderer"));
    }

    #[test]
    fn unknown_state_is_not_found() {
        let butler = butler();

        assert_eq!(
            Err(VariableError::StateNotFound {
                variable: "butler".to_owned(),
                state: "innocent".to_owned(),
            }),
            butler.state_index("innocent")
        );
    }

    #[test]
    fn state_lookup_is_case_sensitive() {
        assert!(butler().state_index("Murderer").is_err());
    }

    #[test]
    fn empty_domain_has_no_states() {
        let variable = Variable::new("void", 0, Vec::<String>::new());

        assert!(variable.is_empty());
        assert_eq!(0, variable.len());
        assert!(variable.state_index("anything").is_err());
    }

    #[test]
    fn states_can_be_addressed_by_position() {
        let butler = butler();

        assert_eq!(Some("murderer"), butler.state(0));
        assert_eq!(Some("notmurderer"), butler.state(1));
        assert_eq!(None, butler.state(2));
        assert_eq!(
            vec!["murderer", "notmurderer"],
            butler.states().collect::<Vec<_>>()
        );
    }

    #[test]
    fn contains_reports_membership() {
        let butler = butler();

        assert!(butler.contains("murderer"));
        assert!(!butler.contains("gardener"));
    }

    #[test]
    fn try_new_accepts_distinct_states() {
        let variable = Variable::try_new("maid", 0, ["murderer", "notmurderer"]);

        assert_eq!(Ok(Variable::new("maid", 0, ["murderer", "notmurderer"])), variable);
    }

    #[test]
    fn try_new_rejects_duplicate_states() {
        let result = Variable::try_new("maid", 0, ["murderer", "notmurderer", "murderer"]);

        assert_eq!(
            Err(VariableError::DuplicateState {
                variable: "maid".to_owned(),
                state: "murderer".to_owned(),
            }),
            result
        );
    }

    #[test]
    #[should_panic(expected = "contains duplicate states")]
    fn new_asserts_on_duplicate_states_in_tests() {
        let _ = Variable::new("maid", 0, ["murderer", "murderer"]);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(butler(), butler());
        assert_ne!(butler(), Variable::new("butler", 3, ["murderer", "notmurderer"]));
        assert_ne!(butler(), Variable::new("butler", 2, ["notmurderer", "murderer"]));
    }

    #[test]
    fn equal_variables_hash_equally() {
        let mut set = HashSet::new();

        assert!(set.insert(butler()));
        assert!(!set.insert(butler()));
    }

    #[test]
    fn tuple_conversions_follow_field_order() {
        let variable = Variable::from(("butler", 2, ["murderer", "notmurderer"]));
        assert_eq!(butler(), variable);

        let (name, index, domain): (String, usize, Vec<String>) = variable.into();
        assert_eq!("butler", name);
        assert_eq!(2, index);
        assert_eq!(vec!["murderer".to_owned(), "notmurderer".to_owned()], domain);
    }

    #[test]
    fn display_lists_the_domain() {
        assert_eq!("butler[2] = {murderer, notmurderer}", butler().to_string());
    }
}
